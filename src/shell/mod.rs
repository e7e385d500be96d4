// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory adapters and wire them into AppState.
// - Expose the REST and GraphQL routers with CORS and request tracing.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
