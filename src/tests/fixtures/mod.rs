pub mod http;
pub mod records;
pub mod state;
