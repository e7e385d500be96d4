use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::calls::core::call::{Call, NewCall};
use crate::shared::core::status::Status;
use crate::shared::core::timestamp::parse_timestamp;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Call")]
pub struct GqlCall {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub timestamp: String,
    pub status: String,
}

impl From<Call> for GqlCall {
    fn from(c: Call) -> Self {
        Self {
            id: c.id,
            name: c.name,
            phone: c.phone,
            timestamp: c.timestamp.to_rfc3339(),
            status: c.status.into(),
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "CallInput")]
pub struct GqlCallInput {
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub timestamp: Option<String>,
    pub status: Option<String>,
}

impl GqlCallInput {
    fn into_call(self) -> GqlResult<Call> {
        let timestamp = match self.timestamp {
            Some(raw) => Some(parse_timestamp(&raw)?),
            None => None,
        };
        let body = NewCall {
            id: self.id,
            name: self.name,
            phone: self.phone,
            timestamp,
            status: self.status.map(Status::from).unwrap_or_default(),
        };
        Ok(body.into_call(Utc::now()))
    }
}

#[derive(Default)]
pub struct CallsQuery;

#[Object]
impl CallsQuery {
    async fn calls(&self, context: &Context<'_>) -> GqlResult<Vec<GqlCall>> {
        let state = context.data_unchecked::<AppState>();
        let calls = state.calls.list().await?;
        Ok(calls.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct CallsMutation;

#[Object]
impl CallsMutation {
    async fn register_call(
        &self,
        context: &Context<'_>,
        input: GqlCallInput,
    ) -> GqlResult<GqlCall> {
        let state = context.data_unchecked::<AppState>();
        let call = state.calls.register(input.into_call()?).await?;
        Ok(call.into())
    }

    async fn update_call_status(
        &self,
        context: &Context<'_>,
        id: String,
        status: String,
    ) -> GqlResult<GqlCall> {
        let state = context.data_unchecked::<AppState>();
        let call = state.calls.update_status(&id, Status::from(status)).await?;
        Ok(call.into())
    }
}
