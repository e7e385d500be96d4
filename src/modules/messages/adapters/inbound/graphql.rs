use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::messages::core::message::{Message, NewMessage};
use crate::shared::core::status::Status;
use crate::shared::core::timestamp::parse_timestamp;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Message")]
pub struct GqlMessage {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub content: String,
    pub status: String,
    pub timestamp: String,
}

impl From<Message> for GqlMessage {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            name: m.name,
            phone: m.phone,
            content: m.content,
            status: m.status.into(),
            timestamp: m.timestamp.to_rfc3339(),
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "MessageInput")]
pub struct GqlMessageInput {
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub content: String,
    pub status: Option<String>,
    /// RFC 3339, or naive ISO 8601 read as UTC; defaults to now.
    pub timestamp: Option<String>,
}

impl GqlMessageInput {
    fn into_message(self) -> GqlResult<Message> {
        let timestamp = match self.timestamp {
            Some(raw) => Some(parse_timestamp(&raw)?),
            None => None,
        };
        let body = NewMessage {
            id: self.id,
            name: self.name,
            phone: self.phone,
            content: self.content,
            status: self.status.map(Status::from).unwrap_or_default(),
            timestamp,
        };
        Ok(body.into_message(Utc::now()))
    }
}

#[derive(Default)]
pub struct MessagesQuery;

#[Object]
impl MessagesQuery {
    async fn messages(&self, context: &Context<'_>) -> GqlResult<Vec<GqlMessage>> {
        let state = context.data_unchecked::<AppState>();
        let messages = state.messages.list().await?;
        Ok(messages.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct MessagesMutation;

#[Object]
impl MessagesMutation {
    async fn register_message(
        &self,
        context: &Context<'_>,
        input: GqlMessageInput,
    ) -> GqlResult<GqlMessage> {
        let state = context.data_unchecked::<AppState>();
        let message = state.messages.register(input.into_message()?).await?;
        Ok(message.into())
    }

    async fn update_message_status(
        &self,
        context: &Context<'_>,
        id: String,
        status: String,
    ) -> GqlResult<GqlMessage> {
        let state = context.data_unchecked::<AppState>();
        let message = state
            .messages
            .update_status(&id, Status::from(status))
            .await?;
        Ok(message.into())
    }
}
