// Builders for the records used across tests.
// Defaults come from the JSON files next to this module so the wire shape
// stays in one place.

use crate::modules::calls::core::call::Call;
use crate::modules::current_user::core::current_user::CurrentUser;
use crate::modules::messages::core::message::Message;
use crate::shared::core::status::Status;

const MESSAGE_JSON: &str = include_str!("json/message.json");
const CALL_JSON: &str = include_str!("json/call.json");
const CURRENT_USER_JSON: &str = include_str!("json/current_user.json");

pub struct MessageBuilder {
    inner: Message,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(MESSAGE_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn status(mut self, v: impl Into<Status>) -> Self {
        self.inner.status = v.into();
        self
    }

    pub fn build(self) -> Message {
        self.inner
    }
}

pub struct CallBuilder {
    inner: Call,
}

impl Default for CallBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CallBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(CALL_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn status(mut self, v: impl Into<Status>) -> Self {
        self.inner.status = v.into();
        self
    }

    pub fn build(self) -> Call {
        self.inner
    }
}

pub struct CurrentUserBuilder {
    inner: CurrentUser,
}

impl Default for CurrentUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CurrentUserBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(CURRENT_USER_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> CurrentUser {
        self.inner
    }
}

#[cfg(test)]
mod record_builders_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_load_the_defaults_from_json() {
        let message = MessageBuilder::default().build();
        assert_eq!(message.id, "msg-fixed-0001");
        assert_eq!(message.status, Status::Pending);

        let call = CallBuilder::default().build();
        assert_eq!(call.id, "call-fixed-0001");
        assert_eq!(call.name, "Luis");

        let user = CurrentUserBuilder::default().build();
        assert_eq!(user.email, "operator@example.com");
    }

    #[rstest]
    fn setters_override_the_defaults() {
        let message = MessageBuilder::new()
            .id("m")
            .name("Bea")
            .content("c")
            .status("accepted")
            .build();

        assert_eq!(message.id, "m");
        assert_eq!(message.name, "Bea");
        assert_eq!(message.content, "c");
        assert_eq!(message.status, Status::Accepted);
    }
}
