use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};

use crate::modules::current_user::core::current_user::{CurrentUser, NewCurrentUser};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "CurrentUser")]
pub struct GqlCurrentUser {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<CurrentUser> for GqlCurrentUser {
    fn from(u: CurrentUser) -> Self {
        Self {
            id: u.id,
            name: u.name,
            phone: u.phone,
            email: u.email,
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "CurrentUserInput")]
pub struct GqlCurrentUserInput {
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<GqlCurrentUserInput> for CurrentUser {
    fn from(input: GqlCurrentUserInput) -> Self {
        CurrentUser::from(NewCurrentUser {
            id: input.id,
            name: input.name,
            phone: input.phone,
            email: input.email,
        })
    }
}

#[derive(Default)]
pub struct CurrentUserQuery;

#[Object]
impl CurrentUserQuery {
    /// Null until a current user has been set.
    async fn current_user(&self, context: &Context<'_>) -> GqlResult<Option<GqlCurrentUser>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.current_user.get().await?.map(Into::into))
    }
}

#[derive(Default)]
pub struct CurrentUserMutation;

#[Object]
impl CurrentUserMutation {
    async fn set_current_user(
        &self,
        context: &Context<'_>,
        input: GqlCurrentUserInput,
    ) -> GqlResult<GqlCurrentUser> {
        let state = context.data_unchecked::<AppState>();
        let user = state.current_user.set(input.into()).await?;
        Ok(user.into())
    }
}
