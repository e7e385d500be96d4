use async_graphql::{Context, Object, Result as GqlResult, SimpleObject, Union};

use crate::modules::calls::adapters::inbound::graphql::GqlCall;
use crate::modules::messages::adapters::inbound::graphql::GqlMessage;
use crate::modules::solicitudes::core::partition::{Solicitudes, TrackedItem};
use crate::modules::solicitudes::use_cases::list_solicitudes::handler::list_solicitudes;
use crate::shell::state::AppState;

#[derive(Union, Clone)]
#[graphql(name = "TrackedItem")]
pub enum GqlTrackedItem {
    Message(GqlMessage),
    Call(GqlCall),
}

impl From<TrackedItem> for GqlTrackedItem {
    fn from(item: TrackedItem) -> Self {
        match item {
            TrackedItem::Message(m) => GqlTrackedItem::Message(m.into()),
            TrackedItem::Call(c) => GqlTrackedItem::Call(c.into()),
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Solicitudes")]
pub struct GqlSolicitudes {
    pub solicitudes: Vec<GqlTrackedItem>,
    pub conversaciones_activas: Vec<GqlTrackedItem>,
}

impl From<Solicitudes> for GqlSolicitudes {
    fn from(s: Solicitudes) -> Self {
        Self {
            solicitudes: s.solicitudes.into_iter().map(Into::into).collect(),
            conversaciones_activas: s
                .conversaciones_activas
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct SolicitudesQuery;

#[Object]
impl SolicitudesQuery {
    async fn solicitudes(&self, context: &Context<'_>) -> GqlResult<GqlSolicitudes> {
        let state = context.data_unchecked::<AppState>();
        Ok(list_solicitudes(state).await?.into())
    }
}
