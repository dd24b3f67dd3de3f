use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::Extension;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing;
use axum::Router;
use common::http::Json;
use common::types::CreateEventResponse;
use common::types::EventFeature;
use common::types::EventRecord;
use common::API_EVENTS_PATH;
use common::API_NEW_EVENT_PATH;
use serde::Deserialize;
use tracing::warn;

use crate::Events;
use crate::Result;

pub const MSG_EVENT_REGISTERED: &str = "Event registered successfully.";
pub const MSG_INVALID_PAYLOAD: &str = "Invalid event payload.";

#[derive(Deserialize, Debug, Default)]
pub struct DatasetQuery {
    pub filename: Option<String>,
}

async fn list(
    Extension(provider): Extension<Arc<Events>>,
    Query(query): Query<DatasetQuery>,
) -> Result<Json<Vec<EventRecord>>> {
    Ok(Json(provider.list(query.filename.as_deref()).await?))
}

// answers with the status envelope the map page decodes, never with ApiError
async fn create(
    Extension(provider): Extension<Arc<Events>>,
    payload: std::result::Result<axum::Json<EventFeature>, JsonRejection>,
) -> (StatusCode, Json<CreateEventResponse>) {
    let event = match payload {
        Ok(axum::Json(event)) => event,
        Err(err) => {
            warn!("can't decode new event: {err}");
            return (
                StatusCode::BAD_REQUEST,
                Json(CreateEventResponse::error(MSG_INVALID_PAYLOAD).with_error(err.body_text())),
            );
        }
    };

    match provider.create(event) {
        Ok(event) => (
            StatusCode::OK,
            Json(CreateEventResponse::success(MSG_EVENT_REGISTERED, event)),
        ),
        Err(err) => {
            warn!("new event refused: {err}");
            (
                StatusCode::BAD_REQUEST,
                Json(CreateEventResponse::error(err.user_message())),
            )
        }
    }
}

pub fn attach_routes(router: Router) -> Router {
    router
        .route(API_EVENTS_PATH, routing::get(list))
        .route(API_NEW_EVENT_PATH, routing::post(create))
}
