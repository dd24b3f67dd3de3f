pub mod events;
pub mod index;

use std::sync::Arc;

use axum::http::Method;
use axum::middleware;
use axum::routing;
use axum::Extension;
use axum::Router;
use common::config::ClientConfig;
use common::config::Config;
use common::http::measure_request_response;
use common::http::print_request_response;
use common::http::Json;
use common::CLIENT_CONFIG_PATH;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::http::index::UiPath;
use crate::Events;

pub const STATIC_DIR: &str = "static";

pub fn attach_routes(mut router: Router, events: &Arc<Events>, cfg: &Config) -> Router {
    router = events::attach_routes(router);

    if let Some(api_base_url) = &cfg.client.api_base_url {
        let client_cfg = ClientConfig::new(api_base_url.clone());
        router = router.route(
            CLIENT_CONFIG_PATH,
            routing::get(move || {
                let client_cfg = client_cfg.clone();
                async move { Json(client_cfg) }
            }),
        );
    }

    if let Some(ui_path) = &cfg.data.ui_path {
        info!("serving ui from {:?}", ui_path);
        router = index::attach_routes(router)
            .nest_service("/static", ServeDir::new(ui_path.join(STATIC_DIR)))
            .layer(Extension(UiPath(ui_path.to_owned())));
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    router
        .layer(Extension(events.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(print_request_response))
        .layer(middleware::from_fn(measure_request_response))
}
