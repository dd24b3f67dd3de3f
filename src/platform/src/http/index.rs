//! Map page with the selected dataset embedded.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::Extension;
use axum::extract::Query;
use axum::response::Html;
use axum::routing;
use axum::Router;
use common::html;
use tracing::warn;

use crate::http::events::DatasetQuery;
use crate::Events;
use crate::PlatformError;
use crate::Result;

pub const INDEX_FILE: &str = "index.html";
pub const EVENTS_PLACEHOLDER: &str = "{{eventsJSON}}";
pub const FILENAME_PLACEHOLDER: &str = "{{selectedFilename}}";

#[derive(Clone)]
pub struct UiPath(pub PathBuf);

async fn index(
    Extension(provider): Extension<Arc<Events>>,
    Extension(UiPath(ui_path)): Extension<UiPath>,
    Query(query): Query<DatasetQuery>,
) -> Result<Html<String>> {
    let path = ui_path.join(INDEX_FILE);
    let template = tokio::fs::read_to_string(&path).await.map_err(|err| {
        warn!("can't read page template {path:?}: {err}");
        PlatformError::NotFound("index page".to_string())
    })?;

    let filename = query.filename.unwrap_or_default();
    let events = provider.list(Some(filename.as_str())).await?;
    let events_json = serde_json::to_string(&events).unwrap_or_else(|err| {
        warn!("can't serialize events: {err}");
        "[]".to_string()
    });

    Ok(Html(render(&template, &events_json, &filename)))
}

/// Fills the page template. The events are placed inside a script element, so
/// closing tags in names are neutralized.
pub fn render(template: &str, events_json: &str, filename: &str) -> String {
    template
        .replace(EVENTS_PLACEHOLDER, &events_json.replace("</", "<\\/"))
        .replace(FILENAME_PLACEHOLDER, &html::escape(filename))
}

pub fn attach_routes(router: Router) -> Router {
    router.route("/", routing::get(index))
}
