use std::sync::Arc;

use axum::Router;
use common::config::Config;
use platform::http::attach_routes;
use platform::Events;
use tokio::select;
use tokio::signal::unix::SignalKind;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::error::Error;
use crate::error::Result;

pub async fn start(cfg: Config) -> Result<()> {
    debug!("data path: {:?}", cfg.data.path);
    if !cfg.data.path.exists() {
        return Err(Error::FileNotFound(format!(
            "data path {:?} doesn't exist",
            cfg.data.path
        )));
    }
    if let Some(ui_path) = &cfg.data.ui_path {
        if !ui_path.exists() {
            return Err(Error::FileNotFound(format!(
                "ui path {ui_path:?} doesn't exist"
            )));
        }
        debug!("ui path: {ui_path:?}");
    }

    let events = Arc::new(Events::new(
        cfg.data.path.clone(),
        cfg.data.default_dataset.clone(),
    ));
    info!("initializing platform...");
    let router = attach_routes(Router::new(), &events, &cfg);

    info!("listening on http://{}", cfg.server.host);
    let listener = tokio::net::TcpListener::bind(cfg.server.host).await?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let mut sig_term = match tokio::signal::unix::signal(SignalKind::terminate()) {
        Ok(sig) => sig,
        Err(err) => {
            warn!("can't install SIGTERM handler: {err}");
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("SIGINT received");
            }
            return;
        }
    };

    select! {
        _ = tokio::signal::ctrl_c() => info!("SIGINT received"),
        _ = sig_term.recv() => info!("SIGTERM received"),
    }
}
