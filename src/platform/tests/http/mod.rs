mod config;
mod events;
mod index;

#[cfg(test)]
mod tests {
    use std::env::temp_dir;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::sync::atomic::AtomicU16;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use axum::Router;
    use common::config::Config;
    use lazy_static::lazy_static;
    use platform::http::attach_routes;
    use platform::Events;
    use tokio::time::sleep;
    use uuid::Uuid;

    pub const UK_FESTIVALS: &str = "\
Name,Latitude,Longitude,City,Country,Start,End,Genre,Url,Radius
Glastonbury,51.15,-2.58,Pilton,UK,2025-06-25,2025-06-29,Mixed,http://x,3.5
Reading,51.46,-0.97,Reading,UK,2025-08-22,2025-08-24,Rock,http://y,
Short,51.0
";

    pub const IT_FESTIVALS: &str = "\
Name,Latitude,Longitude
Umbria Jazz,43.11,12.39
";

    pub const INDEX_TEMPLATE: &str = r#"<html><script>window.initialMapEvents = {{eventsJSON}};</script><p>{{selectedFilename}}</p></html>"#;

    lazy_static! {
        pub static ref EMPTY_LIST: serde_json::Value = serde_json::json!([]);
    }
    static HTTP_PORT: AtomicU16 = AtomicU16::new(18082);

    pub fn create_data_dir() -> anyhow::Result<PathBuf> {
        let mut path = temp_dir();
        path.push(format!("eventmap-{}", Uuid::new_v4()));
        std::fs::create_dir_all(path.join("data"))?;
        std::fs::create_dir_all(path.join("ui").join("static"))?;
        std::fs::write(path.join("data").join("uk_festivals.csv"), UK_FESTIVALS)?;
        std::fs::write(path.join("data").join("it_festivals.csv"), IT_FESTIVALS)?;
        std::fs::write(path.join("ui").join("index.html"), INDEX_TEMPLATE)?;
        std::fs::write(path.join("ui").join("static").join("app.js"), "// app")?;

        Ok(path)
    }

    pub async fn run_http_service(with_ui: bool) -> anyhow::Result<String> {
        let path = create_data_dir()?;
        let addr = SocketAddr::from(([127, 0, 0, 1], HTTP_PORT.fetch_add(1, Ordering::SeqCst)));

        let mut cfg = Config::default();
        cfg.server.host = addr;
        cfg.data.path = path.join("data");
        if with_ui {
            cfg.data.ui_path = Some(path.join("ui"));
            cfg.client.api_base_url = Some(format!("http://{addr}"));
        }

        let events = Arc::new(Events::new(cfg.data.path.clone(), cfg.data.default_dataset.clone()));
        let router = attach_routes(Router::new(), &events, &cfg);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tokio::spawn(async move { axum::serve(listener, router.into_make_service()).await });

        sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(format!("http://{}:{}", addr.ip(), addr.port()))
    }

    #[macro_export]
    macro_rules! assert_response_status_eq {
        ($resp:expr,$status:expr) => {{
            assert_eq!($resp.status(), $status, "unexpected status for {}", $resp.url())
        }};
    }
}
