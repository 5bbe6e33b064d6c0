//! Preview host for the inventory page behavior
//!
//! Serves a fixture check-in form together with the `wasm-pack --target web`
//! output so the bindings can be exercised in a real browser.

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use anyhow::Context;
    use axum::{response::Html, routing::get, Json, Router};
    use serde::Serialize;
    use std::net::SocketAddr;
    use tower_http::cors::CorsLayer;
    use tower_http::services::ServeDir;

    const PREVIEW_PAGE: &str = include_str!("../../assets/preview.html");
    const DEFAULT_ADDR: &str = "127.0.0.1:8087";
    const DEFAULT_PKG_DIR: &str = "pkg";

    #[derive(Debug, Serialize)]
    struct HealthResponse {
        status: String,
        version: String,
    }

    struct PreviewConfig {
        addr: SocketAddr,
        pkg_dir: String,
    }

    impl PreviewConfig {
        fn from_env() -> anyhow::Result<Self> {
            let addr = std::env::var("PREVIEW_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
            let addr = addr
                .parse()
                .with_context(|| format!("PREVIEW_ADDR '{}' is not a socket address", addr))?;
            let pkg_dir =
                std::env::var("PREVIEW_PKG_DIR").unwrap_or_else(|_| DEFAULT_PKG_DIR.to_string());
            Ok(Self { addr, pkg_dir })
        }
    }

    async fn index() -> Html<&'static str> {
        Html(PREVIEW_PAGE)
    }

    async fn health() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    fn router(pkg_dir: &str) -> Router {
        Router::new()
            .route("/", get(index))
            .route("/health", get(health))
            .nest_service("/pkg", ServeDir::new(pkg_dir))
            .layer(CorsLayer::permissive())
    }

    pub async fn run() -> anyhow::Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let config = PreviewConfig::from_env()?;
        if !std::path::Path::new(&config.pkg_dir).is_dir() {
            log::warn!(
                "'{}' not found; build it with `wasm-pack build --target web --out-dir {}`",
                config.pkg_dir,
                config.pkg_dir
            );
        }

        let listener = tokio::net::TcpListener::bind(config.addr)
            .await
            .with_context(|| format!("failed to bind {}", config.addr))?;
        log::info!("Inventory preview listening on http://{}", config.addr);
        log::info!("  Fixture page: GET /");
        log::info!("  Wasm bundle:  GET /pkg/* (from {})", config.pkg_dir);

        axum::serve(listener, router(&config.pkg_dir)).await?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
