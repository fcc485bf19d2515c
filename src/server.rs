use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use http::{header::CONTENT_DISPOSITION, HeaderValue};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::{
    services::ServeFile,
    set_header::{SetResponseHeader, SetResponseHeaderLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::{shell, App};
use crate::content::{RESUME_FILE, RESUME_PATH};

const RESUME_DISPOSITION: &str = "attachment; filename=\"Dhruv_Kumar_Resume.pdf\"";

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Couldn't load site configuration: {0}")]
    Config(String),
    #[error("Couldn't bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

/// Serves the resume PDF with a header telling the browser to download it.
pub fn resume_service(file: &Path) -> SetResponseHeader<ServeFile, HeaderValue> {
    ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_DISPOSITION,
            HeaderValue::from_static(RESUME_DISPOSITION),
        ))
        .service(ServeFile::new(file))
}

pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    let resume = Path::new(&*leptos_options.site_root).join(RESUME_FILE);
    if resume.exists() {
        tracing::info!("serving resume from {}", resume.display());
    } else {
        tracing::warn!("resume not found at {}", resume.display());
    }

    Router::new()
        .route_service(RESUME_PATH, resume_service(&resume))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    fn public_resume() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(RESUME_FILE)
    }

    #[test]
    fn test_disposition_names_resume() {
        assert!(RESUME_DISPOSITION.starts_with("attachment"));
        assert!(RESUME_DISPOSITION.contains(RESUME_FILE));
    }

    #[tokio::test]
    async fn test_resume_downloads() {
        let req = Request::get(RESUME_PATH).body(Body::empty()).unwrap();
        let res = resume_service(&public_resume()).oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[CONTENT_DISPOSITION], RESUME_DISPOSITION);
        assert_eq!(res.headers()[http::header::CONTENT_TYPE], "application/pdf");
    }

    #[tokio::test]
    async fn test_missing_resume_is_not_found() {
        let req = Request::get(RESUME_PATH).body(Body::empty()).unwrap();
        let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-resume.pdf");
        let res = resume_service(&missing).oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
