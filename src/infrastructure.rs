use crate::app_config::{AppConfig, CorsOrigins};
use crate::error::ServerError;
use crate::handlers::util::ping;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// any method and any request header are always allowed, only the origin can be narrowed
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(origins) => AllowOrigin::list(origins.clone()),
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn create_router(config: &AppConfig) -> Router {
    let cors = cors_layer(&config.cors_allowed_origins);

    // unknown paths keep axum's default empty 404
    Router::new()
        .route("/ping", get(ping))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let app = create_router(&config);
    let addr = SocketAddr::new(config.host, config.port);

    let server =
        axum::Server::try_bind(&addr).map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!("listening on {}", addr);

    server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}

/// resolves on ctrl-c, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
