// Axum server: shared state, router, health check, error responses
//
// All page content is composed per request from an immutable registry held
// in `AppState`; nothing is mutated after startup.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use anyhow::Context;
use std::any::Any;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, services::ServeDir,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::content::view_models::SiteChrome;
use crate::content::{ContentError, ContentRegistry, ErrorKind};
use crate::web::handlers::{error_page, render_page};
use crate::web::routes::ROUTES;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<ContentRegistry>,
    /// Nav, footer and meta shared by every rendered page
    pub chrome: Arc<SiteChrome>,
}

impl AppState {
    /// State over the built-in portfolio content
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Self::with_registry(config, ContentRegistry::builtin())
    }

    /// Validate `registry` and render every route once.
    ///
    /// Any content or template failure is returned here so the process never
    /// starts serving with broken pages.
    pub fn with_registry(config: Config, registry: ContentRegistry) -> anyhow::Result<Self> {
        tracing::info!("Validating content registry...");
        registry.validate().context("content registry is inconsistent")?;

        let stats = registry.stats();
        tracing::info!(
            "Registry: {} institutions, {} programs, {} certifications, {} technologies, {} social links, {} slides",
            stats.institutions,
            stats.programs,
            stats.certifications,
            stats.technologies,
            stats.social_links,
            stats.slides
        );

        let chrome = SiteChrome::new(
            &config.app_name,
            &registry.nav_links,
            &registry.footer_links,
            &registry.meta,
        );

        if !Path::new(&config.static_dir).is_dir() {
            tracing::warn!("Static directory '{}' not found; assets will 404", config.static_dir);
        }

        let state = Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            chrome: Arc::new(chrome),
        };

        for route in ROUTES {
            render_page(&state, route.page)
                .with_context(|| format!("page {} ({}) failed to render", route.path, route.page.template()))?;
            tracing::debug!("Rendered {} -> {}", route.path, route.page.template());
        }

        Ok(state)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    let mut router: Router<AppState> = Router::new();
    for route in ROUTES {
        let page = route.page;
        router = router.route(
            route.path,
            get(move |State(state): State<AppState>| async move { render_page(&state, page) }),
        );
    }

    let router = router
        // Health check
        .route("/health", get(health_check))
        // Static assets (css, js, images, videos)
        .nest_service("/static", static_dir)
        .fallback(not_found);

    with_error_pages(router, &state)
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

/// Theme error statuses and turn panics into the 500 page
fn with_error_pages(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let chrome = state.chrome.clone();
    router
        .layer(middleware::from_fn_with_state(state.clone(), theme_errors))
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| {
                let detail = panic
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| panic.downcast_ref::<&str>().copied())
                    .unwrap_or("unknown panic payload");
                tracing::error!("Handler panicked: {}", detail);
                error_page(&chrome, ErrorKind::InternalServerError)
            },
        ))
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "service": state.config.service_name,
        "version": state.config.version,
        "checks": {
            "database": "not_applicable",
            "static_files": "ok",
            "templates": "ok"
        }
    }))
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Replace bare 400/404/500 responses (handler errors, framework
/// rejections, missing static files) with the themed error page.
async fn theme_errors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    match ErrorKind::from_status(response.status().as_u16()) {
        Some(kind) => error_page(&state.chrome, kind),
        None => response,
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request")]
    BadRequest,

    #[error("not found")]
    NotFound,

    #[error("content composition failed: {0}")]
    Content(#[from] ContentError),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Content(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Only the status leaves the server; `theme_errors` supplies the page body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http, response::Html};
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::new(Config::default()).unwrap()
    }

    async fn boom() -> &'static str {
        panic!("secret detail at /srv/portfolio/src/server.rs")
    }

    async fn bad_input() -> Result<Html<String>, AppError> {
        Err(AppError::BadRequest)
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn test_app() -> Router {
        let state = state();
        let router = Router::new()
            .route("/boom", get(boom))
            .route("/bad", get(bad_input));
        with_error_pages(router, &state).with_state(state)
    }

    #[tokio::test]
    async fn test_panic_becomes_themed_500_without_detail() {
        let response = test_app()
            .oneshot(http::Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert!(body.contains("500 Internal Server Error"));
        assert!(!body.contains("secret detail"));
        assert!(!body.contains("/srv/portfolio"));
    }

    #[tokio::test]
    async fn test_bad_request_is_themed() {
        let response = test_app()
            .oneshot(http::Request::builder().uri("/bad").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_text(response).await;
        assert!(body.contains("/static/images/errors/400.png"));
    }

    #[test]
    fn test_app_error_status() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        let content = AppError::from(ContentError::not_found(
            crate::content::RecordKind::Institution,
            "x",
        ));
        assert_eq!(content.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_broken_registry_aborts_startup() {
        let mut registry = ContentRegistry::builtin();
        registry.certifications[0].url = "";
        assert!(AppState::with_registry(Config::default(), registry).is_err());
    }
}
