//! HTTP surface: a thin axum layer over `QuoteService`.
//!
//! - `GET /api/quote?lang=<code>`: one random quote as `{ text, author, source }`
//! - `GET /api/languages`: languages the catalog can answer in
//! - `GET /health`: liveness plus catalog size
//!
//! Any failure inside a handler, panics included, is answered with HTTP 500 and
//! the generic `QuoteResult::error()` body. Error detail only goes to the log.

use crate::config::Config;
use crate::i18n::{Language, LanguageConfig, LanguageRegistry};
use crate::quotes::{QuoteError, QuoteResult, QuoteService, QuoteSource};
use anyhow::{Context, Result};
use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub service: QuoteService,
}

/// Wire body of `/api/quote`, success and failure alike.
///
/// Only these three fields are part of the contract; translation provenance
/// stays on `QuoteResult`.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub text: String,
    pub author: String,
    pub source: QuoteSource,
}

impl From<QuoteResult> for QuoteResponse {
    fn from(quote: QuoteResult) -> Self {
        Self {
            text: quote.text,
            author: quote.author,
            source: quote.source,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub quotes: usize,
    pub languages: Vec<Language>,
}

/// Handler failure, rendered as the generic 500 quote body.
#[derive(Debug)]
pub enum ApiError {
    Quote(QuoteError),
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError::Quote(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Quote(err) => error!("Quote API error: {}", err),
        }
        internal_error_response()
    }
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(QuoteResponse::from(QuoteResult::error())),
    )
        .into_response()
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);
    internal_error_response()
}

/// First `lang` value of a query string, if any.
///
/// Repeated or garbled parameters never reject the request; later duplicates
/// are ignored.
fn lang_param(query: Option<&str>) -> Option<String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query?).ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == "lang")
        .map(|(_, value)| value)
}

async fn get_quote(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, ApiError> {
    let lang = lang_param(query.as_deref());
    let code = lang.as_deref().unwrap_or(Language::canonical().code());
    let quote = state.service.random_quote_with_thread_rng(code)?;

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(QuoteResponse::from(quote)),
    ))
}

async fn list_languages(State(state): State<AppState>) -> Json<Vec<&'static LanguageConfig>> {
    let catalog = state.service.catalog();
    Json(
        LanguageRegistry::get()
            .list_all()
            .into_iter()
            .filter(|lang| catalog.has_group(lang.language))
            .collect(),
    )
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = state.service.catalog();
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        quotes: catalog.len(),
        languages: catalog.languages(),
    })
}

/// Build the application router.
pub fn router(service: QuoteService) -> Router {
    Router::new()
        .route("/api/quote", get(get_quote))
        .route("/api/languages", get(list_languages))
        .route("/health", get(health))
        .with_state(AppState { service })
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Bind to the configured address and serve until Ctrl-C or SIGTERM.
pub async fn run(config: &Config, service: QuoteService) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::{Quote, QuoteCatalog};
    use std::sync::Arc;

    fn state() -> AppState {
        let catalog = QuoteCatalog::from_groups([
            (Language::English, vec![Quote::new("A", "X")]),
            (Language::Arabic, vec![Quote::new("ب", "ي")]),
        ])
        .unwrap();
        AppState {
            service: QuoteService::new(Arc::new(catalog)),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_quote_default_language() {
        let response = get_quote(State(state()), RawQuery(None))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "text": "A", "author": "X", "source": "local" })
        );
    }

    #[tokio::test]
    async fn test_get_quote_arabic() {
        let query = Some("lang=ar".to_string());
        let response = get_quote(State(state()), RawQuery(query))
            .await
            .unwrap()
            .into_response();

        let body = body_json(response).await;
        assert_eq!(body["text"], "ب");
        assert_eq!(body["source"], "local");
    }

    #[tokio::test]
    async fn test_api_error_is_generic_500() {
        let response = ApiError::from(QuoteError::EmptyGroup(Language::French)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["text"], "An unexpected error occurred.");
        assert_eq!(body["author"], "System");
        assert_eq!(body["source"], "error");
        assert_eq!(body.as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_panic_handler_is_generic_500() {
        let response = handle_panic(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: QuoteResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(body.source, QuoteSource::Error);
    }

    // ==================== Query Parsing Tests ====================

    #[test]
    fn test_lang_param_first_value_wins() {
        assert_eq!(lang_param(Some("lang=fr&lang=en")), Some("fr".to_string()));
        assert_eq!(lang_param(Some("x=1&lang=ar")), Some("ar".to_string()));
    }

    #[test]
    fn test_lang_param_absent_or_empty() {
        assert_eq!(lang_param(None), None);
        assert_eq!(lang_param(Some("")), None);
        assert_eq!(lang_param(Some("other=1")), None);
        assert_eq!(lang_param(Some("lang=")), Some(String::new()));
    }

    #[test]
    fn test_lang_param_decodes() {
        assert_eq!(lang_param(Some("lang=%20FR%20")), Some(" FR ".to_string()));
        assert_eq!(lang_param(Some("lang=fr+CA")), Some("fr CA".to_string()));
    }

    #[tokio::test]
    async fn test_get_quote_repeated_lang_uses_first() {
        let response = get_quote(State(state()), RawQuery(Some("lang=ar&lang=en".to_string())))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["text"], "ب");
    }

    #[tokio::test]
    async fn test_get_quote_translation_keeps_three_keys() {
        let catalog = QuoteCatalog::from_groups([
            (Language::English, vec![Quote::new("A", "X")]),
            (
                Language::French,
                vec![Quote::new("Un", "Z").translated_from("A", "X")],
            ),
        ])
        .unwrap();
        let state = AppState {
            service: QuoteService::new(Arc::new(catalog)),
        };

        let response = get_quote(State(state), RawQuery(Some("lang=fr".to_string())))
            .await
            .unwrap()
            .into_response();

        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "text": "Un", "author": "Z", "source": "local" })
        );
    }

    #[tokio::test]
    async fn test_list_languages_only_served_ones() {
        let Json(languages) = list_languages(State(state())).await;
        let codes: Vec<_> = languages.iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["en", "ar"]);
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health(State(state())).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.quotes, 2);
        assert_eq!(body.languages, vec![Language::English, Language::Arabic]);
    }
}
