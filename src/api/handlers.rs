// file: src/api/handlers.rs
// description: certificate check and accreditation lookup endpoints
// reference: https://docs.rs/axum

use crate::browser::TableSource;
use crate::fetcher::CertificateSource;
use crate::models::{AccreditationOutcome, CertificateResult};
use crate::pipeline::{AccreditationLookup, CertificateAnalyzer};
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Shared per-process resources. Nothing in here changes between requests.
pub struct AppState<S, T> {
    pub analyzer: Arc<CertificateAnalyzer<S>>,
    pub accreditation: Arc<AccreditationLookup<T>>,
    pub default_keywords: Arc<Vec<String>>,
}

impl<S, T> AppState<S, T> {
    pub fn new(
        analyzer: CertificateAnalyzer<S>,
        accreditation: AccreditationLookup<T>,
        default_keywords: Vec<String>,
    ) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            accreditation: Arc::new(accreditation),
            default_keywords: Arc::new(default_keywords),
        }
    }
}

impl<S, T> Clone for AppState<S, T> {
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
            accreditation: Arc::clone(&self.accreditation),
            default_keywords: Arc::clone(&self.default_keywords),
        }
    }
}

/// Request body: certificate numbers plus an optional keyword list.
#[derive(Debug, Default, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub numbers: Vec<Option<String>>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub results: Vec<CertificateResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct AccreditationQuery {
    pub inn: Option<String>,
}

fn bad_request(message: &str) -> Response {
    let body = ErrorBody {
        error: message.to_string(),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn check<S, T>(
    State(state): State<AppState<S, T>>,
    body: Option<Json<CheckRequest>>,
) -> Response
where
    S: CertificateSource + Send + Sync + 'static,
    T: TableSource + Send + Sync + 'static,
{
    let request = body.map(|Json(request)| request).unwrap_or_default();

    if request.numbers.is_empty() {
        return bad_request("Не указаны номера сертификатов");
    }

    let numbers: Vec<String> = request.numbers.into_iter().flatten().collect();
    let keywords = request
        .keywords
        .unwrap_or_else(|| state.default_keywords.as_ref().clone());

    info!(
        "Checking {} certificate(s) for {} keyword(s)",
        numbers.len(),
        keywords.len()
    );

    let results = state.analyzer.analyze_batch(&numbers, &keywords).await;
    (StatusCode::OK, Json(CheckResponse { results })).into_response()
}

pub async fn cerberus<S, T>(
    State(state): State<AppState<S, T>>,
    Query(query): Query<AccreditationQuery>,
) -> Response
where
    S: CertificateSource + Send + Sync + 'static,
    T: TableSource + Send + Sync + 'static,
{
    let inn = query.inn.as_deref().map(str::trim).unwrap_or_default();
    if inn.is_empty() {
        return bad_request("ИНН не указан");
    }

    let outcome: AccreditationOutcome = state.accreditation.lookup(inn).await;
    (StatusCode::OK, Json(outcome)).into_response()
}
