//! Route handlers.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Responder};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use super::error::ApiError;
use super::types::{ApiInfoResponse, HealthResponse};
use crate::PasswordScorer;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Serve the main HTML page
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

/// Pulls `password` out of a JSON object body.
///
/// `null` and non-string values are treated as an empty password.
pub fn extract_password(body: &[u8]) -> Result<SecretString, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::MissingPassword)?;
    let field = value
        .as_object()
        .and_then(|fields| fields.get("password"))
        .ok_or(ApiError::MissingPassword)?;
    let password = field.as_str().unwrap_or_default();
    Ok(SecretString::new(password.to_owned().into()))
}

/// Check password strength
///
/// Expects `{"password": "..."}` and answers with the score result.
pub async fn check_password(
    scorer: web::Data<PasswordScorer>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let password = extract_password(&body)?;
    let result = scorer.evaluate(password.expose_secret());

    tracing::debug!(strength = %result.strength, score = result.score, "password checked");

    let json = serde_json::to_string(&result).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(json))
}

/// Health check endpoint
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "healthy" })
}

/// API information endpoint
pub async fn api_info() -> impl Responder {
    HttpResponse::Ok().json(ApiInfoResponse::new())
}
