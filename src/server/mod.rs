//! HTTP service exposing the scorer.
//!
//! Routes:
//! - `GET /` main application page
//! - `POST /check_password` score a password
//! - `GET /health` health check
//! - `GET /api` API information

use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;

use crate::{BlacklistError, PasswordScorer};

pub mod error;
pub mod handlers;
pub mod types;

pub use error::ApiError;

/// Server settings, from flags or environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "pwd-score-server", version, about = "Password strength checker service")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "PWD_SCORE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PWD_SCORE_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Extra common-password file, one entry per line
    #[arg(long, env = "PWD_BLACKLIST_PATH")]
    pub blacklist: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServerConfig {
    /// Builds the scorer, merging the blacklist file if one is configured.
    pub fn build_scorer(&self) -> Result<PasswordScorer, BlacklistError> {
        match &self.blacklist {
            Some(path) => PasswordScorer::with_blacklist_file(path),
            None => Ok(PasswordScorer::new()),
        }
    }
}

/// Largest accepted request body. Long passwords are still scored.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Registers the service routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .route("/", web::get().to(handlers::index))
        .route("/check_password", web::post().to(handlers::check_password))
        .route("/health", web::get().to(handlers::health))
        .route("/api", web::get().to(handlers::api_info));
}

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
        .max_age(3600)
}

/// Runs the service until shutdown.
pub async fn run(config: ServerConfig, scorer: PasswordScorer) -> std::io::Result<()> {
    tracing::info!(
        "Common-password set holds {} entries",
        scorer.common_password_count()
    );
    let scorer = web::Data::new(scorer);

    tracing::info!("Starting server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .app_data(scorer.clone())
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Strength;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{json, Value};
    use std::io::Write;
    use tempfile::NamedTempFile;

    macro_rules! app {
        ($scorer:expr) => {
            actix_test::init_service(
                App::new()
                    .wrap(cors())
                    .app_data(web::Data::new($scorer))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_check_password_scores() {
        let app = app!(PasswordScorer::new());
        let req = actix_test::TestRequest::post()
            .uri("/check_password")
            .set_json(json!({"password": "Tr0ub4dor&3"}))
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "strength": "Strong",
                "score": 5,
                "suggestions": ["Great job! Your password is strong."]
            })
        );
    }

    #[actix_web::test]
    async fn test_check_password_empty_string() {
        let app = app!(PasswordScorer::new());
        let req = actix_test::TestRequest::post()
            .uri("/check_password")
            .set_json(json!({"password": ""}))
            .to_request();

        let result: crate::ScoreResult = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(result.strength, Strength::VeryWeak);
        assert_eq!(result.score, 0);
        assert_eq!(result.suggestions, vec!["Enter a password to check its strength"]);
    }

    #[actix_web::test]
    async fn test_check_password_null_is_empty() {
        let app = app!(PasswordScorer::new());
        let req = actix_test::TestRequest::post()
            .uri("/check_password")
            .set_json(json!({"password": null}))
            .to_request();

        let result: crate::ScoreResult = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(result, crate::evaluate(""));
    }

    #[actix_web::test]
    async fn test_check_password_long_password_is_scored() {
        let app = app!(PasswordScorer::new());
        let password = "Ab1!".repeat(70_000);
        let req = actix_test::TestRequest::post()
            .uri("/check_password")
            .set_json(json!({ "password": password }))
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let result: crate::ScoreResult = actix_test::read_body_json(resp).await;
        assert_eq!(result, crate::evaluate(&password));
    }

    #[actix_web::test]
    async fn test_check_password_missing_field() {
        let app = app!(PasswordScorer::new());
        let req = actix_test::TestRequest::post()
            .uri("/check_password")
            .set_json(json!({"pwd": "abc"}))
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Password field is required"}));
    }

    #[actix_web::test]
    async fn test_check_password_malformed_body() {
        let app = app!(PasswordScorer::new());
        let req = actix_test::TestRequest::post()
            .uri("/check_password")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_check_password_uses_configured_blacklist() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Zebra9Moon").expect("Failed to write");

        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            blacklist: Some(temp_file.path().to_path_buf()),
            verbose: false,
        };
        let app = app!(config.build_scorer().expect("Should load"));
        let req = actix_test::TestRequest::post()
            .uri("/check_password")
            .set_json(json!({"password": "Zebra9Moon"}))
            .to_request();

        let result: crate::ScoreResult = actix_test::call_and_read_body_json(&app, req).await;
        assert!(result.suggestions.contains(&"Avoid common passwords".to_string()));
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!(PasswordScorer::new());
        let req = actix_test::TestRequest::get().uri("/health").to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"status": "healthy"}));
    }

    #[actix_web::test]
    async fn test_api_info() {
        let app = app!(PasswordScorer::new());
        let req = actix_test::TestRequest::get().uri("/api").to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Password Strength Checker API");
        assert_eq!(body["endpoints"]["POST /check_password"], "Check password strength");
        assert_eq!(body["endpoints"]["GET /health"], "Health check");
        assert_eq!(body["endpoints"].as_object().unwrap().len(), 4);
    }

    #[actix_web::test]
    async fn test_index_serves_html() {
        let app = app!(PasswordScorer::new());
        let req = actix_test::TestRequest::get().uri("/").to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let body = actix_test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("/check_password"));
        assert!(html.contains("id=\"togglePassword\""));
    }

    #[actix_web::test]
    async fn test_cors_allows_any_origin() {
        let app = app!(PasswordScorer::new());
        let req = actix_test::TestRequest::get()
            .uri("/health")
            .insert_header(("Origin", "http://example.com"))
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("access-control-allow-origin"));
    }

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::try_parse_from(["pwd-score-server"]).unwrap();
        assert_eq!(config.port, 5000);
        assert!(!config.verbose);
    }

    #[test]
    fn test_config_flags() {
        let config = ServerConfig::try_parse_from([
            "pwd-score-server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--blacklist",
            "/tmp/extra.txt",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.blacklist, Some(PathBuf::from("/tmp/extra.txt")));
        assert!(config.verbose);
    }

    #[test]
    fn test_build_scorer_missing_file() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            blacklist: Some(PathBuf::from("/nonexistent/blacklist.txt")),
            verbose: false,
        };
        assert!(matches!(config.build_scorer(), Err(BlacklistError::FileNotFound(_))));
    }
}
