//! Response bodies of the HTTP service.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub message: &'static str,
    pub endpoints: ApiEndpoints,
}

#[derive(Debug, Serialize)]
pub struct ApiEndpoints {
    #[serde(rename = "GET /")]
    pub index: &'static str,
    #[serde(rename = "POST /check_password")]
    pub check_password: &'static str,
    #[serde(rename = "GET /health")]
    pub health: &'static str,
    #[serde(rename = "GET /api")]
    pub api: &'static str,
}

impl ApiInfoResponse {
    pub fn new() -> Self {
        Self {
            message: "Password Strength Checker API",
            endpoints: ApiEndpoints {
                index: "Main application page",
                check_password: "Check password strength",
                health: "Health check",
                api: "API information",
            },
        }
    }
}

impl Default for ApiInfoResponse {
    fn default() -> Self {
        Self::new()
    }
}
