// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use crate::models::GenerationRequest;

/// Body of every 4xx/5xx response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse { error: error.into() }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy" while the server answers
    pub status: String,
    pub version: String,
}

// Password generation
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length, 12 to 50 (default: 12)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
}

impl PasswordGenerationRequest {
    pub fn into_request(self, default_length: usize) -> GenerationRequest {
        GenerationRequest {
            length: self.length.unwrap_or(default_length),
            include_uppercase: self.include_uppercase.unwrap_or(true),
            include_lowercase: self.include_lowercase.unwrap_or(true),
            include_numbers: self.include_numbers.unwrap_or(true),
            include_symbols: self.include_symbols.unwrap_or(true),
        }
    }
}

// Strength analysis
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordStrengthRequest {
    /// Password to analyze
    pub password: String,
    /// Optional owner details penalised when they appear in the password
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

// Breach lookup
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordBreachRequest {
    /// Password to check; only a 5-character hash prefix is sent upstream
    pub password: String,
}
