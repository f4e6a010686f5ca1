// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use std::fmt;

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationRequest {
    pub fn any_class_enabled(&self) -> bool {
        self.include_uppercase
            || self.include_lowercase
            || self.include_numbers
            || self.include_symbols
    }
}

/// A freshly generated password together with its theoretical entropy.
///
/// Never persisted and never logged; `Debug` output redacts the password.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationResult {
    pub password: String,
    pub entropy_bits: f64,
}

impl fmt::Debug for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationResult")
            .field("password", &"<redacted>")
            .field("entropy_bits", &self.entropy_bits)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_enables_every_class() {
        let request = GenerationRequest::default();
        assert_eq!(request.length, 12);
        assert!(request.any_class_enabled());
    }

    #[test]
    fn debug_output_hides_password() {
        let result = GenerationResult {
            password: "Zq8#visible-secret".to_string(),
            entropy_bits: 78.66,
        };
        let rendered = format!("{:?}", result);
        assert!(!rendered.contains("visible-secret"));
        assert!(rendered.contains("78.66"));
    }

    #[test]
    fn result_serializes_with_snake_case_fields() {
        let result = GenerationResult {
            password: "abc".to_string(),
            entropy_bits: 1.5,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["password"], "abc");
        assert_eq!(json["entropy_bits"], 1.5);
    }
}
