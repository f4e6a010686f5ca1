// src/generators/password.rs
use log::{debug, error};
use zeroize::Zeroize;
use crate::models::{GenerationRequest, GenerationResult};
use super::charset::Charset;
use super::entropy::{entropy_bits, round_to_hundredths};
use super::rng::{OsRandom, SecureRandom};
use super::sampler;
use super::{GeneratorError, Result};

pub const MIN_LENGTH: usize = 12;
pub const MAX_LENGTH: usize = 50;

pub struct PasswordGenerator<R: SecureRandom = OsRandom> {
    rng: R,
}

impl PasswordGenerator<OsRandom> {
    pub fn new() -> Self {
        PasswordGenerator { rng: OsRandom }
    }
}

impl Default for PasswordGenerator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SecureRandom> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        validate(request)?;

        let charset = Charset::build(request)?;

        let mut chars = sampler::sample(&self.rng, &charset, request.length).map_err(|e| {
            error!("Password generation failed: {}", e);
            internal(e)
        })?;

        if chars.len() != request.length {
            error!(
                "Password generation produced {} characters, expected {}",
                chars.len(),
                request.length
            );
            chars.zeroize();
            return Err(GeneratorError::InternalError("length mismatch".to_string()));
        }

        debug_assert!(chars.iter().all(|c| charset.contains(*c)));

        let password: String = chars.iter().collect();
        chars.zeroize();

        let entropy = round_to_hundredths(entropy_bits(charset.len(), request.length));
        debug!(
            "Generated password: length={}, charset_size={}, entropy_bits={}",
            request.length,
            charset.len(),
            entropy
        );

        Ok(GenerationResult {
            password,
            entropy_bits: entropy,
        })
    }
}

fn validate(request: &GenerationRequest) -> Result<()> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&request.length) {
        return Err(GeneratorError::InvalidRequest("length out of range".to_string()));
    }
    if !request.any_class_enabled() {
        return Err(GeneratorError::InvalidRequest(
            "no character class selected".to_string(),
        ));
    }
    Ok(())
}

fn internal(e: GeneratorError) -> GeneratorError {
    match e {
        GeneratorError::InternalError(msg) => GeneratorError::InternalError(msg),
        other => GeneratorError::InternalError(other.to_string()),
    }
}
