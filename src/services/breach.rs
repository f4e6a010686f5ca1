// src/services/breach.rs
//
// k-anonymity lookup against a Pwned Passwords style range API: only the
// first five hex characters of the SHA-1 digest leave the process.

use serde::{Serialize, Deserialize};
use sha1::{Digest, Sha1};
use thiserror::Error;
use utoipa::ToSchema;
use crate::core::config::Config;

const PREFIX_LEN: usize = 5;

#[derive(Debug, Error)]
pub enum BreachError {
    #[error("Request timeout - breach lookup service is slow")]
    Timeout,

    #[error("Connection error - check your internet connection")]
    Connection,

    #[error("API error: {0}")]
    Status(u16),

    #[error("Malformed range response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    HttpError(reqwest::Error),
}

impl From<reqwest::Error> for BreachError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            BreachError::Timeout
        } else if e.is_connect() {
            BreachError::Connection
        } else {
            BreachError::HttpError(e)
        }
    }
}

pub type Result<T> = std::result::Result<T, BreachError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BreachReport {
    pub is_breached: bool,
    pub breach_count: u64,
    pub message: String,
}

impl BreachReport {
    pub fn from_count(count: u64) -> Self {
        if count > 0 {
            BreachReport {
                is_breached: true,
                breach_count: count,
                message: format!(
                    "This password has been found in {} data breaches.",
                    group_thousands(count)
                ),
            }
        } else {
            BreachReport {
                is_breached: false,
                breach_count: 0,
                message: "This password has not been found in any known data breaches.".to_string(),
            }
        }
    }
}

/// Uppercase hex SHA-1 digest of the password.
pub fn hash_password(password: &str) -> String {
    hex::encode_upper(Sha1::digest(password.as_bytes()))
}

/// Splits a digest into the 5-character prefix sent to the API and the
/// suffix matched locally.
pub fn split_hash(hash: &str) -> (&str, &str) {
    hash.split_at(PREFIX_LEN.min(hash.len()))
}

/// Finds `suffix` in a range response of `SUFFIX:COUNT` lines.
///
/// Padding entries carry a count of zero and read as not found.
pub fn parse_breach_count(body: &str, suffix: &str) -> Result<u64> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (hash, count) = line
            .split_once(':')
            .ok_or_else(|| BreachError::MalformedResponse(line.to_string()))?;
        if hash.trim().eq_ignore_ascii_case(suffix) {
            return count
                .trim()
                .parse()
                .map_err(|_| BreachError::MalformedResponse(line.to_string()));
        }
    }
    Ok(0)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Thin client over the remote hash-range API. No retries.
#[derive(Clone)]
pub struct BreachChecker {
    client: reqwest::Client,
    base_url: String,
}

impl BreachChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.breach_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: config.breach_api_url.clone(),
        })
    }

    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url, prefix)
    }

    async fn fetch_range(&self, prefix: &str) -> Result<String> {
        let response = self
            .client
            .get(self.range_url(prefix))
            .header("Add-Padding", "true")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Breach range lookup for prefix {} returned {}", prefix, status);
            return Err(BreachError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    pub async fn check(&self, password: &str) -> Result<BreachReport> {
        let hash = hash_password(password);
        let (prefix, suffix) = split_hash(&hash);

        let body = self.fetch_range(prefix).await?;
        let count = parse_breach_count(&body, suffix)?;
        log::debug!("Breach range lookup for prefix {} complete", prefix);

        Ok(BreachReport::from_count(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_uppercase_sha1() {
        assert_eq!(
            hash_password("password"),
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8"
        );
    }

    #[test]
    fn empty_password_hashes_like_any_other() {
        let hash = hash_password("");
        assert_eq!(hash, "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709");
        assert_eq!(split_hash(&hash).0, "DA39A");
    }

    #[test]
    fn prefix_is_five_characters() {
        let hash = hash_password("password");
        let (prefix, suffix) = split_hash(&hash);
        assert_eq!(prefix, "5BAA6");
        assert_eq!(suffix, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
        assert_eq!(suffix.len(), 35);
    }

    #[test]
    fn finds_matching_suffix() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:3\r\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:10434004\r\n\
                    01330C689E5D64F660D6947A93AD634EF8F:1\r\n";
        let count = parse_breach_count(body, "1E4C9B93F3F0682250B6CF8331B7EE68FD8").unwrap();
        assert_eq!(count, 10434004);
    }

    #[test]
    fn missing_suffix_is_zero() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:3\n";
        assert_eq!(parse_breach_count(body, "FFFFF").unwrap(), 0);
        assert_eq!(parse_breach_count("", "FFFFF").unwrap(), 0);
    }

    #[test]
    fn padding_entries_read_as_not_found() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:0\n";
        let count = parse_breach_count(body, "1E4C9B93F3F0682250B6CF8331B7EE68FD8").unwrap();
        assert!(!BreachReport::from_count(count).is_breached);
    }

    #[test]
    fn malformed_lines_are_errors() {
        let err = parse_breach_count("garbage-without-separator", "ABC").unwrap_err();
        assert!(matches!(err, BreachError::MalformedResponse(_)));

        let err = parse_breach_count("ABC:many", "ABC").unwrap_err();
        assert!(matches!(err, BreachError::MalformedResponse(_)));
    }

    #[test]
    fn report_messages() {
        let breached = BreachReport::from_count(10434004);
        assert!(breached.is_breached);
        assert_eq!(
            breached.message,
            "This password has been found in 10,434,004 data breaches."
        );

        let clean = BreachReport::from_count(0);
        assert!(!clean.is_breached);
        assert_eq!(clean.breach_count, 0);
        assert_eq!(
            clean.message,
            "This password has not been found in any known data breaches."
        );
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn range_url_uses_configured_base() {
        let config = Config {
            breach_api_url: "http://localhost:4000".to_string(),
            ..Config::default()
        };
        let checker = BreachChecker::new(&config).unwrap();
        assert_eq!(checker.range_url("5BAA6"), "http://localhost:4000/range/5BAA6");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_connection_error() {
        let config = Config {
            breach_api_url: "http://127.0.0.1:9".to_string(),
            breach_timeout: std::time::Duration::from_secs(2),
            ..Config::default()
        };
        let checker = BreachChecker::new(&config).unwrap();
        let err = checker.check("password").await.unwrap_err();
        assert!(matches!(
            err,
            BreachError::Connection | BreachError::Timeout | BreachError::HttpError(_)
        ));
    }
}
