// src/services/strength.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use zxcvbn::{zxcvbn, Score};

/// Context words that are always penalised in addition to the user's own.
const COMMON_INPUTS: &[&str] = &[
    "password",
    "123456",
    "qwerty",
    "letmein",
    "admin",
    "welcome",
    "MyPassword",
    "login",
    "user",
    "guest",
    "test",
    "master",
    "root",
    "pass",
    "abc123",
    "password123",
    "admin123",
    "welcome123",
];

/// Personal details of the password's owner, used as scoring context.
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl UserContext {
    fn inputs(&self) -> Vec<&str> {
        let mut inputs: Vec<&str> = [&self.first_name, &self.last_name, &self.email]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        inputs.extend_from_slice(COMMON_INPUTS);
        inputs
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    /// Score from 0 (poor) to 4 (excellent)
    pub score: u8,
    pub strength_label: String,
    /// Estimated time for an unthrottled online attack (10 guesses/second)
    pub online_crack_time: String,
    /// Estimated time for an offline fast-hash attack (1e10 guesses/second)
    pub offline_crack_time: String,
    pub warning: String,
    pub suggestions: Vec<String>,
}

pub fn score_value(score: Score) -> u8 {
    match score {
        Score::Zero => 0,
        Score::One => 1,
        Score::Two => 2,
        Score::Three => 3,
        Score::Four => 4,
        _ => 0,
    }
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 => "Poor",
        1 => "Low",
        2 => "Moderate",
        3 => "Great",
        4 => "Excellent",
        _ => "Unknown",
    }
}

/// Scores `password`; an empty password is valid input and scores 0.
pub fn check_password_strength(password: &str, context: &UserContext) -> StrengthReport {
    let inputs = context.inputs();
    let entropy = zxcvbn(password, &inputs);
    let score = score_value(entropy.score());

    let crack_times = entropy.crack_times();
    let (warning, suggestions) = match entropy.feedback() {
        Some(feedback) => (
            feedback.warning().map(|w| w.to_string()).unwrap_or_default(),
            feedback.suggestions().iter().map(|s| s.to_string()).collect(),
        ),
        None => (String::new(), Vec::new()),
    };

    log::debug!("Scored password strength: score={}", score);

    StrengthReport {
        score,
        strength_label: strength_label(score).to_string(),
        online_crack_time: crack_times.online_no_throttling_10_per_second().to_string(),
        offline_crack_time: crack_times.offline_fast_hashing_1e10_per_second().to_string(),
        warning,
        suggestions,
    }
}
