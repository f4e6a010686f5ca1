// src/services/mod.rs
pub mod breach;
pub mod strength;

pub use breach::{BreachChecker, BreachReport};
pub use strength::{check_password_strength, UserContext};
