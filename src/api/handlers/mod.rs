// src/api/handlers/mod.rs
pub mod breach;
pub mod generator;
pub mod strength;
pub mod system;

#[cfg(test)]
mod tests;
