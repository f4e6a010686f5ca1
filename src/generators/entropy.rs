// src/generators/entropy.rs

/// Entropy in bits of a `length`-character password drawn over an alphabet of
/// `charset_size` characters: `log2(charset_size) * length`.
///
/// This is the figure for an unconstrained uniform draw. The class-presence
/// and uniqueness constraints remove a small number of candidate passwords,
/// so the true entropy of a generated password is slightly lower. Callers
/// display this upper bound as is.
pub fn entropy_bits(charset_size: usize, length: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    (charset_size as f64).log2() * length as f64
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
