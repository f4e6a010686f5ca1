// src/generators/sampler.rs
//
// Two-phase draw: one required character per enabled class, then filler
// characters, then a Fisher-Yates shuffle so the required characters do not
// sit at predictable positions.

use zeroize::Zeroize;
use super::charset::Charset;
use super::rng::SecureRandom;
use super::{GeneratorError, Result};

/// Draws a password of `length` characters over `charset`.
///
/// Every enabled class contributes at least one character. When the charset
/// is at least as large as `length`, all characters are pairwise distinct.
pub fn sample<R: SecureRandom>(rng: &R, charset: &Charset, length: usize) -> Result<Vec<char>> {
    let mut required = draw_required(rng, charset)?;

    let remaining = length.checked_sub(required.len()).ok_or_else(|| {
        required.zeroize();
        GeneratorError::InternalError(
            "more required characters than requested length".to_string(),
        )
    })?;

    let unique_chars = length <= charset.len();

    let filler = if unique_chars {
        let mut pool = charset.chars().to_vec();
        for c in &required {
            if let Some(pos) = pool.iter().position(|p| p == c) {
                pool.swap_remove(pos);
            }
        }
        let drawn = draw_unique(rng, &mut pool, remaining);
        pool.zeroize();
        drawn
    } else {
        draw_with_replacement(rng, charset.chars(), remaining)
    };

    let mut filler = match filler {
        Ok(filler) => filler,
        Err(e) => {
            required.zeroize();
            return Err(e);
        }
    };

    let mut password = required.clone();
    password.extend_from_slice(&filler);
    required.zeroize();
    filler.zeroize();

    shuffle(rng, &mut password);
    Ok(password)
}

fn draw_required<R: SecureRandom>(rng: &R, charset: &Charset) -> Result<Vec<char>> {
    charset
        .classes()
        .map(|class| {
            rng.choose_one(charset.class_chars(class)).ok_or_else(|| {
                GeneratorError::InternalError(format!("character class {:?} is empty", class))
            })
        })
        .collect()
}

/// Draws `count` characters from `pool`, removing each one as it is drawn.
///
/// Running out of pool before `count` draws only happens if the uniqueness
/// condition was computed against a different alphabet than the pool.
fn draw_unique<R: SecureRandom>(rng: &R, pool: &mut Vec<char>, count: usize) -> Result<Vec<char>> {
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        if pool.is_empty() {
            drawn.zeroize();
            return Err(GeneratorError::InternalError(
                "unique character pool exhausted".to_string(),
            ));
        }
        let index = rng.uniform_int(pool.len());
        drawn.push(pool.swap_remove(index));
    }
    Ok(drawn)
}

fn draw_with_replacement<R: SecureRandom>(rng: &R, alphabet: &[char], count: usize) -> Result<Vec<char>> {
    (0..count)
        .map(|_| {
            rng.choose_one(alphabet).ok_or_else(|| {
                GeneratorError::InternalError("empty charset".to_string())
            })
        })
        .collect()
}

/// In-place Fisher-Yates shuffle, last index down to 1.
pub fn shuffle<R: SecureRandom, T>(rng: &R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.uniform_int(i + 1);
        items.swap(i, j);
    }
}
