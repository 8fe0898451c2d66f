use crate::domain::model::normalize_breed;
use crate::utils::error::{Result, StatsError};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};

pub const BREED_PROMPT: &str = "Please enter a dog breed: ";
pub const BREED_NOT_FOUND: &str = "Dog breed was not found in the data.  Please try again";

/// Returns the normalized breed when it is one of `known_breeds`.
pub fn validate(candidate: &str, known_breeds: &BTreeSet<String>) -> Option<String> {
    let normalized = normalize_breed(candidate);
    if known_breeds.contains(&normalized) {
        Some(normalized)
    } else {
        None
    }
}

/// Prompt on `output` until a line read from `input` names a known breed.
///
/// There is no retry limit. Reaching end of input yields
/// [`StatsError::InputClosed`].
pub fn prompt_for_breed<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    known_breeds: &BTreeSet<String>,
) -> Result<String> {
    let mut line = String::new();
    loop {
        write!(output, "{}", BREED_PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(StatsError::InputClosed);
        }

        match validate(&line, known_breeds) {
            Some(breed) => {
                tracing::debug!("Breed accepted: {}", breed);
                return Ok(breed);
            }
            None => {
                tracing::debug!("Breed not found: {:?}", line.trim());
                writeln!(output, "{}\n", BREED_NOT_FOUND)?;
            }
        }
    }
}

/// Non-interactive variant: an unknown breed is an error since nobody can be re-prompted.
pub fn require_breed(candidate: &str, known_breeds: &BTreeSet<String>) -> Result<String> {
    validate(candidate, known_breeds).ok_or_else(|| StatsError::UnknownBreedError {
        breed: normalize_breed(candidate),
    })
}
