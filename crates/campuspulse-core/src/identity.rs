// Rust guideline compliant 2026-10-16

//! Hash-based issue identifiers.
//!
//! IDs have the form `iss-XXXXXX` where `XXXXXX` is the first six hex digits
//! of a SHA-256 over the submitter, description, timestamp and a nonce.

use crate::{Error, Issue, Result};
use sha2::{Digest, Sha256};

/// Prefix shared by every issue ID.
pub const ID_PREFIX: &str = "iss-";

const HASH_LEN: usize = 6;
const MIN_PARTIAL_LEN: usize = 3;

/// Generates an issue ID.
///
/// # Arguments
///
/// * `student_id` - Submitting student
/// * `description` - Issue description
/// * `timestamp` - Unix timestamp of creation
/// * `nonce` - Disambiguator, bumped on collision
///
/// # Returns
///
/// An ID of the form `iss-XXXXXX`.
pub fn generate_id(student_id: &str, description: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(student_id.as_bytes());
    hasher.update(description.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}{}", ID_PREFIX, &hex[..HASH_LEN])
}

/// Generates an ID that does not collide with any of `existing`.
pub fn generate_unique_id(
    student_id: &str,
    description: &str,
    timestamp: i64,
    existing: &[Issue],
) -> String {
    let mut nonce = 0u32;
    loop {
        let id = generate_id(student_id, description, timestamp, nonce);
        if !existing.iter().any(|issue| issue.id == id) {
            return id;
        }
        nonce = nonce.saturating_add(1);
    }
}

/// Validates the format of a full issue ID.
///
/// # Errors
///
/// Returns an error if the ID lacks the `iss-` prefix or the hash part is not
/// six lowercase hex digits.
pub fn validate_id_format(id: &str) -> Result<()> {
    let hash = id
        .strip_prefix(ID_PREFIX)
        .ok_or_else(|| Error::InvalidIssue(format!("ID must start with '{}': {}", ID_PREFIX, id)))?;

    let valid = hash.len() == HASH_LEN
        && hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
    if !valid {
        return Err(Error::InvalidIssue(format!(
            "ID hash must be {} lowercase hex digits: {}",
            HASH_LEN, id
        )));
    }

    Ok(())
}

/// Resolves a partial issue ID to its canonical full ID.
///
/// The partial may include or omit the `iss-` prefix and must carry at least
/// three hash characters unless it is an exact match.
///
/// # Errors
///
/// Returns an error if the partial is too short, matches nothing, or matches
/// more than one issue.
pub fn resolve_partial_id(partial: &str, issues: &[Issue]) -> Result<String> {
    let partial = partial.trim().to_lowercase();

    if let Some(issue) = issues.iter().find(|issue| issue.id == partial) {
        return Ok(issue.id.clone());
    }

    let hash_part = partial.strip_prefix(ID_PREFIX).unwrap_or(&partial);
    if hash_part.len() < MIN_PARTIAL_LEN {
        return Err(Error::InvalidIssue(format!(
            "Partial ID must have at least {} characters: {}",
            MIN_PARTIAL_LEN, partial
        )));
    }

    let prefix = format!("{}{}", ID_PREFIX, hash_part);
    let mut matches: Vec<String> = issues
        .iter()
        .filter(|issue| issue.id.starts_with(&prefix))
        .map(|issue| issue.id.clone())
        .collect();

    match matches.len() {
        0 => Err(Error::NotFound(partial)),
        1 => Ok(matches.remove(0)),
        _ => Err(Error::AmbiguousId(partial, matches)),
    }
}
