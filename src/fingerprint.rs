//! Stable cache keys for decoration runs.
//!
//! The core keeps no cache. Collaborators that do can key on this digest:
//! it covers every input that changes the output, and nothing else.

use sha2::{Digest, Sha256};

use crate::config::DecorationConfig;

/// Bumped whenever emitted CSS changes for the same inputs.
const FINGERPRINT_VERSION: &[u8] = b"aura-decoration-v1";

/// SHA-256 hex digest of `text` and the output-relevant parts of `config`.
///
/// Target order and duplicates do not matter, matching how targets are
/// emitted.
#[must_use]
pub fn fingerprint(text: &str, config: &DecorationConfig) -> String {
    let mut targets: Vec<&str> = config.target_templates.iter().map(String::as_str).collect();
    targets.sort_unstable();
    targets.dedup();

    let mut hasher = Sha256::new();
    hasher.update(FINGERPRINT_VERSION);
    update_field(&mut hasher, text.as_bytes());
    match config.explicit_theme.as_deref() {
        Some(name) => {
            hasher.update([1u8]);
            update_field(&mut hasher, name.as_bytes());
        }
        None => hasher.update([0u8]),
    }
    hasher.update((targets.len() as u64).to_le_bytes());
    for target in targets {
        update_field(&mut hasher, target.as_bytes());
    }
    hasher.update([u8::from(config.minify)]);
    hex::encode(hasher.finalize())
}

/// Length-prefixed so field boundaries can't shift between inputs.
fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
