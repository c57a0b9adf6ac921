//! Content-derived task identifiers.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of digest bytes kept; each byte renders as two hex characters.
const ID_DIGEST_BYTES: usize = 5;

/// Stable identifier derived from a task's creation time.
///
/// The identifier never changes when mutable task fields change. Collisions
/// are possible for tasks created within the same second and are not
/// detected here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Derives the identifier for a task created at `created`.
    ///
    /// The hashed text is RFC 3339 with whole seconds in the offset of
    /// `created`. A zero offset renders as `Z`.
    #[must_use]
    pub fn from_created(created: DateTime<FixedOffset>) -> Self {
        let canonical = created.to_rfc3339_opts(SecondsFormat::Secs, true);
        let digest = Sha256::digest(canonical.as_bytes());
        let hex = digest
            .iter()
            .take(ID_DIGEST_BYTES)
            .map(|byte| format!("{byte:02x}"))
            .collect();
        Self(hex)
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
