//! Content-hash identity.
//!
//! Every stored string is addressed by the SHA-256 digest of its raw UTF-8
//! bytes, rendered as 64 lowercase hex characters. The same function is used
//! when a record is created and when a caller looks one up by value, so two
//! byte-identical inputs always resolve to the same record.
//!
//! ```text
//! SHA-256(value_bytes) -> lowercase hex
//! ```
//!
//! No normalization happens before hashing: `"Foo"`, `"foo"` and `"foo "`
//! are three distinct identities.

use sha2::{Digest, Sha256};

/// Compute the identity of a raw string.
///
/// # Examples
///
/// ```rust
/// use analysis::identity_of;
///
/// let id = identity_of("hello");
/// assert_eq!(id, "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824");
/// assert_eq!(id, identity_of("hello"));
/// assert_ne!(id, identity_of("Hello"));
/// ```
pub fn identity_of(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}
