use rand::Rng;

/// Prefix printed in front of every booking reference
pub const DEFAULT_REFERENCE_PREFIX: &str = "SD-2024-";

/// Random characters following the prefix
pub const REFERENCE_SUFFIX_LEN: usize = 5;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates display-only booking references.
///
/// References are random, not unique, and never checked against anything.
#[derive(Debug, Clone)]
pub struct ReferenceGenerator {
    prefix: String,
}

impl ReferenceGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Format: `{prefix}{5 x [0-9A-Z]}`
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let suffix: String = (0..REFERENCE_SUFFIX_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        format!("{}{}", self.prefix, suffix)
    }
}

impl Default for ReferenceGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_PREFIX)
    }
}
