use std::fmt;

/// Characters that may not appear in a persisted collection name. Mirrors
/// the restrictions of document stores that use the name as a namespace.
const FORBIDDEN: [char; 4] = ['$', '/', '\\', '"'];

const MAX_LEN: usize = 120;

/// Identity of a stored collection: the sanitized display name of the
/// conversation's first participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionName(String);

impl CollectionName {
    /// Sanitize a raw display name into a usable collection name. The
    /// mapping is idempotent, so looking up an already-sanitized name is
    /// safe.
    pub fn new(raw: &str) -> Result<Self, NameError> {
        let sanitized: String = raw
            .trim()
            .chars()
            .map(|c| {
                if c.is_control() || FORBIDDEN.contains(&c) {
                    '_'
                } else {
                    c
                }
            })
            .take(MAX_LEN)
            .collect();
        // Truncation can expose trailing whitespace; trim again so the
        // mapping stays idempotent.
        let sanitized = sanitized.trim_end().to_string();

        if sanitized.is_empty() {
            return Err(NameError::Empty);
        }

        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NameError {
    #[error("collection name is empty")]
    Empty,
}
