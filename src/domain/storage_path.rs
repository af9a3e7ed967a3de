use uuid::Uuid;

/// Location of one staged upload inside the staging store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoragePath(String);

impl StoragePath {
    /// Unique staging path for an uploaded file. The original filename is
    /// kept (flattened to a safe character set) so staged objects are
    /// recognizable when inspecting the staging directory.
    pub fn for_upload(filename: &str) -> Self {
        let safe: String = filename
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        Self(format!("uploads/{}-{}", Uuid::new_v4(), safe))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
