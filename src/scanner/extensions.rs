use indexmap::IndexSet;

use crate::error::{MusicScanError, Result};

/// Extensions matched when nothing else is configured.
pub const DEFAULT_AUDIO_EXTENSIONS: &[&str] = &["flac", "m4a", "mp3", "wav", "aac", "ogg"];

/// The set of file-name suffixes treated as audio.
///
/// Entries are stored without a leading dot, keep their first-seen order and
/// are compared case-sensitively: `FLAC` and `flac` are different extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: IndexSet<String>,
}

impl ExtensionSet {
    /// Build a set from user-supplied extensions.
    ///
    /// A single leading dot is stripped, duplicates are dropped.
    ///
    /// # Errors
    /// Returns an error if the list is empty or any extension is blank.
    pub fn new<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes = IndexSet::new();
        for ext in extensions {
            let raw = ext.as_ref().trim();
            let ext = raw.strip_prefix('.').unwrap_or(raw);
            if ext.is_empty() {
                return Err(MusicScanError::Config(format!(
                    "invalid extension '{raw}': extensions must not be empty"
                )));
            }
            suffixes.insert(ext.to_string());
        }

        if suffixes.is_empty() {
            return Err(MusicScanError::Config(
                "at least one extension is required".to_string(),
            ));
        }

        Ok(Self { suffixes })
    }

    /// Whether `file_name` ends with `.` followed by one of the extensions.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|ext| {
            file_name
                .strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.suffixes.iter().cloned().collect()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_AUDIO_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl std::fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(", "))
    }
}

#[cfg(test)]
#[path = "extensions_tests.rs"]
mod tests;
