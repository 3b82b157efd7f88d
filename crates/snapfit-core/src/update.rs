//! Three-state result handed to the persistence layer.
//!
//! "Leave the stored image alone" and "remove the stored image" are
//! different instructions and must never collapse into the same value.

use crate::payload::{EncodedResult, PayloadError};

/// What the host should do with the stored image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageUpdate {
    /// Keep whatever is stored.
    #[default]
    Unchanged,
    /// Remove the stored image.
    Cleared,
    /// Replace the stored image.
    Set(EncodedResult),
}

impl ImageUpdate {
    /// Fold this update onto the currently stored value.
    pub fn apply(self, current: Option<EncodedResult>) -> Option<EncodedResult> {
        match self {
            ImageUpdate::Unchanged => current,
            ImageUpdate::Cleared => None,
            ImageUpdate::Set(result) => Some(result),
        }
    }

    /// Interpret a stored data-URL string.
    ///
    /// An empty string is an explicit clear, never "unchanged".
    pub fn from_data_url(text: &str) -> Result<Self, PayloadError> {
        if text.trim().is_empty() {
            return Ok(ImageUpdate::Cleared);
        }
        EncodedResult::from_data_url(text).map(ImageUpdate::Set)
    }

    /// Short label for the state: `"unchanged"`, `"cleared"` or `"set"`.
    pub fn kind(&self) -> &'static str {
        match self {
            ImageUpdate::Unchanged => "unchanged",
            ImageUpdate::Cleared => "cleared",
            ImageUpdate::Set(_) => "set",
        }
    }

    /// The new value, if this update sets one.
    pub fn result(&self) -> Option<&EncodedResult> {
        match self {
            ImageUpdate::Set(result) => Some(result),
            _ => None,
        }
    }
}

impl From<EncodedResult> for ImageUpdate {
    fn from(result: EncodedResult) -> Self {
        ImageUpdate::Set(result)
    }
}
