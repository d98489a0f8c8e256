//! Changed-file descriptors.

/// Status of a single file within a pull request revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
}

impl FileStatus {
    /// Parse a wire status string.
    ///
    /// The REST API also reports `copied`, `changed`, and `unchanged`;
    /// copies behave like additions for triage purposes, the latter two
    /// like edits. Anything else returns `None`.
    #[must_use]
    pub fn from_wire(status: &str) -> Option<Self> {
        match status {
            "added" | "copied" => Some(Self::Added),
            "modified" | "changed" | "unchanged" => Some(Self::Modified),
            "removed" => Some(Self::Removed),
            "renamed" => Some(Self::Renamed),
            _ => None,
        }
    }
}

/// A single file touched by a pull request revision.
///
/// Invariant: `previous_filename` is `Some` exactly when `status` is
/// [`FileStatus::Renamed`]. The constructors uphold it; boundary code
/// converting wire payloads must do the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Repo-relative path of the file in this revision.
    pub filename: String,
    /// Path before the rename, for renamed files only.
    pub previous_filename: Option<String>,
    pub status: FileStatus,
}

impl ChangedFile {
    /// Descriptor for an added, modified, or removed file.
    #[must_use]
    pub fn new(filename: impl Into<String>, status: FileStatus) -> Self {
        Self {
            filename: filename.into(),
            previous_filename: None,
            status,
        }
    }

    /// Descriptor for a renamed file.
    #[must_use]
    pub fn renamed(previous: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            previous_filename: Some(previous.into()),
            status: FileStatus::Renamed,
        }
    }
}
