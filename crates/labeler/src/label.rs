//! Triage label vocabulary.

use std::fmt;

/// The fixed set of labels a triage run can reason about.
///
/// Internally labels are variants of this enum; the strings GitHub stores
/// (lowercase, space-separated) appear only at the wire boundary via
/// [`Label::name`] and [`Label::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// A canonical page was added.
    NewCommand,
    /// A canonical page was modified, removed, or renamed.
    PageEdit,
    /// A translated page was added.
    NewTranslation,
    /// A translated page was modified, removed, or renamed.
    TranslationEdit,
    /// Governance files changed (maintainer roster, code owners).
    Community,
    /// A Markdown file outside the page trees changed.
    Documentation,
    /// Scripts or CI configuration changed.
    Tooling,
    /// The PR touches enough pages to warrant extra scrutiny.
    MassChanges,
    /// Nobody is assigned to review the PR.
    ReviewNeeded,
    /// Externally-applied marker; triage removes it, never adds it.
    Waiting,
}

/// Every label in the vocabulary, in display order.
pub const ALL_LABELS: [Label; 10] = [
    Label::NewCommand,
    Label::PageEdit,
    Label::NewTranslation,
    Label::TranslationEdit,
    Label::Community,
    Label::Documentation,
    Label::Tooling,
    Label::MassChanges,
    Label::ReviewNeeded,
    Label::Waiting,
];

impl Label {
    /// Get the label's wire name as GitHub stores it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NewCommand => "new command",
            Self::PageEdit => "page edit",
            Self::NewTranslation => "new translation",
            Self::TranslationEdit => "translation edit",
            Self::Community => "community",
            Self::Documentation => "documentation",
            Self::Tooling => "tooling",
            Self::MassChanges => "mass changes",
            Self::ReviewNeeded => "review needed",
            Self::Waiting => "waiting",
        }
    }

    /// Parse a wire name back into the vocabulary.
    ///
    /// Returns `None` for strings outside the fixed set; pull requests
    /// routinely carry labels this tool does not manage.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "new command" => Some(Self::NewCommand),
            "page edit" => Some(Self::PageEdit),
            "new translation" => Some(Self::NewTranslation),
            "translation edit" => Some(Self::TranslationEdit),
            "community" => Some(Self::Community),
            "documentation" => Some(Self::Documentation),
            "tooling" => Some(Self::Tooling),
            "mass changes" => Some(Self::MassChanges),
            "review needed" => Some(Self::ReviewNeeded),
            "waiting" => Some(Self::Waiting),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
