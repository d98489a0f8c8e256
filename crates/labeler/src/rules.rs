//! Path classification rules.
//!
//! Each rule pairs a path predicate with a mapping from file status to
//! label. Rules are evaluated top-to-bottom and the first match wins, so
//! precedence between overlapping patterns (every page is also a Markdown
//! file) is explicit here and nowhere else.

use regex::Regex;
use std::sync::LazyLock;

use crate::file::{ChangedFile, FileStatus};
use crate::label::Label;

/// Canonical content pages live directly under `pages/`.
static MAIN_PAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^pages/").unwrap());

/// Localized pages live under `pages.<locale>/`. Locale directories mix
/// case on disk (`pages.pt_BR`), hence the case-insensitive flag.
static TRANSLATION_PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^pages\.[a-z_]+/").unwrap());

static DOCUMENTATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\.md$").unwrap());

static TOOLING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([jt]s|py|sh|yml|json)$").unwrap());

/// Exact paths whose edits concern repository governance.
const COMMUNITY_FILES: [&str; 2] = ["MAINTAINERS.md", ".github/CODEOWNERS"];

/// A single classification rule.
struct Rule {
    applies: fn(&str) -> bool,
    label_for: fn(FileStatus) -> Label,
}

/// Rules in precedence order.
static RULES: &[Rule] = &[
    Rule {
        applies: is_main_page,
        label_for: main_page_label,
    },
    Rule {
        applies: is_translation_page,
        label_for: translation_label,
    },
    Rule {
        applies: is_community_file,
        label_for: community_label,
    },
    Rule {
        applies: is_documentation,
        label_for: documentation_label,
    },
    Rule {
        applies: is_tooling,
        label_for: tooling_label,
    },
];

/// Whether a path names a canonical page.
///
/// Disjoint from [`is_translation_page`] by construction: a dot-locale
/// segment never matches the bare `pages/` prefix.
pub(crate) fn is_main_page(path: &str) -> bool {
    MAIN_PAGE.is_match(path)
}

/// Whether a path names a translated page.
pub(crate) fn is_translation_page(path: &str) -> bool {
    TRANSLATION_PAGE.is_match(path)
}

fn is_community_file(path: &str) -> bool {
    COMMUNITY_FILES.contains(&path)
}

fn is_documentation(path: &str) -> bool {
    DOCUMENTATION.is_match(path)
}

fn is_tooling(path: &str) -> bool {
    TOOLING.is_match(path)
}

fn main_page_label(status: FileStatus) -> Label {
    match status {
        FileStatus::Added => Label::NewCommand,
        FileStatus::Modified | FileStatus::Removed | FileStatus::Renamed => Label::PageEdit,
    }
}

fn translation_label(status: FileStatus) -> Label {
    match status {
        FileStatus::Added => Label::NewTranslation,
        FileStatus::Modified | FileStatus::Removed | FileStatus::Renamed => Label::TranslationEdit,
    }
}

fn community_label(_status: FileStatus) -> Label {
    Label::Community
}

fn documentation_label(_status: FileStatus) -> Label {
    Label::Documentation
}

fn tooling_label(_status: FileStatus) -> Label {
    Label::Tooling
}

/// Classify a changed file into at most one triage label.
///
/// A file belongs to a rule's territory if either its current or, for
/// renames, its previous path matches the rule's predicate; a rename out
/// of `pages/` is still a page edit.
#[must_use]
pub fn classify(file: &ChangedFile) -> Option<Label> {
    let rule = RULES.iter().find(|rule| {
        (rule.applies)(&file.filename)
            || file
                .previous_filename
                .as_deref()
                .is_some_and(|previous| (rule.applies)(previous))
    })?;
    Some((rule.label_for)(file.status))
}
