//! Triage policy constants and mass-change detection.

use crate::file::ChangedFile;
use crate::label::Label;
use crate::rules;

/// Thresholds governing when a pull request counts as a mass change.
///
/// Both bounds are strict: a run of exactly `page_threshold` page files
/// stays unlabeled. The defaults are the reference values used to flag
/// bulk scripted edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriagePolicy {
    /// Main-page file count above which a PR is a mass change.
    pub page_threshold: usize,
    /// Translation file count above which a PR is a mass change.
    pub translation_threshold: usize,
}

impl Default for TriagePolicy {
    fn default() -> Self {
        Self {
            page_threshold: 5,
            translation_threshold: 10,
        }
    }
}

/// Detect whether a changed-file set is large enough to warrant the
/// mass-changes marker.
///
/// Only current filenames count; a rename's previous path never inflates
/// the totals.
#[must_use]
pub fn detect_mass_change(files: &[ChangedFile], policy: &TriagePolicy) -> Option<Label> {
    let pages = files
        .iter()
        .filter(|file| rules::is_main_page(&file.filename))
        .count();
    let translations = files
        .iter()
        .filter(|file| rules::is_translation_page(&file.filename))
        .count();

    if pages > policy.page_threshold || translations > policy.translation_threshold {
        Some(Label::MassChanges)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileStatus;

    fn main_pages(count: usize) -> Vec<ChangedFile> {
        (0..count)
            .map(|i| ChangedFile::new(format!("pages/common/cmd-{i}.md"), FileStatus::Modified))
            .collect()
    }

    fn translations(count: usize) -> Vec<ChangedFile> {
        (0..count)
            .map(|i| ChangedFile::new(format!("pages.de/common/cmd-{i}.md"), FileStatus::Modified))
            .collect()
    }

    #[test]
    fn test_six_page_edits_trip_the_threshold() {
        let files = main_pages(6);
        assert_eq!(
            detect_mass_change(&files, &TriagePolicy::default()),
            Some(Label::MassChanges)
        );
    }

    #[test]
    fn test_five_page_edits_do_not() {
        let files = main_pages(5);
        assert_eq!(detect_mass_change(&files, &TriagePolicy::default()), None);
    }

    #[test]
    fn test_eleven_translations_trip_the_threshold() {
        let files = translations(11);
        assert_eq!(
            detect_mass_change(&files, &TriagePolicy::default()),
            Some(Label::MassChanges)
        );
    }

    #[test]
    fn test_ten_translations_do_not() {
        let files = translations(10);
        assert_eq!(detect_mass_change(&files, &TriagePolicy::default()), None);
    }

    #[test]
    fn test_counts_are_tracked_per_tree() {
        // 5 pages plus 10 translations: each tree stays at its bound.
        let mut files = main_pages(5);
        files.extend(translations(10));
        assert_eq!(detect_mass_change(&files, &TriagePolicy::default()), None);
    }

    #[test]
    fn test_previous_paths_do_not_count() {
        let files: Vec<ChangedFile> = (0..6)
            .map(|i| ChangedFile::renamed(format!("pages/common/cmd-{i}.md"), format!("archive/cmd-{i}.md")))
            .collect();
        assert_eq!(detect_mass_change(&files, &TriagePolicy::default()), None);
    }

    #[test]
    fn test_custom_thresholds_apply() {
        let policy = TriagePolicy {
            page_threshold: 1,
            translation_threshold: 1,
        };
        let files = main_pages(2);
        assert_eq!(detect_mass_change(&files, &policy), Some(Label::MassChanges));
    }

    #[test]
    fn test_unrelated_files_never_trip() {
        let files: Vec<ChangedFile> = (0..20)
            .map(|i| ChangedFile::new(format!("scripts/tool-{i}.py"), FileStatus::Modified))
            .collect();
        assert_eq!(detect_mass_change(&files, &TriagePolicy::default()), None);
    }
}
