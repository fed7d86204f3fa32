//! User-visible strings.

use super::group::{self, DEFAULT_STEP_TITLE};
use super::record::StepKey;
use super::state::BulkLabel;

/// Text shown by the widget. Swap the whole set to localise it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Bulk control label while every hint of the step is closed.
    pub show_all: String,
    /// Bulk control label while any hint of the step is open.
    pub hide_all: String,
    /// Title template for steps without a `StepTitle`; `{step}` is replaced
    /// by the step key.
    pub step_title: String,
    /// Message replacing the widget when the data cannot be loaded.
    pub load_error: String,
    /// Shown while the data is being fetched.
    pub loading: String,
    /// Shown when the data loaded but holds no hints.
    pub empty: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            show_all: "Show all".to_string(),
            hide_all: "Hide all".to_string(),
            step_title: DEFAULT_STEP_TITLE.to_string(),
            load_error: "Could not load the hint data. Check the file path and its contents."
                .to_string(),
            loading: "Loading hints…".to_string(),
            empty: "No hints.".to_string(),
        }
    }
}

impl Labels {
    /// Japanese labels.
    pub fn japanese() -> Self {
        Self {
            show_all: "すべて表示".to_string(),
            hide_all: "すべて非表示".to_string(),
            step_title: "ステップ {step}".to_string(),
            load_error: "ヒントデータを読み込めませんでした。ファイルパスとCSVの内容を確認してください。"
                .to_string(),
            loading: "読み込み中…".to_string(),
            empty: "ヒントがありません。".to_string(),
        }
    }

    /// Text for a bulk label.
    pub fn bulk(&self, label: BulkLabel) -> &str {
        match label {
            BulkLabel::ShowAll => &self.show_all,
            BulkLabel::HideAll => &self.hide_all,
        }
    }

    /// Default title for an untitled step.
    pub fn step_title_for(&self, key: &StepKey) -> String {
        group::default_title(&self.step_title, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_text() {
        let l = Labels::default();
        assert_eq!(l.bulk(BulkLabel::ShowAll), "Show all");
        assert_eq!(l.bulk(BulkLabel::HideAll), "Hide all");
    }

    #[test]
    fn test_japanese_step_title() {
        let l = Labels::japanese();
        assert_eq!(l.step_title_for(&StepKey::new("2")), "ステップ 2");
        assert_eq!(l.bulk(BulkLabel::HideAll), "すべて非表示");
    }
}
