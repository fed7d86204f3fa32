//! Grouping of records into ordered steps.

use super::record::{HintRecord, StepKey};
use std::collections::HashMap;

/// Placeholder replaced by the step key in a step title template.
pub const STEP_PLACEHOLDER: &str = "{step}";

/// Template used when a step has no title of its own.
pub const DEFAULT_STEP_TITLE: &str = "Step {step}";

/// How a step's display title is chosen when its rows disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitlePolicy {
    /// The first non-empty `StepTitle` among the step's rows wins. Later
    /// titles never replace it.
    #[default]
    FirstNonEmpty,
    /// Only the step's first row is consulted; if its title is blank the
    /// default is used even when a later row carries one.
    FirstRecord,
}

/// One step: its key, display title, and hints in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepGroup {
    /// Step identifier.
    pub key: StepKey,
    /// Display title.
    pub title: String,
    /// Hints belonging to the step, in source order.
    pub hints: Vec<HintRecord>,
}

impl StepGroup {
    /// Number of hints in the step.
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    /// Whether the step has no hints.
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

/// Expands a step title template such as `"Step {step}"`.
pub fn default_title(template: &str, key: &StepKey) -> String {
    template.replace(STEP_PLACEHOLDER, key.as_str())
}

/// Groups records by step using [`TitlePolicy::FirstNonEmpty`] and the
/// `"Step {step}"` default title.
///
/// ```rust
/// use bubbletea_hints::hints::{group, HintRecord};
///
/// let groups = group(vec![
///     HintRecord::new("1", "Intro", "H1", "Q1", "A1"),
///     HintRecord::new("2", "", "H3", "Q3", "A3"),
///     HintRecord::new("1", "", "H2", "Q2", "A2"),
/// ]);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].title, "Intro");
/// assert_eq!(groups[0].hints.len(), 2);
/// assert_eq!(groups[1].title, "Step 2");
/// ```
pub fn group(records: Vec<HintRecord>) -> Vec<StepGroup> {
    group_with(records, TitlePolicy::default(), DEFAULT_STEP_TITLE)
}

/// Groups records by step. Groups are ordered by the first appearance of
/// their key; hints keep source order within each group.
pub fn group_with(
    records: Vec<HintRecord>,
    policy: TitlePolicy,
    title_template: &str,
) -> Vec<StepGroup> {
    // `titled[i]` records whether groups[i] already has a title from the data.
    let mut groups: Vec<StepGroup> = Vec::new();
    let mut titled: Vec<bool> = Vec::new();
    let mut index: HashMap<StepKey, usize> = HashMap::new();

    for record in records {
        let i = match index.get(&record.step) {
            Some(&i) => i,
            None => {
                let has_title = !record.step_title.is_empty();
                let title = if has_title {
                    record.step_title.clone()
                } else {
                    default_title(title_template, &record.step)
                };
                index.insert(record.step.clone(), groups.len());
                groups.push(StepGroup {
                    key: record.step.clone(),
                    title,
                    hints: Vec::new(),
                });
                // Under FirstRecord the decision is final either way.
                titled.push(has_title || policy == TitlePolicy::FirstRecord);
                groups.len() - 1
            }
        };

        if !titled[i] && !record.step_title.is_empty() {
            groups[i].title = record.step_title.clone();
            titled[i] = true;
        }
        groups[i].hints.push(record);
    }

    log::debug!("grouped hints into {} steps", groups.len());
    groups
}
