//! The rendered node tree.
//!
//! A snapshot of the widget as a hierarchy of nodes: one [`StepNode`] per
//! step with its header and bulk control, and one [`HintNode`] per hint
//! that owns both its title control and its content node. The pair is bound
//! when the tree is built, so nothing ever has to look a content node up by
//! identifier.
//!
//! The tree is rebuilt from the groups and the [`DisclosureState`]; it is a
//! projection, never a source of truth.

use super::group::StepGroup;
use super::labels::Labels;
use super::record::StepKey;
use super::state::{BulkLabel, DisclosureFlags, DisclosureState, HintRef};

/// Class carried by an open content node.
pub const ACTIVE_CLASS: &str = "active";

/// The bulk show/hide control in a step header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkControl {
    /// Step this control acts on.
    pub target_step: StepKey,
    /// Current label.
    pub label: BulkLabel,
    /// Label text.
    pub text: String,
}

/// A hint's always-visible title control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleControl {
    /// Button text.
    pub text: String,
    /// Identifier of the content node this control reveals.
    pub target: String,
    /// `aria-expanded`.
    pub aria_expanded: bool,
}

/// A hint's content node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    /// Node identifier, `content-s{step}-h{hint}`.
    pub id: String,
    /// Raw markup.
    pub markup: String,
    /// Carries [`ACTIVE_CLASS`].
    pub active: bool,
    /// `aria-hidden`.
    pub aria_hidden: bool,
}

/// A hint: its title control bound to its content node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintNode {
    /// Position in the disclosure state.
    pub at: HintRef,
    /// Title control.
    pub title: TitleControl,
    /// Content node.
    pub content: ContentNode,
}

impl HintNode {
    /// The presentation flags of this node.
    pub fn flags(&self) -> DisclosureFlags {
        DisclosureFlags {
            active: self.content.active,
            aria_hidden: self.content.aria_hidden,
            aria_expanded: self.title.aria_expanded,
        }
    }

    /// Whether the hint is shown.
    pub fn is_open(&self) -> bool {
        self.content.active
    }
}

/// One step container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepNode {
    /// Index of the step in display order.
    pub index: usize,
    /// Header title.
    pub title: String,
    /// Bulk control.
    pub bulk: BulkControl,
    /// Hints in source order.
    pub hints: Vec<HintNode>,
}

/// Builds the node tree for `groups` as seen through `state`.
///
/// Hints whose position is missing from `state` are rendered closed.
pub fn build(groups: &[StepGroup], state: &DisclosureState, labels: &Labels) -> Vec<StepNode> {
    groups
        .iter()
        .enumerate()
        .map(|(step, group)| {
            let label = state.bulk_label(step).unwrap_or(BulkLabel::ShowAll);
            let hints = group
                .hints
                .iter()
                .enumerate()
                .map(|(hint, record)| {
                    let at = HintRef::new(step, hint);
                    let flags = state
                        .flags(at)
                        .unwrap_or_else(|| DisclosureFlags::for_open(false));
                    let id = record.content_id();
                    HintNode {
                        at,
                        title: TitleControl {
                            text: record.title.clone(),
                            target: id.clone(),
                            aria_expanded: flags.aria_expanded,
                        },
                        content: ContentNode {
                            id,
                            markup: record.content.clone(),
                            active: flags.active,
                            aria_hidden: flags.aria_hidden,
                        },
                    }
                })
                .collect();

            StepNode {
                index: step,
                title: group.title.clone(),
                bulk: BulkControl {
                    target_step: group.key.clone(),
                    label,
                    text: labels.bulk(label).to_string(),
                },
                hints,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::group::group;
    use crate::hints::record::HintRecord;

    fn groups() -> Vec<StepGroup> {
        group(vec![
            HintRecord::new("1", "Intro", "H1", "Q1", "A1"),
            HintRecord::new("1", "", "H2", "Q2", "A2"),
            HintRecord::new("2", "Mid", "H3", "Q3", "A3"),
        ])
    }

    #[test]
    fn test_initial_tree() {
        let g = groups();
        let nodes = build(&g, &DisclosureState::new(&g), &Labels::default());
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].title, "Intro");
        assert_eq!(nodes[0].bulk.text, "Show all");
        assert_eq!(nodes[0].bulk.target_step.as_str(), "1");
        assert_eq!(nodes[0].hints[1].title.target, "content-s1-hH2");
        assert_eq!(nodes[0].hints[1].content.id, "content-s1-hH2");
        assert!(nodes.iter().flat_map(|s| &s.hints).all(|h| !h.is_open()));
    }

    #[test]
    fn test_tree_reflects_state() {
        let g = groups();
        let mut state = DisclosureState::new(&g);
        state.toggle(HintRef::new(0, 0));
        let nodes = build(&g, &state, &Labels::default());
        assert_eq!(nodes[0].bulk.label, BulkLabel::HideAll);
        assert_eq!(nodes[0].bulk.text, "Hide all");
        assert_eq!(nodes[1].bulk.text, "Show all");
        let h = &nodes[0].hints[0];
        assert_eq!(h.flags(), DisclosureFlags::for_open(true));
        assert_eq!(h.content.markup, "A1");
    }

    #[test]
    fn test_flags_agree_for_every_hint() {
        let g = groups();
        let mut state = DisclosureState::new(&g);
        state.toggle_step(1);
        state.toggle(HintRef::new(0, 1));
        for node in build(&g, &state, &Labels::default()).iter().flat_map(|s| &s.hints) {
            let f = node.flags();
            assert_eq!(f.active, f.aria_expanded);
            assert_eq!(f.active, !f.aria_hidden);
            assert_eq!(Some(f.active), state.is_open(node.at));
        }
    }
}
