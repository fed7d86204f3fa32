//! Disclosure state: which hints are open.
//!
//! Each hint has a single `open` bit. Everything else is derived from it:
//! the step's bulk label ([`BulkLabel`]) and the flags mirrored onto the
//! rendered nodes ([`DisclosureFlags`]). Nothing derived is ever stored, so
//! the label cannot drift from the hints it describes.
//!
//! Two transitions mutate the state:
//!
//! - [`DisclosureState::toggle`] flips one hint and nothing else.
//! - [`DisclosureState::toggle_step`] reads the step's current label. On
//!   "hide all" it closes every hint of the step, otherwise it opens them all.
//!
//! ```rust
//! use bubbletea_hints::hints::{BulkLabel, DisclosureState, HintRef};
//!
//! let mut state = DisclosureState::with_sizes(&[2, 1]);
//! assert_eq!(state.bulk_label(0), Some(BulkLabel::ShowAll));
//!
//! state.toggle(HintRef::new(0, 0));
//! assert_eq!(state.bulk_label(0), Some(BulkLabel::HideAll));
//! assert_eq!(state.bulk_label(1), Some(BulkLabel::ShowAll));
//! ```

use super::group::StepGroup;

/// Position of a hint: step index and index within the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HintRef {
    /// Index of the step in display order.
    pub step: usize,
    /// Index of the hint within its step.
    pub hint: usize,
}

impl HintRef {
    /// Creates a reference.
    pub fn new(step: usize, hint: usize) -> Self {
        Self { step, hint }
    }
}

/// Label of a step's bulk control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulkLabel {
    /// No hint in the step is open; activating opens them all.
    #[default]
    ShowAll,
    /// At least one hint is open; activating closes them all.
    HideAll,
}

/// Presentation flags for one hint, all derived from its open bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureFlags {
    /// The content node carries the visibility (`active`) class.
    pub active: bool,
    /// `aria-hidden` on the content node.
    pub aria_hidden: bool,
    /// `aria-expanded` on the title control.
    pub aria_expanded: bool,
}

impl DisclosureFlags {
    /// Flags for a hint that is open (`true`) or closed.
    pub fn for_open(open: bool) -> Self {
        Self {
            active: open,
            aria_hidden: !open,
            aria_expanded: open,
        }
    }
}

/// Open/closed flags for every hint, laid out by step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureState {
    open: Vec<Vec<bool>>,
}

impl DisclosureState {
    /// All-closed state shaped after `groups`.
    pub fn new(groups: &[StepGroup]) -> Self {
        Self {
            open: groups.iter().map(|g| vec![false; g.len()]).collect(),
        }
    }

    /// All-closed state with the given number of hints per step.
    pub fn with_sizes(sizes: &[usize]) -> Self {
        Self {
            open: sizes.iter().map(|&n| vec![false; n]).collect(),
        }
    }

    /// Number of steps.
    pub fn step_count(&self) -> usize {
        self.open.len()
    }

    /// Number of hints in `step`, or `None` if out of range.
    pub fn hint_count(&self, step: usize) -> Option<usize> {
        self.open.get(step).map(Vec::len)
    }

    /// Whether the hint is open, or `None` if out of range.
    pub fn is_open(&self, at: HintRef) -> Option<bool> {
        self.open.get(at.step)?.get(at.hint).copied()
    }

    /// Number of open hints in `step`.
    pub fn open_count(&self, step: usize) -> Option<usize> {
        self.open
            .get(step)
            .map(|hints| hints.iter().filter(|&&o| o).count())
    }

    /// The step's bulk label, derived from its hints.
    pub fn bulk_label(&self, step: usize) -> Option<BulkLabel> {
        self.open.get(step).map(|hints| {
            if hints.iter().any(|&o| o) {
                BulkLabel::HideAll
            } else {
                BulkLabel::ShowAll
            }
        })
    }

    /// Presentation flags for a hint.
    pub fn flags(&self, at: HintRef) -> Option<DisclosureFlags> {
        self.is_open(at).map(DisclosureFlags::for_open)
    }

    /// Flips one hint and returns its new state. Other hints are untouched.
    pub fn toggle(&mut self, at: HintRef) -> Option<bool> {
        let slot = self.open.get_mut(at.step)?.get_mut(at.hint)?;
        *slot = !*slot;
        log::debug!(
            "hint {}/{} {}",
            at.step,
            at.hint,
            if *slot { "opened" } else { "closed" }
        );
        Some(*slot)
    }

    /// Bulk toggle for `step`: closes all its hints if the label reads
    /// "hide all", otherwise opens them all. Returns the resulting label.
    pub fn toggle_step(&mut self, step: usize) -> Option<BulkLabel> {
        let label = self.bulk_label(step)?;
        let open = label == BulkLabel::ShowAll;
        for slot in self.open[step].iter_mut() {
            *slot = open;
        }
        log::debug!(
            "step {} {}",
            step,
            if open { "shown" } else { "hidden" }
        );
        self.bulk_label(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DisclosureState {
        DisclosureState::with_sizes(&[3, 2])
    }

    fn all(state: &DisclosureState, step: usize) -> Vec<bool> {
        (0..state.hint_count(step).unwrap())
            .map(|h| state.is_open(HintRef::new(step, h)).unwrap())
            .collect()
    }

    #[test]
    fn test_initially_closed_with_show_all() {
        let s = state();
        assert_eq!(all(&s, 0), vec![false, false, false]);
        assert_eq!(s.bulk_label(0), Some(BulkLabel::ShowAll));
        assert_eq!(s.bulk_label(1), Some(BulkLabel::ShowAll));
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut s = state();
        let a = HintRef::new(0, 0);
        let b = HintRef::new(0, 1);
        assert_eq!(s.toggle(a), Some(true));
        assert_eq!(s.toggle(b), Some(true));
        assert_eq!(s.toggle(a), Some(false));
        assert_eq!(s.is_open(a), Some(false));
        assert_eq!(s.is_open(b), Some(true));
    }

    #[test]
    fn test_toggle_does_not_touch_other_steps() {
        let mut s = state();
        s.toggle(HintRef::new(1, 1));
        assert_eq!(all(&s, 0), vec![false, false, false]);
        assert_eq!(all(&s, 1), vec![false, true]);
    }

    #[test]
    fn test_label_follows_individual_toggles() {
        let mut s = state();
        s.toggle(HintRef::new(0, 2));
        assert_eq!(s.bulk_label(0), Some(BulkLabel::HideAll));
        s.toggle(HintRef::new(0, 1));
        s.toggle(HintRef::new(0, 2));
        assert_eq!(s.bulk_label(0), Some(BulkLabel::HideAll));
        s.toggle(HintRef::new(0, 1));
        assert_eq!(s.bulk_label(0), Some(BulkLabel::ShowAll));
    }

    #[test]
    fn test_show_all_opens_only_that_step() {
        let mut s = state();
        assert_eq!(s.toggle_step(0), Some(BulkLabel::HideAll));
        assert_eq!(all(&s, 0), vec![true, true, true]);
        assert_eq!(all(&s, 1), vec![false, false]);
    }

    #[test]
    fn test_partial_open_then_bulk_hides_all() {
        let mut s = state();
        s.toggle(HintRef::new(0, 1));
        assert_eq!(s.toggle_step(0), Some(BulkLabel::ShowAll));
        assert_eq!(all(&s, 0), vec![false, false, false]);
    }

    #[test]
    fn test_hide_then_show_reopens_everything() {
        let mut s = state();
        s.toggle_step(0);
        s.toggle(HintRef::new(0, 0));
        assert_eq!(s.toggle_step(0), Some(BulkLabel::ShowAll));
        assert_eq!(s.toggle_step(0), Some(BulkLabel::HideAll));
        assert_eq!(all(&s, 0), vec![true, true, true]);
    }

    #[test]
    fn test_closing_last_open_hint_after_bulk_restores_show_all() {
        let mut s = DisclosureState::with_sizes(&[1]);
        s.toggle_step(0);
        s.toggle(HintRef::new(0, 0));
        assert_eq!(s.bulk_label(0), Some(BulkLabel::ShowAll));
    }

    #[test]
    fn test_flags_mirror_open_bit() {
        let mut s = state();
        let at = HintRef::new(1, 0);
        assert_eq!(
            s.flags(at),
            Some(DisclosureFlags {
                active: false,
                aria_hidden: true,
                aria_expanded: false
            })
        );
        s.toggle(at);
        let f = s.flags(at).unwrap();
        assert!(f.active && f.aria_expanded && !f.aria_hidden);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut s = state();
        assert_eq!(s.toggle(HintRef::new(0, 3)), None);
        assert_eq!(s.toggle(HintRef::new(5, 0)), None);
        assert_eq!(s.toggle_step(2), None);
        assert_eq!(s.bulk_label(2), None);
        assert_eq!(s, state());
    }

    #[test]
    fn test_empty_step_keeps_show_all() {
        let mut s = DisclosureState::with_sizes(&[0]);
        assert_eq!(s.toggle_step(0), Some(BulkLabel::ShowAll));
    }

    #[test]
    fn test_open_count() {
        let mut s = state();
        s.toggle(HintRef::new(0, 0));
        s.toggle(HintRef::new(0, 2));
        assert_eq!(s.open_count(0), Some(2));
        assert_eq!(s.open_count(1), Some(0));
        assert_eq!(s.open_count(9), None);
    }
}
