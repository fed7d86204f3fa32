//! Collapsible, step-grouped hints.
//!
//! The widget loads a small comma-separated table of hints, groups its rows
//! into steps, and shows each step as a header with a bulk show/hide
//! control followed by the titles of its hints. Activating a title reveals
//! the hint's content.
//!
//! ## Pipeline
//!
//! 1. [`loader`]: fetch the table text from a file or URL (the only async step)
//! 2. [`record`]: parse rows into [`HintRecord`]s, tolerating short rows
//! 3. [`group`]: partition records into ordered [`StepGroup`]s with titles
//! 4. [`state`]: track which hints are open; derive each step's bulk label
//! 5. [`node`], [`rendering`], [`html`]: project state for display
//!
//! ## Toggle rules
//!
//! - A hint title flips that hint only. Any number of hints may be open.
//! - A step's bulk control closes every hint of the step when it reads
//!   "hide all", and opens them all otherwise.
//! - The bulk label reads "hide all" whenever at least one hint of the step
//!   is open. It is computed from the hints, never stored.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_hints::hints::{BulkLabel, Focus, HintRef, Model};
//!
//! let mut hints = Model::new().with_source("docs/hintdata.csv");
//! hints.set_text(
//!     "Step,StepTitle,HintID,Title,Content\n\
//!      1,Intro,H1,Q1,A1\n\
//!      1,,H2,Q2,A2\n\
//!      2,Mid,H3,Q3,A3",
//! );
//!
//! assert_eq!(hints.groups()[0].title, "Intro");
//! hints.set_focus(Focus::Hint(HintRef::new(0, 0)));
//! hints.activate();
//! assert_eq!(hints.bulk_label(0), Some(BulkLabel::HideAll));
//! assert_eq!(hints.bulk_label(1), Some(BulkLabel::ShowAll));
//! ```

pub mod group;
pub mod html;
pub mod keys;
pub mod labels;
pub mod loader;
pub mod node;
pub mod record;
pub mod rendering;
pub mod state;
pub mod style;

mod model;


pub use group::{group, group_with, StepGroup, TitlePolicy};
pub use keys::HintKeyMap;
pub use labels::Labels;
pub use loader::{HintSource, HintsLoadErrorMsg, HintsLoadedMsg, LoadError};
pub use model::{Focus, LoadStatus, Model};
pub use node::{HintNode, StepNode};
pub use record::{parse, parse_with_stats, HintRecord, ParseStats, StepKey};
pub use state::{BulkLabel, DisclosureFlags, DisclosureState, HintRef};
pub use style::HintStyles;

use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};

/// A blurred widget ignores key presses but still accepts load results.
impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        None
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

impl BubbleTeaModel for Model {
    /// Creates a widget with default settings and starts loading
    /// `hintdata.csv`.
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new();
        let cmd = model.load_cmd();
        (model, Some(cmd))
    }

    /// Handles load results, resizes, and key presses.
    ///
    /// Load messages addressed to another widget are ignored. Until the data
    /// is ready only help and quit keys do anything.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(loaded) = msg.downcast_ref::<HintsLoadedMsg>() {
            if loaded.id == self.id {
                self.set_text(&loaded.text);
            }
            return None;
        }

        if let Some(failed) = msg.downcast_ref::<HintsLoadErrorMsg>() {
            if failed.id == self.id {
                self.set_error(failed.err.clone());
            }
            return None;
        }

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.set_width(size.width as usize);
            self.set_height(size.height as usize);
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if !self.focused {
            return None;
        }

        if self.keymap.force_quit.matches(key_msg) || self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        if self.keymap.show_full_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
            self.sync_offset();
            return None;
        }
        if self.status != LoadStatus::Ready {
            return None;
        }

        if self.keymap.cursor_up.matches(key_msg) {
            self.cursor_up();
        } else if self.keymap.cursor_down.matches(key_msg) {
            self.cursor_down();
        } else if self.keymap.next_step.matches(key_msg) {
            self.next_step();
        } else if self.keymap.prev_step.matches(key_msg) {
            self.prev_step();
        } else if self.keymap.go_to_start.matches(key_msg) {
            self.go_to_start();
        } else if self.keymap.go_to_end.matches(key_msg) {
            self.go_to_end();
        } else if self.keymap.toggle.matches(key_msg) {
            self.activate();
        } else if self.keymap.toggle_step.matches(key_msg) {
            self.activate_step();
        }
        None
    }

    /// Renders the step hierarchy (or the loading/error message) followed by
    /// the help footer.
    fn view(&self) -> String {
        let mut sections = vec![self.view_body()];
        if self.show_help {
            let help = self.view_help();
            if !help.is_empty() {
                sections.push(help);
            }
        }
        sections.join("\n")
    }
}
