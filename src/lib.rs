#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-hints/")]

//! # bubbletea-hints
//!
//! A collapsible, step-by-step hint viewer for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! terminal applications.
//!
//! Hints come from a small comma-separated table (`Step,StepTitle,HintID,Title,Content`).
//! Rows are grouped into steps; each step shows a header with a "show all" /
//! "hide all" control followed by its hint titles. Activating a title
//! reveals that hint's content, and the bulk control opens or closes every
//! hint of the step at once.
//!
//! ## Overview
//!
//! - [`hints`]: the widget, plus the parsing, grouping, and disclosure state it is built on
//! - [`key`]: type-safe key bindings
//! - [`help`]: a help footer generated from key bindings
//!
//! The widget follows the Elm Architecture: it implements `bubbletea_rs::Model`
//! and can be run on its own or embedded in a larger model.
//!
//! ## Embedding
//!
//! ```rust
//! use bubbletea_hints::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     hints: Hints,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let hints = Hints::new().with_source("https://example.com/hintdata.csv");
//!         let cmd = hints.load_cmd();
//!         (Self { hints }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.hints.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.hints.view()
//!     }
//! }
//! ```
//!
//! ## Without a terminal
//!
//! The disclosure state is an ordinary value, so it can be driven and
//! inspected directly:
//!
//! ```rust
//! use bubbletea_hints::hints::{self, BulkLabel, DisclosureState, HintRef};
//!
//! let groups = hints::group(hints::parse(
//!     "Step,StepTitle,HintID,Title,Content\n1,Intro,H1,Q1,A1\n2,Mid,H3,Q3,A3",
//! ));
//! let mut state = DisclosureState::new(&groups);
//! state.toggle(HintRef::new(0, 0));
//! assert_eq!(state.bulk_label(0), Some(BulkLabel::HideAll));
//! assert_eq!(state.bulk_label(1), Some(BulkLabel::ShowAll));
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: load
//! results at `info`/`warn`, parse details and toggles at `debug`. Install
//! any logger (for example `env_logger`) to see them.

pub mod help;
pub mod hints;
pub mod key;

use bubbletea_rs::Cmd;

/// Focus management for components that take keyboard input.
///
/// A focused component reacts to key presses; a blurred one ignores them
/// and renders as usual. Applications with several components use this to
/// route input to one of them at a time.
///
/// ```rust
/// use bubbletea_hints::prelude::*;
///
/// let mut hints = Hints::new();
/// assert!(hints.focused());
///
/// hints.blur();
/// assert!(!hints.focused());
///
/// let _ = hints.focus();
/// assert!(hints.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes keyboard focus away.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use help::Model as HelpModel;
pub use hints::{
    BulkLabel, DisclosureState, Focus as HintFocus, HintKeyMap, HintRecord, HintRef, HintSource,
    HintStyles, Labels as HintLabels, LoadError, LoadStatus, Model as Hints, StepGroup,
    TitlePolicy,
};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};

/// Common imports.
///
/// ```rust
/// use bubbletea_hints::prelude::*;
///
/// let hints = Hints::new().with_labels(HintLabels::japanese());
/// assert!(hints.is_loading());
/// ```
pub mod prelude {
    pub use crate::help::Model as HelpModel;
    pub use crate::hints::{
        BulkLabel, DisclosureState, Focus as HintFocus, HintKeyMap, HintRef, HintSource,
        HintStyles, Labels as HintLabels, LoadStatus, Model as Hints, TitlePolicy,
    };
    pub use crate::key::{Binding, KeyMap};
    pub use crate::Component;
}
