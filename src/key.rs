//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more key presses under a single action and
//! carries the short help text shown by the [`help`](crate::help) footer.
//! Components expose their bindings through the [`KeyMap`] trait.
//!
//! ```rust
//! use bubbletea_hints::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
//!     .with_help("enter", "toggle");
//! let quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+c", "quit");
//! assert!(toggle.enabled());
//! assert_eq!(quit.help().desc, "quit");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        // Uppercase characters and back-tab arrive with SHIFT set; a binding
        // without modifiers still accepts them.
        let extra = msg.modifiers.difference(KeyModifiers::SHIFT);
        if self.modifiers.is_empty() {
            extra.is_empty()
        } else {
            msg.modifiers == self.modifiers
        }
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"↑/k"`.
    pub key: String,
    /// Short description, e.g. `"up"`.
    pub desc: String,
}

/// A named action bound to one or more key presses.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    ///
    /// The binding starts enabled with empty help text. A binding with no
    /// keys is treated as disabled.
    ///
    /// # Arguments
    ///
    /// * `keys` - Anything convertible into [`KeyPress`]: a bare `KeyCode`
    ///   (no modifiers) or a `(KeyCode, KeyModifiers)` pair
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_hints::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let down = Binding::new(vec![KeyCode::Down, KeyCode::Char('j')]);
    /// assert_eq!(down.keys().len(), 2);
    ///
    /// let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)]);
    /// assert_eq!(save.keys()[0].modifiers, KeyModifiers::CONTROL);
    ///
    /// assert!(!Binding::new(Vec::<KeyCode>::new()).enabled());
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding. Disabled bindings never match and are
    /// hidden from help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// The bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns true if `msg` is one of this binding's key presses.
    ///
    /// A key press bound without modifiers also matches when SHIFT is held,
    /// so `Char('G')` and `BackTab` work however the terminal reports them.
    /// Any other modifier must match exactly. Disabled bindings never match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_hints::key::Binding;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let end = Binding::new(vec![KeyCode::Char('G')]);
    /// let shifted = KeyMsg { key: KeyCode::Char('G'), modifiers: KeyModifiers::SHIFT };
    /// let ctrl = KeyMsg { key: KeyCode::Char('G'), modifiers: KeyModifiers::CONTROL };
    /// assert!(end.matches(&shifted));
    /// assert!(!end.matches(&ctrl));
    /// ```
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Exposes a component's bindings to the help view.
pub trait KeyMap {
    /// Bindings for the single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Columns of bindings for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
