//! Key bindings for the hint widget.
//!
//! - **Focus**: `↑/k`, `↓/j` move between controls; `tab` / `shift+tab`
//!   jump between steps; `g/home`, `G/end` jump to the first or last control
//! - **Toggle**: `enter/space` activates the focused control, `a` bulk-toggles
//!   the focused step
//! - **Help and quit**: `?` expands the help, `q/esc` quits

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for focus movement, toggling, help, and quitting.
#[derive(Debug, Clone)]
pub struct HintKeyMap {
    /// Focus the previous control.
    pub cursor_up: key::Binding,
    /// Focus the next control.
    pub cursor_down: key::Binding,
    /// Focus the next step's bulk control.
    pub next_step: key::Binding,
    /// Focus the previous step's bulk control.
    pub prev_step: key::Binding,
    /// Focus the first control.
    pub go_to_start: key::Binding,
    /// Focus the last control.
    pub go_to_end: key::Binding,
    /// Activate the focused control.
    pub toggle: key::Binding,
    /// Bulk-toggle the focused step.
    pub toggle_step: key::Binding,
    /// Show or hide the full help.
    pub show_full_help: key::Binding,
    /// Quit.
    pub quit: key::Binding,
    /// Force quit.
    pub force_quit: key::Binding,
}

impl Default for HintKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            next_step: key::Binding::new(vec![KeyCode::Tab, KeyCode::Char('n')])
                .with_help("tab", "next step"),
            prev_step: key::Binding::new(vec![KeyCode::BackTab, KeyCode::Char('p')])
                .with_help("shift+tab", "prev step"),
            go_to_start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            go_to_end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            toggle: key::Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
                .with_help("enter", "toggle"),
            toggle_step: key::Binding::new(vec![KeyCode::Char('a')])
                .with_help("a", "show/hide step"),
            show_full_help: key::Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
            quit: key::Binding::new(vec![KeyCode::Char('q'), KeyCode::Esc]).with_help("q", "quit"),
            force_quit: key::Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "force quit"),
        }
    }
}

impl key::KeyMap for HintKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.toggle,
            &self.toggle_step,
            &self.quit,
            &self.show_full_help,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.next_step,
                &self.prev_step,
                &self.go_to_start,
                &self.go_to_end,
            ],
            vec![&self.toggle, &self.toggle_step],
            vec![&self.show_full_help, &self.quit, &self.force_quit],
        ]
    }
}
