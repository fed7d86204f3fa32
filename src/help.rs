//! A help footer generated from key bindings.
//!
//! The help model renders either a compact single line (`short_help`) or a
//! set of aligned columns (`full_help`) from any type implementing
//! [`KeyMap`]. Disabled bindings are skipped, and when a width is set the
//! short view is cut off with an ellipsis.
//!
//! ```rust
//! use bubbletea_hints::help::Model;
//! use bubbletea_hints::key::{Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! struct Keys {
//!     quit: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.quit]
//!     }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.quit]]
//!     }
//! }
//!
//! let keys = Keys { quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit") };
//! let help = Model::new();
//! assert!(help.view(&keys).contains("quit"));
//! ```

pub use crate::key::KeyMap;

use crate::key;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Ellipsis shown when the short view is truncated.
    pub ellipsis: Style,
    /// Key labels in the short view.
    pub short_key: Style,
    /// Descriptions in the short view.
    pub short_desc: Style,
    /// Separator between short view items.
    pub short_separator: Style,
    /// Key labels in the full view.
    pub full_key: Style,
    /// Descriptions in the full view.
    pub full_desc: Style,
    /// Separator between full view columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// The help view model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Show the full multi-column help instead of the single line.
    pub show_all: bool,
    /// Maximum width of the short view; 0 means unlimited.
    pub width: usize,
    /// Separator between short view items.
    pub short_separator: String,
    /// Separator between full view columns.
    pub full_separator: String,
    /// Truncation marker.
    pub ellipsis: String,
    /// Styling.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model showing the short view with no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the help for `keymap`.
    ///
    /// With `show_all` unset this is the single line built from
    /// [`KeyMap::short_help`], cut off with an ellipsis when `width` is
    /// exceeded. With `show_all` set it is the column layout built from
    /// [`KeyMap::full_help`]. Disabled bindings are left out of both.
    ///
    /// # Arguments
    ///
    /// * `keymap` - Any type exposing its bindings through [`KeyMap`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_hints::help::Model;
    /// use bubbletea_hints::hints::HintKeyMap;
    /// use lipgloss_extras::lipgloss;
    ///
    /// let keys = HintKeyMap::default();
    /// let mut help = Model::new();
    /// let short = lipgloss::strip_ansi(&help.view(&keys));
    /// assert!(short.starts_with("↑/k up"));
    ///
    /// help.show_all = true;
    /// let full = lipgloss::strip_ansi(&help.view(&keys));
    /// assert!(full.lines().count() > 1);
    /// ```
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line, separated by bullets.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = self.styles.short_separator.render(&self.short_separator);
        let mut out = String::new();
        let mut total_width = 0;

        for kb in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.short_key.render(&help.key),
                self.styles.short_desc.render(&help.desc)
            );
            let item_width = lipgloss::width_visible(&item);

            if self.width > 0 && total_width + item_width > self.width {
                let tail = format!(" {}", self.styles.ellipsis.render(&self.ellipsis));
                if total_width + lipgloss::width_visible(&tail) <= self.width {
                    out.push_str(&tail);
                }
                break;
            }

            total_width += item_width;
            out.push_str(&item);
        }
        out
    }

    /// Renders each group as a column of `key description` rows.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let columns: Vec<Vec<String>> = groups
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .filter(|b| b.enabled())
                    .map(|b| {
                        let help = b.help();
                        format!(
                            "{} {}",
                            self.styles.full_key.render(&help.key),
                            self.styles.full_desc.render(&help.desc)
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|rows| !rows.is_empty())
            .collect();

        if columns.is_empty() {
            return String::new();
        }

        let widths: Vec<usize> = columns
            .iter()
            .map(|rows| rows.iter().map(|r| lipgloss::width_visible(r)).max().unwrap_or(0))
            .collect();
        let height = columns.iter().map(Vec::len).max().unwrap_or(0);
        let separator = self.styles.full_separator.render(&self.full_separator);

        let mut lines = Vec::with_capacity(height);
        for row in 0..height {
            // Columns past the last one with content on this row are omitted.
            let last = columns.iter().rposition(|rows| row < rows.len()).unwrap_or(0);
            let mut line = String::new();
            for (i, rows) in columns.iter().enumerate().take(last + 1) {
                if i > 0 {
                    line.push_str(&separator);
                }
                let cell = rows.get(row).map(String::as_str).unwrap_or("");
                line.push_str(cell);
                if i < last {
                    let pad = widths[i].saturating_sub(lipgloss::width_visible(cell));
                    line.push_str(&" ".repeat(pad));
                }
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    struct Keys {
        up: key::Binding,
        down: key::Binding,
        quit: key::Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&key::Binding> {
            vec![&self.up, &self.down, &self.quit]
        }
        fn full_help(&self) -> Vec<Vec<&key::Binding>> {
            vec![vec![&self.up, &self.down], vec![&self.quit]]
        }
    }

    fn keys() -> Keys {
        Keys {
            up: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            down: key::Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
        }
    }

    #[test]
    fn test_short_view_lists_enabled_bindings() {
        let mut k = keys();
        k.down.set_enabled(false);
        let out = lipgloss::strip_ansi(&Model::new().view(&k));
        assert_eq!(out, "↑ up • q quit");
    }

    #[test]
    fn test_short_view_truncates_with_ellipsis() {
        let out = lipgloss::strip_ansi(&Model::new().with_width(12).view(&keys()));
        assert!(out.starts_with("↑ up"));
        assert!(out.ends_with('…'));
        assert!(!out.contains("quit"));
    }

    #[test]
    fn test_full_view_renders_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let out = lipgloss::strip_ansi(&help.view(&keys()));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("↑ up"));
        assert!(lines[0].ends_with("q quit"));
        assert_eq!(lines[1], "↓ down");
    }
}
