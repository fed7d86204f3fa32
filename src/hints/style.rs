//! Styles for the hint widget.
//!
//! All defaults use `AdaptiveColor` so the widget reads well on light and
//! dark terminals. Override individual fields to restyle.
//!
//! ```rust
//! use bubbletea_hints::hints::HintStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = HintStyles::default();
//! styles.step_title = Style::new().foreground(Color::from("#7D56F4")).bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Marker in front of a closed hint title.
pub const CLOSED_MARKER: &str = "▸";
/// Marker in front of an open hint title.
pub const OPEN_MARKER: &str = "▾";
/// Marker in front of the focused control.
pub const CURSOR: &str = ">";

/// Styling for every element of the widget.
#[derive(Debug, Clone)]
pub struct HintStyles {
    /// Step title in the header.
    pub step_title: Style,
    /// Bulk control.
    pub bulk: Style,
    /// Bulk control while focused.
    pub bulk_focused: Style,
    /// Hint title.
    pub hint_title: Style,
    /// Hint title while focused.
    pub hint_title_focused: Style,
    /// Revealed content.
    pub content: Style,
    /// Focus cursor.
    pub cursor: Style,
    /// Load failure message.
    pub error: Style,
    /// Loading and empty messages.
    pub status: Style,
    /// Help footer container.
    pub help: Style,
}

impl Default for HintStyles {
    fn default() -> Self {
        let accent = AdaptiveColor {
            Light: "#EE6FF8",
            Dark: "#EE6FF8",
        };
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            step_title: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#5A56E0",
                    Dark: "#7571F9",
                })
                .bold(true),
            bulk: Style::new().foreground(subdued.clone()),
            bulk_focused: Style::new().foreground(accent.clone()).underline(true),
            hint_title: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            hint_title_focused: Style::new().foreground(accent.clone()).bold(true),
            content: Style::new().foreground(AdaptiveColor {
                Light: "#4A4A4A",
                Dark: "#B2B2B2",
            }),
            cursor: Style::new().foreground(accent),
            error: Style::new().foreground(Color::from("#FF5F5F")),
            status: Style::new().foreground(subdued),
            help: Style::new().padding(1, 0, 0, 0),
        }
    }
}
