//! Terminal rendering for the hint widget.
//!
//! Layout, one block per step:
//!
//! ```text
//! > Intro  [Show all]
//!     ▸ Q1
//!     ▾ Q2
//!         A2
//! ```
//!
//! Content is markup meant for a browser. In the terminal, line breaks
//! (`<br>`, `</p>`) become newlines, other tags are dropped, and a handful
//! of entities are decoded. The markup itself is stored untouched.

use super::model::{Focus, LoadStatus, Model};
use super::state::HintRef;
use super::style::{CLOSED_MARKER, CURSOR, OPEN_MARKER};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

const HINT_INDENT: usize = 4;
const CONTENT_INDENT: usize = 8;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</p\s*>").expect("line break pattern is valid")
});
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Turns content markup into plain terminal text.
pub fn markup_to_text(markup: &str) -> String {
    let text = LINE_BREAK.replace_all(markup, "\n");
    let text = TAG.replace_all(&text, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Word-wraps `text` to `width` display columns. A width of 0 disables
/// wrapping; words longer than the width get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.lines() {
        if width == 0 || line.width() <= width {
            out.push(line.to_string());
            continue;
        }
        let mut current = String::new();
        for word in line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.width() + 1 + word.width() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                out.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

impl Model {
    fn cursor_prefix(&self, focused: bool) -> String {
        if focused {
            format!("{} ", self.styles.cursor.render(CURSOR))
        } else {
            "  ".to_string()
        }
    }

    /// Lines of the step hierarchy plus the index of the focused line.
    pub(super) fn body_lines(&self) -> (Vec<String>, Option<usize>) {
        let focus = self.current_focus();
        let mut lines = Vec::new();
        let mut focus_line = None;

        for (step, group) in self.groups.iter().enumerate() {
            if step > 0 {
                lines.push(String::new());
            }

            let focused = focus == Some(Focus::Bulk(step));
            if focused {
                focus_line = Some(lines.len());
            }
            let label = self.labels.bulk(self.state.bulk_label(step).unwrap_or_default());
            let bulk_style = if focused {
                &self.styles.bulk_focused
            } else {
                &self.styles.bulk
            };
            lines.push(format!(
                "{}{}  {}",
                self.cursor_prefix(focused),
                self.styles.step_title.render(&group.title),
                bulk_style.render(&format!("[{}]", label))
            ));

            for (hint, record) in group.hints.iter().enumerate() {
                let at = HintRef::new(step, hint);
                let focused = focus == Some(Focus::Hint(at));
                if focused {
                    focus_line = Some(lines.len());
                }
                let open = self.state.is_open(at).unwrap_or(false);
                let marker = if open { OPEN_MARKER } else { CLOSED_MARKER };
                let title_style = if focused {
                    &self.styles.hint_title_focused
                } else {
                    &self.styles.hint_title
                };
                lines.push(format!(
                    "{}{}{} {}",
                    " ".repeat(HINT_INDENT - 2),
                    self.cursor_prefix(focused),
                    marker,
                    title_style.render(&record.title)
                ));

                if open {
                    let width = self.width.saturating_sub(CONTENT_INDENT);
                    for line in wrap(&markup_to_text(&record.content), width) {
                        lines.push(format!(
                            "{}{}",
                            " ".repeat(CONTENT_INDENT),
                            self.styles.content.render(&line)
                        ));
                    }
                }
            }
        }

        (lines, focus_line)
    }

    /// Rows available for the body, or 0 when the height is unlimited.
    pub(super) fn body_height(&self) -> usize {
        if self.height == 0 {
            return 0;
        }
        let help_height = if self.show_help {
            self.view_help().lines().count()
        } else {
            0
        };
        self.height.saturating_sub(help_height).max(1)
    }

    pub(super) fn view_help(&self) -> String {
        self.styles.help.render(&self.help.view(&self.keymap))
    }

    pub(super) fn view_body(&self) -> String {
        match &self.status {
            LoadStatus::Loading => return self.styles.status.render(&self.labels.loading),
            LoadStatus::Failed(err) => {
                return self
                    .styles
                    .error
                    .render(&format!("{}\n{}", self.labels.load_error, err));
            }
            LoadStatus::Ready => {}
        }
        if self.groups.is_empty() {
            return self.styles.status.render(&self.labels.empty);
        }

        let (lines, _) = self.body_lines();
        let visible = self.body_height();
        if visible == 0 {
            return lines.join("\n");
        }
        lines
            .into_iter()
            .skip(self.offset)
            .take(visible)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_line_breaks_and_tags() {
        assert_eq!(markup_to_text("one<br>two<BR/>three"), "one\ntwo\nthree");
        assert_eq!(markup_to_text("<b>bold</b> &amp; <i>it</i>"), "bold & it");
        assert_eq!(markup_to_text("<p>a</p><p>b</p>"), "a\nb");
        assert_eq!(markup_to_text("<img src=\"x.png\">"), "");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("alpha beta gamma", 11), vec!["alpha beta", "gamma"]);
        assert_eq!(wrap("alpha beta", 0), vec!["alpha beta"]);
        assert_eq!(wrap("supercalifragilistic x", 5), vec!["supercalifragilistic", "x"]);
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn test_wrap_counts_display_width() {
        // Each CJK character is two columns wide.
        assert_eq!(wrap("ヒント ヒント", 8), vec!["ヒント", "ヒント"]);
    }
}
