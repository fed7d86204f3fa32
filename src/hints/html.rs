//! Static HTML projection of the node tree.
//!
//! Emits the same element structure a browser build of the widget uses, so
//! a snapshot of the current disclosure state can be saved or served:
//!
//! ```html
//! <div class="hint-step">
//!   <div class="step-header"><h2>Intro</h2><button class="toggle-all-button" data-target-step="1">Show all</button></div>
//!   <button class="hint-title" data-target="content-s1-hH1" aria-expanded="false">Q1</button>
//!   <div id="content-s1-hH1" class="hint-content" aria-hidden="true"><p>A1</p></div>
//! </div>
//! ```
//!
//! Titles, labels and attribute values are escaped. Hint content is markup
//! and is written as is.

use super::model::{LoadStatus, Model};
use super::node::{StepNode, ACTIVE_CLASS};

/// Escapes text for use in element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the step containers for `nodes`.
pub fn render_nodes(nodes: &[StepNode]) -> String {
    let mut out = String::new();
    for step in nodes {
        out.push_str("<div class=\"hint-step\">\n");
        out.push_str(&format!(
            "  <div class=\"step-header\"><h2>{}</h2><button class=\"toggle-all-button\" data-target-step=\"{}\">{}</button></div>\n",
            escape(&step.title),
            escape(step.bulk.target_step.as_str()),
            escape(&step.bulk.text)
        ));
        for hint in &step.hints {
            out.push_str(&format!(
                "  <button class=\"hint-title\" data-target=\"{}\" aria-expanded=\"{}\">{}</button>\n",
                escape(&hint.title.target),
                hint.title.aria_expanded,
                escape(&hint.title.text)
            ));
            let class = if hint.content.active {
                format!("hint-content {}", ACTIVE_CLASS)
            } else {
                "hint-content".to_string()
            };
            out.push_str(&format!(
                "  <div id=\"{}\" class=\"{}\" aria-hidden=\"{}\"><p>{}</p></div>\n",
                escape(&hint.content.id),
                class,
                hint.content.aria_hidden,
                hint.content.markup
            ));
        }
        out.push_str("</div>\n");
    }
    out
}

/// Renders the whole widget: the steps once loaded, otherwise a single
/// status or error paragraph in their place.
pub fn render(model: &Model) -> String {
    match model.status() {
        LoadStatus::Loading => format!(
            "<p class=\"hint-loading\">{}</p>\n",
            escape(&model.labels.loading)
        ),
        LoadStatus::Failed(_) => format!(
            "<p class=\"hint-error\">{}</p>\n",
            escape(&model.labels.load_error)
        ),
        LoadStatus::Ready => render_nodes(&model.nodes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::state::HintRef;

    const DATA: &str = "Step,StepTitle,HintID,Title,Content\n\
                        1,Intro,H1,Q1,A1<br>more\n\
                        1,,H2,Q2,A2\n\
                        2,Mid & more,H3,Q3,A3";

    fn model() -> Model {
        let mut m = Model::new();
        m.set_text(DATA);
        m
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }

    #[test]
    fn test_initial_markup() {
        let html = render(&model());
        assert_eq!(html.matches("<div class=\"hint-step\">").count(), 2);
        assert!(html.contains("<h2>Intro</h2>"));
        assert!(html.contains("<h2>Mid &amp; more</h2>"));
        assert!(html.contains("data-target-step=\"1\">Show all</button>"));
        assert!(html.contains(
            "<button class=\"hint-title\" data-target=\"content-s1-hH1\" aria-expanded=\"false\">Q1</button>"
        ));
        assert!(html.contains(
            "<div id=\"content-s1-hH1\" class=\"hint-content\" aria-hidden=\"true\"><p>A1<br>more</p></div>"
        ));
    }

    #[test]
    fn test_markup_reflects_state() {
        let mut m = model();
        m.toggle_hint(HintRef::new(0, 1));
        let html = render(&m);
        assert!(html.contains("data-target-step=\"1\">Hide all</button>"));
        assert!(html.contains("data-target-step=\"2\">Show all</button>"));
        assert!(html.contains("data-target=\"content-s1-hH2\" aria-expanded=\"true\""));
        assert!(html.contains(
            "<div id=\"content-s1-hH2\" class=\"hint-content active\" aria-hidden=\"false\">"
        ));
        assert!(html.contains("<div id=\"content-s1-hH1\" class=\"hint-content\" aria-hidden=\"true\">"));
    }

    #[test]
    fn test_render_nodes_layout() {
        let mut m = Model::new();
        m.set_text("Step,StepTitle,HintID,Title,Content\n1,Intro,H1,Q1,A1");
        let expected = concat!(
            "<div class=\"hint-step\">\n",
            "  <div class=\"step-header\"><h2>Intro</h2><button class=\"toggle-all-button\" data-target-step=\"1\">Show all</button></div>\n",
            "  <button class=\"hint-title\" data-target=\"content-s1-hH1\" aria-expanded=\"false\">Q1</button>\n",
            "  <div id=\"content-s1-hH1\" class=\"hint-content\" aria-hidden=\"true\"><p>A1</p></div>\n",
            "</div>\n",
        );
        assert_eq!(render_nodes(&m.nodes()), expected);
        assert_eq!(render_nodes(&[]), "");
    }

    #[test]
    fn test_failure_replaces_everything() {
        let mut m = model();
        m.set_error("boom");
        let html = render(&m);
        assert!(html.starts_with("<p class=\"hint-error\">"));
        assert!(!html.contains("hint-step"));
    }
}
