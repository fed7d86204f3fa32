//! Hint records and the delimited-text parser.
//!
//! The source format is a deliberately simple comma-separated table. The
//! first line names the columns; the parser recognises `Step`, `StepTitle`,
//! `HintID`, `Title` and `Content` in any order and ignores anything else.
//!
//! This is not a CSV reader. A field may be wrapped in one pair of double
//! quotes, which is removed, but there is no escaping: a comma inside a
//! quoted field still splits it.

use std::fmt;

/// Header name of the step key column.
pub const STEP: &str = "Step";
/// Header name of the optional step title column.
pub const STEP_TITLE: &str = "StepTitle";
/// Header name of the hint identifier column, unique within a step.
pub const HINT_ID: &str = "HintID";
/// Header name of the hint title column.
pub const TITLE: &str = "Title";
/// Header name of the content column, which holds markup.
pub const CONTENT: &str = "Content";

const DELIMITER: char = ',';

/// Identifier of the step a record belongs to.
///
/// Kept as text so numeric and named steps behave the same; two keys are
/// equal when their trimmed text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StepKey(String);

impl StepKey {
    /// Creates a key from its textual form.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// The key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StepKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One row of the hint table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HintRecord {
    /// Step this hint belongs to.
    pub step: StepKey,
    /// Display title for the step; usually only set on its first row.
    pub step_title: String,
    /// Identifier of the hint within its step.
    pub hint_id: String,
    /// Always-visible label.
    pub title: String,
    /// Markup revealed when the hint is open. Never escaped by this crate.
    pub content: String,
}

impl HintRecord {
    /// Builds a record from its five fields.
    pub fn new(
        step: impl Into<String>,
        step_title: impl Into<String>,
        hint_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            step: StepKey::new(step),
            step_title: step_title.into(),
            hint_id: hint_id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Identifier of this hint's content node, `content-s{step}-h{hint}`.
    ///
    /// Records sharing `(step, hint_id)` share this identifier.
    pub fn content_id(&self) -> String {
        format!("content-s{}-h{}", self.step, self.hint_id)
    }
}

/// Counters collected while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseStats {
    /// Data rows turned into records.
    pub rows: usize,
    /// Rows that had fewer fields than the header and were padded.
    /// A blank line between rows counts as one.
    pub short_rows: usize,
}

/// Column positions resolved from the header line.
#[derive(Debug, Default)]
struct Columns {
    step: Option<usize>,
    step_title: Option<usize>,
    hint_id: Option<usize>,
    title: Option<usize>,
    content: Option<usize>,
    width: usize,
}

impl Columns {
    fn from_header(line: &str) -> Self {
        let mut columns = Columns::default();
        for (i, name) in line.split(DELIMITER).enumerate() {
            let slot = match name.trim() {
                STEP => &mut columns.step,
                STEP_TITLE => &mut columns.step_title,
                HINT_ID => &mut columns.hint_id,
                TITLE => &mut columns.title,
                CONTENT => &mut columns.content,
                _ => continue,
            };
            // A repeated column name resolves to its last position.
            *slot = Some(i);
        }
        columns.width = line.split(DELIMITER).count();
        columns
    }

    fn record(&self, fields: &[&str]) -> HintRecord {
        let field = |col: Option<usize>| -> String {
            col.and_then(|i| fields.get(i))
                .map(|raw| clean_field(raw))
                .unwrap_or_default()
        };
        HintRecord {
            step: StepKey::new(field(self.step)),
            step_title: field(self.step_title),
            hint_id: field(self.hint_id),
            title: field(self.title),
            content: field(self.content),
        }
    }
}

/// Trims a raw field and removes one enclosing pair of double quotes.
fn clean_field(raw: &str) -> String {
    let value = raw.trim();
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .to_string()
}

/// Parses hint records from delimited text.
///
/// Never fails: empty input gives an empty result and short rows are
/// padded with empty fields. Leading and trailing blank lines are trimmed
/// away; a blank line between rows is kept as an all-empty record. Records
/// keep input order.
///
/// ```rust
/// use bubbletea_hints::hints::parse;
///
/// let text = "Step,StepTitle,HintID,Title,Content\n1,Intro,H1,Q1,A1\n1,,H2,Q2\n";
/// let records = parse(text);
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].content, "");
/// ```
pub fn parse(text: &str) -> Vec<HintRecord> {
    parse_with_stats(text).0
}

/// Like [`parse`], also returning counters about what was tolerated.
pub fn parse_with_stats(text: &str) -> (Vec<HintRecord>, ParseStats) {
    let mut stats = ParseStats::default();
    let text = text.trim();
    if text.is_empty() {
        return (Vec::new(), stats);
    }

    let mut lines = text.split('\n');
    let columns = match lines.next() {
        Some(header) => Columns::from_header(header),
        None => return (Vec::new(), stats),
    };

    let mut records = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() < columns.width {
            stats.short_rows += 1;
        }
        records.push(columns.record(&fields));
        stats.rows += 1;
    }

    log::debug!(
        "parsed {} hint rows ({} short)",
        stats.rows,
        stats.short_rows
    );
    (records, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Step,StepTitle,HintID,Title,Content";

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\n").is_empty());
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(parse(HEADER).is_empty());
        assert!(parse(&format!("{}\n\n", HEADER)).is_empty());
    }

    #[test]
    fn test_rows_map_to_fields() {
        let text = format!("{}\n1,Intro,H1,Q1,A1\n2,,H3,Q3,A3", HEADER);
        let records = parse(&text);
        assert_eq!(
            records,
            vec![
                HintRecord::new("1", "Intro", "H1", "Q1", "A1"),
                HintRecord::new("2", "", "H3", "Q3", "A3"),
            ]
        );
    }

    #[test]
    fn test_header_order_is_irrelevant() {
        let text = "Content,Title,HintID,Step,StepTitle\nA1,Q1,H1,1,Intro";
        let records = parse(text);
        assert_eq!(records, vec![HintRecord::new("1", "Intro", "H1", "Q1", "A1")]);
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let text = "step,StepTitle,HintID,Title,Content\n1,Intro,H1,Q1,A1";
        let records = parse(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].step.as_str(), "");
        assert_eq!(records[0].title, "Q1");
    }

    #[test]
    fn test_short_row_is_padded_not_dropped() {
        let text = format!("{}\n1,Intro,H1", HEADER);
        let (records, stats) = parse_with_stats(&text);
        assert_eq!(records, vec![HintRecord::new("1", "Intro", "H1", "", "")]);
        assert_eq!(stats.short_rows, 1);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let text = format!("{}\n1,Intro,H1,Q1,A1,surplus", HEADER);
        assert_eq!(parse(&text)[0].content, "A1");
    }

    #[test]
    fn test_values_are_trimmed_and_unquoted_once() {
        let text = format!("{}\n 1 , \"Intro\" ,H1,\"\"Q1\"\",\"A1", HEADER);
        let r = &parse(&text)[0];
        assert_eq!(r.step.as_str(), "1");
        assert_eq!(r.step_title, "Intro");
        assert_eq!(r.title, "\"Q1\"");
        // An unmatched quote is left alone.
        assert_eq!(r.content, "\"A1");
    }

    #[test]
    fn test_embedded_commas_split_the_field() {
        let text = format!("{}\n1,,H1,\"Q, with comma\",A1", HEADER);
        let r = &parse(&text)[0];
        assert_eq!(r.title, "\"Q");
        assert_eq!(r.content, "with comma\"");
    }

    #[test]
    fn test_crlf_and_trailing_blank_lines() {
        let text = format!("{}\r\n1,Intro,H1,Q1,A1\r\n2,,H2,Q2,A2\r\n\r\n", HEADER);
        let (records, stats) = parse_with_stats(&text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].content, "A1");
        assert_eq!(records[1].step.as_str(), "2");
        assert_eq!(stats.short_rows, 0);
    }

    #[test]
    fn test_interior_blank_line_becomes_empty_record() {
        let text = format!("{}\n1,Intro,H1,Q1,A1\n\n2,Mid,H3,Q3,A3", HEADER);
        let (records, stats) = parse_with_stats(&text);
        assert_eq!(records.len(), 3);
        assert_eq!(records[1], HintRecord::new("", "", "", "", ""));
        assert_eq!(records[2].hint_id, "H3");
        assert_eq!(stats.rows, 3);
        assert_eq!(stats.short_rows, 1);
    }

    #[test]
    fn test_interior_crlf_blank_line_is_kept() {
        let text = format!("{}\r\n1,Intro,H1,Q1,A1\r\n\r\n2,,H2,Q2,A2", HEADER);
        let records = parse(&text);
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].step.as_str(), "");
    }

    #[test]
    fn test_markup_content_is_kept_verbatim() {
        let text = format!("{}\n1,,H1,Q1,line<br><b>bold</b>", HEADER);
        assert_eq!(parse(&text)[0].content, "line<br><b>bold</b>");
    }

    #[test]
    fn test_content_id() {
        let r = HintRecord::new("3", "", "7", "", "");
        assert_eq!(r.content_id(), "content-s3-h7");
    }
}
