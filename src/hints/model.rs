//! The hint widget model: data, disclosure state, focus, and configuration.

use super::group::{self, StepGroup, TitlePolicy};
use super::keys::HintKeyMap;
use super::labels::Labels;
use super::loader::{self, HintSource, DEFAULT_TIMEOUT};
use super::node::{self, StepNode};
use super::record::{self, StepKey};
use super::state::{BulkLabel, DisclosureState, HintRef};
use super::style::HintStyles;
use crate::help;
use bubbletea_rs::Cmd;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Where the widget is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Waiting for the hint table.
    Loading,
    /// Data parsed and grouped.
    Ready,
    /// Loading failed; the message replaces the whole widget.
    Failed(String),
}

/// A focusable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The bulk show/hide control of a step.
    Bulk(usize),
    /// A hint's title control.
    Hint(HintRef),
}

impl Focus {
    /// Index of the step the control belongs to.
    pub fn step(&self) -> usize {
        match self {
            Focus::Bulk(step) => *step,
            Focus::Hint(at) => at.step,
        }
    }
}

/// A collapsible, step-grouped hint viewer.
///
/// Build one with [`Model::new`] and the `with_*` options, then either run
/// [`Model::load_cmd`] to fetch the table or hand it text directly with
/// [`Model::set_text`].
///
/// ```rust
/// use bubbletea_hints::hints::{BulkLabel, HintRef, Model};
///
/// let mut hints = Model::new();
/// hints.set_text("Step,StepTitle,HintID,Title,Content\n1,Intro,H1,Q1,A1\n1,,H2,Q2,A2");
///
/// hints.toggle_hint(HintRef::new(0, 1));
/// assert_eq!(hints.bulk_label(0), Some(BulkLabel::HideAll));
///
/// hints.toggle_step(0);
/// assert_eq!(hints.state().open_count(0), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    pub(super) id: i64,
    pub(super) source: HintSource,
    pub(super) timeout: Duration,
    pub(super) title_policy: TitlePolicy,

    /// User-visible strings.
    pub labels: Labels,
    /// Styling.
    pub styles: HintStyles,
    /// Key bindings.
    pub keymap: HintKeyMap,
    /// Help footer.
    pub help: help::Model,
    /// Whether the help footer is rendered.
    pub show_help: bool,

    pub(super) status: LoadStatus,
    pub(super) groups: Vec<StepGroup>,
    pub(super) state: DisclosureState,

    pub(super) focused: bool,
    pub(super) cursor: usize,
    /// First body line shown when a height is set.
    pub(super) offset: usize,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an empty widget in the loading state.
    ///
    /// The widget reads from `hintdata.csv` with a ten second timeout, uses
    /// the English [`Labels`], and starts focused with the help footer shown.
    /// Nothing is fetched until [`Model::load_cmd`] runs; use
    /// [`Model::set_text`] to supply the table directly instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_hints::hints::{HintSource, Model, TitlePolicy};
    /// use std::time::Duration;
    ///
    /// let hints = Model::new()
    ///     .with_source("https://example.com/hintdata.csv")
    ///     .with_timeout(Duration::from_secs(3))
    ///     .with_title_policy(TitlePolicy::FirstRecord);
    ///
    /// assert!(hints.is_loading());
    /// assert!(matches!(hints.source(), HintSource::Url(_)));
    /// ```
    pub fn new() -> Self {
        Self {
            id: next_id(),
            source: HintSource::default(),
            timeout: DEFAULT_TIMEOUT,
            title_policy: TitlePolicy::default(),
            labels: Labels::default(),
            styles: HintStyles::default(),
            keymap: HintKeyMap::default(),
            help: help::Model::new(),
            show_help: true,
            status: LoadStatus::Loading,
            groups: Vec::new(),
            state: DisclosureState::default(),
            focused: true,
            cursor: 0,
            offset: 0,
            width: 0,
            height: 0,
        }
    }

    /// Sets where the hint table is loaded from.
    pub fn with_source(mut self, source: impl Into<HintSource>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the load timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets how step titles are chosen when a step's rows disagree.
    pub fn with_title_policy(mut self, policy: TitlePolicy) -> Self {
        self.title_policy = policy;
        self
    }

    /// Sets the user-visible strings.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the wrap width; 0 disables wrapping.
    pub fn with_width(mut self, width: usize) -> Self {
        self.set_width(width);
        self
    }

    /// Sets the visible height; 0 shows everything.
    pub fn with_height(mut self, height: usize) -> Self {
        self.set_height(height);
        self
    }

    /// Sets the wrap width; 0 disables wrapping.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.help.width = width;
        self.sync_offset();
    }

    /// Sets the visible height; 0 shows everything.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.sync_offset();
    }

    /// Id carried by this widget's load messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Configured source.
    pub fn source(&self) -> &HintSource {
        &self.source
    }

    /// Command that loads the table from the configured source.
    pub fn load_cmd(&self) -> Cmd {
        loader::load_cmd(self.id, self.source.clone(), self.timeout)
    }

    /// Replaces the data with the table in `text`.
    ///
    /// The text is parsed, grouped by step with the configured
    /// [`TitlePolicy`] and step title template, and the widget becomes
    /// ready. All hints start closed, focus returns to the first control and
    /// the view scrolls back to the top. Any earlier data or load error is
    /// discarded.
    ///
    /// # Arguments
    ///
    /// * `text` - Comma-separated table whose first line names the columns
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_hints::hints::{Focus, LoadStatus, Model};
    ///
    /// let mut hints = Model::new();
    /// hints.set_text("Step,StepTitle,HintID,Title,Content\n1,Intro,H1,Q1,A1\n2,,H2,Q2,A2");
    ///
    /// assert_eq!(hints.status(), &LoadStatus::Ready);
    /// assert_eq!(hints.groups()[1].title, "Step 2");
    /// assert_eq!(hints.current_focus(), Some(Focus::Bulk(0)));
    /// ```
    pub fn set_text(&mut self, text: &str) {
        let records = record::parse(text);
        let count = records.len();
        self.groups = group::group_with(records, self.title_policy, &self.labels.step_title);
        self.state = DisclosureState::new(&self.groups);
        self.status = LoadStatus::Ready;
        self.cursor = 0;
        self.offset = 0;
        log::info!("{} hints in {} steps", count, self.groups.len());
        self.sync_offset();
    }

    /// Replaces the widget with a load failure message.
    pub fn set_error(&mut self, err: impl Into<String>) {
        self.groups.clear();
        self.state = DisclosureState::default();
        self.status = LoadStatus::Failed(err.into());
        self.cursor = 0;
        self.offset = 0;
    }

    /// Current load status.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Whether the table is still loading.
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Error text if loading failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The steps in display order.
    pub fn groups(&self) -> &[StepGroup] {
        &self.groups
    }

    /// The disclosure state.
    pub fn state(&self) -> &DisclosureState {
        &self.state
    }

    /// Total number of hints.
    pub fn hint_count(&self) -> usize {
        self.groups.iter().map(StepGroup::len).sum()
    }

    /// The node tree for the current state.
    pub fn nodes(&self) -> Vec<StepNode> {
        node::build(&self.groups, &self.state, &self.labels)
    }

    /// Flips one hint open or closed. No other hint changes.
    ///
    /// The step's bulk label follows automatically: it reads "hide all" as
    /// long as any hint of the step is open.
    ///
    /// # Arguments
    ///
    /// * `at` - Step index and hint index within the step
    ///
    /// # Returns
    ///
    /// The hint's new state, or `None` if `at` is out of range (nothing
    /// changes then).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_hints::hints::{BulkLabel, HintRef, Model};
    ///
    /// let mut hints = Model::new();
    /// hints.set_text("Step,StepTitle,HintID,Title,Content\n1,,H1,Q1,A1\n1,,H2,Q2,A2");
    ///
    /// assert_eq!(hints.toggle_hint(HintRef::new(0, 1)), Some(true));
    /// assert_eq!(hints.bulk_label(0), Some(BulkLabel::HideAll));
    /// assert_eq!(hints.toggle_hint(HintRef::new(0, 1)), Some(false));
    /// assert_eq!(hints.bulk_label(0), Some(BulkLabel::ShowAll));
    /// assert_eq!(hints.toggle_hint(HintRef::new(3, 0)), None);
    /// ```
    pub fn toggle_hint(&mut self, at: HintRef) -> Option<bool> {
        let open = self.state.toggle(at);
        self.sync_offset();
        open
    }

    /// Bulk-toggles a step, as its "show all" / "hide all" control does.
    ///
    /// When the label reads "hide all" every hint of the step is closed;
    /// otherwise every hint is opened. Other steps are untouched.
    ///
    /// # Arguments
    ///
    /// * `step` - Index of the step in display order
    ///
    /// # Returns
    ///
    /// The step's new label, or `None` if `step` is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_hints::hints::{BulkLabel, HintRef, Model};
    ///
    /// let mut hints = Model::new();
    /// hints.set_text("Step,StepTitle,HintID,Title,Content\n1,,H1,Q1,A1\n1,,H2,Q2,A2");
    ///
    /// // One open hint is enough for the control to hide everything.
    /// hints.toggle_hint(HintRef::new(0, 0));
    /// assert_eq!(hints.toggle_step(0), Some(BulkLabel::ShowAll));
    /// assert_eq!(hints.state().open_count(0), Some(0));
    ///
    /// assert_eq!(hints.toggle_step(0), Some(BulkLabel::HideAll));
    /// assert_eq!(hints.state().open_count(0), Some(2));
    /// ```
    pub fn toggle_step(&mut self, step: usize) -> Option<BulkLabel> {
        let label = self.state.toggle_step(step);
        self.sync_offset();
        label
    }

    /// The step's bulk label.
    pub fn bulk_label(&self, step: usize) -> Option<BulkLabel> {
        self.state.bulk_label(step)
    }

    /// Finds a hint by step key and hint id.
    ///
    /// `(step, hint_id)` is expected to be unique. When it is not, the
    /// last-parsed match is returned, mirroring how a shared content
    /// identifier resolves.
    pub fn find_hint(&self, step: &str, hint_id: &str) -> Option<HintRef> {
        let key = StepKey::new(step);
        let s = self.groups.iter().position(|g| g.key == key)?;
        let h = self.groups[s].hints.iter().rposition(|r| r.hint_id == hint_id)?;
        Some(HintRef::new(s, h))
    }

    /// Finds a step by key.
    pub fn find_step(&self, step: &str) -> Option<usize> {
        let key = StepKey::new(step);
        self.groups.iter().position(|g| g.key == key)
    }

    /// Every focusable control in display order: each step's bulk control
    /// followed by its hint titles.
    pub fn focus_targets(&self) -> Vec<Focus> {
        let mut targets = Vec::with_capacity(self.groups.len() + self.hint_count());
        for (step, group) in self.groups.iter().enumerate() {
            targets.push(Focus::Bulk(step));
            targets.extend((0..group.len()).map(|hint| Focus::Hint(HintRef::new(step, hint))));
        }
        targets
    }

    /// The focused control.
    pub fn current_focus(&self) -> Option<Focus> {
        self.focus_targets().get(self.cursor).copied()
    }

    /// Moves focus to `target` if it exists.
    pub fn set_focus(&mut self, target: Focus) -> bool {
        match self.focus_targets().iter().position(|&t| t == target) {
            Some(i) => {
                self.cursor = i;
                self.sync_offset();
                true
            }
            None => false,
        }
    }

    /// Activates the focused control: a bulk toggle or an individual toggle.
    pub fn activate(&mut self) {
        match self.current_focus() {
            Some(Focus::Bulk(step)) => {
                self.toggle_step(step);
            }
            Some(Focus::Hint(at)) => {
                self.toggle_hint(at);
            }
            None => {}
        }
    }

    /// Bulk-toggles the step containing the focused control.
    pub fn activate_step(&mut self) {
        if let Some(focus) = self.current_focus() {
            self.toggle_step(focus.step());
        }
    }

    pub(super) fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.sync_offset();
    }

    pub(super) fn cursor_down(&mut self) {
        let len = self.focus_targets().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
        self.sync_offset();
    }

    pub(super) fn go_to_start(&mut self) {
        self.cursor = 0;
        self.sync_offset();
    }

    pub(super) fn go_to_end(&mut self) {
        self.cursor = self.focus_targets().len().saturating_sub(1);
        self.sync_offset();
    }

    pub(super) fn next_step(&mut self) {
        if let Some(focus) = self.current_focus() {
            if focus.step() + 1 < self.groups.len() {
                self.set_focus(Focus::Bulk(focus.step() + 1));
            }
        }
    }

    pub(super) fn prev_step(&mut self) {
        if let Some(focus) = self.current_focus() {
            let target = match focus {
                // From inside a step, go to its own header first.
                Focus::Hint(at) => Focus::Bulk(at.step),
                Focus::Bulk(step) => Focus::Bulk(step.saturating_sub(1)),
            };
            self.set_focus(target);
        }
    }

    /// Keeps the focused line inside the visible window.
    pub(super) fn sync_offset(&mut self) {
        let visible = self.body_height();
        if visible == 0 {
            self.offset = 0;
            return;
        }
        let (lines, focus_line) = self.body_lines();
        let focus_line = focus_line.unwrap_or(0);
        if focus_line < self.offset {
            self.offset = focus_line;
        } else if focus_line >= self.offset + visible {
            self.offset = focus_line + 1 - visible;
        }
        let max_offset = lines.len().saturating_sub(visible);
        self.offset = self.offset.min(max_offset);
    }
}
