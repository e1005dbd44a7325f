use crate::app::config::Config;
use crate::app::query;
use crate::domain::models::Prefix;
use crate::theme::Theme;

pub mod input;
pub mod playground;
pub mod results;
pub mod toast;

// Re-exports
pub use input::AppTextArea;
pub use playground::PlaygroundState;
pub use results::ResultsPanelState;
pub use toast::{Toast, ToastKind, TOAST_DURATION};

const QUERY_PLACEHOLDER: &str = "Search prompts and templates with natural language...";

/// Which application view is visible. Selecting a template navigates from
/// `Search` to `Playground`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum View {
    Search,
    Playground,
}

/// Keyboard cursor over the prefix checkboxes in the advanced panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvancedPanelState {
    pub selected: usize,
}

impl AdvancedPanelState {
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Prefix::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(Prefix::ALL.len() - 1);
    }

    #[must_use]
    pub fn selected_prefix(&self) -> Prefix {
        Prefix::ALL[self.selected]
    }
}

/// The overlay shown over the search view. Results and the advanced panel
/// are mutually exclusive, so a single enum replaces two booleans whose
/// "both set" combination would be invalid.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    None,
    Advanced(AdvancedPanelState),
    Results(ResultsPanelState),
}

impl Overlay {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub view: View,

    // --- Search interaction ---
    pub query: AppTextArea<'a>,
    pub overlay: Overlay,
    pub is_searching: bool,
    /// Bumped on every submit; a completed search carrying an older sequence
    /// number has been superseded and is dropped.
    pub search_seq: u64,

    // --- Workspace ---
    pub playground: PlaygroundState<'a>,

    // --- Notifications ---
    pub toast: Option<Toast>,

    // --- Chrome ---
    pub frame_count: u64,
    pub matcher_label: String,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            matcher_label: config.endpoint.clone(),
            theme: Theme::from_palette_type(config.palette),
            ..Default::default()
        }
    }

    /// The current contents of the search input.
    #[must_use]
    pub fn query_text(&self) -> String {
        self.query.text()
    }

    /// Replace the search input contents, cursor at the end.
    pub fn set_query_text(&mut self, text: &str) {
        self.query = query_area(text);
    }

    /// Governs whether the submit action does anything.
    #[must_use]
    pub fn is_query_valid(&self) -> bool {
        query::is_valid_query(&self.query_text())
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            view: View::Search,
            query: query_area(""),
            overlay: Overlay::None,
            is_searching: false,
            search_seq: 0,
            playground: PlaygroundState::default(),
            toast: None,
            frame_count: 0,
            matcher_label: String::new(),
            theme: Theme::default(),
        }
    }
}

fn query_area(text: &str) -> AppTextArea<'static> {
    let mut area = AppTextArea::from_text(text);
    area.set_placeholder_text(QUERY_PLACEHOLDER);
    area
}
