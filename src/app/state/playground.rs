use super::input::AppTextArea;
use crate::domain::models::ResultItem;

/// The editing workspace a selected template is handed to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaygroundState<'a> {
    pub current_template: Option<ResultItem>,
    pub editor: AppTextArea<'a>,
}

impl PlaygroundState<'_> {
    /// Load a template for editing. Replaces whatever was loaded before.
    pub fn load(&mut self, template: ResultItem) {
        self.editor = AppTextArea::from_text(template.description.as_deref().unwrap_or_default());
        self.current_template = Some(template);
    }
}
