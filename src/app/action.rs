use crate::domain::models::{Prefix, SearchResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Query editing ---
    QueryInput(crossterm::event::KeyEvent), // Forwarded to the search input
    TogglePrefix(Prefix),                   // Add/remove a "<prefix>:" tag

    // --- Search interaction ---
    ToggleAdvanced, // Open/close the advanced panel (closes results)
    SubmitSearch,   // Button or Enter-without-shift
    DismissOverlays, // Pointer-down outside the container, or Esc

    // --- Results navigation & selection ---
    SelectNextResult,
    SelectPrevResult,
    SelectResult(usize), // Flattened index across groups

    // --- Advanced panel navigation ---
    SelectNextPrefix,
    SelectPrevPrefix,
    ToggleSelectedPrefix,

    // --- Playground view ---
    ReturnToSearch,
    PlaygroundInput(crossterm::event::KeyEvent),

    // --- Async Results (The "Callback") ---
    // Dispatched by the search task back to the main loop. Carries the
    // sequence number of the submit that started it.
    SearchCompleted(u64, Result<SearchResponse, String>),
}
