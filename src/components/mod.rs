pub mod advanced_panel;
pub mod footer;
pub mod helpers;
pub mod playground;
pub mod results_panel;
pub mod search_bar;
