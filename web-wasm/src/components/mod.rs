pub mod component_cards;
pub mod dashboard;
pub mod edit_modal;
pub mod header;
pub mod notification_toast;
pub mod platform_panel;
pub mod progress_bar;
pub mod results_panel;
pub mod settings_panel;
pub mod upload_area;
