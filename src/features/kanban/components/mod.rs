pub mod column;
pub mod header;
pub mod settings_modal;
pub mod task_card;

pub use column::KanbanColumn;
pub use header::KanbanHeader;
pub use settings_modal::SettingsModal;
pub use task_card::TaskCard;
