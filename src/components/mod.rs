pub mod confirm_dialog;
pub mod edit_task_modal;
pub mod task_form;
pub mod task_modal;

pub use confirm_dialog::ConfirmDeleteDialog;
pub use edit_task_modal::EditTaskModal;
pub use task_form::TaskFormFields;
pub use task_modal::TaskModal;
