pub mod auth;
pub mod dashboard;
pub mod home;
pub mod kanban;

pub use auth::{AuthMode, AuthPage};
pub use dashboard::Dashboard;
pub use home::Home;
pub use kanban::Kanban;
