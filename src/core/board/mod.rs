pub mod events;
pub mod gesture;
pub mod state;
pub mod sync;

pub use events::BoardEvent;
pub use gesture::{DragResult, DropSlot, TaskMove};
pub use state::{Board, Column, MoveEffect};
pub use sync::{BoardSynchronizer, MoveOutcome, StatusChange, SubscriptionId};
