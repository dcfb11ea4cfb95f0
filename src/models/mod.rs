//! Record schemas for the four collections.

pub mod category;
pub mod collection;
pub mod event;
pub mod record;
pub mod setting;
pub mod task;

pub use category::Category;
pub use collection::{Collection, Index};
pub use event::Event;
pub use record::Record;
pub use setting::Setting;
pub use task::{Task, TaskState, TaskStatus};

/// Fresh record id (random v4 UUID, simple form).
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
