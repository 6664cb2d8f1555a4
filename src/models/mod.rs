//! Domain records owned by the collection store.

pub mod collection;
pub mod document;
pub mod leave;
pub mod note;
pub mod regime;
pub mod rotation;
pub mod sea_time;
pub mod user;

pub use collection::Collection;
pub use document::{Attachment, DocKind, TrainingDocument};
pub use leave::{Leave, LeaveKind, LeaveStatus};
pub use note::{DiaryNote, NoteCategory};
pub use regime::Regime;
pub use rotation::Rotation;
pub use sea_time::SeaTimeEntry;
pub use user::{Session, User};

/// Fresh record identifier (UUID v4, hyphenated).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
