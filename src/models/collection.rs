use serde::Serialize;

/// Fixed storage keys, one per named collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Collection {
    Rotations,
    Leaves,
    Documents,
    Notes,
    SeaTime,
    Users,
    Session,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Rotations,
        Collection::Leaves,
        Collection::Documents,
        Collection::Notes,
        Collection::SeaTime,
        Collection::Users,
        Collection::Session,
    ];

    /// Convert enum → DB key
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Rotations => "rotations",
            Collection::Leaves => "leaves",
            Collection::Documents => "documents",
            Collection::Notes => "notes",
            Collection::SeaTime => "sea_time",
            Collection::Users => "users",
            Collection::Session => "session",
        }
    }

    /// Singular label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Collection::Rotations => "rotation",
            Collection::Leaves => "leave",
            Collection::Documents => "document",
            Collection::Notes => "note",
            Collection::SeaTime => "sea-time entry",
            Collection::Users => "user",
            Collection::Session => "session",
        }
    }
}
