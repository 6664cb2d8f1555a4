use super::collection::Collection;
use crate::db::store::Record;
use serde::{Deserialize, Serialize};

/// Local account. Only gates access to the logbook, owns no records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub password_digest: Option<String>,
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> &str {
        &self.email
    }

    fn sort_for_listing(items: &mut [Self]) {
        items.sort_by(|a, b| a.email.cmp(&b.email));
    }
}

/// The active session; at most one is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

impl Record for Session {
    const COLLECTION: Collection = Collection::Session;

    fn id(&self) -> &str {
        &self.email
    }

    fn sort_for_listing(_items: &mut [Self]) {}
}
