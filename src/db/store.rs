//! Named-collection persistence.
//!
//! Every collection is kept as a single JSON array in the `collections`
//! table. Reads deserialize the whole snapshot, mutations rewrite it
//! (read-modify-write); there is no partial-update protocol.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Collection;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// A record that lives in one named collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    /// Entity-specific order used by [`CollectionStore::list`].
    fn sort_for_listing(items: &mut [Self]);
}

pub struct CollectionStore<'a, T: Record> {
    conn: &'a Connection,
    _record: PhantomData<T>,
}

impl<'a, T: Record> CollectionStore<'a, T> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self::from_conn(&pool.conn)
    }

    pub fn from_conn(conn: &'a Connection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    fn load(&self) -> AppResult<Vec<T>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM collections WHERE name = ?1",
                [T::COLLECTION.key()],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, items: &[T]) -> AppResult<()> {
        let json = serde_json::to_string(items)?;

        self.conn.execute(
            "INSERT INTO collections (name, payload, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at",
            params![T::COLLECTION.key(), json, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// All records, in the entity's listing order.
    pub fn list(&self) -> AppResult<Vec<T>> {
        let mut items = self.load()?;
        T::sort_for_listing(&mut items);
        Ok(items)
    }

    pub fn get(&self, id: &str) -> AppResult<Option<T>> {
        Ok(self.load()?.into_iter().find(|i| i.id() == id))
    }

    /// Look a record up by full id or by a unique id prefix.
    pub fn resolve(&self, id_or_prefix: &str) -> AppResult<T> {
        let wanted = id_or_prefix.trim();
        let items = self.load()?;

        if let Some(exact) = items.iter().find(|i| i.id() == wanted) {
            return Ok(exact.clone());
        }

        let mut matches: Vec<T> = if wanted.is_empty() {
            Vec::new()
        } else {
            items
                .into_iter()
                .filter(|i| i.id().starts_with(wanted))
                .collect()
        };

        match matches.len() {
            0 => Err(AppError::NotFound {
                collection: T::COLLECTION.key().to_string(),
                id: wanted.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            n => Err(AppError::AmbiguousId {
                collection: T::COLLECTION.key().to_string(),
                id: wanted.to_string(),
                matches: n,
            }),
        }
    }

    /// Replace the record with the same id, or append it.
    pub fn upsert(&self, item: T) -> AppResult<()> {
        let mut items = self.load()?;

        match items.iter_mut().find(|i| i.id() == item.id()) {
            Some(slot) => *slot = item,
            None => items.push(item),
        }

        self.save(&items)
    }

    /// Upsert a batch with a single snapshot write.
    pub fn upsert_all(&self, batch: &[T]) -> AppResult<()> {
        let mut items = self.load()?;

        for item in batch {
            match items.iter_mut().find(|i| i.id() == item.id()) {
                Some(slot) => *slot = item.clone(),
                None => items.push(item.clone()),
            }
        }

        self.save(&items)
    }

    /// Delete by exact id. Returns false when nothing matched.
    pub fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut items = self.load()?;
        let before = items.len();
        items.retain(|i| i.id() != id);

        if items.len() == before {
            return Ok(false);
        }

        self.save(&items)?;
        Ok(true)
    }

    /// Empty the collection. Returns how many records were removed.
    pub fn delete_all(&self) -> AppResult<usize> {
        let removed = self.load()?.len();
        self.save(&[])?;
        Ok(removed)
    }
}

/// Number of records in a collection, without deserializing them.
pub fn count(conn: &Connection, collection: Collection) -> AppResult<i64> {
    let n: Option<i64> = conn
        .query_row(
            "SELECT json_array_length(payload) FROM collections WHERE name = ?1",
            [collection.key()],
            |row| row.get(0),
        )
        .optional()?;
    Ok(n.unwrap_or(0))
}
