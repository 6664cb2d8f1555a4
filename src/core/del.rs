use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::store::{CollectionStore, Record};
use crate::errors::{AppError, AppResult};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the record matching a full id or unique id prefix and return it.
    pub fn apply<T: Record>(pool: &DbPool, id_or_prefix: &str) -> AppResult<T> {
        let store = CollectionStore::<T>::new(pool);
        let record = store.resolve(id_or_prefix)?;

        if !store.delete_by_id(record.id())? {
            return Err(AppError::NotFound {
                collection: T::COLLECTION.key().to_string(),
                id: record.id().to_string(),
            });
        }

        audit_or_warn(
            &pool.conn,
            "del",
            record.id(),
            &format!("{} deleted", T::COLLECTION.label()),
        );

        Ok(record)
    }

    /// Empty a whole collection; returns the number of removed records.
    pub fn clear<T: Record>(pool: &DbPool) -> AppResult<usize> {
        let removed = CollectionStore::<T>::new(pool).delete_all()?;

        audit_or_warn(
            &pool.conn,
            "del",
            T::COLLECTION.key(),
            &format!("Removed all {} ({} records)", T::COLLECTION.key(), removed),
        );

        Ok(removed)
    }
}
