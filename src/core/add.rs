use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::store::{CollectionStore, Record};
use crate::errors::AppResult;

/// High-level business logic shared by every `add` / `edit` command.
pub struct AddLogic;

impl AddLogic {
    /// Insert a new record, or replace the one with the same id.
    /// `operation` is the audit label ("add" or "edit").
    pub fn save<T: Record>(pool: &DbPool, record: T, operation: &str) -> AppResult<T> {
        let store = CollectionStore::<T>::new(pool);
        store.upsert(record.clone())?;

        audit_or_warn(
            &pool.conn,
            operation,
            record.id(),
            &format!("{} {}", T::COLLECTION.label(), operation),
        );

        Ok(record)
    }

    /// Insert several records atomically: either the whole batch and its
    /// audit rows are stored, or nothing is.
    pub fn save_all<T: Record>(pool: &DbPool, records: &[T], operation: &str) -> AppResult<()> {
        let tx = pool.conn.unchecked_transaction()?;

        CollectionStore::<T>::from_conn(&tx).upsert_all(records)?;

        for r in records {
            audit_or_warn(
                &tx,
                operation,
                r.id(),
                &format!("{} {}", T::COLLECTION.label(), operation),
            );
        }

        tx.commit()?;
        Ok(())
    }
}
