//! Entity repositories over the shared snapshot.
//!
//! # Responsibility
//! - Expose list/get/add/update/delete per collection.
//! - Persist the whole snapshot after every mutation.
//!
//! # Invariants
//! - Lookups are linear and match on exact id.
//! - Not-found is `None`/`false`, never an error.
//! - Insertion order of every collection is preserved.

pub mod activity_repo;
pub mod client_repo;
pub mod project_repo;
pub mod revenue_repo;
pub mod task_repo;

use crate::clock::now_epoch_ms;
use crate::model::Identified;
use uuid::Uuid;

/// Synthesizes `<prefix>-<epoch ms>-<0..9999>`.
///
/// Collisions are possible within one millisecond and are not checked.
pub fn generate_id(prefix: &str) -> String {
    let salt = Uuid::new_v4().as_u128() % 10_000;
    format!("{prefix}-{}-{salt}", now_epoch_ms())
}

pub(crate) fn position_of<T: Identified>(records: &[T], id: &str) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}

pub(crate) fn find_by_id<'a, T: Identified>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.id() == id)
}

/// Removes the first record with `id`; returns whether one was removed.
pub(crate) fn remove_by_id<T: Identified>(records: &mut Vec<T>, id: &str) -> bool {
    match position_of(records, id) {
        Some(index) => {
            records.remove(index);
            true
        }
        None => false,
    }
}
