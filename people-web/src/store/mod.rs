//! The person store trait.

use std::future::Future;

mod memory;

pub use memory::MemoryStore;

use crate::model::Person;

/// The asynchronous persistence collaborator for person records.
///
/// The controller is written against this trait only; swapping the backing
/// storage is a matter of passing a different implementation to
/// [`PersonController::new`](crate::PersonController::new). Consistency
/// guarantees across concurrent creates and reads are the implementation's
/// responsibility, not the caller's.
pub trait PersonStore: Send + Sync + 'static {
    /// Look up a person by identifier.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Person>, StoreError>> + Send;

    /// List every person, in storage order.
    fn list(&self) -> impl Future<Output = Result<Vec<Person>, StoreError>> + Send;

    /// Persist a new person, assigning its identifier.
    ///
    /// The identifier of the argument is ignored: the store always assigns a
    /// fresh one and returns the persisted record carrying it.
    fn create(&self, person: Person) -> impl Future<Output = Result<Person, StoreError>> + Send;
}

/// An error reported by a person store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing storage failed to complete the operation.
    #[error("the person store backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap a backend failure.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}
