//! The in-memory person store.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::model::Person;

use super::{PersonStore, StoreError};

/// An in-memory [`PersonStore`] backed by a mutex-guarded vector.
///
/// This is the binary's default backend and the test suite's store. Clones
/// share the same underlying records, which lets tests keep a handle on the
/// store after handing it to the controller.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    persons: Vec<Person>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            persons: Vec::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given persons, assigning identifiers in
    /// order.
    pub async fn with_persons(persons: impl IntoIterator<Item = Person>) -> Self {
        let store = Self::new();

        {
            let mut inner = store.inner.lock().await;

            for mut person in persons {
                person.id = Some(inner.next_id);
                inner.next_id += 1;
                inner.persons.push(person);
            }
        }

        store
    }
}

impl PersonStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner
            .persons
            .iter()
            .find(|person| person.id == Some(id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Person>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner.persons.clone())
    }

    async fn create(&self, mut person: Person) -> Result<Person, StoreError> {
        let mut inner = self.inner.lock().await;

        person.id = Some(inner.next_id);
        inner.next_id += 1;
        inner.persons.push(person.clone());

        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids_starting_at_one() {
        let store = MemoryStore::new();

        let ada = store.create(Person::new("Ada", 30)).await.unwrap();
        let alan = store.create(Person::new("Alan", 41)).await.unwrap();

        assert_eq!(ada.id, Some(1));
        assert_eq!(alan.id, Some(2));
    }

    #[tokio::test]
    async fn test_create_replaces_any_caller_supplied_id() {
        let store = MemoryStore::new();

        let person = store
            .create(Person {
                id: Some(999),
                ..Person::new("Ada", 30)
            })
            .await
            .unwrap();

        assert_eq!(person.id, Some(1));
    }

    #[tokio::test]
    async fn test_find_by_id_returns_the_matching_person() {
        let store =
            MemoryStore::with_persons([Person::new("Ada", 30), Person::new("Alan", 41)]).await;

        let found = store.find_by_id(2).await.unwrap();

        assert_eq!(found, Some(Person { id: Some(2), ..Person::new("Alan", 41) }));
        assert_eq!(store.find_by_id(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryStore::with_persons([
            Person::new("Ada", 30),
            Person::new("Alan", 41),
            Person::new("Grace", 36),
        ])
        .await;

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|person| person.name)
            .collect();

        assert_eq!(names, ["Ada", "Alan", "Grace"]);
    }

    #[tokio::test]
    async fn test_clones_share_the_same_records() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.create(Person::new("Ada", 30)).await.unwrap();

        assert_eq!(handle.list().await.unwrap().len(), 1);
    }
}
