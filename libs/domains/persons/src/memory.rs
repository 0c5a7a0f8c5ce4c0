//! In-memory implementation of PersonRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::PersonResult;
use crate::models::Person;
use crate::repository::PersonRepository;

/// In-memory implementation of the PersonRepository
///
/// Records live in an `RwLock`-protected map keyed by id; ids come from an
/// atomic sequence starting at 1. The counter is never decremented, so ids
/// stay unique and are not reused after deletion.
#[derive(Debug, Clone)]
pub struct InMemoryPersonRepository {
    entries: Arc<RwLock<HashMap<i64, Person>>>,
    sequence: Arc<AtomicI64>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            sequence: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn find_all(&self) -> PersonResult<Vec<Person>> {
        let entries = self.entries.read().await;
        let mut persons: Vec<Person> = entries.values().cloned().collect();
        persons.sort_by_key(|p| p.id);
        Ok(persons)
    }

    async fn find_by_id(&self, id: i64) -> PersonResult<Option<Person>> {
        let entries = self.entries.read().await;
        Ok(entries.get(&id).cloned())
    }

    async fn save(&self, mut person: Person) -> PersonResult<Person> {
        let id = match person.id {
            Some(id) => id,
            None => self.sequence.fetch_add(1, Ordering::SeqCst),
        };
        person.id = Some(id);

        let mut entries = self.entries.write().await;
        entries.insert(id, person.clone());

        tracing::debug!(person_id = id, "Saved person");
        Ok(person)
    }

    async fn exists_by_id(&self, id: i64) -> PersonResult<bool> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> PersonResult<bool> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    fn person(name: &str) -> Person {
        Person {
            id: None,
            name: name.to_string(),
            last_name: "Iding".to_string(),
            age: 20,
            height_m: 1.70,
            weight_kg: 60.0,
            birth_date: Utc.with_ymd_and_hms(2005, 5, 14, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryPersonRepository::new();

        let first = repo.save(person("Ken")).await.unwrap();
        let second = repo.save(person("Juan")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_find_by_id_returns_saved_person() {
        let repo = InMemoryPersonRepository::new();
        let saved = repo.save(person("Ken")).await.unwrap();

        let fetched = repo.find_by_id(saved.id.unwrap()).await.unwrap();
        assert_eq!(fetched, Some(saved));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = InMemoryPersonRepository::new();
        assert_eq!(repo.find_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites_slot() {
        let repo = InMemoryPersonRepository::new();
        let saved = repo.save(person("Ken")).await.unwrap();

        let mut replacement = person("Juan");
        replacement.id = saved.id;
        repo.save(replacement).await.unwrap();

        let fetched = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Juan");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = InMemoryPersonRepository::new();
        let saved = repo.save(person("Ken")).await.unwrap();
        let id = saved.id.unwrap();

        assert!(repo.delete_by_id(id).await.unwrap());
        assert_eq!(repo.find_by_id(id).await.unwrap(), None);

        // A second delete reports that nothing was there
        assert!(!repo.delete_by_id(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_by_id() {
        let repo = InMemoryPersonRepository::new();
        let saved = repo.save(person("Ken")).await.unwrap();

        assert!(repo.exists_by_id(saved.id.unwrap()).await.unwrap());
        assert!(!repo.exists_by_id(99).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryPersonRepository::new();
        let first = repo.save(person("Ken")).await.unwrap();
        repo.delete_by_id(first.id.unwrap()).await.unwrap();

        let second = repo.save(person("Juan")).await.unwrap();
        assert!(second.id.unwrap() > first.id.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_returns_copies() {
        let repo = InMemoryPersonRepository::new();
        repo.save(person("Ken")).await.unwrap();

        let mut all = repo.find_all().await.unwrap();
        all[0].name = "Mutated".to_string();

        let stored = repo.find_all().await.unwrap();
        assert_eq!(stored[0].name, "Ken");
    }

    #[tokio::test]
    async fn test_concurrent_saves_assign_unique_ids() {
        let repo = InMemoryPersonRepository::new();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                let mut ids = Vec::new();
                for _ in 0..25 {
                    let saved = repo.save(person("Ken")).await.unwrap();
                    ids.push(saved.id.unwrap());
                }
                ids
            }));
        }

        let mut all_ids = Vec::new();
        for handle in handles {
            all_ids.extend(handle.await.unwrap());
        }

        let unique: HashSet<i64> = all_ids.iter().copied().collect();
        assert_eq!(unique.len(), 200);
        assert_eq!(repo.find_all().await.unwrap().len(), 200);
    }
}
