//! Person Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{PersonError, PersonResult};
use crate::models::{CreatePerson, Person, UpdatePerson};
use crate::repository::PersonRepository;

/// Person service providing business logic operations
///
/// Converts store absence into an explicit `NotFound` failure — callers
/// never see a null result for a missing id.
pub struct PersonService<R: PersonRepository> {
    repository: Arc<R>,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new PersonService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Load a couple of sample persons when the store is empty
    ///
    /// Only seeds once; calling again on a populated store is a no-op.
    pub async fn seed_sample_data(&self) -> PersonResult<()> {
        use chrono::TimeZone;

        if !self.repository.find_all().await?.is_empty() {
            return Ok(());
        }

        let samples = [
            Person {
                id: None,
                name: "Ken".to_string(),
                last_name: "Iding".to_string(),
                age: 20,
                height_m: 1.70,
                weight_kg: 60.0,
                birth_date: chrono::Utc.with_ymd_and_hms(2005, 5, 14, 0, 0, 0).unwrap(),
            },
            Person {
                id: None,
                name: "Juan".to_string(),
                last_name: "Pérez".to_string(),
                age: 25,
                height_m: 1.80,
                weight_kg: 70.0,
                birth_date: chrono::Utc.with_ymd_and_hms(2000, 3, 2, 0, 0, 0).unwrap(),
            },
        ];

        for person in samples {
            self.repository.save(person).await?;
        }

        tracing::info!("Seeded sample persons");
        Ok(())
    }

    /// List all persons
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> PersonResult<Vec<Person>> {
        self.repository.find_all().await
    }

    /// Get a person by id, failing with NotFound when absent
    #[instrument(skip(self))]
    pub async fn get_person(&self, id: i64) -> PersonResult<Person> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PersonError::NotFound(id))
    }

    /// Create a new person
    ///
    /// The DTO carries no id, so identity is always assigned by the store.
    #[instrument(skip(self, input), fields(person_name = %input.name))]
    pub async fn create_person(&self, input: CreatePerson) -> PersonResult<Person> {
        input
            .validate()
            .map_err(|e| PersonError::Validation(e.to_string()))?;

        self.repository.save(Person::new(input)).await
    }

    /// Replace an existing person's fields under the same id
    #[instrument(skip(self, input))]
    pub async fn update_person(&self, id: i64, input: UpdatePerson) -> PersonResult<Person> {
        input
            .validate()
            .map_err(|e| PersonError::Validation(e.to_string()))?;

        if !self.repository.exists_by_id(id).await? {
            return Err(PersonError::NotFound(id));
        }

        self.repository.save(Person::from_update(id, input)).await
    }

    /// Delete a person, failing with NotFound when absent
    #[instrument(skip(self))]
    pub async fn delete_person(&self, id: i64) -> PersonResult<()> {
        if !self.repository.delete_by_id(id).await? {
            return Err(PersonError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: PersonRepository> Clone for PersonService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryPersonRepository;
    use crate::repository::MockPersonRepository;
    use chrono::{TimeZone, Utc};

    fn create_input(name: &str) -> CreatePerson {
        CreatePerson {
            name: name.to_string(),
            last_name: "Iding".to_string(),
            age: 20,
            height_m: 1.70,
            weight_kg: 60.0,
            birth_date: Utc.with_ymd_and_hms(2005, 5, 14, 0, 0, 0).unwrap(),
        }
    }

    fn update_input(name: &str) -> UpdatePerson {
        UpdatePerson {
            name: name.to_string(),
            last_name: "Iding".to_string(),
            age: 21,
            height_m: 1.71,
            weight_kg: 61.0,
            birth_date: Utc.with_ymd_and_hms(2005, 5, 14, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_get_person_missing_fails_not_found() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = PersonService::new(repo);
        let result = service.get_person(42).await;

        assert!(matches!(result, Err(PersonError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_update_missing_fails_not_found() {
        let mut repo = MockPersonRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        repo.expect_save().never();

        let service = PersonService::new(repo);
        let result = service.update_person(42, update_input("Juan")).await;

        assert!(matches!(result, Err(PersonError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_missing_fails_not_found() {
        let mut repo = MockPersonRepository::new();
        repo.expect_delete_by_id().returning(|_| Ok(false));

        let service = PersonService::new(repo);
        let result = service.delete_person(42).await;

        assert!(matches!(result, Err(PersonError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_create_assigns_identity() {
        let service = PersonService::new(InMemoryPersonRepository::new());

        let created = service.create_person(create_input("Ken")).await.unwrap();
        assert_eq!(created.id, Some(1));

        let fetched = service.get_person(1).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let service = PersonService::new(InMemoryPersonRepository::new());

        let mut input = create_input("Ken");
        input.age = 200;

        let result = service.create_person(input).await;
        assert!(matches!(result, Err(PersonError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_fields_under_same_id() {
        let service = PersonService::new(InMemoryPersonRepository::new());
        let created = service.create_person(create_input("Ken")).await.unwrap();
        let id = created.id.unwrap();

        let updated = service.update_person(id, update_input("Juan")).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "Juan");
        assert_eq!(updated.age, 21);

        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_get_fails() {
        let service = PersonService::new(InMemoryPersonRepository::new());
        let created = service.create_person(create_input("Ken")).await.unwrap();
        let id = created.id.unwrap();

        service.delete_person(id).await.unwrap();
        assert!(matches!(
            service.get_person(id).await,
            Err(PersonError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_seed_sample_data_is_idempotent() {
        let service = PersonService::new(InMemoryPersonRepository::new());

        service.seed_sample_data().await.unwrap();
        service.seed_sample_data().await.unwrap();

        assert_eq!(service.find_all().await.unwrap().len(), 2);
    }
}
