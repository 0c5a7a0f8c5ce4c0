use async_trait::async_trait;

use crate::error::PersonResult;
use crate::models::Person;

/// Repository trait for Person persistence
///
/// Defines the id-keyed store contract: every stored record has an id, ids
/// are assigned from a monotonically increasing sequence and never reused,
/// and reads hand out copies rather than views into the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// All stored persons, as copies
    async fn find_all(&self) -> PersonResult<Vec<Person>>;

    /// Look up a person by id; absence is a valid outcome, not an error
    async fn find_by_id(&self, id: i64) -> PersonResult<Option<Person>>;

    /// Insert or overwrite a person
    ///
    /// When `person.id` is `None` the store atomically assigns the next
    /// sequence value; otherwise the existing slot is overwritten.
    async fn save(&self, person: Person) -> PersonResult<Person>;

    /// Check whether a person with the given id exists
    async fn exists_by_id(&self, id: i64) -> PersonResult<bool>;

    /// Remove a person; returns whether a record existed
    async fn delete_by_id(&self, id: i64) -> PersonResult<bool>;
}
