//! The household API seam.

use async_trait::async_trait;
use casa_core::entry::{NewCategory, NewPerson, NewTransaction};
use casa_core::model::{Category, Person, Transaction};
use casa_shared::types::{CategoryId, PersonId};

use crate::error::ClientError;

/// Operations the dashboard needs from the household API.
///
/// Mutations return the API's `mensagem` (possibly empty).
#[async_trait]
pub trait HouseholdApi: Send + Sync {
    /// Lists every person.
    async fn list_people(&self) -> Result<Vec<Person>, ClientError>;

    /// Lists every category.
    async fn list_categories(&self) -> Result<Vec<Category>, ClientError>;

    /// Lists every transaction.
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError>;

    /// Registers a person.
    async fn create_person(&self, input: &NewPerson) -> Result<String, ClientError>;

    /// Registers a category.
    async fn create_category(&self, input: &NewCategory) -> Result<String, ClientError>;

    /// Records a transaction.
    async fn create_transaction(&self, input: &NewTransaction) -> Result<String, ClientError>;

    /// Removes a person.
    async fn delete_person(&self, id: PersonId) -> Result<String, ClientError>;

    /// Removes a category.
    async fn delete_category(&self, id: CategoryId) -> Result<String, ClientError>;
}

/// People, categories and transactions loaded together.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Every person.
    pub people: Vec<Person>,
    /// Every category.
    pub categories: Vec<Category>,
    /// Every transaction.
    pub transactions: Vec<Transaction>,
}

/// Fetches the three lists concurrently; fails if any of them fails.
pub async fn load_snapshot(api: &dyn HouseholdApi) -> Result<Snapshot, ClientError> {
    let (people, categories, transactions) = tokio::try_join!(
        api.list_people(),
        api.list_categories(),
        api.list_transactions()
    )?;
    Ok(Snapshot {
        people,
        categories,
        transactions,
    })
}
