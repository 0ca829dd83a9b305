//! In-memory household API for route tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use casa_client::{ClientError, HouseholdApi};
use casa_core::entry::{NewCategory, NewPerson, NewTransaction};
use casa_core::model::{
    Category, CategoryRef, KindValue, Person, PersonRef, Transaction, TransactionKind,
    TransactionTimestamp,
};
use casa_shared::config::DashboardConfig;
use casa_shared::types::{CategoryId, PersonId, TransactionId};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// Household API backed by fixed collections; records every mutation.
#[derive(Default)]
pub struct StubApi {
    pub people: Vec<Person>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    /// Status and message to reject mutations with.
    pub reject: Option<(u16, String)>,
    /// Fail every call as if the API were down.
    pub offline: bool,
    pub calls: Mutex<Vec<String>>,
}

impl StubApi {
    fn mutate(&self, call: String) -> Result<String, ClientError> {
        if let Some((status, message)) = &self.reject {
            return Err(ClientError::Upstream {
                status: *status,
                message: message.clone(),
            });
        }
        self.check_online()?;
        self.calls.lock().unwrap().push(call);
        Ok(String::new())
    }

    fn check_online(&self) -> Result<(), ClientError> {
        if self.offline {
            return Err(ClientError::Upstream {
                status: 503,
                message: "Service Unavailable".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl HouseholdApi for StubApi {
    async fn list_people(&self) -> Result<Vec<Person>, ClientError> {
        self.check_online()?;
        Ok(self.people.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.check_online()?;
        Ok(self.categories.clone())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        self.check_online()?;
        Ok(self.transactions.clone())
    }

    async fn create_person(&self, input: &NewPerson) -> Result<String, ClientError> {
        self.mutate(format!("create_person:{}", input.name))
    }

    async fn create_category(&self, input: &NewCategory) -> Result<String, ClientError> {
        self.mutate(format!("create_category:{}", input.label))
    }

    async fn create_transaction(&self, input: &NewTransaction) -> Result<String, ClientError> {
        self.mutate(format!(
            "create_transaction:{}:{}",
            input.description,
            input.kind.code()
        ))
    }

    async fn delete_person(&self, id: PersonId) -> Result<String, ClientError> {
        self.mutate(format!("delete_person:{id}"))
    }

    async fn delete_category(&self, id: CategoryId) -> Result<String, ClientError> {
        self.mutate(format!("delete_category:{id}"))
    }
}

pub fn person(id: i64, name: &str, age: u32) -> Person {
    Person {
        id: PersonId::new(id),
        name: name.into(),
        age,
    }
}

pub fn category(id: i64, label: &str, purpose: TransactionKind) -> Category {
    Category {
        id: CategoryId::new(id),
        label: label.into(),
        purpose,
    }
}

/// Income owned by `person_id`; the category ID mirrors the transaction ID.
pub fn income(id: i64, person_id: i64, label: &str, amount: Decimal, at: &str) -> Transaction {
    transaction(id, person_id, label, TransactionKind::Income, amount, at)
}

/// Expense owned by `person_id`; the category ID mirrors the transaction ID.
pub fn expense(id: i64, person_id: i64, label: &str, amount: Decimal, at: &str) -> Transaction {
    transaction(id, person_id, label, TransactionKind::Expense, amount, at)
}

fn transaction(
    id: i64,
    person_id: i64,
    label: &str,
    kind: TransactionKind,
    amount: Decimal,
    timestamp: &str,
) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        description: format!("Lançamento {id}"),
        amount,
        kind: KindValue::from(kind),
        person: Some(PersonRef {
            id: PersonId::new(person_id),
            name: None,
            age: None,
        }),
        category: CategoryRef {
            id: CategoryId::new(id),
            label: label.into(),
        },
        timestamp: TransactionTimestamp::from(timestamp),
    }
}

/// Router over the stub, returning the stub too so tests can inspect calls.
pub fn app(api: StubApi) -> (Router, Arc<StubApi>) {
    let api = Arc::new(api);
    let state = AppState {
        api: api.clone(),
        dashboard: DashboardConfig { recent_limit: 3 },
    };
    (create_router(state), api)
}

/// Sends a request and returns the status and decoded JSON body.
pub async fn send(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
