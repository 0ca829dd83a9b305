//! reqwest-backed household API client.

use std::time::Duration;

use async_trait::async_trait;
use casa_core::entry::{NewCategory, NewPerson, NewTransaction};
use casa_core::model::{Category, Person, Transaction};
use casa_shared::config::UpstreamConfig;
use casa_shared::types::{CategoryId, PersonId};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::source::HouseholdApi;
use crate::wire::{
    CategoriaDto, CriarCategoria, CriarPessoa, CriarTransacao, Envelope, PessoaDto, TransacaoDto,
};

const PEOPLE_LIST: &str = "pessoa/BuscarPessoas";
const PEOPLE_CREATE: &str = "pessoa/CriarPessoas";
const PEOPLE_DELETE: &str = "pessoa/DeletarPessoas";
const CATEGORIES_LIST: &str = "Categoria/Buscar";
const CATEGORIES_CREATE: &str = "Categoria/Criar";
const CATEGORIES_DELETE: &str = "Categoria/Excluir";
const TRANSACTIONS_LIST: &str = "Transacoes/BuscarTodas";
const TRANSACTIONS_CREATE: &str = "Transacoes/CriarTransacao";

/// Client for the household API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        debug!(path, "Fetching from household API");
        let response = self.http.get(self.url(path)).send().await?;
        let envelope: Envelope<Vec<T>> = Self::read(path, response).await?;
        Ok(envelope.dados.unwrap_or_default())
    }

    async fn post<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ClientError> {
        debug!(path, "Posting to household API");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let envelope: Envelope<serde_json::Value> = Self::read(path, response).await?;
        Ok(envelope.mensagem.unwrap_or_default())
    }

    async fn delete(&self, path: &str, id: i64) -> Result<String, ClientError> {
        debug!(path, id, "Deleting in household API");
        let response = self
            .http
            .delete(self.url(path))
            .query(&[("id", id)])
            .send()
            .await?;
        let envelope: Envelope<serde_json::Value> = Self::read(path, response).await?;
        Ok(envelope.mensagem.unwrap_or_default())
    }

    async fn read<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ClientError> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown error");
            let message = serde_json::from_slice::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.mensagem)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| reason.to_string());
            warn!(
                path,
                status = status.as_u16(),
                message = %message,
                "Household API rejected request"
            );
            return Err(ClientError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        // Some endpoints answer mutations with an empty body.
        if body.is_empty() {
            return Ok(Envelope {
                dados: None,
                mensagem: None,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl HouseholdApi for ApiClient {
    async fn list_people(&self) -> Result<Vec<Person>, ClientError> {
        let people: Vec<PessoaDto> = self.get_list(PEOPLE_LIST).await?;
        Ok(people.into_iter().map(Person::from).collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let categories: Vec<CategoriaDto> = self.get_list(CATEGORIES_LIST).await?;
        Ok(categories.into_iter().map(Category::from).collect())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        let transactions: Vec<TransacaoDto> = self.get_list(TRANSACTIONS_LIST).await?;
        Ok(transactions.into_iter().map(Transaction::from).collect())
    }

    async fn create_person(&self, input: &NewPerson) -> Result<String, ClientError> {
        let body = CriarPessoa::from_input(input);
        self.post(PEOPLE_CREATE, &body).await
    }

    async fn create_category(&self, input: &NewCategory) -> Result<String, ClientError> {
        let body = CriarCategoria::from(input);
        self.post(CATEGORIES_CREATE, &body).await
    }

    async fn create_transaction(&self, input: &NewTransaction) -> Result<String, ClientError> {
        let body = CriarTransacao::from(input);
        self.post(TRANSACTIONS_CREATE, &body).await
    }

    async fn delete_person(&self, id: PersonId) -> Result<String, ClientError> {
        self.delete(PEOPLE_DELETE, id.into_inner()).await
    }

    async fn delete_category(&self, id: CategoryId) -> Result<String, ClientError> {
        self.delete(CATEGORIES_DELETE, id.into_inner()).await
    }
}
