//! Household API wire format.
//!
//! Every response is wrapped as `{"dados": ..., "mensagem": "..."}` and uses
//! Portuguese field names; these types convert to and from the domain model.

use casa_core::entry::{NewCategory, NewPerson, NewTransaction};
use casa_core::model::{
    Category, CategoryRef, KindValue, Person, PersonRef, Transaction, TransactionTimestamp,
};
use casa_shared::types::{CategoryId, PersonId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Payload; may be `null` or absent.
    pub dados: Option<T>,
    /// Human-readable message.
    #[serde(default)]
    pub mensagem: Option<String>,
}

/// `GET /pessoa/BuscarPessoas` item.
#[derive(Debug, Deserialize)]
pub struct PessoaDto {
    pub id: i64,
    pub nome: String,
    pub idade: u32,
}

impl From<PessoaDto> for Person {
    fn from(dto: PessoaDto) -> Self {
        Self {
            id: PersonId::new(dto.id),
            name: dto.nome,
            age: dto.idade,
        }
    }
}

/// `GET /Categoria/Buscar` item.
#[derive(Debug, Deserialize)]
pub struct CategoriaDto {
    pub id: i64,
    pub descricao: String,
    pub finalidade: KindValue,
}

impl From<CategoriaDto> for Category {
    fn from(dto: CategoriaDto) -> Self {
        Self {
            id: CategoryId::new(dto.id),
            label: dto.descricao,
            purpose: dto.finalidade.classify(),
        }
    }
}

/// Person embedded in a transaction.
#[derive(Debug, Deserialize)]
pub struct PessoaRefDto {
    pub id: i64,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub idade: Option<u32>,
}

/// Category embedded in a transaction.
#[derive(Debug, Deserialize)]
pub struct CategoriaRefDto {
    pub id: i64,
    #[serde(default)]
    pub descricao: String,
}

/// `GET /Transacoes/BuscarTodas` item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransacaoDto {
    pub id: i64,
    #[serde(default)]
    pub descricao: String,
    pub valor: Decimal,
    #[serde(default)]
    pub tipo: KindValue,
    #[serde(default)]
    pub pessoa: Option<PessoaRefDto>,
    pub categoria: CategoriaRefDto,
    #[serde(default)]
    pub data_transacao: Option<String>,
}

impl From<TransacaoDto> for Transaction {
    fn from(dto: TransacaoDto) -> Self {
        Self {
            id: TransactionId::new(dto.id),
            description: dto.descricao,
            amount: dto.valor,
            kind: dto.tipo,
            person: dto.pessoa.map(|pessoa| PersonRef {
                id: PersonId::new(pessoa.id),
                name: pessoa.nome,
                age: pessoa.idade,
            }),
            category: CategoryRef {
                id: CategoryId::new(dto.categoria.id),
                label: dto.categoria.descricao,
            },
            timestamp: TransactionTimestamp(dto.data_transacao.unwrap_or_default()),
        }
    }
}

/// `POST /pessoa/CriarPessoas` body.
#[derive(Debug, Serialize)]
pub struct CriarPessoa<'a> {
    pub nome: &'a str,
    pub idade: u32,
}

impl<'a> CriarPessoa<'a> {
    /// Builds the body from a validated form.
    pub fn from_input(input: &'a NewPerson) -> Self {
        Self {
            nome: input.name.trim(),
            idade: input.age.unwrap_or_default(),
        }
    }
}

/// `POST /Categoria/Criar` body.
#[derive(Debug, Serialize)]
pub struct CriarCategoria<'a> {
    pub descricao: &'a str,
    pub finalidade: &'static str,
}

impl<'a> From<&'a NewCategory> for CriarCategoria<'a> {
    fn from(input: &'a NewCategory) -> Self {
        Self {
            descricao: input.label.trim(),
            finalidade: input.purpose.tag(),
        }
    }
}

/// `POST /Transacoes/CriarTransacao` body; `tipo` is the integer code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriarTransacao<'a> {
    pub descricao: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    pub tipo: i64,
    pub id_pessoa: i64,
    pub id_categoria: i64,
}

impl<'a> From<&'a NewTransaction> for CriarTransacao<'a> {
    fn from(input: &'a NewTransaction) -> Self {
        Self {
            descricao: input.description.trim(),
            valor: input.amount,
            tipo: input.kind.code(),
            id_pessoa: input.person_id.into_inner(),
            id_categoria: input.category_id.into_inner(),
        }
    }
}
