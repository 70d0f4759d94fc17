//! Persistence seam the editor and the surrounding application talk
//! through. The backend is opaque; the crate ships an in-memory
//! implementation standing in for it.

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filters applied when listing client records.
#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ClientReader {
    fn get_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    /// Returns the total match count alongside the requested page.
    fn list(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
}

pub trait ClientWriter {
    fn create(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update(&self, client_id: ClientId, updates: &UpdateClient) -> RepositoryResult<Client>;
    fn delete(&self, client_id: ClientId) -> RepositoryResult<()>;
}
