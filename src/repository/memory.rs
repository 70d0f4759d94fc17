//! In-memory client repository.
//!
//! Stands in for the remote backend while it is mocked: assigns
//! identifiers, stamps timestamps, and supports the same queries the
//! real service would.

use std::sync::RwLock;

use chrono::Utc;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::ClientId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};

#[derive(Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<Vec<Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<std::sync::RwLockReadGuard<'_, Vec<Client>>> {
        self.clients
            .read()
            .map_err(|_| RepositoryError::Unexpected("client store lock poisoned".to_string()))
    }

    fn write(&self) -> RepositoryResult<std::sync::RwLockWriteGuard<'_, Vec<Client>>> {
        self.clients
            .write()
            .map_err(|_| RepositoryError::Unexpected("client store lock poisoned".to_string()))
    }
}

fn matches_search(client: &Client, term: &str) -> bool {
    let needle = term.to_lowercase();
    client.name.to_lowercase().contains(&needle)
        || client.contact_email.to_lowercase().contains(&needle)
        || client
            .country
            .as_deref()
            .is_some_and(|country| country.to_lowercase().contains(&needle))
}

fn materialize(record: &NewClient) -> Client {
    let now = Utc::now().naive_utc();
    Client {
        id: ClientId::new(),
        name: record.name.as_str().to_string(),
        contact_name: record.contact_name.clone(),
        contact_email: record.contact_email.as_str().to_string(),
        contact_phone: record.contact_phone.clone(),
        industry: record.industry,
        status: record.status,
        priority: record.priority,
        website: record.website.as_ref().map(|url| url.as_str().to_string()),
        country: record.country.clone(),
        state: record.state.clone(),
        city: record.city.clone(),
        pin: record.pin.clone(),
        gstin: record.gstin.as_str().to_string(),
        pan: record.pan.as_str().to_string(),
        cin: record.cin.clone(),
        currency_format: record.currency_format.clone(),
        notes: record.notes.as_ref().map(|notes| notes.as_str().to_string()),
        directors: record
            .directors
            .iter()
            .map(|director| director.as_str().to_string())
            .collect(),
        created_at: now,
        updated_at: now,
    }
}

fn apply_update(client: &mut Client, updates: &UpdateClient) {
    client.name = updates.name.as_str().to_string();
    client.contact_name = updates.contact_name.clone();
    client.contact_email = updates.contact_email.as_str().to_string();
    client.contact_phone = updates.contact_phone.clone();
    client.industry = updates.industry;
    client.status = updates.status;
    client.priority = updates.priority;
    client.website = updates.website.as_ref().map(|url| url.as_str().to_string());
    client.country = updates.country.clone();
    client.state = updates.state.clone();
    client.city = updates.city.clone();
    client.pin = updates.pin.clone();
    client.gstin = updates.gstin.as_str().to_string();
    client.pan = updates.pan.as_str().to_string();
    client.cin = updates.cin.clone();
    client.currency_format = updates.currency_format.clone();
    client.notes = updates.notes.as_ref().map(|notes| notes.as_str().to_string());
    client.directors = updates
        .directors
        .iter()
        .map(|director| director.as_str().to_string())
        .collect();
    client.updated_at = Utc::now().naive_utc();
}

impl ClientReader for InMemoryClientRepository {
    fn get_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let clients = self.read()?;
        Ok(clients.iter().find(|client| client.id == id).cloned())
    }

    fn list(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        let clients = self.read()?;
        let filtered: Vec<&Client> = match &query.search {
            Some(term) => clients
                .iter()
                .filter(|client| matches_search(client, term))
                .collect(),
            None => clients.iter().collect(),
        };
        let total = filtered.len();

        let page = match &query.pagination {
            Some(pagination) => {
                let page = pagination.page.max(1);
                filtered
                    .into_iter()
                    .skip((page - 1) * pagination.per_page)
                    .take(pagination.per_page)
                    .cloned()
                    .collect()
            }
            None => filtered.into_iter().cloned().collect(),
        };

        Ok((total, page))
    }
}

impl ClientWriter for InMemoryClientRepository {
    fn create(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let client = materialize(new_client);
        let mut clients = self.write()?;
        clients.push(client.clone());
        Ok(client)
    }

    fn update(&self, client_id: ClientId, updates: &UpdateClient) -> RepositoryResult<Client> {
        let mut clients = self.write()?;
        let client = clients
            .iter_mut()
            .find(|client| client.id == client_id)
            .ok_or(RepositoryError::NotFound)?;
        apply_update(client, updates);
        Ok(client.clone())
    }

    fn delete(&self, client_id: ClientId) -> RepositoryResult<()> {
        let mut clients = self.write()?;
        let before = clients.len();
        clients.retain(|client| client.id != client_id);
        if clients.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
