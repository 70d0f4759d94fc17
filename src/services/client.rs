use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::ClientId;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches a client by its identifier.
pub fn get_client_by_id<R>(repo: &R, client_id: ClientId) -> ServiceResult<Option<Client>>
where
    R: ClientReader + ?Sized,
{
    repo.get_by_id(client_id).map_err(ServiceError::from)
}

/// Returns the total match count and the requested page of clients.
pub fn list_clients<R>(repo: &R, query: ClientListQuery) -> ServiceResult<(usize, Vec<Client>)>
where
    R: ClientReader + ?Sized,
{
    repo.list(query).map_err(ServiceError::from)
}

/// Persists a new client record.
pub fn create_client<R>(repo: &R, new_client: &NewClient) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    repo.create(new_client).map_err(ServiceError::from)
}

/// Applies the provided updates to the client entity.
pub fn update_client<R>(repo: &R, client_id: ClientId, updates: &UpdateClient) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    repo.update(client_id, updates).map_err(ServiceError::from)
}

/// Removes the client record.
pub fn delete_client<R>(repo: &R, client_id: ClientId) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    repo.delete(client_id).map_err(ServiceError::from)
}
