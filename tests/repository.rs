use clientbook::domain::client::{ClientStatus, Industry, NewClient, Priority, UpdateClient};
use clientbook::domain::types::{ClientEmail, ClientId, ClientName, Gstin, Pan};
use clientbook::repository::memory::InMemoryClientRepository;
use clientbook::repository::errors::RepositoryError;
use clientbook::repository::{ClientListQuery, ClientReader, ClientWriter};

fn new_client(name: &str, email: &str) -> NewClient {
    NewClient {
        name: ClientName::new(name).unwrap(),
        contact_name: None,
        contact_email: ClientEmail::new(email).unwrap(),
        contact_phone: None,
        industry: Some(Industry::Technology),
        status: ClientStatus::Active,
        priority: Priority::Medium,
        website: None,
        country: Some("India".to_string()),
        state: None,
        city: None,
        pin: None,
        gstin: Gstin::new("27ABCDE1234F1Z5").unwrap(),
        pan: Pan::new("ABCDE1234F").unwrap(),
        cin: None,
        currency_format: Some("INR".to_string()),
        notes: None,
        directors: Vec::new(),
    }
}

#[test]
fn test_client_repository_crud() {
    let repo = InMemoryClientRepository::new();

    let alice = repo
        .create(&new_client("Alice Traders", "alice@example.com"))
        .unwrap();
    let bob = repo
        .create(&new_client("Bob Industries", "bob@example.com"))
        .unwrap();

    let (total, items) = repo.list(ClientListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);

    let (search_total, search_items) = repo
        .list(ClientListQuery::new().search("bob"))
        .unwrap();
    assert_eq!(search_total, 1);
    assert_eq!(search_items[0].name, "Bob Industries");

    let updates = UpdateClient::from(new_client("Bobby Industries", "bob@example.com"));
    let updated = repo.update(bob.id, &updates).unwrap();
    assert_eq!(updated.id, bob.id);
    assert_eq!(updated.name, "Bobby Industries");
    assert!(updated.updated_at >= updated.created_at);

    assert_eq!(
        repo.get_by_id(bob.id).unwrap().unwrap().name,
        "Bobby Industries"
    );

    repo.delete(alice.id).unwrap();
    assert!(repo.get_by_id(alice.id).unwrap().is_none());

    let (total_after, items_after) = repo.list(ClientListQuery::new()).unwrap();
    assert_eq!(total_after, 1);
    assert_eq!(items_after[0].name, "Bobby Industries");
}

#[test]
fn test_client_repository_pagination() {
    let repo = InMemoryClientRepository::new();
    for i in 0..5 {
        repo.create(&new_client(
            &format!("Client {i}"),
            &format!("client{i}@example.com"),
        ))
        .unwrap();
    }

    let (total, page) = repo
        .list(ClientListQuery::new().paginate(2, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "Client 2");

    let (total, last_page) = repo
        .list(ClientListQuery::new().paginate(3, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(last_page.len(), 1);
}

#[test]
fn test_missing_records_report_not_found() {
    let repo = InMemoryClientRepository::new();
    let missing = ClientId::new();

    assert!(matches!(
        repo.update(missing, &UpdateClient::from(new_client("X", "x@example.com"))),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete(missing),
        Err(RepositoryError::NotFound)
    ));
    assert!(repo.get_by_id(missing).unwrap().is_none());
}
