//! The client editor: the stateful core behind the entry/edit form.
//!
//! An editor owns the editable draft of one client record together with
//! its UI-only state (country suggestions, currency lock, discard prompt,
//! submission flags). User input mutates the draft through [`ClientEditor::set_field`]
//! and the director operations; [`ClientEditor::submit`] validates the
//! draft, normalizes it into a domain payload, and drives the persistence
//! and notification seams.
//!
//! Submission is two-phase so the asynchronous backend call of the real
//! application can be modeled: [`ClientEditor::begin_submit`] yields the
//! payload and flips the in-progress flag, [`ClientEditor::finish_submit`]
//! settles the outcome. Between the two the editor refuses a second
//! submission but keeps accepting field edits and cancel requests.

use thiserror::Error;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::{
    ClientEmail, ClientId, ClientName, DirectorName, Gstin, Notes, Pan, TypeConstraintError,
    WebsiteUrl,
};
use crate::forms::client::{
    self as client_form, ClientField, ClientForm, FieldError, MIN_DIRECTOR_ROWS,
};
use crate::notifications::{Notifier, Severity};
use crate::reference::{CountryCurrencyEntry, CountryCurrencyTable};
use crate::repository::ClientWriter;
use crate::services::client as client_service;
use crate::services::ServiceResult;

/// Fallback toast when the backend reports a failure without a message.
pub const DEFAULT_SUBMIT_ERROR: &str = "Failed to save client";

/// Errors returned by the submit path.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft failed validation; the backend was never called.
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    /// A submission is already outstanding; this one was ignored.
    #[error("a submission is already in progress")]
    InProgress,
    /// The editor was closed; the outcome was discarded.
    #[error("the editor is closed")]
    Closed,
    /// A value that passed validation failed domain construction.
    #[error("invalid value: {0}")]
    Constraint(#[from] TypeConstraintError),
    /// The backend rejected the record.
    #[error("{0}")]
    Persistence(String),
}

impl SubmitError {
    /// The single message surfaced to the user, if this error carries one.
    ///
    /// For validation failures the gstin error wins, then the pan error,
    /// then whichever comes first. Ignored submissions surface nothing.
    pub fn surfaced_message(&self) -> Option<String> {
        match self {
            SubmitError::Validation(errors) => {
                surfaced_error(errors).map(|error| error.message.to_string())
            }
            SubmitError::Persistence(message) => {
                if message.trim().is_empty() {
                    Some(DEFAULT_SUBMIT_ERROR.to_string())
                } else {
                    Some(message.clone())
                }
            }
            _ => None,
        }
    }
}

/// Picks the field error surfaced to the user: gstin, then pan, then first.
pub fn surfaced_error(errors: &[FieldError]) -> Option<&FieldError> {
    errors
        .iter()
        .find(|error| error.field == ClientField::Gstin)
        .or_else(|| errors.iter().find(|error| error.field == ClientField::Pan))
        .or_else(|| errors.first())
}

/// Normalized submission produced by [`ClientEditor::begin_submit`].
#[derive(Debug)]
pub enum SubmitPayload {
    Create(NewClient),
    Update(ClientId, UpdateClient),
}

/// Stateful controller for the client entry/edit form.
pub struct ClientEditor<'a> {
    table: &'a CountryCurrencyTable,
    form: ClientForm,
    editing: Option<ClientId>,
    suggestions: Vec<&'a CountryCurrencyEntry>,
    suggestions_open: bool,
    currency_locked: bool,
    submitting: bool,
    discard_prompt: bool,
    closed: bool,
}

impl<'a> ClientEditor<'a> {
    /// Opens an empty editor in create mode.
    pub fn new(table: &'a CountryCurrencyTable) -> Self {
        Self {
            table,
            form: ClientForm::default(),
            editing: None,
            suggestions: Vec::new(),
            suggestions_open: false,
            currency_locked: false,
            submitting: false,
            discard_prompt: false,
            closed: false,
        }
    }

    /// Opens an editor pre-populated from a persisted record.
    pub fn edit(table: &'a CountryCurrencyTable, existing: &Client) -> Self {
        let mut editor = Self::new(table);
        editor.reset(Some(existing));
        editor
    }

    /// Replaces the entire draft and all UI state, so one editor instance
    /// can be reused for a different record.
    pub fn reset(&mut self, existing: Option<&Client>) {
        self.form = existing.map(ClientForm::from).unwrap_or_default();
        self.editing = existing.map(|client| client.id);
        self.suggestions = Vec::new();
        self.suggestions_open = false;
        self.currency_locked = existing
            .and_then(|client| client.country.as_deref())
            .is_some_and(|country| self.table.resolve_currency(country).is_some());
        self.submitting = false;
        self.discard_prompt = false;
        self.closed = false;
    }

    /// Sets a single draft field from its form value.
    ///
    /// Writing `country` additionally refreshes the suggestion list and
    /// runs the derived-currency rule; writes to `currency_format` are
    /// dropped while the currency is derived from a recognized country.
    pub fn set_field(&mut self, field: ClientField, value: &str) {
        match field {
            ClientField::Name => self.form.name = value.to_string(),
            ClientField::ContactName => self.form.contact_name = value.to_string(),
            ClientField::ContactEmail => self.form.contact_email = value.to_string(),
            ClientField::ContactPhone => self.form.contact_phone = value.to_string(),
            ClientField::Industry => self.form.industry = value.parse().ok(),
            ClientField::Status => {
                if let Ok(status) = value.parse() {
                    self.form.status = status;
                }
            }
            ClientField::Priority => {
                if let Ok(priority) = value.parse() {
                    self.form.priority = priority;
                }
            }
            ClientField::Website => self.form.website = value.to_string(),
            ClientField::Country => {
                self.form.country = value.to_string();
                self.refresh_country_state();
            }
            ClientField::State => self.form.state = value.to_string(),
            ClientField::City => self.form.city = value.to_string(),
            ClientField::Pin => self.form.pin = value.to_string(),
            ClientField::Gstin => self.form.gstin = value.to_string(),
            ClientField::Pan => self.form.pan = value.to_string(),
            ClientField::Cin => self.form.cin = value.to_string(),
            ClientField::CurrencyFormat => {
                if !self.currency_locked {
                    self.form.currency_format = value.to_string();
                }
            }
            ClientField::Notes => self.form.notes = value.to_string(),
            // The directors list mutates through its dedicated operations.
            ClientField::Directors => {}
        }
    }

    /// Derived-field rule run after every country write: refresh the
    /// suggestion list and, on an exact match, take over the currency.
    fn refresh_country_state(&mut self) {
        let query = self.form.country.trim().to_string();
        self.suggestions = self.table.search(&query);
        self.suggestions_open = !query.is_empty() && !self.suggestions.is_empty();
        match self.table.resolve_currency(&query) {
            Some(currency) => {
                self.form.currency_format = currency.to_string();
                self.currency_locked = true;
            }
            None => self.currency_locked = false,
        }
    }

    /// Applies a picked suggestion and closes the list.
    pub fn select_country_suggestion(&mut self, entry: &CountryCurrencyEntry) {
        self.form.country = entry.name.clone();
        self.form.currency_format = entry.currency.clone();
        self.currency_locked = true;
        self.suggestions_open = false;
    }

    /// Appends one blank director row.
    pub fn add_director(&mut self) {
        self.form.directors.push(String::new());
    }

    /// Removes the row at `index`. Rejected while only the minimum number
    /// of rows exist, so the editable list never shrinks below two.
    pub fn remove_director(&mut self, index: usize) -> bool {
        if self.form.directors.len() <= MIN_DIRECTOR_ROWS || index >= self.form.directors.len() {
            return false;
        }
        self.form.directors.remove(index);
        true
    }

    /// Replaces the director name at `index`.
    pub fn update_director(&mut self, index: usize, value: &str) -> bool {
        match self.form.directors.get_mut(index) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Validates the current draft without submitting it.
    pub fn validate(&self) -> Vec<FieldError> {
        client_form::validate(&self.form)
    }

    /// Validates and normalizes the draft, marks a submission as
    /// outstanding, and returns the payload for the backend call.
    pub fn begin_submit(&mut self) -> Result<SubmitPayload, SubmitError> {
        if self.closed {
            return Err(SubmitError::Closed);
        }
        if self.submitting {
            return Err(SubmitError::InProgress);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            log::error!("Client form failed validation: {} error(s)", errors.len());
            return Err(SubmitError::Validation(errors));
        }

        let payload = match self.editing {
            Some(id) => SubmitPayload::Update(id, self.build_record()?.into()),
            None => SubmitPayload::Create(self.build_record()?),
        };
        self.submitting = true;
        Ok(payload)
    }

    /// Settles an outstanding submission with the backend's outcome.
    ///
    /// A closed editor discards the result: the call ran to completion,
    /// but nothing may mutate a torn-down instance.
    pub fn finish_submit(&mut self, outcome: ServiceResult<Client>) -> Result<Client, SubmitError> {
        self.submitting = false;
        if self.closed {
            return Err(SubmitError::Closed);
        }
        match outcome {
            Ok(client) => {
                self.editing = Some(client.id);
                Ok(client)
            }
            Err(err) => {
                log::error!("Failed to save client: {err}");
                let message = err.to_string();
                Err(SubmitError::Persistence(if message.trim().is_empty() {
                    DEFAULT_SUBMIT_ERROR.to_string()
                } else {
                    message
                }))
            }
        }
    }

    /// Runs the full submit cycle against the repository, notifying the
    /// user of the outcome. The draft survives any failure for retry.
    pub fn submit<R, N>(&mut self, repo: &R, notifier: &N) -> Result<Client, SubmitError>
    where
        R: ClientWriter + ?Sized,
        N: Notifier + ?Sized,
    {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(err) => {
                if let Some(message) = err.surfaced_message() {
                    notifier.notify(&message, Severity::Error);
                }
                return Err(err);
            }
        };

        let (performed, outcome) = match payload {
            SubmitPayload::Create(new_client) => {
                ("created", client_service::create_client(repo, &new_client))
            }
            SubmitPayload::Update(id, updates) => {
                ("updated", client_service::update_client(repo, id, &updates))
            }
        };

        match self.finish_submit(outcome) {
            Ok(client) => {
                notifier.notify(
                    &format!("Client \"{}\" {performed} successfully!", client.name),
                    Severity::Success,
                );
                Ok(client)
            }
            Err(err) => {
                if let Some(message) = err.surfaced_message() {
                    notifier.notify(&message, Severity::Error);
                }
                Err(err)
            }
        }
    }

    /// Opens the discard-confirmation prompt instead of discarding.
    pub fn request_cancel(&mut self) {
        self.discard_prompt = true;
    }

    /// Closes the prompt and resumes editing; the draft is untouched.
    pub fn dismiss_discard(&mut self) {
        self.discard_prompt = false;
    }

    /// Finalizes the cancel: closes the editor. Returns whether the
    /// editor transitioned to closed (the prompt must be open first).
    pub fn confirm_discard(&mut self) -> bool {
        if !self.discard_prompt {
            return false;
        }
        self.discard_prompt = false;
        self.closed = true;
        true
    }

    pub fn form(&self) -> &ClientForm {
        &self.form
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn suggestions(&self) -> &[&'a CountryCurrencyEntry] {
        &self.suggestions
    }

    pub fn suggestions_open(&self) -> bool {
        self.suggestions_open
    }

    /// Whether `currency_format` currently accepts manual writes.
    pub fn currency_editable(&self) -> bool {
        !self.currency_locked
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn discard_prompt_open(&self) -> bool {
        self.discard_prompt
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Builds the normalized record from a draft that passed validation.
    fn build_record(&self) -> Result<NewClient, TypeConstraintError> {
        let form = &self.form;
        Ok(NewClient {
            name: ClientName::new(form.name.as_str())?,
            contact_name: opt(&form.contact_name),
            contact_email: ClientEmail::new(form.contact_email.as_str())?,
            contact_phone: opt(&form.contact_phone),
            industry: form.industry,
            status: form.status,
            priority: form.priority,
            website: opt(&form.website).map(WebsiteUrl::new).transpose()?,
            country: opt(&form.country),
            state: opt(&form.state),
            city: opt(&form.city),
            pin: opt(&form.pin),
            gstin: Gstin::new(form.gstin.as_str())?,
            pan: Pan::new(form.pan.as_str())?,
            cin: opt(&form.cin),
            currency_format: opt(&form.currency_format),
            notes: opt(&form.notes).map(Notes::new).transpose()?,
            directors: form
                .directors
                .iter()
                .filter_map(|director| opt(director))
                .map(DirectorName::new)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

/// Trims a draft value, mapping blanks to `None`.
fn opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::client::{ClientStatus, Priority};
    use crate::notifications::NullNotifier;
    use crate::repository::mock::MockRepository;

    fn table() -> CountryCurrencyTable {
        CountryCurrencyTable::new(vec![CountryCurrencyEntry {
            name: "India".to_string(),
            currency: "INR".to_string(),
        }])
    }

    fn fill_valid(editor: &mut ClientEditor<'_>) {
        editor.set_field(ClientField::Name, "Acme Exports");
        editor.set_field(ClientField::ContactEmail, "contact@acme.example");
        editor.set_field(ClientField::Gstin, "27ABCDE1234F1Z5");
        editor.set_field(ClientField::Pan, "ABCDE1234F");
    }

    fn persisted(name: &str) -> Client {
        let now = Utc::now().naive_utc();
        Client {
            id: ClientId::new(),
            name: name.to_string(),
            contact_name: None,
            contact_email: "contact@acme.example".to_string(),
            contact_phone: None,
            industry: None,
            status: ClientStatus::Active,
            priority: Priority::Medium,
            website: None,
            country: None,
            state: None,
            city: None,
            pin: None,
            gstin: "27ABCDE1234F1Z5".to_string(),
            pan: "ABCDE1234F".to_string(),
            cin: None,
            currency_format: None,
            notes: None,
            directors: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_validation_failure_never_reaches_repository() {
        let table = table();
        // No expectations set: any repository call panics the test.
        let repo = MockRepository::new();
        let mut editor = ClientEditor::new(&table);
        editor.set_field(ClientField::Name, "Acme Exports");
        editor.set_field(ClientField::ContactEmail, "contact@acme.example");

        let err = editor.submit(&repo, &NullNotifier).unwrap_err();
        assert!(matches!(err, SubmitError::Validation(_)));
        assert!(!editor.is_submitting());
    }

    #[test]
    fn test_create_mode_calls_create_exactly_once() {
        let table = table();
        let mut repo = MockRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|new_client| Ok(persisted(new_client.name.as_str())));

        let mut editor = ClientEditor::new(&table);
        fill_valid(&mut editor);

        let client = editor.submit(&repo, &NullNotifier).unwrap();
        assert_eq!(client.name, "Acme Exports");
        // The editor now tracks the persisted record.
        assert!(editor.is_edit());
    }

    #[test]
    fn test_edit_mode_calls_update_not_create() {
        let table = table();
        let existing = persisted("Acme Exports");
        let existing_id = existing.id;

        let mut repo = MockRepository::new();
        repo.expect_update()
            .times(1)
            .returning(move |id, updates| {
                assert_eq!(id, existing_id);
                let mut client = persisted(updates.name.as_str());
                client.id = id;
                Ok(client)
            });

        let mut editor = ClientEditor::edit(&table, &existing);
        editor.set_field(ClientField::Name, "Acme Pvt Ltd");

        let client = editor.submit(&repo, &NullNotifier).unwrap();
        assert_eq!(client.id, existing_id);
        assert_eq!(client.name, "Acme Pvt Ltd");
    }
}
