//! Form drafts and the validation rules applied before persistence.

pub mod client;
