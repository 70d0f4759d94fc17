use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ClientEmail, ClientId, ClientName, DirectorName, Gstin, Notes, Pan, TypeConstraintError,
    WebsiteUrl,
};

/// A persisted client record, as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub industry: Option<Industry>,
    pub status: ClientStatus,
    pub priority: Priority,
    pub website: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub pin: Option<String>,
    pub gstin: String,
    pub pan: String,
    pub cin: Option<String>,
    pub currency_format: Option<String>,
    pub notes: Option<String>,
    /// Ordered list of director names; blanks are stripped before persistence.
    pub directors: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Normalized payload for creating a client record.
#[derive(Clone, Debug)]
pub struct NewClient {
    pub name: ClientName,
    pub contact_name: Option<String>,
    pub contact_email: ClientEmail,
    pub contact_phone: Option<String>,
    pub industry: Option<Industry>,
    pub status: ClientStatus,
    pub priority: Priority,
    pub website: Option<WebsiteUrl>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub pin: Option<String>,
    pub gstin: Gstin,
    pub pan: Pan,
    pub cin: Option<String>,
    pub currency_format: Option<String>,
    pub notes: Option<Notes>,
    pub directors: Vec<DirectorName>,
}

/// Normalized payload for replacing an existing client record.
#[derive(Clone, Debug)]
pub struct UpdateClient {
    pub name: ClientName,
    pub contact_name: Option<String>,
    pub contact_email: ClientEmail,
    pub contact_phone: Option<String>,
    pub industry: Option<Industry>,
    pub status: ClientStatus,
    pub priority: Priority,
    pub website: Option<WebsiteUrl>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub pin: Option<String>,
    pub gstin: Gstin,
    pub pan: Pan,
    pub cin: Option<String>,
    pub currency_format: Option<String>,
    pub notes: Option<Notes>,
    pub directors: Vec<DirectorName>,
}

impl From<NewClient> for UpdateClient {
    fn from(value: NewClient) -> Self {
        Self {
            name: value.name,
            contact_name: value.contact_name,
            contact_email: value.contact_email,
            contact_phone: value.contact_phone,
            industry: value.industry,
            status: value.status,
            priority: value.priority,
            website: value.website,
            country: value.country,
            state: value.state,
            city: value.city,
            pin: value.pin,
            gstin: value.gstin,
            pan: value.pan,
            cin: value.cin,
            currency_format: value.currency_format,
            notes: value.notes,
            directors: value.directors,
        }
    }
}

/// Lifecycle state of a client relationship.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

impl Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientStatus::Active => write!(f, "active"),
            ClientStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for ClientStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(ClientStatus::Active),
            "inactive" => Ok(ClientStatus::Inactive),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Commercial priority assigned to a client.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

impl FromStr for Priority {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Fixed set of industries a client can be filed under.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Industry {
    Technology,
    Manufacturing,
    Finance,
    Healthcare,
    Retail,
    RealEstate,
    Logistics,
    Education,
    Hospitality,
    Media,
    Agriculture,
    Other,
}

impl Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Industry::Technology => write!(f, "Technology"),
            Industry::Manufacturing => write!(f, "Manufacturing"),
            Industry::Finance => write!(f, "Finance"),
            Industry::Healthcare => write!(f, "Healthcare"),
            Industry::Retail => write!(f, "Retail"),
            Industry::RealEstate => write!(f, "Real Estate"),
            Industry::Logistics => write!(f, "Logistics"),
            Industry::Education => write!(f, "Education"),
            Industry::Hospitality => write!(f, "Hospitality"),
            Industry::Media => write!(f, "Media"),
            Industry::Agriculture => write!(f, "Agriculture"),
            Industry::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for Industry {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technology" => Ok(Industry::Technology),
            "manufacturing" => Ok(Industry::Manufacturing),
            "finance" => Ok(Industry::Finance),
            "healthcare" => Ok(Industry::Healthcare),
            "retail" => Ok(Industry::Retail),
            "real estate" => Ok(Industry::RealEstate),
            "logistics" => Ok(Industry::Logistics),
            "education" => Ok(Industry::Education),
            "hospitality" => Ok(Industry::Hospitality),
            "media" => Ok(Industry::Media),
            "agriculture" => Ok(Industry::Agriculture),
            "other" => Ok(Industry::Other),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}
