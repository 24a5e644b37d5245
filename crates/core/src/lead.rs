use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::validate::{validate_lead_fields, ValidationError};

/// A visitor inquiry as submitted through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
}

impl LeadSubmission {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_lead_fields(&self.name, &self.company, &self.email, &self.message)
    }
}

/// A stored lead. `id` and `created_at` are assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
