//! Patient models and DTOs.
//!
//! `prescription` is an `Option<String>` at every layer: `None` maps to SQL
//! `NULL` and is omitted from JSON, while `Some("")` is a stored empty string.

use clinic_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `patients` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Patient {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub doctor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescription: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for registering a new patient.
///
/// Any `id` or `prescription` key in the payload is ignored; the store assigns
/// the id and new patients start without a prescription.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePatient {
    pub name: String,
    pub age: i32,
    pub doctor: String,
}

/// DTO for overwriting a patient's demographic fields.
///
/// Carries no `prescription`; a full update never touches that column.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePatient {
    pub name: String,
    pub age: i32,
    pub doctor: String,
}

/// DTO for setting or clearing a patient's prescription.
///
/// The `prescription` key is required; an explicit `null` clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePrescription {
    #[serde(deserialize_with = "Option::deserialize")]
    pub prescription: Option<String>,
}
