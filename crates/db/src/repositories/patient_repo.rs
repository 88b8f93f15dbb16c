//! Repository for the `patients` table.

use clinic_core::types::DbId;
use sqlx::PgPool;

use crate::models::patient::{CreatePatient, Patient, UpdatePatient};

/// Column list for `patients` queries.
const COLUMNS: &str = "id, name, age, doctor, prescription";

/// Provides data access for patient records.
pub struct PatientRepo;

impl PatientRepo {
    /// Insert a new patient. The prescription starts out `NULL`.
    pub async fn create(pool: &PgPool, dto: &CreatePatient) -> Result<Patient, sqlx::Error> {
        let query = format!(
            "INSERT INTO patients (name, age, doctor) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(&dto.name)
            .bind(dto.age)
            .bind(&dto.doctor)
            .fetch_one(pool)
            .await
    }

    /// Find a patient by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients WHERE id = $1");
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite name, age and doctor. `prescription` is left as stored.
    ///
    /// Returns `None` if no row has the given ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdatePatient,
    ) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!(
            "UPDATE patients SET \
                 name = $2, \
                 age = $3, \
                 doctor = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.age)
            .bind(&dto.doctor)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear (`None`) the prescription.
    ///
    /// Returns `None` if no row has the given ID.
    pub async fn update_prescription(
        pool: &PgPool,
        id: DbId,
        prescription: Option<&str>,
    ) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!(
            "UPDATE patients SET prescription = $2 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .bind(prescription)
            .fetch_optional(pool)
            .await
    }

    /// Delete a patient by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
