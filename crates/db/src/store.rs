//! The patient store seam.
//!
//! Handlers talk to a [`PatientStore`] trait object rather than a pool, so
//! the process-wide connection pool is injected once at startup and tests
//! can substitute their own implementation.

use async_trait::async_trait;
use clinic_core::types::DbId;

use crate::models::patient::{CreatePatient, Patient, UpdatePatient};
use crate::repositories::PatientRepo;
use crate::DbPool;

/// Data access operations for patient records.
///
/// Each method maps to a single statement against the backing store.
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Insert a patient and return it with its assigned ID.
    async fn create(&self, dto: &CreatePatient) -> Result<Patient, sqlx::Error>;

    /// Fetch a patient, or `None` if the ID does not exist.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Patient>, sqlx::Error>;

    /// Overwrite name, age and doctor. Returns the stored row, or `None` if
    /// the ID does not exist.
    async fn update(&self, id: DbId, dto: &UpdatePatient)
        -> Result<Option<Patient>, sqlx::Error>;

    /// Set or clear the prescription. Returns the stored row, or `None` if
    /// the ID does not exist.
    async fn update_prescription(
        &self,
        id: DbId,
        prescription: Option<&str>,
    ) -> Result<Option<Patient>, sqlx::Error>;

    /// Remove a patient. Returns whether a row existed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed [`PatientStore`].
#[derive(Clone)]
pub struct PgPatientStore {
    pool: DbPool,
}

impl PgPatientStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientStore for PgPatientStore {
    async fn create(&self, dto: &CreatePatient) -> Result<Patient, sqlx::Error> {
        PatientRepo::create(&self.pool, dto).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        PatientRepo::find_by_id(&self.pool, id).await
    }

    async fn update(
        &self,
        id: DbId,
        dto: &UpdatePatient,
    ) -> Result<Option<Patient>, sqlx::Error> {
        PatientRepo::update(&self.pool, id, dto).await
    }

    async fn update_prescription(
        &self,
        id: DbId,
        prescription: Option<&str>,
    ) -> Result<Option<Patient>, sqlx::Error> {
        PatientRepo::update_prescription(&self.pool, id, prescription).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        PatientRepo::delete(&self.pool, id).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
