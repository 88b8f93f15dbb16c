//! Handlers for the `/patients` resource.
//!
//! Each handler makes exactly one store call. Update handlers respond with
//! the row as stored after the write, so the response always reflects the
//! authoritative `prescription`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clinic_core::error::CoreError;
use clinic_core::types::DbId;
use clinic_db::models::patient::{CreatePatient, UpdatePatient, UpdatePrescription};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, PatientIdPath};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Patient",
        id,
    })
}

/// POST /patients
///
/// Register a new patient. The store assigns the ID; the prescription
/// starts empty.
pub async fn create_patient(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePatient>,
) -> AppResult<impl IntoResponse> {
    let patient = state.store.create(&input).await?;

    tracing::info!(patient_id = patient.id, doctor = %patient.doctor, "Patient created");

    Ok((StatusCode::CREATED, Json(patient)))
}

/// GET /patients/{id}
pub async fn get_patient(
    State(state): State<AppState>,
    PatientIdPath(id): PatientIdPath,
) -> AppResult<impl IntoResponse> {
    let patient = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(patient))
}

/// PUT /patients/{id}
///
/// Overwrite name, age and doctor. Any `prescription` in the body is
/// ignored.
pub async fn update_patient(
    State(state): State<AppState>,
    PatientIdPath(id): PatientIdPath,
    AppJson(input): AppJson<UpdatePatient>,
) -> AppResult<impl IntoResponse> {
    let patient = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(patient_id = id, "Patient updated");

    Ok(Json(patient))
}

/// PUT /patients/{id}/prescription
///
/// Set the prescription, or clear it with `{"prescription": null}`.
pub async fn update_prescription(
    State(state): State<AppState>,
    PatientIdPath(id): PatientIdPath,
    AppJson(input): AppJson<UpdatePrescription>,
) -> AppResult<impl IntoResponse> {
    let patient = state
        .store
        .update_prescription(id, input.prescription.as_deref())
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        patient_id = id,
        cleared = patient.prescription.is_none(),
        "Prescription updated",
    );

    Ok(Json(patient))
}

/// DELETE /patients/{id}
///
/// Idempotent: responds 204 whether or not the patient existed.
pub async fn delete_patient(
    State(state): State<AppState>,
    PatientIdPath(id): PatientIdPath,
) -> AppResult<impl IntoResponse> {
    let deleted = state.store.delete(id).await?;

    if deleted {
        tracing::info!(patient_id = id, "Patient deleted");
    } else {
        tracing::debug!(patient_id = id, "Delete of absent patient");
    }

    Ok(StatusCode::NO_CONTENT)
}
