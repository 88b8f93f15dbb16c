//! Route definitions for the `/patients` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::patient;
use crate::state::AppState;

/// Routes mounted at `/patients`.
///
/// The receptionist and doctor labels describe the intended callers only;
/// no role is enforced.
///
/// ```text
/// POST   /patients                        -> create_patient       (receptionist)
/// GET    /patients/{id}                   -> get_patient
/// PUT    /patients/{id}                   -> update_patient       (receptionist)
/// DELETE /patients/{id}                   -> delete_patient       (receptionist)
/// PUT    /patients/{id}/prescription      -> update_prescription  (doctor)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/patients", post(patient::create_patient))
        .route(
            "/patients/{id}",
            put(patient::update_patient)
                .get(patient::get_patient)
                .delete(patient::delete_patient),
        )
        .route(
            "/patients/{id}/prescription",
            put(patient::update_prescription),
        )
}
