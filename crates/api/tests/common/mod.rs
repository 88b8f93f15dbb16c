//! Shared helpers for API integration tests.
//!
//! The app is driven through `tower::ServiceExt::oneshot` with an in-memory
//! [`PatientStore`], so no database or TCP listener is needed.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use clinic_api::config::{LogFormat, ServerConfig};
use clinic_api::state::AppState;
use clinic_core::types::DbId;
use clinic_db::models::patient::{CreatePatient, Patient, UpdatePatient};
use clinic_db::PatientStore;

// ---------------------------------------------------------------------------
// Substitute stores
// ---------------------------------------------------------------------------

/// In-memory [`PatientStore`] with store-assigned, never reused IDs.
#[derive(Default)]
pub struct MemoryPatientStore {
    rows: Mutex<BTreeMap<DbId, Patient>>,
    last_id: AtomicI64,
}

impl MemoryPatientStore {
    /// Read a row directly, bypassing the HTTP layer.
    pub fn row(&self, id: DbId) -> Option<Patient> {
        self.rows.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl PatientStore for MemoryPatientStore {
    async fn create(&self, dto: &CreatePatient) -> Result<Patient, sqlx::Error> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let patient = Patient {
            id,
            name: dto.name.clone(),
            age: dto.age,
            doctor: dto.doctor.clone(),
            prescription: None,
        };
        self.rows.lock().unwrap().insert(id, patient.clone());
        Ok(patient)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        Ok(self.row(id))
    }

    async fn update(
        &self,
        id: DbId,
        dto: &UpdatePatient,
    ) -> Result<Option<Patient>, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|row| {
            row.name = dto.name.clone();
            row.age = dto.age;
            row.doctor = dto.doctor.clone();
            row.clone()
        }))
    }

    async fn update_prescription(
        &self,
        id: DbId,
        prescription: Option<&str>,
    ) -> Result<Option<Patient>, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|row| {
            row.prescription = prescription.map(str::to_string);
            row.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

/// A [`PatientStore`] whose every call fails as if the database were down.
pub struct UnavailableStore;

#[async_trait]
impl PatientStore for UnavailableStore {
    async fn create(&self, _dto: &CreatePatient) -> Result<Patient, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update(
        &self,
        _id: DbId,
        _dto: &UpdatePatient,
    ) -> Result<Option<Patient>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update_prescription(
        &self,
        _id: DbId,
        _prescription: Option<&str>,
    ) -> Result<Option<Patient>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router (same middleware as production) on
/// top of the given store.
pub fn build_test_app(store: Arc<dyn PatientStore>) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };
    clinic_api::app::build_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, "GET", uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, "DELETE", uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "POST", uri, Body::from(body.to_string()), Some("application/json")).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "PUT", uri, Body::from(body.to_string()), Some("application/json")).await
}

/// Send a raw body, optionally without a `Content-Type` header.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a patient through the API and return its ID.
pub async fn create_patient(app: Router, body: serde_json::Value) -> DbId {
    let response = post_json(app, "/patients", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
