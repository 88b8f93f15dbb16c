//! Repositories own the SQL for each table. Every method runs exactly one
//! parameterized statement against the pool.

mod patient_repo;

pub use patient_repo::PatientRepo;
