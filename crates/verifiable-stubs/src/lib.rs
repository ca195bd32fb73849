//! Mock primary-source verification services: doctor credentials, academic
//! admissions, insurance claims and compliance screening.

pub mod academic;
pub mod compliance;
pub mod config;
pub mod doctors;
pub mod error;
pub mod extract;
pub mod insurance;
pub mod store;
pub mod telemetry;
