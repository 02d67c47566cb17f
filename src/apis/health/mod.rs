//! Health check of the accounts service.

mod api;

pub use api::HealthApi;
