//! Request and response models for the Narthex web API.
//!
//! DTOs are serialized in camelCase to match the public API contract. Create and
//! update request types carry `validator` constraints and are extracted through
//! [`crate::extractor::ValidatedJson`].

pub mod api;
pub mod app;
pub mod auth;
pub mod enrollment;
pub mod event;
pub mod facility;
pub mod reservation;
pub mod user;
