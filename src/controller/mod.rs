//! HTTP controller endpoints for the Narthex web API.
//!
//! This module contains Axum handlers for the five resources plus login.
//! Controllers extract validated inputs, call repositories and services, and map
//! outcomes to the HTTP statuses of the API contract. Each endpoint carries its
//! utoipa OpenAPI annotation.

pub mod auth;
pub mod enrollment;
pub mod event;
pub mod facility;
pub mod reservation;
pub mod user;
