//! Narthex server application core modules.
//!
//! This crate contains all server-side functionality for the Narthex application:
//! HTTP routing, request validation, database operations, and the business rules
//! for church-facility events, user enrollments, reservations, and facilities.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extractor;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
