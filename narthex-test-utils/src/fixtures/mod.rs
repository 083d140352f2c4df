//! Test fixture modules for seeding the in-memory database.
//!
//! Each submodule hangs an accessor off [`crate::TestSetup`] that inserts rows
//! with standard test values, so tests only specify the fields they care about.

pub mod enrollment;
pub mod event;
pub mod facility;
pub mod reservation;
pub mod user;
