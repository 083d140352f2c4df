//! Business logic services.
//!
//! Services coordinate repositories and own the rules that plain CRUD does not
//! cover: user creation with the duplicate-email pre-check and password hashing,
//! password rotation, login token issuance, and the enrollment free/paid
//! eligibility rule.

pub mod auth;
pub mod enrollment;
pub mod user;
