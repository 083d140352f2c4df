//! Data access layer.
//!
//! One repository per resource, wrapping sea-orm queries. Repositories are generic
//! over [`sea_orm::ConnectionTrait`] so the same queries run against the pooled
//! connection or inside a transaction.

pub mod enrollment;
pub mod event;
pub mod facility;
pub mod reservation;
pub mod user;

pub use enrollment::EnrollmentRepository;
pub use event::EventRepository;
pub use facility::FacilityRepository;
pub use reservation::ReservationRepository;
pub use user::UserRepository;
