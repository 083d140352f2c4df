pub mod enrollment;
pub mod event;
pub mod facility;
pub mod reservation;
pub mod user;

pub mod prelude;
