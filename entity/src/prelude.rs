pub use crate::enrollment::Entity as Enrollment;
pub use crate::event::Entity as Event;
pub use crate::facility::Entity as Facility;
pub use crate::reservation::Entity as Reservation;
pub use crate::user::Entity as User;
