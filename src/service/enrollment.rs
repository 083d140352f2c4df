use entity::enrollment::EnrollmentType;
use entity::user::MembershipType;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, IsolationLevel, TransactionTrait};

use crate::{
    data::{enrollment::NewEnrollment, EnrollmentRepository, UserRepository},
    error::Error,
    model::enrollment::CreateEnrollmentRequest,
};

/// Cap of FREE enrollments per (user, event) pair under FAMILY membership.
pub static FREE_ENROLLMENT_QUOTA: u64 = 5;

/// Service owning enrollment creation and the free/paid eligibility rule.
pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    /// Creates a new instance of [`EnrollmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an enrollment, deciding FREE vs PAID at creation time.
    ///
    /// The eligibility lookup, quota count, and insert all run inside one
    /// transaction so two near-simultaneous requests at the quota boundary
    /// cannot both be granted FREE.
    pub async fn create_enrollment(
        &self,
        request: CreateEnrollmentRequest,
    ) -> Result<entity::enrollment::Model, Error> {
        // SQLite has no isolation-level clause; its single-writer lock already
        // serializes the count-and-insert pair.
        let txn = match self.db.get_database_backend() {
            DbBackend::Postgres => {
                self.db
                    .begin_with_config(Some(IsolationLevel::Serializable), None)
                    .await?
            }
            _ => self.db.begin().await?,
        };

        let enrollment_type =
            determine_enrollment_type(&txn, request.user_id, request.event_id).await?;

        let enrollment = EnrollmentRepository::new(&txn)
            .create(NewEnrollment {
                name: request.name,
                age: request.age,
                church: request.church,
                email: request.email,
                event_id: request.event_id,
                user_id: request.user_id,
                enrollment_type,
            })
            .await?;

        txn.commit().await?;

        Ok(enrollment)
    }
}

/// Decides the enrollment type for a create request.
///
/// PAID unless the enrollment is tied to a FAMILY-membership user who still has
/// free quota left for the event:
/// 1. no user ID, or no user with that ID (the foreign key rejects the insert
///    afterwards) - PAID;
/// 2. membership is not FAMILY - PAID;
/// 3. fewer than [`FREE_ENROLLMENT_QUOTA`] existing FREE enrollments for this
///    (user, event) pair - FREE, otherwise PAID.
pub async fn determine_enrollment_type<C: ConnectionTrait>(
    conn: &C,
    user_id: Option<i32>,
    event_id: i32,
) -> Result<EnrollmentType, Error> {
    let Some(user_id) = user_id else {
        return Ok(EnrollmentType::Paid);
    };

    let user = match UserRepository::new(conn).get_by_id(user_id).await? {
        Some(user) => user,
        None => return Ok(EnrollmentType::Paid),
    };

    if user.membership_type != MembershipType::Family {
        return Ok(EnrollmentType::Paid);
    }

    let free_count = EnrollmentRepository::new(conn)
        .count_free_for_user_event(user_id, event_id)
        .await?;

    if free_count < FREE_ENROLLMENT_QUOTA {
        Ok(EnrollmentType::Free)
    } else {
        Ok(EnrollmentType::Paid)
    }
}
