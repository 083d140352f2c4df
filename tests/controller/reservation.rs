mod create_reservation {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use chrono::{Duration, Utc};
    use entity::user::MembershipType;
    use narthex_test_utils::prelude::*;

    use narthex::{
        controller::reservation::create_reservation, extractor::ValidatedJson,
        model::reservation::CreateReservationRequest,
    };

    use crate::setup::{app_state, body_json};

    /// Expect a 201 echoing the created reservation
    #[tokio::test]
    async fn creates_reservation() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let facility = test.facility().insert_facility().await?;
        let user = test
            .user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;

        let resp = create_reservation(
            State(app_state(&test)),
            ValidatedJson(CreateReservationRequest {
                date: Utc::now() + Duration::days(3),
                facility_id: facility.id,
                user_id: user.id,
            }),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = body_json(resp).await;
        assert_eq!(body["facilityId"], facility.id);
        assert_eq!(body["userId"], user.id);

        Ok(())
    }

    /// Expect a second reservation for the same facility and date to succeed
    #[tokio::test]
    async fn allows_overlapping_reservations() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let facility = test.facility().insert_facility().await?;
        let user = test
            .user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;
        let date = Utc::now() + Duration::days(3);

        for _ in 0..2 {
            let result = create_reservation(
                State(app_state(&test)),
                ValidatedJson(CreateReservationRequest {
                    date,
                    facility_id: facility.id,
                    user_id: user.id,
                }),
            )
            .await;
            assert!(result.is_ok());
        }

        Ok(())
    }

    /// Expect a 400 when the user does not exist
    #[tokio::test]
    async fn fails_for_nonexistent_user() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let facility = test.facility().insert_facility().await?;

        let result = create_reservation(
            State(app_state(&test)),
            ValidatedJson(CreateReservationRequest {
                date: Utc::now() + Duration::days(3),
                facility_id: facility.id,
                user_id: 99,
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod get_reservations {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use entity::user::MembershipType;
    use narthex_test_utils::prelude::*;

    use narthex::controller::reservation::{get_all_reservations, get_reservation_by_id};

    use crate::setup::{app_state, body_json};

    /// Expect every inserted reservation to come back
    #[tokio::test]
    async fn lists_all_reservations() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let facility = test.facility().insert_facility().await?;
        let user = test
            .user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;
        test.reservation()
            .insert_reservation(facility.id, user.id)
            .await?;
        test.reservation()
            .insert_reservation(facility.id, user.id)
            .await?;

        let resp = get_all_reservations(State(app_state(&test)))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 2);

        Ok(())
    }

    /// Expect a 404 for an ID with no row
    #[tokio::test]
    async fn returns_404_for_nonexistent_reservation() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = get_reservation_by_id(State(app_state(&test)), Path(99)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod update_reservation {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use chrono::Utc;
    use entity::user::MembershipType;
    use narthex_test_utils::prelude::*;

    use narthex::{
        controller::reservation::update_reservation, extractor::ValidatedJson,
        model::reservation::UpdateReservationRequest,
    };

    use crate::setup::{app_state, body_json};

    /// Expect only the provided fields to change
    #[tokio::test]
    async fn merges_partial_update() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let facility = test.facility().insert_facility().await?;
        let other_facility = test.facility().insert_facility().await?;
        let user = test
            .user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;
        let reservation = test
            .reservation()
            .insert_reservation(facility.id, user.id)
            .await?;

        let resp = update_reservation(
            State(app_state(&test)),
            Path(reservation.id),
            ValidatedJson(UpdateReservationRequest {
                date: None,
                facility_id: Some(other_facility.id),
                user_id: None,
            }),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["facilityId"], other_facility.id);
        assert_eq!(body["userId"], user.id);

        Ok(())
    }

    /// Expect a 404 when updating an ID with no row
    #[tokio::test]
    async fn returns_404_for_nonexistent_reservation() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = update_reservation(
            State(app_state(&test)),
            Path(99),
            ValidatedJson(UpdateReservationRequest {
                date: Some(Utc::now()),
                facility_id: None,
                user_id: None,
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete_reservation {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use entity::user::MembershipType;
    use narthex_test_utils::prelude::*;

    use narthex::controller::reservation::delete_reservation;

    use crate::setup::app_state;

    /// Expect a 204 for an existing reservation
    #[tokio::test]
    async fn deletes_reservation() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let facility = test.facility().insert_facility().await?;
        let user = test
            .user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;
        let reservation = test
            .reservation()
            .insert_reservation(facility.id, user.id)
            .await?;

        let resp = delete_reservation(State(app_state(&test)), Path(reservation.id))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        Ok(())
    }

    /// Expect a 404 when deleting an ID with no row
    #[tokio::test]
    async fn returns_404_for_nonexistent_reservation() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = delete_reservation(State(app_state(&test)), Path(99)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
