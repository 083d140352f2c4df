mod create_facility {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use entity::facility::FacilityStatus;
    use narthex_test_utils::prelude::*;

    use narthex::{
        controller::facility::create_facility, extractor::ValidatedJson,
        model::facility::CreateFacilityRequest,
    };

    use crate::setup::{app_state, body_json};

    /// Expect a 201 echoing the created facility
    #[tokio::test]
    async fn creates_facility() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let resp = create_facility(
            State(app_state(&test)),
            ValidatedJson(CreateFacilityRequest {
                name: "Chapel".to_string(),
                description: "Small chapel by the garden".to_string(),
                status: FacilityStatus::Available,
            }),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = body_json(resp).await;
        assert_eq!(body["name"], "Chapel");
        assert_eq!(body["status"], "AVAILABLE");

        Ok(())
    }
}

mod get_facilities {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use narthex_test_utils::prelude::*;

    use narthex::controller::facility::{get_all_facilities, get_facility_by_id};

    use crate::setup::{app_state, body_json};

    /// Expect every inserted facility to come back
    #[tokio::test]
    async fn lists_all_facilities() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        test.facility().insert_facility().await?;
        test.facility().insert_facility().await?;

        let resp = get_all_facilities(State(app_state(&test)))
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
    async fn returns_404_for_nonexistent_facility() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = get_facility_by_id(State(app_state(&test)), Path(99)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod update_facility {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use entity::facility::FacilityStatus;
    use narthex_test_utils::prelude::*;

    use narthex::{
        controller::facility::update_facility, extractor::ValidatedJson,
        model::facility::UpdateFacilityRequest,
    };

    use crate::setup::{app_state, body_json};

    /// Expect only the provided fields to change
    #[tokio::test]
    async fn merges_partial_update() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let facility = test.facility().insert_facility().await?;

        let resp = update_facility(
            State(app_state(&test)),
            Path(facility.id),
            ValidatedJson(UpdateFacilityRequest {
                name: None,
                description: None,
                status: Some(FacilityStatus::Maintenance),
            }),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["name"], facility.name);
        assert_eq!(body["status"], "MAINTENANCE");

        Ok(())
    }

    /// Expect a 404 when updating an ID with no row
    #[tokio::test]
    async fn returns_404_for_nonexistent_facility() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = update_facility(
            State(app_state(&test)),
            Path(99),
            ValidatedJson(UpdateFacilityRequest {
                name: Some("Chapel".to_string()),
                description: None,
                status: None,
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete_facility {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use narthex_test_utils::prelude::*;

    use narthex::controller::facility::delete_facility;

    use crate::setup::app_state;

    /// Expect a 204 for an existing facility
    #[tokio::test]
    async fn deletes_facility() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let facility = test.facility().insert_facility().await?;

        let resp = delete_facility(State(app_state(&test)), Path(facility.id))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        Ok(())
    }

    /// Expect a 400 while events still reference the facility
    #[tokio::test]
    async fn fails_while_referenced_by_event() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let facility = test.facility().insert_facility().await?;
        test.event().insert_event(facility.id).await?;

        let result = delete_facility(State(app_state(&test)), Path(facility.id)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect a 404 when deleting an ID with no row
    #[tokio::test]
    async fn returns_404_for_nonexistent_facility() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = delete_facility(State(app_state(&test)), Path(99)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
