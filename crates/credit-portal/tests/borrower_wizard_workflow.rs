//! End-to-end behaviour of the borrower wizard through the public service and router:
//! step gating, upload screening and the verification lifecycle.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use credit_portal::config::SimulationConfig;
    use credit_portal::workflows::borrower::{
        ApplicationId, ApplicationWizard, BorrowerPortalService, DocumentKind, FileCandidate,
        PersonalInfoUpdate, WizardRepository,
    };
    use credit_portal::workflows::shared::RepositoryError;

    #[derive(Default)]
    pub(super) struct Wizards {
        inner: Mutex<HashMap<ApplicationId, ApplicationWizard>>,
    }

    impl WizardRepository for Wizards {
        fn insert(&self, wizard: ApplicationWizard) -> Result<ApplicationWizard, RepositoryError> {
            let mut guard = self.inner.lock().expect("lock");
            if guard.contains_key(&wizard.id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(wizard.id.clone(), wizard.clone());
            Ok(wizard)
        }

        fn update(&self, wizard: ApplicationWizard) -> Result<(), RepositoryError> {
            let mut guard = self.inner.lock().expect("lock");
            match guard.get_mut(&wizard.id) {
                Some(slot) => {
                    *slot = wizard;
                    Ok(())
                }
                None => Err(RepositoryError::NotFound),
            }
        }

        fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationWizard>, RepositoryError> {
            Ok(self.inner.lock().expect("lock").get(id).cloned())
        }

        fn remove(&self, id: &ApplicationId) -> Result<Option<ApplicationWizard>, RepositoryError> {
            Ok(self.inner.lock().expect("lock").remove(id))
        }
    }

    pub(super) fn service(simulation: SimulationConfig) -> Arc<BorrowerPortalService<Wizards>> {
        Arc::new(BorrowerPortalService::new(Arc::new(Wizards::default()), simulation))
    }

    pub(super) fn personal_info() -> PersonalInfoUpdate {
        PersonalInfoUpdate {
            full_name: Some("Farida Begum".to_string()),
            phone_number: Some("+91 90000 45678".to_string()),
            email: Some("farida@example.in".to_string()),
            aadhaar_number: Some("7788 1122 3344".to_string()),
            pan_number: None,
            address: Some("3 Park Street, Kolkata".to_string()),
        }
    }

    pub(super) fn required_uploads() -> Vec<(DocumentKind, FileCandidate)> {
        vec![
            (DocumentKind::Aadhaar, FileCandidate::new("aadhaar.jpeg", 512_000)),
            (DocumentKind::Pan, FileCandidate::new("pan.pdf", 256_000)),
            (DocumentKind::Electricity, FileCandidate::new("electricity-bill.png", 300_000)),
            (DocumentKind::Water, FileCandidate::new("water-bill.png", 300_000)),
            (DocumentKind::BankStatement, FileCandidate::new("statement.pdf", 4_000_000)),
            (DocumentKind::MobileRecharge, FileCandidate::new("recharge.jpg", 200_000)),
        ]
    }
}

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use credit_portal::config::SimulationConfig;
use credit_portal::workflows::borrower::{
    borrower_router, BorrowerServiceError, DocumentKind, FileCandidate, VerificationStatus,
    WizardError,
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn application_moves_from_personal_info_to_verified() {
    let service = common::service(SimulationConfig::instant());
    let id = service.start().expect("start").application_id;

    let blocked = service.next(&id).expect_err("empty step one");
    assert!(matches!(
        blocked,
        BorrowerServiceError::Wizard(WizardError::Incomplete { .. })
    ));
    assert_eq!(service.get(&id).expect("view").step, 1);

    service
        .update_personal_info(&id, common::personal_info())
        .expect("details stored");
    assert_eq!(service.next(&id).expect("step one clean").step, 2);

    for (kind, candidate) in common::required_uploads() {
        service
            .upload_document(&id, kind.id(), candidate)
            .await
            .expect("accepted");
    }
    for expected in 3..=5 {
        assert_eq!(service.next(&id).expect("step clean").step, expected);
    }

    let submitted = service.submit(&id).await.expect("submitted");
    assert_eq!(submitted.verification.status, VerificationStatus::InProgress);
    assert!(submitted.verification.composite_score.is_none());

    tokio::time::sleep(Duration::from_millis(20)).await;
    let done = service.get(&id).expect("view");
    assert_eq!(done.verification.status, VerificationStatus::Completed);
    assert_eq!(done.verification.composite_score, Some(78));
    assert_eq!(
        done.verification.estimated_income.as_deref(),
        Some("₹25,000 - ₹35,000")
    );
}

#[tokio::test]
async fn rejected_upload_leaves_slot_empty() {
    let service = common::service(SimulationConfig::instant());
    let id = service.start().expect("start").application_id;

    let error = service
        .upload_document(&id, DocumentKind::BankStatement.id(), FileCandidate::new("statement.docx", 10_000))
        .await
        .expect_err("docx is not accepted for statements");
    assert!(matches!(error, BorrowerServiceError::Upload(_)));
    assert!(service.get(&id).expect("view").documents.is_empty());
}

#[tokio::test(start_paused = true)]
async fn discarding_during_verification_stops_the_result() {
    let service = common::service(SimulationConfig {
        verification_delay: Duration::from_secs(3),
        ..SimulationConfig::instant()
    });
    let id = service.start().expect("start").application_id;
    service
        .update_personal_info(&id, common::personal_info())
        .expect("details");
    for (kind, candidate) in common::required_uploads() {
        service
            .upload_document(&id, kind.id(), candidate)
            .await
            .expect("accepted");
    }
    for _ in 0..4 {
        service.next(&id).expect("advance");
    }
    service.submit(&id).await.expect("submitted");
    assert!(service.verification_pending(&id));

    service.discard(&id).expect("discarded");
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert!(!service.verification_pending(&id));
    assert!(matches!(
        service.get(&id),
        Err(BorrowerServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn router_reports_field_errors_inline() {
    let router = borrower_router(common::service(SimulationConfig::instant()));

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/v1/borrower/applications")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let created: Value = serde_json::from_slice(&bytes).unwrap();
    let id = created["applicationId"].as_str().expect("id").to_string();

    let response = router
        .clone()
        .oneshot(
            Request::put(format!("/api/v1/borrower/applications/{id}/personal-info"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "fullName": "Farida Begum" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(
            Request::post(format!("/api/v1/borrower/applications/{id}/next"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["application"]["step"], 1);
    assert!(body["application"]["errors"]["phoneNumber"].is_string());
    assert!(body["application"]["errors"]["fullName"].is_null());
}
