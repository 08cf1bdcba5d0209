//! End-to-end profile lifecycle through the public service facade, the JSON file store and
//! the HTTP router.

mod common {
    use std::sync::Arc;

    use diaspora_ro::profile::{JsonFileProfileRepository, ProfileService};
    use diaspora_ro::rules::{
        CountryCode, Duration, FamilySelection, FamilyStatus, QuizAnswers, WorkSituation,
    };
    use tempfile::TempDir;

    pub(super) fn answers(
        residence: CountryCode,
        situation: WorkSituation,
        duration: Duration,
        family: &[FamilyStatus],
    ) -> QuizAnswers {
        QuizAnswers {
            residence_country: Some(residence),
            work_situation: Some(situation),
            duration: Some(duration),
            family_status: Some(
                FamilySelection::from_statuses(family.iter().copied()).expect("non-empty"),
            ),
        }
    }

    pub(super) fn file_service(
        dir: &TempDir,
    ) -> Arc<ProfileService<JsonFileProfileRepository>> {
        let repository = JsonFileProfileRepository::new(dir.path().join("profile.json"));
        Arc::new(ProfileService::new(Arc::new(repository)))
    }
}

mod lifecycle {
    use std::fs;

    use diaspora_ro::dashboard::{CardStatus, TopicId};
    use diaspora_ro::profile::ProfileServiceError;
    use diaspora_ro::rules::{
        CountryCode, DocumentId, Duration, FamilySelection, FamilyStatus, QuizAnswers,
        StepPriority, WorkSituation,
    };
    use tempfile::TempDir;

    use super::common::{answers, file_service};

    #[test]
    fn profile_survives_a_restart() {
        let dir = TempDir::new().expect("temp dir");
        let submitted = file_service(&dir)
            .submit(answers(
                CountryCode::De,
                WorkSituation::PostedWorker,
                Duration::Under3Months,
                &[FamilyStatus::Single],
            ))
            .expect("submit succeeds");

        let reloaded = file_service(&dir).current().expect("profile persisted");

        assert_eq!(reloaded, submitted);
        assert_eq!(reloaded.destination_country, CountryCode::De);
        assert_eq!(
            reloaded.applicable_rules.consolidated_next_steps[0].priority,
            StepPriority::Urgent
        );
    }

    #[test]
    fn editing_answers_rebuilds_documents_and_dashboard() {
        let dir = TempDir::new().expect("temp dir");
        let service = file_service(&dir);
        service
            .submit(answers(
                CountryCode::Ro,
                WorkSituation::LocalEmployee,
                Duration::NotYet,
                &[FamilyStatus::Single],
            ))
            .expect("submit succeeds");

        let revised = service
            .revise(QuizAnswers {
                work_situation: Some(WorkSituation::Returning),
                duration: Some(Duration::OverTwoYears),
                family_status: Some(
                    FamilySelection::from_statuses([FamilyStatus::SpouseWith])
                        .expect("non-empty"),
                ),
                ..QuizAnswers::default()
            })
            .expect("revise succeeds");

        assert_eq!(revised.destination_country, CountryCode::Ro);
        assert_eq!(
            revised.applicable_rules.required_documents,
            vec![DocumentId::U1Form, DocumentId::S1Form]
        );
        assert!(revised.applicable_rules.healthcare.family_covered);

        let cards = service.dashboard().expect("dashboard available");
        let social = cards
            .iter()
            .find(|card| card.topic == TopicId::SocialSecurity)
            .expect("social security card");
        assert_eq!(social.status, CardStatus::ActionNeeded);
    }

    #[test]
    fn corrupted_store_reads_as_missing_profile() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("profile.json"), "not json at all").expect("write");

        let service = file_service(&dir);
        assert!(matches!(
            service.current(),
            Err(ProfileServiceError::NotFound)
        ));

        service
            .submit(answers(
                CountryCode::Es,
                WorkSituation::RemoteWorker,
                Duration::SixMonthsToOneYear,
                &[FamilyStatus::Other],
            ))
            .expect("submit overwrites corrupted store");
        assert!(service.current().is_ok());
    }

    #[test]
    fn profiles_from_an_older_rules_release_are_refreshed() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("profile.json");
        let service = file_service(&dir);
        let original = service
            .submit(answers(
                CountryCode::Fr,
                WorkSituation::PostedWorker,
                Duration::OverTwoYears,
                &[FamilyStatus::Single],
            ))
            .expect("submit succeeds");

        let mut stored: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
        stored["rules_version"] = serde_json::json!("0.1.0");
        stored["applicable_rules"]["required_documents"] = serde_json::json!([]);
        fs::write(&path, stored.to_string()).expect("write");

        let refreshed = file_service(&dir).current().expect("current");
        assert_eq!(refreshed.id, original.id);
        assert!(!refreshed.is_stale());
        assert_eq!(
            refreshed.applicable_rules.required_documents,
            vec![DocumentId::A1Form]
        );
    }
}

mod routing {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use diaspora_ro::profile::profile_router;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::common::file_service;

    async fn send(dir: &TempDir, request: Request<Body>) -> (StatusCode, Value) {
        let response = profile_router(file_service(dir))
            .oneshot(request)
            .await
            .expect("route executes");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, body)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn http_lifecycle_persists_between_routers() {
        let dir = TempDir::new().expect("temp dir");

        let (status, created) = send(
            &dir,
            json_request(
                "POST",
                "/api/v1/profile",
                json!({
                    "residence_country": "IT",
                    "work_situation": "remote_worker",
                    "duration": "1y_to_2y",
                    "family_status": ["single", "children_with"],
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["family_status"], json!(["children_with"]));
        assert_eq!(created["applicable_rules"]["taxes"]["has_dual_obligations"], true);

        let (status, fetched) = send(
            &dir,
            Request::builder()
                .uri("/api/v1/profile")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["id"], created["id"]);

        let (status, _) = send(
            &dir,
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/profile")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(
            &dir,
            json_request("PATCH", "/api/v1/profile", json!({ "duration": "over_2y" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no profile has been saved yet");
    }
}
