//! Integration tests for the wizard against a stub readiness API.
//!
//! Each test spins up an Axum server on a random port serving canned
//! responses and drives the real HTTP client + session through it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;

use interview_ready::api::{HttpReadinessApi, ReadinessApi};
use interview_ready::config::ApiConfig;
use interview_ready::contact::ContactForm;
use interview_ready::error::ApiError;
use interview_ready::wizard::{
    Answer, ProfileDraft, Status, SubmitOutcome, WizardSession, WizardStep,
};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Start an Axum server on a random port, return its base URL.
async fn start_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://127.0.0.1:{port}")
}

fn client_for(base: &str) -> Arc<dyn ReadinessApi> {
    Arc::new(HttpReadinessApi::new(ApiConfig::with_base_url(base)).unwrap())
}

fn student_draft() -> ProfileDraft {
    ProfileDraft {
        status: Some(Status::ThirdYear),
        primary_skill: "Python".to_string(),
        placement_type: "SDE".to_string(),
        email: "a@b.com".to_string(),
        phone: "9876543210".to_string(),
        ..Default::default()
    }
}

// ── Wizard end-to-end ────────────────────────────────────────────────

#[tokio::test]
async fn full_flow_reaches_results_with_badge() {
    timeout(TEST_TIMEOUT, async {
        let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let cap = Arc::clone(&captured);

        let app = Router::new()
            .route(
                "/interview-ready/plan",
                post(|| async {
                    Json(json!({
                        "evaluation_plan": [
                            "Have you practiced DSA problems recently?",
                            {"question": "Can you explain your projects end to end?"},
                            {"question": "Have you done a mock interview?", "study_topic": "Mock interviews"},
                        ]
                    }))
                }),
            )
            .route(
                "/interview-ready/evaluate",
                post(move |Json(body): Json<Value>| {
                    let cap = Arc::clone(&cap);
                    async move {
                        *cap.lock().unwrap() = Some(body);
                        Json(json!({
                            "readiness_percentage": 82,
                            "readiness_label": "Strong",
                            "strengths": ["Consistent practice"],
                            "gaps": [{"topic": "System design"}],
                            "learning_recommendations": [
                                {"topic": "Mock interviews", "why": "Pressure practice", "priority": "high"}
                            ]
                        }))
                    }
                }),
            );
        let base = start_server(app).await;

        let mut session = WizardSession::new(client_for(&base));
        session.start().unwrap();

        let outcome = session.submit_profile(student_draft()).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Advanced));
        assert_eq!(session.step(), WizardStep::Questions);
        assert_eq!(session.progress().total, 3);

        for i in 0..3 {
            session.select_answer(i, Answer::Yes).unwrap();
        }
        let outcome = session.submit_answers().await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Advanced));
        assert_eq!(session.step(), WizardStep::Results);

        let report = session.report().unwrap();
        assert_eq!(report.percent_text(), "82%");
        assert_eq!(report.readiness_label, "Strong");
        assert!(report.has_badge());
        assert_eq!(report.gaps, vec!["System design"]);

        // The wire payload carried explicit answers and derived topics.
        let body = captured.lock().unwrap().take().unwrap();
        assert_eq!(body["answers"], json!(["Yes", "Yes", "Yes"]));
        assert_eq!(
            body["correct_answers"],
            json!(["Yes", "Yes", "Yes"])
        );
        assert_eq!(
            body["study_topics"][2],
            json!("Mock interviews")
        );

        // Retake drops everything.
        session.retake().unwrap();
        assert_eq!(session.step(), WizardStep::Intro);
        assert!(session.profile().is_none());
        assert!(session.plan().is_none());
        assert!(session.report().is_none());
        assert_eq!(session.progress().answered, 0);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn plan_rate_limit_returns_to_profile_with_banner() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new().route(
            "/interview-ready/plan",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({"detail": "slow down"})),
                )
            }),
        );
        let base = start_server(app).await;

        let mut session = WizardSession::new(client_for(&base));
        session.start().unwrap();

        let outcome = session.submit_profile(student_draft()).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::RemoteFailed));
        assert_eq!(session.step(), WizardStep::Profile);

        let banner = session.banner().unwrap();
        assert_eq!(banner.message, "Too many requests. Please wait a moment.");
        assert!(banner.retryable);

        // The form is still usable: a second submission goes out again.
        let outcome = session.submit_profile(student_draft()).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::RemoteFailed));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn empty_plan_normalizes_to_fallback_question() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new().route(
            "/interview-ready/plan",
            post(|| async { Json(json!({"evaluation_plan": []})) }),
        );
        let base = start_server(app).await;

        let mut session = WizardSession::new(client_for(&base));
        session.start().unwrap();
        session.submit_profile(student_draft()).await.unwrap();

        let plan = session.plan().unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.entries()[0].question, "Interview fundamentals");
        assert_eq!(plan.entries()[0].correct_answer, "Yes");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn evaluate_validation_detail_is_concatenated() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new()
            .route(
                "/interview-ready/plan",
                post(|| async { Json(json!({"evaluation_plan": ["Q1"]})) }),
            )
            .route(
                "/interview-ready/evaluate",
                post(|| async {
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({
                            "detail": ["answers length mismatch", {"msg": "questions required"}]
                        })),
                    )
                }),
            );
        let base = start_server(app).await;

        let mut session = WizardSession::new(client_for(&base));
        session.start().unwrap();
        session.submit_profile(student_draft()).await.unwrap();
        session.select_answer(0, Answer::No).unwrap();

        let outcome = session.submit_answers().await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::RemoteFailed));
        assert_eq!(session.step(), WizardStep::Questions);

        let banner = session.banner().unwrap();
        assert_eq!(
            banner.message,
            "answers length mismatch. questions required"
        );
        assert!(!banner.retryable);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn server_error_maps_to_generic_retry_message() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new().route(
            "/interview-ready/plan",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = start_server(app).await;

        let mut session = WizardSession::new(client_for(&base));
        session.start().unwrap();
        session.submit_profile(student_draft()).await.unwrap();

        assert_eq!(
            session.banner().unwrap().message,
            "Something went wrong. Please try again."
        );
    })
    .await
    .expect("test timed out");
}

// ── Auxiliary endpoints ──────────────────────────────────────────────

#[tokio::test]
async fn stats_success_and_failure() {
    timeout(TEST_TIMEOUT, async {
        let ok_app = Router::new().route(
            "/interview-ready/stats",
            get(|| async { Json(json!({"total_checks": 1234})) }),
        );
        let base = start_server(ok_app).await;
        let stats = client_for(&base).fetch_stats().await.unwrap();
        assert_eq!(stats.count(), 1234);

        let failing_app = Router::new().route(
            "/interview-ready/stats",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = start_server(failing_app).await;
        let err = client_for(&base).fetch_stats().await.unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500 }));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn track_beacon_ignores_response_status() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new().route(
            "/interview-ready/track",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = start_server(app).await;
        // Beacon delivery only fails on transport errors.
        client_for(&base).track_page_view().await.unwrap();
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn contact_submit_round_trip() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new().route(
            "/contact/submit",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["name"], "Asha");
                Json(json!({"message": "Thanks! We'll get back to you."}))
            }),
        );
        let base = start_server(app).await;

        let form = ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            message: "Looking for a mentor.".to_string(),
        };
        let request = form.validate().unwrap();
        let resp = client_for(&base).submit_contact(request).await.unwrap();
        assert_eq!(resp.message.as_deref(), Some("Thanks! We'll get back to you."));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn network_failure_surfaces_as_retryable_banner() {
    timeout(TEST_TIMEOUT, async {
        // Nothing is listening on this port.
        let mut session = WizardSession::new(client_for("http://127.0.0.1:1"));
        session.start().unwrap();

        let outcome = session.submit_profile(student_draft()).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::RemoteFailed));
        assert_eq!(session.step(), WizardStep::Profile);
        let banner = session.banner().unwrap();
        assert!(banner.retryable);
        assert_eq!(
            banner.message,
            "Network error. Please check your connection and try again."
        );
    })
    .await
    .expect("test timed out");
}
