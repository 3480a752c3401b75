//! End-to-end portal flow: controller + CMS client + file-backed session

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use vagtportal_core::{PortalController, PortalState, SessionStore, ViewMode};
use vagtportal_domain::{CmsConfig, UserProfile};
use vagtportal_infra::{FileSessionStorage, ShiftsClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).single().unwrap()
}

fn profile() -> UserProfile {
    UserProfile {
        id: 7,
        email: "anna@example.com".to_string(),
        firstname: Some("Anna".to_string()),
        surname: None,
        confirmed: true,
        blocked: false,
    }
}

fn controller(server: &MockServer, session_path: &std::path::Path) -> PortalController {
    let config = CmsConfig { base_url: server.uri(), request_timeout_secs: 5 };
    let provider = Arc::new(ShiftsClient::new(&config).unwrap());
    let session = Arc::new(SessionStore::new(Arc::new(FileSessionStorage::new(session_path))));
    PortalController::new(session, provider)
}

#[tokio::test]
async fn login_fetches_and_groups_the_portal_events() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shifts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": 1,
                    "Date": "2025-06-21T08:00:00Z",
                    "volunteers": [{"Name": "Anna"}, {"Name": "Bo", "Instructor": true}]
                },
                {
                    "id": 2,
                    "Date": "2025-07-05T08:00:00Z",
                    "volunteers": [{"Name": "Cai"}]
                }
            ],
            "meta": {"pagination": {"page": 1, "pageSize": 100, "pageCount": 1, "total": 2}}
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller(&server, &dir.path().join("session.json"));

    controller.initialize(now()).await;
    assert_eq!(controller.state(), PortalState::LoggedOut);

    controller.login(profile(), "tok123", now()).await;

    assert_eq!(controller.state(), PortalState::Ready(ViewMode::Calendar));
    assert_eq!(controller.events().len(), 3);
    assert_eq!(controller.events()[1].title, "Vagt: Bo (Instruktør)");

    let grouped = controller.list_view(now());
    let keys: Vec<&str> = grouped.month_keys().collect();
    assert_eq!(keys, vec!["2025-06", "2025-07"]);
    assert_eq!(grouped.shift_count("2025-06"), 1);
}

#[tokio::test]
async fn forbidden_shift_access_lands_in_pending_approval() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shifts"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller(&server, &dir.path().join("session.json"));

    controller.initialize(now()).await;
    controller.login(profile(), "tok123", now()).await;

    assert_eq!(controller.state(), PortalState::PendingApproval);
    assert!(controller.events().is_empty());

    controller.logout();
    assert_eq!(controller.state(), PortalState::LoggedOut);
}
