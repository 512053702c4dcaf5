//! Integration tests for the lesson request and approval flow.

mod common;

use classgate_database::store::LessonRequestStore;
use classgate_entity::lesson_request::RequestStatus;
use http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn test_request_lesson_creates_pending_record() {
    let app = common::TestApp::new();
    let cookie = app.login_user("a@x.com", "secret123").await;

    let response = app
        .request("POST", "/request-lesson/3", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Waiting for admin approval"));

    let requests = app.lesson_store.find_all().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].email, "a@x.com");
    assert_eq!(requests[0].day, "3");
    assert_eq!(requests[0].status, RequestStatus::Pending);
}

#[tokio::test]
async fn test_request_lesson_requires_login() {
    let app = common::TestApp::new();

    let response = app.request("POST", "/request-lesson/3", None, None).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/login"));
    assert!(app.lesson_store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_lesson_view_requires_login() {
    let app = common::TestApp::new();

    let response = app.request("GET", "/lesson/3", None, None).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/login"));
}

#[tokio::test]
async fn test_pending_request_shows_pending_message() {
    let app = common::TestApp::new();
    let cookie = app.login_user("a@x.com", "secret123").await;
    app.request("POST", "/request-lesson/3", None, Some(&cookie))
        .await;

    let response = app.request("GET", "/lesson/3", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("still pending approval"));
}

#[tokio::test]
async fn test_unrequested_lesson_shows_pending_message_too() {
    let app = common::TestApp::new();
    let cookie = app.login_user("a@x.com", "secret123").await;

    // No request at all looks the same as an unapproved one.
    let response = app.request("GET", "/lesson/5", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("still pending approval"));
}

#[tokio::test]
async fn test_end_to_end_approval_flow() {
    let app = common::TestApp::new();
    let user_cookie = app.login_user("a@x.com", "secret123").await;

    // User requests day 3.
    app.request("POST", "/request-lesson/3", None, Some(&user_cookie))
        .await;
    let request_id = app.lesson_store.find_all().await.unwrap()[0].id;

    // Still gated.
    let gated = app
        .request("GET", "/lesson/3", None, Some(&user_cookie))
        .await;
    assert!(gated.body.contains("still pending approval"));

    // Admin approves.
    let admin_cookie = app.login_admin(None).await;
    let approve = app
        .request(
            "POST",
            &format!("/admin/approve-request/{request_id}"),
            None,
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(approve.status, StatusCode::SEE_OTHER);
    assert_eq!(approve.location.as_deref(), Some("/admin"));

    // The approval is visible on the user's very next request.
    let lesson = app
        .request("GET", "/lesson/3", None, Some(&user_cookie))
        .await;
    assert_eq!(lesson.status, StatusCode::OK);
    assert!(lesson.body.contains("Lesson day 3"));

    // And the dashboard now lists it.
    let main = app.request("GET", "/main", None, Some(&user_cookie)).await;
    assert!(main.body.contains("/lesson/3"));
}

#[tokio::test]
async fn test_approval_is_scoped_to_the_requested_day() {
    let app = common::TestApp::new();
    let user_cookie = app.login_user("a@x.com", "secret123").await;

    app.request("POST", "/request-lesson/3", None, Some(&user_cookie))
        .await;
    let request_id = app.lesson_store.find_all().await.unwrap()[0].id;

    let admin_cookie = app.login_admin(None).await;
    app.request(
        "POST",
        &format!("/admin/approve-request/{request_id}"),
        None,
        Some(&admin_cookie),
    )
    .await;

    let other_day = app
        .request("GET", "/lesson/4", None, Some(&user_cookie))
        .await;
    assert!(other_day.body.contains("still pending approval"));
}

#[tokio::test]
async fn test_approval_does_not_leak_across_users() {
    let app = common::TestApp::new();
    let first = app.login_user("a@x.com", "secret123").await;
    let second = app.login_user("b@x.com", "secret123").await;

    app.request("POST", "/request-lesson/3", None, Some(&first))
        .await;
    let request_id = app.lesson_store.find_all().await.unwrap()[0].id;

    let admin_cookie = app.login_admin(None).await;
    app.request(
        "POST",
        &format!("/admin/approve-request/{request_id}"),
        None,
        Some(&admin_cookie),
    )
    .await;

    let lesson = app.request("GET", "/lesson/3", None, Some(&second)).await;
    assert!(lesson.body.contains("still pending approval"));
}

#[tokio::test]
async fn test_duplicate_requests_are_independent() {
    let app = common::TestApp::new();
    let cookie = app.login_user("a@x.com", "secret123").await;

    app.request("POST", "/request-lesson/3", None, Some(&cookie))
        .await;
    app.request("POST", "/request-lesson/3", None, Some(&cookie))
        .await;

    let requests = app.lesson_store.find_all().await.unwrap();
    assert_eq!(requests.len(), 2);

    // Approving one leaves the other pending.
    let admin_cookie = app.login_admin(None).await;
    app.request(
        "POST",
        &format!("/admin/approve-request/{}", requests[0].id),
        None,
        Some(&admin_cookie),
    )
    .await;

    let requests = app.lesson_store.find_all().await.unwrap();
    let approved = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Approved)
        .count();
    assert_eq!(approved, 1);
}

#[tokio::test]
async fn test_repeat_approval_is_a_no_op() {
    let app = common::TestApp::new();
    let cookie = app.login_user("a@x.com", "secret123").await;
    app.request("POST", "/request-lesson/3", None, Some(&cookie))
        .await;
    let request_id = app.lesson_store.find_all().await.unwrap()[0].id;

    let admin_cookie = app.login_admin(None).await;
    for _ in 0..2 {
        let response = app
            .request(
                "POST",
                &format!("/admin/approve-request/{request_id}"),
                None,
                Some(&admin_cookie),
            )
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
    }

    let request = app
        .lesson_store
        .find_by_id(request_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(request.status, RequestStatus::Approved);
}

#[tokio::test]
async fn test_approve_unknown_id_is_a_store_failure() {
    let app = common::TestApp::new();
    let admin_cookie = app.login_admin(None).await;

    let response = app
        .request(
            "POST",
            &format!("/admin/approve-request/{}", Uuid::new_v4()),
            None,
            Some(&admin_cookie),
        )
        .await;

    // No distinct not-found signal: it reads like any other store error.
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.contains("Failed to approve the request"));
}
