mod common;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use common::{create_test_db, new_question};
use quizgate::db::Db;
use quizgate::{router, AppState};
use tower::ServiceExt;

fn app(db: Db) -> Router {
    router(AppState { db })
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request build should succeed");
    app.clone().oneshot(req).await.expect("router should respond")
}

async fn post_form(app: &Router, uri: &str, body: &str) -> axum::response::Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request build should succeed");
    app.clone().oneshot(req).await.expect("router should respond")
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

#[tokio::test]
async fn empty_quiz_renders_placeholder_page() {
    let db = create_test_db().await;
    let app = app(db);

    let resp = get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn correct_answer_advances_passwordless_question() {
    let db = create_test_db().await;
    db.create_question(&new_question("Capital of France?", "Paris", ""))
        .await
        .unwrap();
    db.create_question(&new_question("Q2", "A2", "x1"))
        .await
        .unwrap();
    let app = app(db.clone());

    let resp = post_form(&app, "/", "action=answer&answer=Paris").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(db.current_index().await.unwrap(), 1);
}

#[tokio::test]
async fn wrong_answer_keeps_index_and_shows_feedback() {
    let db = create_test_db().await;
    db.create_question(&new_question("Capital of France?", "Paris", ""))
        .await
        .unwrap();
    let app = app(db.clone());

    let resp = post_form(&app, "/", "action=answer&answer=London").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(db.current_index().await.unwrap(), 0);
}

#[tokio::test]
async fn password_question_gates_until_correct_password() {
    let db = create_test_db().await;
    db.create_question(&new_question("Gated", "Yes", "x1"))
        .await
        .unwrap();
    let app = app(db.clone());

    // Correct answer renders the gate but does not advance
    let resp = post_form(&app, "/", "action=answer&answer=Yes").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(db.current_index().await.unwrap(), 0);

    // Wrong password stays at the gate
    let resp = post_form(&app, "/", "action=password&question_password=bad").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(db.current_index().await.unwrap(), 0);

    // Correct password advances
    let resp = post_form(&app, "/", "action=password&question_password=x1").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(db.current_index().await.unwrap(), 1);
}

#[tokio::test]
async fn password_submission_cannot_skip_passwordless_question() {
    let db = create_test_db().await;
    db.create_question(&new_question("Open", "Go", ""))
        .await
        .unwrap();
    let app = app(db.clone());

    let resp = post_form(&app, "/", "action=password&question_password=").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(db.current_index().await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_action_is_a_bad_request() {
    let db = create_test_db().await;
    db.create_question(&new_question("Q", "A", "")).await.unwrap();
    let app = app(db);

    let resp = post_form(&app, "/", "action=skip&answer=A").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn two_question_walkthrough_reaches_completion() {
    let db = create_test_db().await;
    db.create_question(&new_question("Capital of France?", "Paris", ""))
        .await
        .unwrap();
    db.create_question(&new_question("Capital of Spain?", "Madrid", "x1"))
        .await
        .unwrap();
    db.set_final_message("All questions solved, bravo!")
        .await
        .unwrap();
    let app = app(db.clone());

    // Q1: passwordless, advances immediately
    let resp = post_form(&app, "/", "action=answer&answer=Paris").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(db.current_index().await.unwrap(), 1);

    // Q2: correct answer enters the gate
    let resp = post_form(&app, "/", "action=answer&answer=Madrid").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(db.current_index().await.unwrap(), 1);

    // Wrong password keeps the index
    let resp = post_form(&app, "/", "action=password&question_password=nope").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(db.current_index().await.unwrap(), 1);

    // Correct password completes the quiz
    let resp = post_form(&app, "/", "action=password&question_password=x1").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(db.current_index().await.unwrap(), 2);

    // Completion page shows the configured final message
    let resp = get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("All questions solved, bravo!"));
}

#[tokio::test]
async fn submissions_after_completion_redirect_home() {
    let db = create_test_db().await;
    db.create_question(&new_question("Q", "A", "")).await.unwrap();
    db.advance_progress().await.unwrap();
    let app = app(db.clone());

    let resp = post_form(&app, "/", "action=answer&answer=A").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(db.current_index().await.unwrap(), 1);
}

#[tokio::test]
async fn set_locale_sets_cookie_and_redirects() {
    let db = create_test_db().await;
    let app = app(db);

    let resp = post_form(&app, "/set-locale", "locale=ar").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let cookie = resp
        .headers()
        .get("set-cookie")
        .expect("set-cookie header")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("lang=ar"));
}
