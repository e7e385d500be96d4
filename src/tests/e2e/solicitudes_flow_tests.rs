use axum::http::StatusCode;
use serde_json::json;

use crate::shell::http::router;
use crate::tests::fixtures::http::{empty_request, json_request, send};
use crate::tests::fixtures::state::make_test_state;

fn ids(items: &serde_json::Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn moves_a_message_from_solicitudes_to_conversaciones_activas() {
    let app = router(make_test_state());

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/messages",
            r#"{"name":"Ana","phone":"555","content":"hi"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "pending");
    let id = created["id"].as_str().unwrap().to_string();

    let (_, pending) = send(&app, empty_request("GET", "/solicitudes")).await;
    assert_eq!(ids(&pending["solicitudes"]), [id.clone()]);
    assert_eq!(pending["conversaciones_activas"], json!([]));

    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            &format!("/messages/{id}"),
            r#"{"status":"accepted"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, accepted) = send(&app, empty_request("GET", "/solicitudes")).await;
    assert_eq!(accepted["solicitudes"], json!([]));
    assert_eq!(ids(&accepted["conversaciones_activas"]), [id.clone()]);

    let (_, again) = send(&app, empty_request("GET", "/solicitudes")).await;
    assert_eq!(again, accepted);

    send(
        &app,
        json_request(
            "PUT",
            &format!("/messages/{id}"),
            r#"{"status":"archived"}"#,
        ),
    )
    .await;
    let (_, archived) = send(&app, empty_request("GET", "/solicitudes")).await;
    assert_eq!(
        archived,
        json!({ "solicitudes": [], "conversaciones_activas": [] })
    );

    let (_, messages) = send(&app, empty_request("GET", "/messages")).await;
    assert_eq!(messages.as_array().unwrap().len(), 1);
    assert_eq!(messages[0]["status"], "archived");
}

#[tokio::test]
async fn lists_messages_before_calls_in_each_group() {
    let app = router(make_test_state());

    for body in [
        r#"{"id":"c1","name":"Luis","phone":"777"}"#,
        r#"{"id":"c2","name":"Eva","phone":"778","status":"accepted"}"#,
    ] {
        send(&app, json_request("POST", "/calls", body)).await;
    }
    for body in [
        r#"{"id":"m1","name":"Ana","phone":"555","content":"hola"}"#,
        r#"{"id":"m2","name":"Bea","phone":"556","content":"adios","status":"accepted"}"#,
        r#"{"id":"m3","name":"Cris","phone":"557","content":"?","status":"spam"}"#,
    ] {
        send(&app, json_request("POST", "/messages", body)).await;
    }

    let (status, json) = send(&app, empty_request("GET", "/solicitudes")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json["solicitudes"]), ["m1", "c1"]);
    assert_eq!(ids(&json["conversaciones_activas"]), ["m2", "c2"]);
    assert!(json["solicitudes"][0].get("content").is_some());
    assert!(json["solicitudes"][1].get("content").is_none());
}

#[tokio::test]
async fn replaces_the_current_user() {
    let app = router(make_test_state());

    let (status, _) = send(&app, empty_request("GET", "/current_user")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(
        &app,
        json_request(
            "POST",
            "/current_user",
            r#"{"id":"u1","name":"Ana","phone":"555","email":"ana@example.com"}"#,
        ),
    )
    .await;
    send(
        &app,
        json_request(
            "POST",
            "/current_user",
            r#"{"id":"u2","name":"Bea","phone":"556","email":"bea@example.com"}"#,
        ),
    )
    .await;

    let (status, user) = send(&app, empty_request("GET", "/current_user")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        user,
        json!({ "id": "u2", "name": "Bea", "phone": "556", "email": "bea@example.com" })
    );
}
