mod support;

use actix_web::dev::Service;
use actix_web::test;
use serde_json::json;
use support::auth::bearer_header;
use support::{build_test_state, create_test_app, test_security};

#[actix_web::test]
async fn test_todos_scope_requires_token() {
    let state = build_test_state(test_security()).await;
    let app = create_test_app(state).await;

    for req in [
        test::TestRequest::get().uri("/todos").to_request(),
        test::TestRequest::get().uri("/todos/1").to_request(),
        test::TestRequest::post()
            .uri("/todos")
            .set_json(json!({ "title": "x" }))
            .to_request(),
        test::TestRequest::put()
            .uri("/todos/1")
            .set_json(json!({ "title": "x" }))
            .to_request(),
        test::TestRequest::delete().uri("/todos/1").to_request(),
    ] {
        let err = app.call(req).await.expect_err("expected error response");
        assert_eq!(err.as_response_error().status_code().as_u16(), 401);
    }
}

#[actix_web::test]
async fn test_todos_crud_roundtrip() {
    let security = test_security();
    let state = build_test_state(security.clone()).await;
    let app = create_test_app(state).await;
    let auth = ("Authorization", bearer_header("alice", "admin,editor", &security));

    // Create
    let req = test::TestRequest::post()
        .uri("/todos")
        .insert_header(auth.clone())
        .set_json(json!({ "title": "write the report" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("created id");
    assert_eq!(created["title"], "write the report");
    assert_eq!(created["completed"], false);

    // List contains it
    let req = test::TestRequest::get()
        .uri("/todos")
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let todos: serde_json::Value = test::read_body_json(resp).await;
    let titles: Vec<&str> = todos
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["title"].as_str())
        .collect();
    assert!(titles.contains(&"write the report"));

    // Get by id
    let req = test::TestRequest::get()
        .uri(&format!("/todos/{id}"))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let fetched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(fetched["id"], created["id"]);

    // Update
    let req = test::TestRequest::put()
        .uri(&format!("/todos/{id}"))
        .insert_header(auth.clone())
        .set_json(json!({ "title": "report sent", "completed": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], "report sent");
    assert_eq!(updated["completed"], true);

    // Delete
    let req = test::TestRequest::delete()
        .uri(&format!("/todos/{id}"))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    // Gone afterwards
    let req = test::TestRequest::get()
        .uri(&format!("/todos/{id}"))
        .insert_header(auth)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_get_unknown_todo_is_404() {
    let security = test_security();
    let state = build_test_state(security.clone()).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/todos/9999")
        .insert_header(("Authorization", bearer_header("bob", "", &security)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "TODO_NOT_FOUND");
}

#[actix_web::test]
async fn test_create_with_invalid_body_is_400() {
    let security = test_security();
    let state = build_test_state(security.clone()).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/todos")
        .insert_header(("Authorization", bearer_header("alice", "admin,editor", &security)))
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_JSON");
}
