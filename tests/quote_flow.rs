mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};

#[tokio::test]
async fn test_quote_crud_round_trip() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, token) = client.create_test_user().await;

    // Create
    let req = test::TestRequest::post()
        .uri("/quotes")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(test_data::sample_quote())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: serde_json::Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().expect("id missing").to_string();
    assert_eq!(
        created["quote"].as_str().unwrap(),
        "Simplicity is the soul of efficiency."
    );
    assert!(created["display"].as_bool().unwrap());

    // Read back
    let req = test::TestRequest::get()
        .uri(&format!("/quotes/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(fetched["id"].as_str().unwrap(), id);

    // List contains it
    let req = test::TestRequest::get().uri("/quotes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Update text only; display must survive
    let req = test::TestRequest::put()
        .uri(&format!("/quotes/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "quote": "Updated quote." }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["quote"].as_str().unwrap(), "Updated quote.");
    assert!(updated["display"].as_bool().unwrap());

    // Delete
    let req = test::TestRequest::delete()
        .uri(&format!("/quotes/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("deleted"));

    // Gone afterwards
    let req = test::TestRequest::get()
        .uri(&format!("/quotes/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quote_mutations_require_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    // No Authorization header at all
    let req = test::TestRequest::post()
        .uri("/quotes")
        .set_json(test_data::sample_quote())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Garbage token
    let req = test::TestRequest::post()
        .uri("/quotes")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .set_json(test_data::sample_quote())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Reads stay open
    let req = test::TestRequest::get().uri("/quotes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_random_quote_honors_display_flag() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, token) = client.create_test_user().await;

    // Empty table: nothing to pick
    let req = test::TestRequest::get().uri("/quotes/random").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // One visible, one hidden
    for payload in [test_data::sample_quote(), test_data::sample_hidden_quote()] {
        let req = test::TestRequest::post()
            .uri("/quotes")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // Only the visible quote may ever come back
    for _ in 0..5 {
        let req = test::TestRequest::get().uri("/quotes/random").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["display"].as_bool().unwrap());
    }
}

#[tokio::test]
async fn test_quote_validation_and_missing_ids() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, token) = client.create_test_user().await;

    // Empty quote text rejected
    let req = test::TestRequest::post()
        .uri("/quotes")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "quote": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Unknown id
    let missing = uuid::Uuid::new_v4();
    let req = test::TestRequest::get()
        .uri(&format!("/quotes/{}", missing))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&format!("/quotes/{}", missing))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "quote": "Nothing to update." }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/quotes/{}", missing))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_random_quote_stays_available_across_deletes() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, token) = client.create_test_user().await;

    let mut ids = Vec::new();
    for i in 0..3 {
        let req = test::TestRequest::post()
            .uri("/quotes")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "quote": format!("Quote number {}.", i) }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    // Shrink the table between picks; random must keep returning a
    // quote as long as one is left.
    while let Some(id) = ids.pop() {
        for _ in 0..5 {
            let req = test::TestRequest::get().uri("/quotes/random").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::delete()
            .uri(&format!("/quotes/{}", id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/quotes/random").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
