mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::{bearer, sample_invoice, MockStoreApi, TestApp};

fn invoices() -> MockStoreApi {
    MockStoreApi {
        invoices: vec![sample_invoice()],
        ..Default::default()
    }
}

#[actix_rt::test]
async fn test_invoice_requires_session() {
    let test_app = TestApp::new(invoices());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/invoices/77").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
async fn test_invoice_view_forwards_token() {
    let test_app = TestApp::new(invoices());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/invoices/77")
        .insert_header(bearer(None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["invoice_number"], "INV-2026-077");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["status_color"], "yellow");
    assert_eq!(body["total"], "€180.00");
    assert_eq!(body["balance_due"], "€180.00");
    assert_eq!(body["discount"], Value::Null);
    assert_eq!(body["can_pay"], true);

    let tokens = test_app.api.tokens_seen.lock().unwrap();
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_some());
}

#[actix_rt::test]
async fn test_pay_requires_payment_method() {
    let test_app = TestApp::new(invoices());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/invoices/77/pay")
        .insert_header(bearer(None))
        .set_json(json!({"payment_method": " "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/invoices/77/pay")
        .insert_header(bearer(None))
        .set_json(json!({"payment_method": "card", "amount": 180}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "paid");
}

#[actix_rt::test]
async fn test_lookup_by_reference_is_rate_limited() {
    let test_app = TestApp::new(invoices());
    let app = test::init_service(test_app.create_app()).await;

    for _ in 0..3 {
        let req = test::TestRequest::get()
            .uri("/api/invoices/lookup?ref_number=INV-2026-077")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    let req = test::TestRequest::get()
        .uri("/api/invoices/lookup?ref_number=INV-2026-077")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 429);
}

#[actix_rt::test]
async fn test_lookup_validation_and_unknown_reference() {
    let test_app = TestApp::new(invoices());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/invoices/lookup?ref_number=")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    let req = test::TestRequest::get()
        .uri("/api/invoices/lookup?ref_number=INV-0000")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_rt::test]
async fn test_pickup_toggle_reflects_upstream_update() {
    let test_app = TestApp::new(invoices());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/api/invoices/lookup/pickup")
        .set_json(json!({"ref_number": " INV-2026-077 ", "picked_up": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["picked_up"], true);

    let pickups = test_app.api.pickups.lock().unwrap();
    assert_eq!(pickups.len(), 1);
    assert_eq!(pickups[0].ref_number, "INV-2026-077");
    assert!(pickups[0].picked_up);
}

#[actix_rt::test]
async fn test_pickup_unknown_reference_is_not_sent() {
    let test_app = TestApp::new(invoices());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/api/invoices/lookup/pickup")
        .set_json(json!({"ref_number": "INV-0000", "picked_up": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    assert!(test_app.api.pickups.lock().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_pickup_not_applied_when_upstream_rejects() {
    let test_app = TestApp::new(MockStoreApi {
        fail_pickup: true,
        ..invoices()
    });
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/api/invoices/lookup/pickup")
        .set_json(json!({"ref_number": "INV-2026-077", "picked_up": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("picked_up").is_none());
    assert_eq!(body["error"], "Upstream service error");
    assert!(test_app.api.pickups.lock().unwrap().is_empty());

    // The stored invoice still reports the original state.
    let req = test::TestRequest::get()
        .uri("/api/invoices/lookup?ref_number=INV-2026-077")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["picked_up"], false);
}
