use std::sync::{Arc, Mutex};

use actix_web::{test, test::TestRequest, web, web::ServiceConfig, App};
use adyen_tools::data_objects::{
    PaymentDetailsResponse,
    PaymentMethodsResponse,
    PaymentResponse,
    RecurringProcessingModel,
    ShopperInteraction,
};
use serde_json::{json, Value};

use super::helpers::{get_request, orchestrator, post_request};
use crate::{
    endpoint_tests::mocks::MockGateway,
    routes::{AdvancedDetailsRoute, PaymentMethodsRoute, PaymentsRoute, ResultLandingRoute},
};

#[actix_web::test]
async fn payment_methods_scale_major_units() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "amount": 100, "currency": "EUR", "countryCode": "NL" });
    let (status, body) = post_request("/paymentMethods", body, configure_payment_methods).await.unwrap();
    assert!(status.is_success());
    let response: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["paymentMethods"][0]["type"], "scheme");
    assert_eq!(response["storedPaymentMethods"][0]["id"], "SP1");
}

fn configure_payment_methods(cfg: &mut ServiceConfig) {
    let mut gateway = MockGateway::new();
    gateway
        .expect_payment_methods()
        .withf(|req| req.amount.value == 10_000 && req.shopper_locale == "en-US" && req.country_code == "NL")
        .returning(|_| {
            Ok(PaymentMethodsResponse {
                payment_methods: vec![json!({ "type": "scheme", "name": "Cards" })],
                stored_payment_methods: vec![json!({ "id": "SP1", "type": "scheme" })],
            })
        });
    cfg.service(PaymentMethodsRoute::<MockGateway>::new()).app_data(web::Data::new(orchestrator(gateway)));
}

#[actix_web::test]
async fn an_action_is_forwarded_verbatim_without_a_details_call() {
    let body = json!({
        "amount": { "currency": "EUR", "value": 10000 },
        "paymentMethod": { "type": "ideal", "issuer": "1121" }
    });
    // No payments_details expectation is set: a details call here would fail the test
    let (status, body) = post_request("/payments", body, configure_redirect_action).await.unwrap();
    assert!(status.is_success());
    let response: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["resultCode"], "RedirectShopper");
    assert_eq!(response["action"], json!({ "type": "redirect", "url": "https://psp.example/hpp", "method": "GET" }));
}

fn configure_redirect_action(cfg: &mut ServiceConfig) {
    let mut gateway = MockGateway::new();
    gateway.expect_payments().returning(|_| {
        Ok(PaymentResponse {
            result_code: Some("RedirectShopper".to_string()),
            action: Some(json!({ "type": "redirect", "url": "https://psp.example/hpp", "method": "GET" })),
            ..Default::default()
        })
    });
    cfg.service(PaymentsRoute::<MockGateway>::new()).app_data(web::Data::new(orchestrator(gateway)));
}

#[actix_web::test]
async fn details_complete_a_redirected_payment() {
    let body = json!({ "redirectResult": "X" });
    let (status, body) = post_request("/payments/details", body, configure_details).await.unwrap();
    assert!(status.is_success());
    let response: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["resultCode"], "Authorised");
    assert_eq!(response["pspReference"], "P1");
}

fn configure_details(cfg: &mut ServiceConfig) {
    let mut gateway = MockGateway::new();
    gateway
        .expect_payments_details()
        .withf(|req, _key| req.details.redirect_result.as_deref() == Some("X"))
        .returning(|_, _| {
            Ok(PaymentDetailsResponse {
                result_code: Some("Authorised".to_string()),
                psp_reference: Some("P1".to_string()),
                ..Default::default()
            })
        });
    cfg.service(AdvancedDetailsRoute::<MockGateway>::new()).app_data(web::Data::new(orchestrator(gateway)));
}

#[actix_web::test]
async fn stored_methods_authorise_as_cont_auth_without_re_storing() {
    let body = json!({
        "amount": { "currency": "EUR", "value": 1099 },
        "paymentMethod": { "type": "scheme", "storedPaymentMethodId": "SP1" },
        "shopperReference": "shopper-1"
    });
    let (status, _) = post_request("/payments", body, configure_stored_method).await.unwrap();
    assert!(status.is_success());
}

fn configure_stored_method(cfg: &mut ServiceConfig) {
    let mut gateway = MockGateway::new();
    gateway
        .expect_payments()
        .withf(|req| {
            req.shopper_interaction == Some(ShopperInteraction::ContAuth)
                && req.recurring_processing_model == Some(RecurringProcessingModel::CardOnFile)
                && req.store_payment_method == Some(false)
                // The amount is already in minor units and must pass through unchanged
                && req.amount.value == 1099
                && req.payment_method["storedPaymentMethodId"] == "SP1"
        })
        .returning(|_| Ok(PaymentResponse { result_code: Some("Authorised".to_string()), ..Default::default() }));
    cfg.service(PaymentsRoute::<MockGateway>::new()).app_data(web::Data::new(orchestrator(gateway)));
}

#[actix_web::test]
async fn first_time_card_storage_is_flagged_for_card_on_file() {
    let body = json!({
        "amount": { "currency": "EUR", "value": 5000 },
        "paymentMethod": { "type": "scheme", "encryptedCardNumber": "enc" },
        "shopperReference": "shopper-1",
        "enableRecurring": true
    });
    let (status, _) = post_request("/payments", body, configure_first_time_storage).await.unwrap();
    assert!(status.is_success());
}

fn configure_first_time_storage(cfg: &mut ServiceConfig) {
    let mut gateway = MockGateway::new();
    gateway
        .expect_payments()
        .withf(|req| {
            req.shopper_interaction == Some(ShopperInteraction::Ecommerce)
                && req.recurring_processing_model == Some(RecurringProcessingModel::CardOnFile)
                && req.store_payment_method == Some(true)
                && req.shopper_reference.as_deref() == Some("shopper-1")
        })
        .returning(|_| Ok(PaymentResponse { result_code: Some("Authorised".to_string()), ..Default::default() }));
    cfg.service(PaymentsRoute::<MockGateway>::new()).app_data(web::Data::new(orchestrator(gateway)));
}

#[actix_web::test]
async fn a_missing_return_url_defaults_to_the_result_landing() {
    let body = json!({
        "amount": { "currency": "EUR", "value": 10000 },
        "paymentMethod": { "type": "scheme", "encryptedCardNumber": "enc" }
    });
    let (status, _) = post_request("/payments", body, configure_default_return_url).await.unwrap();
    assert!(status.is_success());
}

fn configure_default_return_url(cfg: &mut ServiceConfig) {
    let mut gateway = MockGateway::new();
    // Synthesised from the inbound request's own scheme and host; the origin comes along too
    gateway
        .expect_payments()
        .withf(|req| req.return_url == "http://localhost:8080/result" && req.origin.as_deref() == Some("http://localhost:8080"))
        .returning(|_| Ok(PaymentResponse { result_code: Some("Authorised".to_string()), ..Default::default() }));
    cfg.service(PaymentsRoute::<MockGateway>::new()).app_data(web::Data::new(orchestrator(gateway)));
}

#[actix_web::test]
async fn every_attempt_gets_a_unique_order_reference() {
    let references = Arc::new(Mutex::new(Vec::<String>::new()));
    let mut gateway = MockGateway::new();
    let sink = Arc::clone(&references);
    gateway.expect_payments().times(2).returning(move |req| {
        sink.lock().unwrap().push(req.reference.clone());
        Ok(PaymentResponse { result_code: Some("Authorised".to_string()), ..Default::default() })
    });
    let app =
        App::new().service(PaymentsRoute::<MockGateway>::new()).app_data(web::Data::new(orchestrator(gateway)));
    let service = test::init_service(app).await;
    let body = json!({
        "amount": { "currency": "EUR", "value": 10000 },
        "paymentMethod": { "type": "scheme", "encryptedCardNumber": "enc" }
    });
    for _ in 0..2 {
        let req = TestRequest::post().uri("/payments").set_json(&body).to_request();
        let res = test::call_service(&service, req).await;
        assert!(res.status().is_success());
    }
    let references = references.lock().unwrap();
    assert_eq!(references.len(), 2);
    assert_ne!(references[0], references[1]);
    assert!(references.iter().all(|r| r.starts_with("ORDER-")));
}

#[actix_web::test]
async fn details_with_both_completion_fields_are_rejected() {
    let body = json!({ "redirectResult": "r", "threeDSResult": "t" });
    let (status, body) = post_request("/payments/details", body, configure_no_calls_expected).await.unwrap();
    assert_eq!(status.as_u16(), 400);
    assert!(body.is_empty());
}

#[actix_web::test]
async fn details_with_neither_completion_field_are_rejected() {
    let body = json!({ "paymentData": "pd" });
    let (status, body) = post_request("/payments/details", body, configure_no_calls_expected).await.unwrap();
    assert_eq!(status.as_u16(), 400);
    assert!(body.is_empty());
}

fn configure_no_calls_expected(cfg: &mut ServiceConfig) {
    let gateway = MockGateway::new();
    cfg.service(AdvancedDetailsRoute::<MockGateway>::new()).app_data(web::Data::new(orchestrator(gateway)));
}

#[actix_web::test]
async fn the_result_landing_completes_the_payment_and_renders_the_outcome() {
    let (status, body) = get_request("/result?redirectResult=RB", configure_landing).await.unwrap();
    assert!(status.is_success());
    assert!(body.contains("Payment Successful"));
}

#[actix_web::test]
async fn the_result_landing_without_a_redirect_result_shows_the_shell() {
    let (status, body) = get_request("/result", configure_landing).await.unwrap();
    assert!(status.is_success());
    assert!(body.contains("Payment Successful"));
}

fn configure_landing(cfg: &mut ServiceConfig) {
    let mut gateway = MockGateway::new();
    gateway
        .expect_payments_details()
        .withf(|req, _key| req.details.redirect_result.as_deref() == Some("RB"))
        .returning(|_, _| {
            Ok(PaymentDetailsResponse { result_code: Some("Authorised".to_string()), ..Default::default() })
        });
    cfg.service(ResultLandingRoute::<MockGateway>::new()).app_data(web::Data::new(orchestrator(gateway)));
}
