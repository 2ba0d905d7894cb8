//! Integration tests for the full gateway exchange.
//!
//! These tests verify the end-to-end flow with the real adapters:
//! 1. PaymentManager assembles and signs a payment request
//! 2. HiddenFieldFormRenderer renders the hosted-page hand-off form
//! 3. The gateway's signed callback is verified and classified
//! 4. Registered listeners receive the outcome in order
//!
//! Signature fixtures are SHA-1 digests of the canonical parameter string
//! under the test passphrases.

use std::sync::{Arc, Mutex};

use rust_decimal_macros::dec;

use ogone_gateway::adapters::ogone::{AllParametersShaComposer, HiddenFieldFormRenderer};
use ogone_gateway::application::{PaymentManager, PaymentOrder};
use ogone_gateway::config::MerchantConfig;
use ogone_gateway::domain::payment::{PaymentNotification, PaymentStatus, RequestField};
use ogone_gateway::ports::PaymentListener;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Listener recording every outcome it receives
struct CapturingListener {
    events: Arc<Mutex<Vec<String>>>,
}

impl CapturingListener {
    fn new(events: Arc<Mutex<Vec<String>>>) -> Box<Self> {
        Box::new(Self { events })
    }
}

impl PaymentListener for CapturingListener {
    fn on_success(&self, notification: &PaymentNotification) {
        self.events.lock().unwrap().push(format!(
            "success:{}:{}",
            notification.order_id().unwrap_or("-"),
            notification.pay_id().unwrap_or("-")
        ));
    }

    fn on_failure(&self, notification: &PaymentNotification) {
        self.events.lock().unwrap().push(format!(
            "failure:{}",
            notification.order_id().unwrap_or("-")
        ));
    }
}

fn manager() -> PaymentManager<AllParametersShaComposer, HiddenFieldFormRenderer> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let config = MerchantConfig::new("DEMOSHOP", "test", "s3cr3t-in!", "s3cr3t-out!").unwrap();
    PaymentManager::new(
        config,
        AllParametersShaComposer::new(),
        HiddenFieldFormRenderer::new(),
    )
    .unwrap()
}

fn successful_callback() -> Vec<(&'static str, &'static str)> {
    vec![
        ("ACCEPTANCE", "test123"),
        ("AMOUNT", "19.99"),
        ("BRAND", "VISA"),
        ("CURRENCY", "EUR"),
        ("NCERROR", "0"),
        ("ORDERID", "ORD-1001"),
        ("PAYID", "3011229"),
        ("PM", "CreditCard"),
        ("STATUS", "9"),
        ("SHASIGN", "AEA05B4A38F7C512A78D351437914529491F3BF6"),
    ]
}

// =============================================================================
// Request Form Flow
// =============================================================================

#[test]
fn renders_a_signed_hand_off_form() {
    let order = PaymentOrder::new("fr", "ORD-1001", "Jane Doe", dec!(19.99));
    let html = manager().request_form(&order).unwrap();

    assert!(html.starts_with(
        "<form id=\"ogone-payment\" \
         action=\"https://secure.ogone.com/ncol/test/orderstandard_utf8.asp\" \
         method=\"post\">"
    ));
    assert!(html.contains("<input type=\"hidden\" name=\"PSPID\" value=\"DEMOSHOP\" />"));
    assert!(html.contains("<input type=\"hidden\" name=\"ORDERID\" value=\"ORD-1001\" />"));
    assert!(html.contains("<input type=\"hidden\" name=\"AMOUNT\" value=\"1999\" />"));
    assert!(html.contains("<input type=\"hidden\" name=\"CURRENCY\" value=\"EUR\" />"));
    assert!(html.contains("<input type=\"hidden\" name=\"LANGUAGE\" value=\"fr_FR\" />"));
    assert!(html.contains("<input type=\"hidden\" name=\"CN\" value=\"Jane Doe\" />"));
    assert!(html.contains(
        "<input type=\"hidden\" name=\"SHASIGN\" \
         value=\"7330FAFFBDCA495BFA41F70C9F756943A3F26D3F\" />"
    ));
    assert!(html.ends_with("</form>\n"));
}

#[test]
fn overrides_are_covered_by_the_signature() {
    let config = MerchantConfig::new("DEMOSHOP", "test", "s3cr3t-in!", "s3cr3t-out!")
        .unwrap()
        .with_option("TITLE", "Demo Shop Checkout");
    let manager = PaymentManager::new(
        config,
        AllParametersShaComposer::new(),
        HiddenFieldFormRenderer::new(),
    )
    .unwrap();

    let order = PaymentOrder::new("fr", "ORD-1001", "Jane Doe", dec!(19.99))
        .with_option(RequestField::AcceptUrl, "https://shop.example/return");
    let html = manager.request_form(&order).unwrap();

    assert!(html.contains("name=\"TITLE\" value=\"Demo Shop Checkout\""));
    assert!(html.contains("name=\"ACCEPTURL\" value=\"https://shop.example/return\""));
    assert!(html.contains(
        "name=\"SHASIGN\" value=\"3B715A3DDA8CC1A731DF8BAF28FD7E0C5F1BCC2B\""
    ));
}

// =============================================================================
// Notification Flow
// =============================================================================

#[test]
fn authentic_successful_callback_reaches_listeners_in_order() {
    let mut manager = manager();
    let events = Arc::new(Mutex::new(Vec::new()));
    manager.add_listener(CapturingListener::new(events.clone()));
    manager.add_listener(CapturingListener::new(events.clone()));

    manager.handle_notification(successful_callback());

    assert_eq!(
        *events.lock().unwrap(),
        vec!["success:ORD-1001:3011229", "success:ORD-1001:3011229"]
    );
}

#[test]
fn signature_case_does_not_matter() {
    let mut manager = manager();
    let events = Arc::new(Mutex::new(Vec::new()));
    manager.add_listener(CapturingListener::new(events.clone()));

    let mut params = successful_callback();
    params.pop();
    params.push(("SHASIGN", "aea05b4a38f7c512a78d351437914529491f3bf6"));
    manager.handle_notification(params);

    assert_eq!(*events.lock().unwrap(), vec!["success:ORD-1001:3011229"]);
}

#[test]
fn declined_callback_is_dispatched_as_failure() {
    let mut manager = manager();
    let events = Arc::new(Mutex::new(Vec::new()));
    manager.add_listener(CapturingListener::new(events.clone()));

    manager.handle_notification(vec![
        ("ACCEPTANCE", "test123"),
        ("AMOUNT", "19.99"),
        ("BRAND", "VISA"),
        ("CURRENCY", "EUR"),
        ("NCERROR", "50001111"),
        ("ORDERID", "ORD-1001"),
        ("PAYID", "3011229"),
        ("PM", "CreditCard"),
        ("STATUS", "2"),
        ("SHASIGN", "BEA11489D24868879F683801A635F54D3AA76F91"),
    ]);

    assert_eq!(*events.lock().unwrap(), vec!["failure:ORD-1001"]);
}

#[test]
fn tampered_amount_invalidates_the_signature() {
    let mut manager = manager();
    let events = Arc::new(Mutex::new(Vec::new()));
    manager.add_listener(CapturingListener::new(events.clone()));

    let mut params = successful_callback();
    for entry in &mut params {
        if entry.0 == "AMOUNT" {
            entry.1 = "190.99";
        }
    }
    manager.handle_notification(params);

    assert_eq!(*events.lock().unwrap(), vec!["failure:ORD-1001"]);
}

#[test]
fn unsigned_callback_is_dispatched_as_failure() {
    let mut manager = manager();
    let events = Arc::new(Mutex::new(Vec::new()));
    manager.add_listener(CapturingListener::new(events.clone()));

    let mut params = successful_callback();
    params.pop();
    manager.handle_notification(params);

    assert_eq!(*events.lock().unwrap(), vec!["failure:ORD-1001"]);
}

#[test]
fn notification_accessors_expose_the_callback_details() {
    let notification = PaymentNotification::from_params(successful_callback());

    assert_eq!(notification.order_id(), Some("ORD-1001"));
    assert_eq!(notification.pay_id(), Some("3011229"));
    assert_eq!(notification.status(), Some(PaymentStatus::PaymentRequested));
    assert_eq!(notification.amount(), Some(dec!(19.99)));
    assert_eq!(notification.currency(), Some("EUR"));
    assert_eq!(notification.brand(), Some("VISA"));
}

// =============================================================================
// Environment Configuration Flow
// =============================================================================

#[test]
fn environment_backed_configuration_drives_the_manager() {
    std::env::set_var("OGONE__PSPID", "DEMOSHOP");
    std::env::set_var("OGONE__ENVIRONMENT", "prod");
    std::env::set_var("OGONE__SHA_IN", "s3cr3t-in!");
    std::env::set_var("OGONE__SHA_OUT", "s3cr3t-out!");

    let config = MerchantConfig::from_env().unwrap();
    let manager = PaymentManager::new(
        config,
        AllParametersShaComposer::new(),
        HiddenFieldFormRenderer::new(),
    )
    .unwrap();

    let order = PaymentOrder::new("en", "ORD-2002", "John Doe", dec!(5.00));
    let html = manager.request_form(&order).unwrap();

    assert!(html.contains("action=\"https://secure.ogone.com/ncol/prod/orderstandard_utf8.asp\""));
    assert!(html.contains("name=\"LANGUAGE\" value=\"en_US\""));
    assert!(html.contains("name=\"AMOUNT\" value=\"500\""));

    for key in [
        "OGONE__PSPID",
        "OGONE__ENVIRONMENT",
        "OGONE__SHA_IN",
        "OGONE__SHA_OUT",
    ] {
        std::env::remove_var(key);
    }
}
