//! The view dispatcher: maps terminal result codes onto the three user-visible outcome pages.

use actix_web::HttpResponse;

use crate::orchestrator::PaymentOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomePage {
    Success,
    Pending,
    Failed,
}

/// Selects the page for a result code. The comparison is upper-cased, so the mapping is
/// case-insensitive; anything unrecognised, a missing code included, lands on the failed page.
pub fn page_for(result_code: Option<&str>) -> OutcomePage {
    match result_code.map(str::to_uppercase).as_deref() {
        Some("AUTHORISED") | Some("AUTHENTICATED") => OutcomePage::Success,
        Some("PENDING") | Some("RECEIVED") => OutcomePage::Pending,
        _ => OutcomePage::Failed,
    }
}

/// Renders the outcome page for a resolved payment.
pub fn render_outcome(outcome: &PaymentOutcome) -> HttpResponse {
    match page_for(outcome.result_code.as_deref()) {
        OutcomePage::Success => page("Payment Successful", "Thank you! Your payment has been authorised.", outcome),
        OutcomePage::Pending => page("Payment Pending", "Your payment is being processed. You will be notified once it completes.", outcome),
        OutcomePage::Failed => {
            let code = outcome.result_code.as_deref().unwrap_or("Unknown");
            let message = format!("Payment was not successful: {code}");
            page("Payment Failed", &message, outcome)
        },
    }
}

/// The success page shell shown when the landing URL carries no redirect result. The widget
/// fills in the details client-side.
pub fn render_success_shell() -> HttpResponse {
    html(page_html("Payment Successful", "Thank you! Your payment has been received.", ""))
}

/// The failed page for a processing error, with the error message embedded.
pub fn render_failure(message: &str) -> HttpResponse {
    html(page_html("Payment Failed", &format!("Error processing payment: {message}"), ""))
}

fn page(title: &str, message: &str, outcome: &PaymentOutcome) -> HttpResponse {
    let mut details = String::new();
    if let Some(psp_reference) = &outcome.psp_reference {
        details.push_str(&format!("<p>PSP reference: <code>{psp_reference}</code></p>"));
    }
    if let Some(merchant_reference) = &outcome.merchant_reference {
        details.push_str(&format!("<p>Order reference: <code>{merchant_reference}</code></p>"));
    }
    html(page_html(title, message, &details))
}

fn page_html(title: &str, message: &str, details: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n\
         <body>\n<h1>{title}</h1>\n<p>{message}</p>\n{details}\n<a href=\"/\">Back to shop</a>\n</body>\n</html>\n"
    )
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body)
}
