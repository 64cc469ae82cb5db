//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! All JSON endpoints answer errors with an empty-bodied `400` (see [`crate::errors`]); the
//! browser landing pages render the failure page instead, since their caller is a human.

use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use log::*;
use serde::Deserialize;
use serde_json::json;

use crate::{
    data_objects::{
        AdvancedDetailsRequest,
        AdvancedPaymentRequest,
        CheckoutIntent,
        RedirectDetailsRequest,
        SessionResultRequest,
        ThreeDSDetailsRequest,
    },
    errors::ServerError,
    gateway::PspGateway,
    helpers::{default_return_url, request_origin},
    orchestrator::{DetailsSubmission, Orchestrator},
    views,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal) => {
        paste::paste! { pub struct [<$name:camel Route>];}
        paste::paste! {
                impl [<$name:camel Route>] {
                #[allow(clippy::new_without_default)]
                pub fn new() -> Self { Self }
            }
        }
        paste::paste! {
            impl actix_web::dev::HttpServiceFactory for [<$name:camel Route>] {
                fn register(self, config: &mut actix_web::dev::AppService) {
                    let res = actix_web::Resource::new($path)
                        .name(stringify!($name))
                        .guard(actix_web::guard::$method())
                        .to($name);
                    actix_web::dev::HttpServiceFactory::register(res, config);
                }
            }
        }
    };

    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💳️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//------------------------------------------   Sessions flow  --------------------------------------------------
route!(create_session => Post "/sessions" impl PspGateway);
/// Opens a PSP-hosted checkout session. The response carries everything the widget needs to
/// mount: the session id, the opaque session data, and the configured client key.
pub async fn create_session<G: PspGateway>(
    req: HttpRequest,
    body: web::Json<CheckoutIntent>,
    api: web::Data<Orchestrator<G>>,
) -> Result<HttpResponse, ServerError> {
    let mut intent = body.into_inner();
    trace!("💳️ POST create_session for {} {}", intent.amount, intent.currency);
    let return_url = intent.return_url.take().unwrap_or_else(|| default_return_url(&req, "success"));
    let session = api.create_session(intent, return_url).await?;
    Ok(HttpResponse::Ok().json(session))
}

route!(session_redirect_details => Post "/payments/details" impl PspGateway);
/// Completes a session payment after an off-site redirect.
pub async fn session_redirect_details<G: PspGateway>(
    body: web::Json<RedirectDetailsRequest>,
    api: web::Data<Orchestrator<G>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💳️ POST redirect details");
    let details = body.into_inner();
    let submission =
        DetailsSubmission::Redirect { redirect_result: details.redirect_result, payment_data: details.payment_data };
    let outcome = api.submit_details(submission).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

route!(session_three_ds_details => Post "/payments/3DSDetails" impl PspGateway);
/// Completes a session payment after a native 3-D Secure challenge.
pub async fn session_three_ds_details<G: PspGateway>(
    body: web::Json<ThreeDSDetailsRequest>,
    api: web::Data<Orchestrator<G>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💳️ POST 3DS details");
    let details = body.into_inner();
    let submission =
        DetailsSubmission::ThreeDS { three_ds_result: details.three_ds_result, payment_data: details.payment_data };
    let outcome = api.submit_details(submission).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

route!(session_result => Post "/sessions/result" impl PspGateway);
/// Post-hoc lookup of a completed session's outcome.
pub async fn session_result<G: PspGateway>(
    body: web::Json<SessionResultRequest>,
    api: web::Data<Orchestrator<G>>,
) -> Result<HttpResponse, ServerError> {
    let request = body.into_inner();
    trace!("💳️ POST session result for {}", request.session_id);
    let outcome = api.session_result(&request.session_id, &request.session_result).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

route!(webhook => Post "/payments/webhook");
/// The PSP notification sink. Notifications are logged and acknowledged unconditionally; nothing
/// downstream consumes them yet and the signature is not checked.
pub async fn webhook(body: String) -> impl Responder {
    info!("💳️ Webhook notification received: {body}");
    HttpResponse::Ok().json(json!({"notificationResponse": "[accepted]"}))
}

//------------------------------------------   Advanced flow  --------------------------------------------------
route!(payment_methods => Post "/paymentMethods" impl PspGateway);
/// Enumerates the payment methods (stored ones included) available for the intent.
pub async fn payment_methods<G: PspGateway>(
    body: web::Json<CheckoutIntent>,
    api: web::Data<Orchestrator<G>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💳️ POST payment_methods");
    let methods = api.payment_methods(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(methods))
}

route!(payments => Post "/payments" impl PspGateway);
/// Submits one authorisation attempt. The response either carries a terminal `resultCode` or an
/// `action` the widget must perform before calling the details endpoint.
pub async fn payments<G: PspGateway>(
    req: HttpRequest,
    body: web::Json<AdvancedPaymentRequest>,
    api: web::Data<Orchestrator<G>>,
) -> Result<HttpResponse, ServerError> {
    let mut attempt = body.into_inner();
    trace!("💳️ POST payments for {}", attempt.amount);
    let return_url = attempt.return_url.take().unwrap_or_else(|| default_return_url(&req, "result"));
    let origin = request_origin(&req);
    let outcome = api.authorise(attempt, return_url, origin).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

route!(advanced_details => Post "/payments/details" impl PspGateway);
/// Completes a prior action in the Advanced flow. The payload must carry exactly one of
/// `redirectResult` and `threeDSResult`.
pub async fn advanced_details<G: PspGateway>(
    body: web::Json<AdvancedDetailsRequest>,
    api: web::Data<Orchestrator<G>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💳️ POST advanced details");
    let submission = DetailsSubmission::try_from(body.into_inner())?;
    let outcome = api.submit_details(submission).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

//----------------------------------------   Browser landings  -------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LandingParams {
    #[serde(default, rename = "redirectResult")]
    redirect_result: Option<String>,
}

route!(result_landing => Get "/result" impl PspGateway);
/// Where the PSP sends the shopper's browser back after an off-site step in the Advanced flow.
/// When the URL carries a `redirectResult` the payment is completed here and the outcome page is
/// rendered; rendering failures show the failure page rather than an empty error body.
pub async fn result_landing<G: PspGateway>(
    query: web::Query<LandingParams>,
    api: web::Data<Orchestrator<G>>,
) -> impl Responder {
    landing(query.into_inner(), api.as_ref()).await
}

route!(success_landing => Get "/success" impl PspGateway);
/// The Sessions-flow landing. Same processing as `/result`; without a `redirectResult` the
/// success shell is shown and the widget resolves the outcome client-side.
pub async fn success_landing<G: PspGateway>(
    query: web::Query<LandingParams>,
    api: web::Data<Orchestrator<G>>,
) -> impl Responder {
    landing(query.into_inner(), api.as_ref()).await
}

async fn landing<G: PspGateway>(params: LandingParams, api: &Orchestrator<G>) -> HttpResponse {
    let Some(redirect_result) = params.redirect_result.filter(|s| !s.is_empty()) else {
        return views::render_success_shell();
    };
    debug!("💳️ Browser returned with a redirect result; completing the payment");
    let submission = DetailsSubmission::Redirect { redirect_result, payment_data: None };
    match api.submit_details(submission).await {
        Ok(outcome) => views::render_outcome(&outcome),
        Err(e) => {
            error!("💳️ Could not complete redirected payment: {e}");
            views::render_failure(&e.to_string())
        },
    }
}
