use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use adyen_tools::AdyenApi;
use log::*;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    gateway::PspGateway,
    orchestrator::Orchestrator,
    routes::{
        health,
        AdvancedDetailsRoute,
        CreateSessionRoute,
        PaymentMethodsRoute,
        PaymentsRoute,
        ResultLandingRoute,
        SessionRedirectDetailsRoute,
        SessionResultRoute,
        SessionThreeDsDetailsRoute,
        SuccessLandingRoute,
        WebhookRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let gateway = AdyenApi::new(config.adyen.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("🛒️ Using PSP environment {}", config.adyen.environment);
    let srv = create_server_instance(config, gateway)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance<G>(config: ServerConfig, gateway: G) -> Result<Server, ServerError>
where G: PspGateway + Clone + Send + 'static {
    let merchant_account = config.adyen.merchant_account.clone();
    let client_key = config.adyen.client_key.clone();
    let srv = HttpServer::new(move || {
        let orchestrator = Orchestrator::new(gateway.clone(), &merchant_account, &client_key);
        let app = App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("awd::access_log"))
            .app_data(web::Data::new(orchestrator));
        // The Sessions flow plus the shared plumbing
        let sessions_scope = web::scope("/api")
            .service(CreateSessionRoute::<G>::new())
            .service(SessionRedirectDetailsRoute::<G>::new())
            .service(SessionThreeDsDetailsRoute::<G>::new())
            .service(SessionResultRoute::<G>::new())
            .service(WebhookRoute::new());
        // The Advanced flow, where this server mediates every PSP round trip
        let advanced_scope = web::scope("/advanced/api")
            .service(PaymentMethodsRoute::<G>::new())
            .service(PaymentsRoute::<G>::new())
            .service(AdvancedDetailsRoute::<G>::new());
        app.service(health)
            .service(sessions_scope)
            .service(advanced_scope)
            .service(ResultLandingRoute::<G>::new())
            .service(SuccessLandingRoute::<G>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
