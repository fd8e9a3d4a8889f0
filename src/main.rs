#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::{routing::post, Form, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{
        app::*,
        relay::{RelayConfig, RelayForm},
    };
    use tower::ServiceBuilder;
    use tower_http::trace::TraceLayer;

    init_tracing();

    let conf = get_configuration(None).expect("leptos configuration should load");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let relay = match RelayConfig::from_env() {
        Ok(cfg) => {
            tracing::info!(to = %cfg.to, smtp = cfg.smtp.is_some(), "contact relay enabled");
            Some(Arc::new(cfg))
        }
        Err(e) => {
            tracing::warn!("contact relay disabled: {e}");
            None
        }
    };

    let app = Router::new()
        .route(
            "/forms/contact",
            post(move |Form(form): Form<RelayForm>| {
                relay_contact(relay.clone(), form)
            }),
        )
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server should run until shutdown");
}

#[cfg(feature = "ssr")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_site=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

#[cfg(feature = "ssr")]
async fn relay_contact(
    config: Option<std::sync::Arc<portfolio_site::relay::RelayConfig>>,
    form: portfolio_site::relay::RelayForm,
) -> (http::StatusCode, &'static str) {
    use http::StatusCode;
    use portfolio_site::relay::{RelayError, RelayStatus, SendmailTransport};

    let ajax = form.ajax;
    let Some(config) = config else {
        return (StatusCode::SERVICE_UNAVAILABLE, RelayStatus::Failed.render(ajax));
    };
    let mail = config.message_for(&form);
    // sendmail blocks on the child process
    let result = tokio::task::spawn_blocking(move || mail.send(&SendmailTransport::default()))
        .await
        .unwrap_or_else(|e| Err(RelayError::Transport(e.to_string())));
    if let Err(e) = &result {
        tracing::error!(error = %e, "contact relay failed");
    }

    let status = RelayStatus::from_result(&result);
    let code = match (&result, status) {
        (Err(RelayError::InvalidHeader(_)), _) => StatusCode::BAD_REQUEST,
        (_, RelayStatus::Sent) => StatusCode::OK,
        (_, RelayStatus::MissingFields) => StatusCode::BAD_REQUEST,
        (_, RelayStatus::SmtpNotConfigured | RelayStatus::Failed) => StatusCode::BAD_GATEWAY,
    };
    (code, status.render(ajax))
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
