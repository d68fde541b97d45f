#![recursion_limit = "256"]
#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use cx_api::middleware::auth::AppState;
    use cx_providers::Services;
    use cx_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse config path from args
    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = cx_providers::config::load(&configPath);
    let addr = format!("{}:{}", appConfig.server.bind, appConfig.server.port);
    tracing::info!(
        "loaded config from {configPath}: bind={addr} backend={}",
        appConfig.backend.host_url
    );
    if !appConfig.session.secure_cookie {
        tracing::warn!("session cookies are not marked Secure");
    }

    let services = match Services::new(
        appConfig.backend.clone(),
        appConfig.session.clone(),
        appConfig.dashboard.clone(),
    ) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to initialise backend client: {e}");
            std::process::exit(1);
        }
    };

    let appState = AppState {
        services: services.clone(),
    };

    // Get Leptos configuration
    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;

    // Generate route list from Leptos App
    let routes = generate_route_list(App);

    let apiRouter = cx_api::api_router(appState.clone());

    // Session gate for pages and server functions
    let pageAuthLayer = axum::middleware::from_fn_with_state(
        appState,
        cx_api::middleware::auth::require_page_auth,
    );

    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let services = services.clone();
                move || {
                    leptos::prelude::provide_context(services.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(pageAuthLayer)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
