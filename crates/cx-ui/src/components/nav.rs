use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[server(prefix = "/api", endpoint = "logout")]
async fn logout() -> Result<(), ServerFnError> {
    use cx_providers::session::extract_cookie_value;
    use cx_providers::Services;
    use cx_types::SESSION_COOKIE;
    use http::header::{HeaderValue, COOKIE, SET_COOKIE};
    use http::HeaderMap;
    use leptos_axum::ResponseOptions;

    let services = use_context::<Services>()
        .ok_or_else(|| ServerFnError::new("service context unavailable"))?;

    let headers: HeaderMap = leptos_axum::extract().await?;
    let cookieHeader = headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if let Some(token) = extract_cookie_value(cookieHeader, SESSION_COOKIE) {
        services.sessions.revoke(&token).await;
        tracing::info!("session revoked via logout");
    }

    let responseOptions = expect_context::<ResponseOptions>();
    responseOptions.insert_header(
        SET_COOKIE,
        HeaderValue::from_str(&services.sessions.clear_cookie_header())
            .map_err(|e| ServerFnError::new(format!("cookie error: {e}")))?,
    );

    leptos_axum::redirect("/login");

    Ok(())
}

const LINKS: &[(&str, &str, &str)] = &[
    ("/dashboard", "\u{25A3}", "Dashboard"),
    ("/cx-users", "\u{2637}", "CX Users"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let pathname = use_location().pathname;
    let logoutAction = ServerAction::<Logout>::new();

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"CX"</div>
                <span class="brand-text">"CX Dashboard"</span>
            </div>
            <ul class="nav-links">
                {LINKS
                    .iter()
                    .map(|(href, icon, label)| {
                        let href = *href;
                        let isActive = move || {
                            let path = pathname.get();
                            path == href || (href == "/dashboard" && path == "/")
                        };
                        view! {
                            <li class="nav-item" class:active=isActive>
                                <a href=href>
                                    <span class="nav-icon">{*icon}</span>
                                    <span>{*label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="nav-logout">
                <ActionForm action=logoutAction>
                    <button type="submit" class="btn btn-ghost btn-sm">
                        "Log out"
                    </button>
                </ActionForm>
            </div>
        </nav>
    }
}
