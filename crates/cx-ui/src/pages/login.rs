use cx_types::validation::{is_registered, validate_credentials, FieldErrors};
use cx_types::{messages, LoginCredentials, LoginOutcome};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::components::modal::PopUp;
use crate::errors::handle_api_error;

#[server(prefix = "/api", endpoint = "registered-users")]
async fn get_registered_users() -> Result<Vec<String>, ServerFnError> {
    use cx_providers::Services;

    let services = use_context::<Services>()
        .ok_or_else(|| ServerFnError::new("service context unavailable"))?;

    services.backend.fetch_registered_users().await.map_err(|e| {
        tracing::warn!("registered users unavailable: {e}");
        ServerFnError::new(messages::NETWORK_ERROR)
    })
}

/// Rejections come back as a failed outcome for the modal; only infrastructure
/// problems surface as `ServerFnError`.
#[server(prefix = "/api", endpoint = "login")]
async fn login(
    rb_user_id: String,
    email: String,
    password: String,
) -> Result<LoginOutcome, ServerFnError> {
    use cx_providers::{auth, Services};
    use http::header::{HeaderValue, SET_COOKIE};
    use leptos_axum::ResponseOptions;

    let services = use_context::<Services>()
        .ok_or_else(|| ServerFnError::new("service context unavailable"))?;

    let credentials = LoginCredentials {
        rb_user_id,
        email,
        password,
    };

    let session = match auth::sign_in(&services.backend, &services.sessions, credentials).await {
        Ok(session) => session,
        Err(e) => return Ok(LoginOutcome::failure(e.user_message())),
    };

    let responseOptions = expect_context::<ResponseOptions>();
    responseOptions.insert_header(
        SET_COOKIE,
        HeaderValue::from_str(&services.sessions.set_cookie_header(&session))
            .map_err(|e| ServerFnError::new(format!("cookie error: {e}")))?,
    );

    Ok(LoginOutcome::success())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (rbUserId, setRbUserId) = signal(String::new());
    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    let (fieldErrors, setFieldErrors) = signal(FieldErrors::default());
    let (modalMessage, setModalMessage) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let (registeredUsers, setRegisteredUsers) = signal(Vec::<String>::new());

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            match get_registered_users().await {
                Ok(list) => setRegisteredUsers.set(list),
                Err(e) => {
                    handle_api_error("registered users", &e);
                }
            }
        });
    }

    let loginAction = ServerAction::<Login>::new();
    let loginValue = loginAction.value();
    let isLoading = loginAction.pending();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let Some(result) = loginValue.get() else {
            return;
        };
        match result {
            Ok(outcome) => {
                setModalMessage.set(Some(outcome.message));
                if outcome.success {
                    navigate(
                        "/dashboard",
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
            }
            Err(e) => setModalMessage.set(Some(handle_api_error("login", &e))),
        }
    });

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let credentials = LoginCredentials {
            rb_user_id: rbUserId.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        if let Err(errors) = validate_credentials(&credentials) {
            setFieldErrors.set(errors);
            return;
        }
        setFieldErrors.set(FieldErrors::default());

        if !registeredUsers.with_untracked(|list| is_registered(list, &credentials.email)) {
            setModalMessage.set(Some(messages::EMAIL_UNREGISTERED.to_string()));
            return;
        }

        loginAction.dispatch(Login {
            rb_user_id: credentials.rb_user_id,
            email: credentials.email,
            password: credentials.password,
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"CX"</div>
                    <h1>"Login"</h1>
                </div>

                <form on:submit=onSubmit novalidate>
                    <div class="form-group">
                        <label for="rbUserId">"RB User ID"</label>
                        <input
                            type="text"
                            id="rbUserId"
                            name="rbUserId"
                            prop:value=move || rbUserId.get()
                            on:input=move |ev| setRbUserId.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || fieldErrors.get().rb_user_id) />
                    </div>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            prop:value=move || email.get()
                            on:input=move |ev| setEmail.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || fieldErrors.get().email) />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            prop:value=move || password.get()
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || fieldErrors.get().password) />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || isLoading.get()>
                        {move || {
                            if isLoading.get() {
                                view! { <span class="spinner"></span> }.into_any()
                            } else {
                                view! { <span>"Login"</span> }.into_any()
                            }
                        }}
                    </button>
                </form>
            </div>

            {move || {
                modalMessage
                    .get()
                    .map(|text| {
                        view! {
                            <PopUp
                                title="Registration Status".to_string()
                                text=text
                                on_close=move || setModalMessage.set(None)
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|msg| view! { <div class="field-error">{msg}</div> })
    }
}
