use cx_types::CxUser;
use leptos::prelude::*;
use leptos_meta::Title;

#[server(prefix = "/api", endpoint = "cx-users")]
async fn get_cx_users() -> Result<Vec<CxUser>, ServerFnError> {
    use cx_providers::Services;
    use cx_types::messages;

    let services = use_context::<Services>()
        .ok_or_else(|| ServerFnError::new("service context unavailable"))?;

    services.backend.fetch_cx_users().await.map_err(|e| {
        tracing::warn!("cx users unavailable: {e}");
        ServerFnError::new(messages::NETWORK_ERROR)
    })
}

#[component]
pub fn CxUsersPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (users, setUsers) = signal(Option::<Vec<CxUser>>::None);

    // One fetch on mount; a failure leaves the table empty.
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let list = match get_cx_users().await {
                Ok(list) => list,
                Err(e) => {
                    crate::errors::handle_api_error("cx users", &e);
                    Vec::new()
                }
            };
            setUsers.set(Some(list));
        });
    }

    view! {
        <Title text="Cx users" />
        <div class="dashboard-header">
            <h1>"CX Users"</h1>
        </div>
        <div class="card">
            <table class="users-table">
                <thead>
                    <tr>
                        <th>"RB ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || match users.get() {
                        None => {
                            view! {
                                <tr>
                                    <td colspan="3" class="loading">
                                        <div class="spinner"></div>
                                        "Loading users..."
                                    </td>
                                </tr>
                            }
                                .into_any()
                        }
                        Some(list) => view! { <UserRows users=list /> }.into_any(),
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn UserRows(users: Vec<CxUser>) -> impl IntoView {
    users
        .into_iter()
        .map(|user| {
            view! {
                <tr>
                    <td>{user.rb_user_id}</td>
                    <td>{user.name}</td>
                    <td>{user.email}</td>
                </tr>
            }
        })
        .collect_view()
}
