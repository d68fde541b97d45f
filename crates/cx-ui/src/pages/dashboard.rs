use cx_types::{format_optional_hours, DashboardSnapshot, WeeklySummaryRow};
use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::components::stat_card::StatCard;

#[server(prefix = "/api", endpoint = "weekly-summary")]
async fn get_weekly_summary() -> Result<DashboardSnapshot, ServerFnError> {
    use cx_providers::{dashboard, Services};
    use cx_types::messages;

    let services = use_context::<Services>()
        .ok_or_else(|| ServerFnError::new("service context unavailable"))?;

    dashboard::collect(&services.backend, &services.dashboard)
        .await
        .map_err(|e| {
            tracing::warn!("weekly summary unavailable: {e}");
            ServerFnError::new(messages::NETWORK_ERROR)
        })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (snapshot, setSnapshot) = signal(Option::<DashboardSnapshot>::None);
    let (showPopup, setShowPopup) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            match get_weekly_summary().await {
                Ok(s) => setSnapshot.set(Some(s)),
                Err(e) => {
                    crate::errors::handle_api_error("weekly summary", &e);
                }
            }
        });
    }

    let togglePopup = move || setShowPopup.update(|open| *open = !*open);

    view! {
        <div class="dashboard-header">
            <h1>"Dashboard"</h1>
            <p class="subtitle">"Weekly hours logged in Redbooth and Clockify"</p>
        </div>
        {move || {
            let current = snapshot.get().unwrap_or_default();
            view! {
                <div class="dashboard-grid">
                    <StatCard
                        label="Last Week Hours".to_string()
                        value=format_optional_hours(current.last_week_hours)
                        icon="\u{25F7}"
                    />
                    <StatCard
                        label="Current Month Hours".to_string()
                        value=format_optional_hours(current.current_month_hours)
                        icon="\u{25A6}"
                    />
                </div>
                <WeeklyTable rows=current.rows on_hours_click=togglePopup />
            }
        }}
        {move || {
            showPopup
                .get()
                .then(|| {
                    let current = snapshot.get().unwrap_or_default();
                    view! {
                        <Modal
                            title="Discrepancies between time logged RB / CF".to_string()
                            on_close=togglePopup
                        >
                            <table class="discrepancy-table">
                                <tr>
                                    <th>"Redbooth Logged Hours"</th>
                                    <td>{format_optional_hours(current.redbooth_hours)}</td>
                                </tr>
                                <tr>
                                    <th>"Clockify Logged Hours"</th>
                                    <td>{format_optional_hours(current.clockify_hours)}</td>
                                </tr>
                            </table>
                        </Modal>
                    }
                })
        }}
    }
}

#[component]
fn WeeklyTable<F>(rows: Vec<WeeklySummaryRow>, on_hours_click: F) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    view! {
        <div class="process-section">
            <div class="card">
                <table>
                    <thead>
                        <tr>
                            <th>"Project Name"</th>
                            <th>"Week Ending"</th>
                            <th>"Logged Hours"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="3">"No weekly logging yet"</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            rows.into_iter()
                                .map(|row| {
                                    let onClick = on_hours_click.clone();
                                    view! {
                                        <tr>
                                            <td>{row.project_name}</td>
                                            <td class="week-ending">{row.week_ending}</td>
                                            <td
                                                class="logged-hours clickable"
                                                on:click=move |_| onClick()
                                            >
                                                {format_optional_hours(row.logged_hours)}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
