use leptos::prelude::*;

/// White summary card: an icon tile, a large figure and a caption.
#[component]
pub fn StatCard(
    /// Caption under the figure, e.g. "Last Week Hours"
    label: String,
    /// Already formatted figure
    value: String,
    /// Single glyph shown in the dark icon tile
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-icon">{icon}</div>
            <div class="stat-body">
                <h4 class="stat-value">{value}</h4>
                <div class="stat-label">{label}</div>
            </div>
        </div>
    }
}
