use leptos::prelude::*;

/// Centered overlay with a title, arbitrary body and a Close button.
#[component]
pub fn Modal<F>(
    title: String,
    on_close: F,
    children: Children,
) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    view! {
        <div class="modal-backdrop">
            <div class="modal-card" role="dialog" aria-modal="true">
                <h2 class="modal-title">{title}</h2>
                <div class="modal-body">{children()}</div>
                <div class="modal-actions">
                    <button class="btn btn-primary" on:click=move |_| on_close()>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Single-message modal used for login status.
#[component]
pub fn PopUp<F>(title: String, text: String, on_close: F) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    view! {
        <Modal title=title on_close=on_close>
            <p class="modal-text">{text}</p>
        </Modal>
    }
}
