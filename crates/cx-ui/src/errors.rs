use cx_types::messages;
use leptos::prelude::ServerFnError;

/// Shared handler for failed server calls: logs the detail to the console and returns
/// the generic message the UI shows in its place.
pub fn handle_api_error(context: &str, error: &ServerFnError) -> String {
    leptos::logging::error!("{context} request failed: {error}");
    messages::NETWORK_ERROR.to_string()
}
