use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    StaticSegment,
};

use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::pages::cx_users::CxUsersPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/cx-console.css" />
        <Title text="CX Dashboard" />
        <Router>
            <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard" /> } />
                <Route path=StaticSegment("dashboard") view=DashboardView />
                <Route path=StaticSegment("cx-users") view=CxUsersView />
                <Route path=StaticSegment("login") view=LoginPage />
            </Routes>
        </Router>
    }
}

#[component]
fn DashboardView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <DashboardPage />
                <Footer />
            </main>
        </div>
    }
}

#[component]
fn CxUsersView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <CxUsersPage />
                <Footer />
            </main>
        </div>
    }
}
