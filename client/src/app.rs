//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::guard::{ADMIN_ONLY, ANY_ROLE, GUEST_ONLY, MANAGER_ONLY, ProtectedRoute};
use crate::pages::{
    admin::AdminDashboardPage, guest::GuestDashboardPage, home::HomePage, hotel_detail::HotelDetailPage,
    login::LoginPage, manager::ManagerDashboardPage, profile::ProfilePage, register::RegisterPage,
};
use crate::session::SessionStore;
use crate::state::auth::AuthState;
use crate::util::auth::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The stored
/// session is read once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    let auth = RwSignal::new(AuthState::default());

    provide_context(auth);
    provide_context(SessionContext { store: store.clone(), auth });

    // Effects never run during SSR, so this only fires after hydration.
    Effect::new(move || {
        let session = store.session();
        log::debug!("restored session: {}", session.as_ref().map_or("none", |s| s.role.as_str()));
        auth.set(AuthState::loaded(session));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/staybook.css"/>
        <Title text="Staybook"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("hotels"), ParamSegment("id")) view=HotelDetailPage/>
                    <Route
                        path=StaticSegment("guest")
                        view=|| view! { <ProtectedRoute allowed=GUEST_ONLY><GuestDashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("manager")
                        view=|| view! { <ProtectedRoute allowed=MANAGER_ONLY><ManagerDashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <ProtectedRoute allowed=ADMIN_ONLY><AdminDashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedRoute allowed=ANY_ROLE><ProfilePage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
