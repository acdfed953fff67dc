use dioxus::prelude::*;
use store::{guard, Navigation, RouteMeta};
use tracing::Level;

use ui::{use_auth, Navbar, StoreProvider};
use views::{About, Auth, NotFound, Notes};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guarded)]
        #[route("/auth")]
        Auth {},
        #[route("/")]
        Notes {},
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    fn meta(&self) -> RouteMeta {
        match self {
            Route::Notes {} => RouteMeta::PROTECTED,
            Route::Auth {} | Route::About {} | Route::NotFound { .. } => RouteMeta::PUBLIC,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let config = api::ApiConfig::load();
    tracing::info!("Using backend at {}", config.backend_url);

    match api::HttpBackend::new(&config) {
        Ok(backend) => dioxus::LaunchBuilder::new().with_context(backend).launch(App),
        Err(e) => tracing::error!("Failed to create HTTP client: {}", e),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        StoreProvider {
            Router::<Route> {}
        }
    }
}

/// Layout around every route: applies the auth guard, then renders the page.
///
/// The guard re-runs whenever the session changes, so logging in on `/auth` or
/// logging out on `/` redirects immediately.
#[component]
fn Guarded() -> Element {
    let route = use_route::<Route>();
    let auth = use_auth();
    let nav = use_navigator();
    let authenticated = auth().is_authenticated();

    match guard(&route.to_string(), route.meta(), authenticated) {
        Navigation::Proceed => {}
        redirect => {
            tracing::debug!("Guard redirected {} ({:?})", route, redirect);
            match redirect {
                Navigation::RedirectToNotes => nav.replace(Route::Notes {}),
                _ => nav.replace(Route::Auth {}),
            };
            return rsx! {};
        }
    }

    rsx! {
        Navbar {
            Link { to: Route::Notes {}, "Notes" }
            Link { to: Route::About {}, "About" }
            if !authenticated {
                Link { to: Route::Auth {}, "Sign in" }
            }
        }
        main {
            class: "content",
            Outlet::<Route> {}
        }
    }
}
