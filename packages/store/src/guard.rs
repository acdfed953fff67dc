//! Route authorization, evaluated before a route renders.

/// Path of the login/registration page.
pub const AUTH_PATH: &str = "/auth";
/// Path of the notes page, where authenticated users land.
pub const NOTES_PATH: &str = "/";

/// Per-route flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub public: bool,
    pub requires_auth: bool,
}

impl RouteMeta {
    pub const PUBLIC: RouteMeta = RouteMeta {
        public: true,
        requires_auth: false,
    };

    pub const PROTECTED: RouteMeta = RouteMeta {
        public: false,
        requires_auth: true,
    };
}

/// Outcome of [`guard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    RedirectToAuth,
    RedirectToNotes,
}

impl Navigation {
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Navigation::Proceed => None,
            Navigation::RedirectToAuth => Some(AUTH_PATH),
            Navigation::RedirectToNotes => Some(NOTES_PATH),
        }
    }
}

/// Decide whether navigating to `path` may proceed. First matching rule wins:
///
/// 1. protected route while anonymous → auth page
/// 2. auth page while authenticated → notes page
/// 3. anything else proceeds
pub fn guard(path: &str, meta: RouteMeta, authenticated: bool) -> Navigation {
    if meta.requires_auth && !authenticated {
        Navigation::RedirectToAuth
    } else if path == AUTH_PATH && authenticated {
        Navigation::RedirectToNotes
    } else {
        Navigation::Proceed
    }
}
