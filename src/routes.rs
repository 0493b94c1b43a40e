//! Route descriptors for the application's pages.
//!
//! DESIGN
//! ======
//! The route table is a const array fixed at startup. The navigation guard
//! only reads the `requires_auth` flag; everything else is for the router
//! and the nav bar.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path of the login page; also the guard's redirect target.
pub const LOGIN_PATH: &str = "/login";

/// A single routable page: path, display name, and whether entering it
/// requires an authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

/// Every page the router serves. `/` is not listed; it redirects to
/// `/login` unconditionally.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: LOGIN_PATH,
        name: "Login",
        requires_auth: false,
    },
    RouteDescriptor {
        path: "/main",
        name: "Main",
        requires_auth: true,
    },
    RouteDescriptor {
        path: "/profile",
        name: "Profile",
        requires_auth: true,
    },
    RouteDescriptor {
        path: "/admin",
        name: "Admin",
        requires_auth: true,
    },
];

/// Look up the descriptor for a pathname, ignoring any trailing slash.
pub fn find(path: &str) -> Option<&'static RouteDescriptor> {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    ROUTES.iter().find(|r| r.path == trimmed)
}
