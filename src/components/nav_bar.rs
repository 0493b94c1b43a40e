//! Top navigation bar shown on authenticated pages.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

/// One navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: u32,
    pub name: &'static str,
    pub page: &'static str,
}

/// Navigation entries for the current user; the admin page only shows up
/// for the admin role.
pub fn nav_items(is_admin: bool) -> Vec<NavItem> {
    let mut items = vec![
        NavItem {
            id: 1,
            name: "Main",
            page: "/main",
        },
        NavItem {
            id: 2,
            name: "Profile",
            page: "/profile",
        },
    ];
    if is_admin {
        items.push(NavItem {
            id: 3,
            name: "Admin",
            page: "/admin",
        });
    }
    items
}

/// Navigation bar with page links and the signed-in username.
#[component]
pub fn NavBar(
    #[prop(into)] username: Signal<String>,
    #[prop(into)] is_admin: Signal<bool>,
) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"FitPortal"</span>
            <div class="nav-bar__links">
                {move || {
                    nav_items(is_admin.get())
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a class="nav-bar__link" href=item.page>
                                    {item.name}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <span class="nav-bar__user">{move || username.get()}</span>
        </nav>
    }
}
