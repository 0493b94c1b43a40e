//! Admin page listing submitted feedback.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::state::session::SessionState;

/// Admin page. The backend rejects non-admin tokens, so a regular user
/// landing here just sees the error message.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = StoredValue::new(expect_context::<AppConfig>());

    let profile = LocalResource::new(move || {
        let config = config.get_value();
        let token = session.get().token;
        async move { crate::net::auth_api::fetch_profile(&config, &token).await }
    });
    let feedback = LocalResource::new(move || {
        let config = config.get_value();
        let token = session.get().token;
        async move { crate::net::admin_api::fetch_all_feedback(&config, &token).await }
    });

    let username = Signal::derive(move || {
        profile
            .get()
            .flatten()
            .map(|u| u.username)
            .unwrap_or_default()
    });
    let is_admin = Signal::derive(move || {
        profile
            .get()
            .flatten()
            .is_some_and(|u| u.role == "admin")
    });

    view! {
        <div class="admin-page">
            <NavBar username=username is_admin=is_admin/>

            <h2>"User feedback"</h2>
            <Suspense fallback=move || view! { <p>"Loading feedback..."</p> }>
                {move || {
                    feedback
                        .get()
                        .map(|result| match result {
                            Ok(records) => {
                                view! {
                                    <ul class="feedback-list">
                                        {records
                                            .into_iter()
                                            .map(|r| {
                                                view! {
                                                    <li class="feedback-list__item">
                                                        <p>{r.content}</p>
                                                        <span class="feedback-list__meta">
                                                            {r.username.unwrap_or_default()} " "
                                                            {r.email.unwrap_or_default()} " "
                                                            {r.created_at.unwrap_or_default()}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(message) => {
                                view! { <p class="admin-page__error">{message}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
