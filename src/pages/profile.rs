//! Profile page: simple profile edits, password change, feedback, and
//! session renewal.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::net::types::{FeedbackData, SimpleProfileForm};
use crate::state::session::SessionState;

fn validate_password_change(new: &str, confirm: &str) -> Result<String, &'static str> {
    let new = new.trim();
    if new.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    if new != confirm.trim() {
        return Err("Passwords do not match.");
    }
    Ok(new.to_owned())
}

fn validate_feedback_input(content: &str, email: &str) -> Result<FeedbackData, &'static str> {
    let content = content.trim();
    if content.is_empty() {
        return Err("Write some feedback first.");
    }
    let email = email.trim();
    Ok(FeedbackData {
        content: content.to_owned(),
        email: if email.is_empty() {
            None
        } else {
            Some(email.to_owned())
        },
    })
}

/// Profile page for the signed-in user.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = StoredValue::new(expect_context::<AppConfig>());

    let profile = LocalResource::new(move || {
        let config = config.get_value();
        let token = session.get().token;
        async move { crate::net::auth_api::fetch_profile(&config, &token).await }
    });

    let username = RwSignal::new(String::new());
    let height = RwSignal::new(String::new());
    let weight = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let feedback = RwSignal::new(String::new());
    let feedback_email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    // Seed the form once the profile resource resolves.
    Effect::new(move || {
        if let Some(Some(user)) = profile.get() {
            username.set(user.username);
            height.set(user.height.map(|h| h.to_string()).unwrap_or_default());
            weight.set(user.weight.map(|w| w.to_string()).unwrap_or_default());
        }
    });

    let nav_username = Signal::derive(move || {
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

    let save_profile = Callback::new(move |_| {
        error.set(None);
        let form = SimpleProfileForm {
            username: username.get().trim().to_owned(),
            height: height.get().trim().to_owned(),
            weight: weight.get().trim().to_owned(),
        };
        if form.username.is_empty() {
            error.set(Some("Username cannot be empty.".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            let token = session.get_untracked().token;
            leptos::task::spawn_local(async move {
                match crate::net::auth_api::update_simple_profile(&config, &token, &form).await {
                    Ok(()) => {
                        crate::util::toast::show("Profile updated");
                        profile.refetch();
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    });

    let change_password = Callback::new(move |_| {
        error.set(None);
        match validate_password_change(&new_password.get(), &confirm_password.get()) {
            Err(msg) => error.set(Some(msg.to_owned())),
            Ok(password) => {
                #[cfg(feature = "hydrate")]
                {
                    let config = config.get_value();
                    let token = session.get_untracked().token;
                    leptos::task::spawn_local(async move {
                        match crate::net::auth_api::change_password(&config, &token, &password)
                            .await
                        {
                            Ok(()) => {
                                crate::util::toast::show("Password changed");
                                new_password.set(String::new());
                                confirm_password.set(String::new());
                            }
                            Err(e) => error.set(Some(e)),
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = password;
                }
            }
        }
    });

    let send_feedback = Callback::new(move |_| {
        error.set(None);
        match validate_feedback_input(&feedback.get(), &feedback_email.get()) {
            Err(msg) => error.set(Some(msg.to_owned())),
            Ok(data) => {
                #[cfg(feature = "hydrate")]
                {
                    let config = config.get_value();
                    let token = session.get_untracked().token;
                    leptos::task::spawn_local(async move {
                        match crate::net::auth_api::send_feedback(&config, &token, &data).await {
                            Ok(()) => {
                                crate::util::toast::show("Feedback sent");
                                feedback.set(String::new());
                                feedback_email.set(String::new());
                            }
                            Err(e) => error.set(Some(e)),
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = data;
                }
            }
        }
    });

    let renew_session = Callback::new(move |_| {
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            let token = session.get_untracked().token;
            leptos::task::spawn_local(async move {
                match crate::net::auth_api::refresh_token(&config, &token).await {
                    Ok(fresh) => {
                        session.update(|s| s.adopt_token(fresh));
                        crate::util::toast::show("Session renewed");
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    });

    view! {
        <div class="profile-page">
            <NavBar username=nav_username is_admin=is_admin/>

            <section class="profile-page__card">
                <h2>"Profile"</h2>
                <label>
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Height (cm)"
                    <input
                        type="text"
                        prop:value=move || height.get()
                        on:input=move |ev| height.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Weight (kg)"
                    <input
                        type="text"
                        prop:value=move || weight.get()
                        on:input=move |ev| weight.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" on:click=move |_| save_profile.run(())>
                    "Save"
                </button>
                <button class="btn" on:click=move |_| renew_session.run(())>
                    "Renew session"
                </button>
            </section>

            <section class="profile-page__card">
                <h2>"Change password"</h2>
                <label>
                    "New password"
                    <input
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm"
                    <input
                        type="password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" on:click=move |_| change_password.run(())>
                    "Change"
                </button>
            </section>

            <section class="profile-page__card">
                <h2>"Feedback"</h2>
                <textarea
                    prop:value=move || feedback.get()
                    on:input=move |ev| feedback.set(event_target_value(&ev))
                ></textarea>
                <label>
                    "Email (optional)"
                    <input
                        type="text"
                        prop:value=move || feedback_email.get()
                        on:input=move |ev| feedback_email.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" on:click=move |_| send_feedback.run(())>
                    "Send"
                </button>
            </section>

            <Show when=move || error.get().is_some()>
                <p class="profile-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
