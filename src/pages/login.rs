//! Login and registration page.
//!
//! Client-side validation mirrors the backend rules (username at least 3
//! characters, password at least 6) so the common rejections never cost a
//! round-trip. The confirmation password never leaves the page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::{LoginData, RegisterData};

fn validate_login_input(username: &str, password: &str) -> Result<LoginData, &'static str> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginData {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

fn validate_register_input(
    username: &str,
    password: &str,
    confirm: &str,
    height: &str,
    weight: &str,
) -> Result<RegisterData, &'static str> {
    let username = username.trim();
    let password = password.trim();
    if username.len() < 3 {
        return Err("Username must be at least 3 characters.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm.trim() {
        return Err("Passwords do not match.");
    }
    Ok(RegisterData {
        username: username.to_owned(),
        password: password.to_owned(),
        height: parse_measurement(height)?,
        weight: parse_measurement(weight)?,
    })
}

/// Parse an optional height/weight field; empty means "not provided".
fn parse_measurement(value: &str) -> Result<Option<f64>, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(v) if v > 0.0 => Ok(Some(v)),
        _ => Err("Measurements must be positive numbers."),
    }
}

/// Login page with a toggle into registration mode.
#[component]
pub fn LoginPage() -> impl IntoView {
    let registering = RwSignal::new(false);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let height = RwSignal::new(String::new());
    let weight = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let config = StoredValue::new(expect_context::<crate::config::AppConfig>());
    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<crate::state::session::SessionState>>();

    let submit = Callback::new(move |_| {
        error.set(None);
        if registering.get() {
            match validate_register_input(
                &username.get(),
                &password.get(),
                &confirm.get(),
                &height.get(),
                &weight.get(),
            ) {
                Err(msg) => error.set(Some(msg.to_owned())),
                Ok(data) => {
                    #[cfg(feature = "hydrate")]
                    {
                        let config = config.get_value();
                        leptos::task::spawn_local(async move {
                            match crate::net::auth_api::register(&config, &data).await {
                                Ok(env) if env.is_success() => {
                                    crate::util::toast::show("Registered, please log in");
                                    registering.set(false);
                                    password.set(String::new());
                                    confirm.set(String::new());
                                }
                                Ok(env) => error.set(Some(env.message)),
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
        } else {
            match validate_login_input(&username.get(), &password.get()) {
                Err(msg) => error.set(Some(msg.to_owned())),
                Ok(data) => {
                    #[cfg(feature = "hydrate")]
                    {
                        let config = config.get_value();
                        let navigate = navigate.clone();
                        leptos::task::spawn_local(async move {
                            match crate::net::auth_api::login(&config, &data).await {
                                Ok(env) if env.is_success() => match env.data {
                                    Some(auth) => {
                                        session.update(|s| s.adopt_token(auth.token));
                                        crate::util::toast::show("Login successful");
                                        navigate("/main", NavigateOptions::default());
                                    }
                                    None => error.set(Some("missing response data".to_owned())),
                                },
                                Ok(env) => error.set(Some(env.message)),
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
        }
    });

    view! {
        <div class="login-page">
            <h1>"FitPortal"</h1>
            <p>"Personal training companion"</p>

            <label class="login-page__label">
                "Username"
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="login-page__label">
                "Password"
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>

            <Show when=move || registering.get()>
                <label class="login-page__label">
                    "Confirm password"
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Height (cm, optional)"
                    <input
                        type="text"
                        prop:value=move || height.get()
                        on:input=move |ev| height.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Weight (kg, optional)"
                    <input
                        type="text"
                        prop:value=move || weight.get()
                        on:input=move |ev| weight.set(event_target_value(&ev))
                    />
                </label>
            </Show>

            <Show when=move || error.get().is_some()>
                <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                {move || if registering.get() { "Register" } else { "Log in" }}
            </button>
            <button
                class="btn btn--link"
                on:click=move |_| {
                    error.set(None);
                    registering.update(|r| *r = !*r);
                }
            >
                {move || {
                    if registering.get() {
                        "Back to login"
                    } else {
                        "Need an account? Register"
                    }
                }}
            </button>
        </div>
    }
}
