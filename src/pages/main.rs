//! Main page: teaching-video library and the training-plan list.


use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::net::types::PlanItem;
#[cfg(feature = "hydrate")]
use crate::net::types::PlanUpdate;
use crate::state::session::SessionState;

fn validate_plan_input(
    date: &str,
    project: &str,
    target: &str,
    note: &str,
) -> Result<PlanItem, &'static str> {
    let date = date.trim();
    let project = project.trim();
    if date.is_empty() {
        return Err("Pick a date.");
    }
    if project.is_empty() {
        return Err("Name the exercise.");
    }
    let target = target
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|t| *t > 0)
        .ok_or("Target must be a positive count.")?;
    Ok(PlanItem {
        id: None,
        date: date.to_owned(),
        project: project.to_owned(),
        target,
        note: note.trim().to_owned(),
        completed: None,
        actual_count: None,
    })
}

/// Resolve a media path against the upload origin; absolute URLs pass
/// through untouched.
fn media_url(upload_base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_owned()
    } else {
        format!("{upload_base}{path}")
    }
}

/// Main page, with videos on one side and the training plan on the other.
#[component]
pub fn MainPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = StoredValue::new(expect_context::<AppConfig>());

    let profile = LocalResource::new(move || {
        let config = config.get_value();
        let token = session.get().token;
        async move { crate::net::auth_api::fetch_profile(&config, &token).await }
    });
    let videos = LocalResource::new(move || {
        let config = config.get_value();
        let token = session.get().token;
        async move {
            crate::net::video_api::fetch_all_videos(&config, &token)
                .await
                .unwrap_or_default()
        }
    });
    let plans = LocalResource::new(move || {
        let config = config.get_value();
        let token = session.get().token;
        async move {
            crate::net::train_api::fetch_plans(&config, &token)
                .await
                .map(|l| l.list)
                .unwrap_or_default()
        }
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

    let date = RwSignal::new(String::new());
    let project = RwSignal::new(String::new());
    let target = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let upload_base = config.with_value(|c| c.upload_url.clone());

    let submit = Callback::new(move |_| {
        error.set(None);
        match validate_plan_input(&date.get(), &project.get(), &target.get(), &note.get()) {
            Err(msg) => error.set(Some(msg.to_owned())),
            Ok(plan) => {
                #[cfg(feature = "hydrate")]
                {
                    let config = config.get_value();
                    let token = session.get_untracked().token;
                    leptos::task::spawn_local(async move {
                        match crate::net::train_api::submit_plan(&config, &token, &plan).await {
                            Ok(env) if env.is_success() => {
                                crate::util::toast::show("Plan added");
                                project.set(String::new());
                                target.set(String::new());
                                note.set(String::new());
                                plans.refetch();
                            }
                            Ok(env) => error.set(Some(env.message)),
                            Err(e) => error.set(Some(e)),
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = plan;
                }
            }
        }
    });

    let complete = Callback::new(move |(id, target_count): (i64, i64)| {
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            let token = session.get_untracked().token;
            let update = PlanUpdate {
                completed: Some(true),
                actual_count: Some(target_count),
                ..PlanUpdate::default()
            };
            leptos::task::spawn_local(async move {
                if crate::net::train_api::update_plan(&config, &token, id, &update)
                    .await
                    .is_ok()
                {
                    plans.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, target_count);
        }
    });

    let remove = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            let token = session.get_untracked().token;
            leptos::task::spawn_local(async move {
                if crate::net::train_api::delete_plan(&config, &token, id)
                    .await
                    .is_ok()
                {
                    plans.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="main-page">
            <NavBar username=username is_admin=is_admin/>

            <section class="main-page__videos">
                <h2>"Teaching videos"</h2>
                <Suspense fallback=move || view! { <p>"Loading videos..."</p> }>
                    {move || {
                        videos
                            .get()
                            .map(|list| {
                                let upload_base = upload_base.clone();
                                view! {
                                    <ul class="video-list">
                                        {list
                                            .into_iter()
                                            .map(|v| {
                                                let thumb = media_url(&upload_base, &v.thumbnail);
                                                let href = media_url(&upload_base, &v.url);
                                                view! {
                                                    <li class="video-list__item">
                                                        <a href=href>
                                                            <img src=thumb alt=v.title.clone()/>
                                                            <span>{v.title}</span>
                                                            <span class="video-list__duration">
                                                                {v.duration}
                                                            </span>
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="main-page__plan">
                <h2>"Training plan"</h2>
                <div class="plan-form">
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Exercise"
                        prop:value=move || project.get()
                        on:input=move |ev| project.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Target count"
                        prop:value=move || target.get()
                        on:input=move |ev| target.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Note"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add"
                    </button>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="main-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <Suspense fallback=move || view! { <p>"Loading plan..."</p> }>
                    {move || {
                        plans
                            .get()
                            .map(|list| {
                                view! {
                                    <ul class="plan-list">
                                        {list
                                            .into_iter()
                                            .map(|p| {
                                                let id = p.id;
                                                let target_count = p.target;
                                                let done = p.completed.unwrap_or(false);
                                                view! {
                                                    <li class="plan-list__item">
                                                        <span>{p.date}</span>
                                                        <span>{p.project}</span>
                                                        <span>{p.target}</span>
                                                        <span>{p.note}</span>
                                                        <Show when=move || !done>
                                                            <button
                                                                class="btn"
                                                                on:click=move |_| {
                                                                    if let Some(id) = id {
                                                                        complete.run((id, target_count));
                                                                    }
                                                                }
                                                            >
                                                                "Done"
                                                            </button>
                                                        </Show>
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| {
                                                                if let Some(id) = id {
                                                                    remove.run(id);
                                                                }
                                                            }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
