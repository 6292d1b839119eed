//! Activity board page: list, filters, signup form, and status region.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It issues the initial fetch once hydrated, runs
//! the signup and unregister flows, and refetches after each successful
//! mutation. Overlapping fetches are fenced by the store, so whichever was
//! issued last wins regardless of completion order.

use leptos::prelude::*;

use crate::components::activity_list::ActivityList;
use crate::components::filter_bar::FilterBar;
use crate::components::signup_form::{SignupDraft, SignupForm};
use crate::components::status_banner::StatusBanner;
use crate::state::activities::ActivitiesState;
use crate::state::status::StatusState;
use crate::util::mutation::MutationKind;

#[component]
pub fn BoardPage() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let status = expect_context::<RwSignal<StatusState>>();
    let draft = SignupDraft::new();

    // Untracked body: runs once after hydration.
    Effect::new(move || refresh_activities(activities));

    let on_signup = Callback::new(move |(activity, email): (String, String)| {
        run_mutation(MutationKind::Signup, activity, email, activities, status, draft);
    });
    let on_unregister = Callback::new(move |(activity, email): (String, String)| {
        run_mutation(MutationKind::Unregister, activity, email, activities, status, draft);
    });

    view! {
        <main class="board-page">
            <header class="board-page__header">
                <h1>"Activity Board"</h1>
                <h2>"Extracurricular Activities"</h2>
            </header>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <FilterBar/>
                <ActivityList on_unregister=on_unregister/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm draft=draft on_submit=on_signup/>
                <StatusBanner/>
            </section>
        </main>
    }
}

/// Fetch a fresh snapshot and apply it unless a newer fetch landed first.
fn refresh_activities(activities: RwSignal<ActivitiesState>) {
    let Some(token) = activities.try_update(ActivitiesState::begin_fetch) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::activities::FetchOutcome;

        let result = crate::net::api::fetch_activities().await;
        if let Err(e) = &result {
            leptos::logging::error!("Error fetching activities: {e}");
        }
        if activities.try_update(|s| s.apply_fetch(token, result)) == Some(FetchOutcome::Stale) {
            leptos::logging::log!("discarded stale activities response");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = token;
}

fn run_mutation(
    kind: MutationKind,
    activity: String,
    email: String,
    activities: RwSignal<ActivitiesState>,
    status: RwSignal<StatusState>,
    draft: SignupDraft,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;
        use crate::util::mutation::resolve_mutation;

        let result = match kind {
            MutationKind::Signup => api::signup(&activity, &email).await,
            MutationKind::Unregister => api::unregister(&activity, &email).await,
        };
        if let Err(e) = &result {
            leptos::logging::error!("Error {}: {e}", kind.action());
        }

        let effects = resolve_mutation(kind, &result);
        status.update(|s| {
            s.show(effects.message);
        });
        if effects.reset_form {
            draft.reset();
        }
        if effects.refetch {
            refresh_activities(activities);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (kind, activity, email, activities, status, draft);
}
