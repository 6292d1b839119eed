//! Signup form: participant email plus activity select.
//!
//! Field validity is left to the browser (`required`, `type="email"`); the
//! submit event only fires once both fields pass.

use leptos::prelude::*;

use crate::state::activities::ActivitiesState;
use crate::util::activity_view::activity_options;

/// Form draft owned by the page so a successful signup can reset it.
#[derive(Clone, Copy)]
pub struct SignupDraft {
    pub email: RwSignal<String>,
    pub activity: RwSignal<String>,
}

impl SignupDraft {
    pub fn new() -> Self {
        Self { email: RwSignal::new(String::new()), activity: RwSignal::new(String::new()) }
    }

    pub fn reset(&self) {
        self.email.set(String::new());
        self.activity.set(String::new());
    }
}

impl Default for SignupDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Submits `(activity, email)` through `on_submit`.
#[component]
pub fn SignupForm(draft: SignupDraft, on_submit: Callback<(String, String)>) -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let options = move || activities.with(|s| activity_options(&s.snapshot));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run((draft.activity.get_untracked(), draft.email.get_untracked()));
    };

    view! {
        <form id="signup-form" on:submit=submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    id="email"
                    type="email"
                    required=true
                    placeholder="your-email@example.com"
                    prop:value=move || draft.email.get()
                    on:input=move |ev| draft.email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || draft.activity.get()
                    on:change=move |ev| draft.activity.set(event_target_value(&ev))
                >
                    {move || {
                        options()
                            .into_iter()
                            .map(|option| view! { <option value=option.value>{option.label}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
