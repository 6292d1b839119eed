//! Status message region for signup/unregister outcomes.
//!
//! The hide timer is a single slot: each new message drops the previous
//! `Timeout` (which cancels it) and arms a fresh one for the new sequence.
//! The slot is owned by the component, so unmounting cancels a pending hide.

use leptos::prelude::*;

use crate::state::status::StatusState;
#[cfg(feature = "hydrate")]
use crate::state::status::STATUS_DISPLAY_MS;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    #[cfg(feature = "hydrate")]
    {
        let timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
        Effect::new(move || {
            let next = status.with(StatusState::visible_seq).map(|seq| {
                gloo_timers::callback::Timeout::new(STATUS_DISPLAY_MS, move || {
                    status.update(|s| {
                        s.hide(seq);
                    });
                })
            });
            timer.set_value(next);
        });
    }

    view! {
        <div id="message" class=move || status.with(StatusState::class)>
            {move || status.with(|s| s.text().to_owned())}
        </div>
    }
}
