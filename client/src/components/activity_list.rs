//! Activity list region: loading line, failure message, empty placeholder, or cards.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::activity_card::ActivityCard;
use crate::state::activities::ActivitiesState;
use crate::state::filters::FilterState;
use crate::util::activity_view::{ActivityListView, LOADING_MESSAGE, NO_ACTIVITIES_MESSAGE, list_view};

/// Filtered, sorted activity cards for the current controls.
#[component]
pub fn ActivityList(on_unregister: Callback<(String, String)>) -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let filters = expect_context::<RwSignal<FilterState>>();

    let list = move || {
        let current = filters.get();
        activities.with(|state| list_view(state, &current))
    };

    view! {
        <div id="activities-list">
            {move || match list() {
                ActivityListView::Loading => view! { <p>{LOADING_MESSAGE}</p> }.into_any(),
                ActivityListView::Failed(message) => view! { <p>{message}</p> }.into_any(),
                ActivityListView::Empty => view! { <p>{NO_ACTIVITIES_MESSAGE}</p> }.into_any(),
                ActivityListView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCard card=card on_unregister=on_unregister/> })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}
        </div>
    }
}
