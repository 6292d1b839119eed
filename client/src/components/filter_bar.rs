//! Search box plus category and sort selects.
//!
//! Changing any control re-renders the list from the held snapshot; no
//! request is made.

use leptos::prelude::*;

use crate::state::activities::ActivitiesState;
use crate::state::filters::{FilterState, SortKey};
use crate::util::activity_view::category_options;

#[component]
pub fn FilterBar() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let filters = expect_context::<RwSignal<FilterState>>();

    // A control change redraws from the kept snapshot, replacing any
    // failure message.
    let clear_load_error = move || {
        if activities.with_untracked(|s| s.load_error.is_some()) {
            activities.update(|s| {
                s.clear_load_error();
            });
        }
    };

    let options = move || activities.with(|s| category_options(&s.snapshot));

    // A refetch can drop the selected category; the select would then show
    // an option other than the one filtering the list.
    Effect::new(move || {
        let categories = activities.with(|s| s.snapshot.categories());
        let mut next = filters.get_untracked();
        if next.retain_category(&categories) {
            filters.set(next);
        }
    });

    view! {
        <div class="filter-bar">
            <input
                id="search-input"
                type="text"
                placeholder="Search activities..."
                prop:value=move || filters.get().search
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filters.update(|f| f.search = value);
                    clear_load_error();
                }
            />
            <select
                id="category-filter"
                prop:value=move || filters.get().category
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filters.update(|f| f.category = value);
                    clear_load_error();
                }
            >
                {move || {
                    options()
                        .into_iter()
                        .map(|option| view! { <option value=option.value>{option.label}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
            <select
                id="sort-filter"
                prop:value=move || filters.get().sort.as_str()
                on:change=move |ev| {
                    let sort = SortKey::parse(&event_target_value(&ev));
                    filters.update(|f| f.sort = sort);
                    clear_load_error();
                }
            >
                <option value=SortKey::Name.as_str()>"Sort by name"</option>
                <option value=SortKey::Time.as_str()>"Sort by time"</option>
            </select>
        </div>
    }
}
