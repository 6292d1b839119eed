//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::board::BoardPage;
use crate::state::{activities::ActivitiesState, filters::FilterState, status::StatusState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the activity store, list controls, and status region as shared
/// contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let activities = RwSignal::new(ActivitiesState::default());
    let filters = RwSignal::new(FilterState::default());
    let status = RwSignal::new(StatusState::default());

    provide_context(activities);
    provide_context(filters);
    provide_context(status);

    view! {
        <Stylesheet id="leptos" href="/pkg/activity-board.css"/>
        <Title text="Activity Board"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BoardPage/>
            </Routes>
        </Router>
    }
}
