//! Card for a single activity with its participant roster.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::activity_view::{ActivityCardView, NO_PARTICIPANTS_MESSAGE, ParticipantRow};

/// One activity: details, availability, and removable participants.
#[component]
pub fn ActivityCard(card: ActivityCardView, on_unregister: Callback<(String, String)>) -> impl IntoView {
    let availability = card.availability_label();
    let participants = if card.participants.is_empty() {
        view! {
            <p>
                <em>{NO_PARTICIPANTS_MESSAGE}</em>
            </p>
        }
        .into_any()
    } else {
        view! {
            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">
                    {card
                        .participants
                        .into_iter()
                        .map(|row| view! { <ParticipantItem row=row on_unregister=on_unregister/> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {card.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-container">{participants}</div>
        </div>
    }
}

#[component]
fn ParticipantItem(row: ParticipantRow, on_unregister: Callback<(String, String)>) -> impl IntoView {
    let ParticipantRow { activity, email } = row;
    let target = (activity.clone(), email.clone());

    view! {
        <li>
            <span class="participant-email">{email.clone()}</span>
            <button
                class="delete-btn"
                data-activity=activity
                data-email=email
                title="Remove participant"
                on:click=move |_| on_unregister.run(target.clone())
            >
                "❌"
            </button>
        </li>
    }
}
