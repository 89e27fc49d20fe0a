// src/views/event.rs

use maud::{Markup, PreEscaped, html};

use crate::{
    models::event::Event,
    views::{format_date, page},
};

pub(crate) fn event_card(event: &Event) -> Markup {
    html! {
        article.event {
            h3 { (event.title) }
            p {
                time datetime=(event.date.to_string()) { (format_date(&event.date)) }
                " · " (event.location)
            }
            @if !event.description.is_empty() {
                div.description { (PreEscaped(&event.description)) }
            }
        }
    }
}

pub fn event_list(events: &[Event]) -> Markup {
    page(
        "Events",
        html! {
            h1 { "Upcoming events" }
            @if events.is_empty() {
                p { "No upcoming events." }
            }
            @for event in events {
                (event_card(event))
            }
        },
    )
}
