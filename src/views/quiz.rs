// src/views/quiz.rs

use maud::{Markup, PreEscaped, html};

use crate::{
    models::{event::Event, quiz::Quiz},
    views::{event::event_card, format_timestamp, page},
};

fn quiz_card(quiz: &Quiz) -> Markup {
    html! {
        article.quiz {
            h3 { a href={ "/quizzes/" (quiz.id) "/" } { (quiz.title) } }
            @if !quiz.description.is_empty() {
                div.description { (PreEscaped(&quiz.description)) }
            }
            small { "Added " (format_timestamp(&quiz.created_at)) }
        }
    }
}

pub fn home(latest_quizzes: &[Quiz], upcoming_events: &[Event]) -> Markup {
    page(
        "Home",
        html! {
            h1 { "Welcome" }
            section {
                h2 { "Latest quizzes" }
                @if latest_quizzes.is_empty() {
                    p { "No quizzes yet." }
                }
                @for quiz in latest_quizzes {
                    (quiz_card(quiz))
                }
                a href="/quizzes/" { "All quizzes" }
            }
            section {
                h2 { "Upcoming events" }
                @if upcoming_events.is_empty() {
                    p { "No upcoming events." }
                }
                @for event in upcoming_events {
                    (event_card(event))
                }
                a href="/events/" { "All events" }
            }
        },
    )
}

pub fn quiz_list(quizzes: &[Quiz]) -> Markup {
    page(
        "Quizzes",
        html! {
            h1 { "Quizzes" }
            @if quizzes.is_empty() {
                p { "No quizzes yet." }
            }
            @for quiz in quizzes {
                (quiz_card(quiz))
            }
        },
    )
}

/// Quiz-taking page. The form itself is built client-side by `quiz.js`
/// from `/quizzes/{id}/data/`.
pub fn quiz_attempt(quiz: &Quiz) -> Markup {
    page(
        &quiz.title,
        html! {
            h1 { (quiz.title) }
            @if !quiz.description.is_empty() {
                div.description { (PreEscaped(&quiz.description)) }
            }
            form #quiz-form
                data-data-url={ "/quizzes/" (quiz.id) "/data/" }
                data-submit-url={ "/quizzes/" (quiz.id) "/submit/" } {
                label for="user-name" { "Your name" }
                input #user-name type="text" name="user_name" maxlength="150" required;
                div #questions { p { "Loading questions…" } }
                p #quiz-error role="alert" {}
                button type="submit" { "Submit" }
            }
            script src="/static/quiz.js" defer {}
        },
    )
}
