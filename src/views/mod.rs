// src/views/mod.rs

//! Server-rendered pages.

pub mod event;
pub mod quiz;
pub mod submission;

use axum::http::StatusCode;
use chrono::{DateTime, NaiveDate, Utc};
use maud::{DOCTYPE, Markup, html};

/// Wraps page content in the site layout.
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · Quizzes & Events" }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                header {
                    nav {
                        a href="/" { strong { "Quizzes & Events" } }
                        ul {
                            li { a href="/quizzes/" { "Quizzes" } }
                            li { a href="/events/" { "Events" } }
                            li { a href="/history/" { "History" } }
                            li { a href="/profile/" { "Profile" } }
                        }
                    }
                }
                main {
                    (content)
                }
            }
        }
    }
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");
    page(
        title,
        html! {
            h1 { (status.as_u16()) " " (title) }
            p { (message) }
            a href="/" { "Back to home" }
        },
    )
}

pub fn profile() -> Markup {
    page(
        "Profile",
        html! {
            h1 { "Profile" }
            p {
                "Quizzes here are taken anonymously. Your name is stored only with "
                "each submission, so past attempts are listed in the "
                a href="/history/" { "history" } "."
            }
        },
    )
}

pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M").to_string()
}

pub(crate) fn format_date(date: &NaiveDate) -> String {
    date.format("%A, %b %-d, %Y").to_string()
}
