// src/views/submission.rs

use maud::{Markup, html};

use crate::{
    models::submission::{SubmissionResult, SubmissionSummary},
    views::{format_timestamp, page},
};

pub fn quiz_result(result: &SubmissionResult) -> Markup {
    let SubmissionResult {
        submission,
        quiz,
        answers,
        total_questions,
    } = result;

    page(
        &format!("Result: {}", quiz.title),
        html! {
            h1 { (quiz.title) }
            p {
                "Well done, " strong { (submission.user_name) } "! "
                "You scored " mark #score { (submission.score) } " out of "
                span #total-questions { (total_questions) } "."
            }
            small { "Submitted " (format_timestamp(&submission.submitted_at)) }

            @if answers.is_empty() {
                p { "No answers were recorded for this attempt." }
            } @else {
                table {
                    thead {
                        tr { th { "Question" } th { "Your answer" } th { "Result" } }
                    }
                    tbody {
                        @for answer in answers {
                            tr class=(if answer.is_correct { "correct" } else { "incorrect" }) {
                                td { (answer.question_text) }
                                td { (answer.answer_text) }
                                td { @if answer.is_correct { "Correct" } @else { "Incorrect" } }
                            }
                        }
                    }
                }
            }

            a href={ "/quizzes/" (quiz.id) "/" } { "Try again" }
        },
    )
}

pub fn history(submissions: &[SubmissionSummary]) -> Markup {
    page(
        "History",
        html! {
            h1 { "Past submissions" }
            @if submissions.is_empty() {
                p { "Nobody has taken a quiz yet." }
            } @else {
                table {
                    thead {
                        tr { th { "Name" } th { "Quiz" } th { "Score" } th { "Submitted" } }
                    }
                    tbody {
                        @for s in submissions {
                            tr {
                                td { a href={ "/results/" (s.id) "/" } { (s.user_name) } }
                                td { (s.quiz_title) }
                                td { (s.score) }
                                td { (format_timestamp(&s.submitted_at)) }
                            }
                        }
                    }
                }
            }
        },
    )
}
