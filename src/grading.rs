// src/grading.rs

//! Scoring of a quiz attempt.
//!
//! Grading is permissive: a question is scored from the `is_correct` flag of
//! the chosen answer alone. Question type and the number of correct answers a
//! question has are not consulted, and selections that cannot be resolved are
//! skipped instead of rejected.

use std::collections::HashMap;

use serde_json::Value;
use sqlx::FromRow;

/// One answer option together with its correctness flag.
#[derive(Debug, Clone, FromRow)]
pub struct AnswerKey {
    pub id: i64,
    pub question_id: i64,
    pub is_correct: bool,
}

/// A question of the quiz being graded, with all of its options.
#[derive(Debug, Clone)]
pub struct GradableQuestion {
    pub id: i64,
    pub answers: Vec<AnswerKey>,
}

/// A selection that resolved to an option of its question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedAnswer {
    pub question_id: i64,
    pub answer_id: i64,
    pub is_correct: bool,
}

#[derive(Debug, Default)]
pub struct Grade {
    pub answers: Vec<GradedAnswer>,
    pub score: i64,
}

/// Groups answer keys under their questions, keeping the order of `question_ids`.
pub fn gradable_questions(question_ids: &[i64], keys: Vec<AnswerKey>) -> Vec<GradableQuestion> {
    let mut by_question: HashMap<i64, Vec<AnswerKey>> = HashMap::new();
    for key in keys {
        by_question.entry(key.question_id).or_default().push(key);
    }

    question_ids
        .iter()
        .map(|&id| GradableQuestion {
            id,
            answers: by_question.remove(&id).unwrap_or_default(),
        })
        .collect()
}

/// Reads a chosen answer id from a JSON number or a numeric string.
pub fn parse_selection(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Grades `selections` (question id as string -> chosen answer id) against `questions`.
///
/// Produces at most one graded answer per question, in question order.
pub fn grade(questions: &[GradableQuestion], selections: &HashMap<String, Value>) -> Grade {
    let mut grade = Grade::default();

    for question in questions {
        let Some(answer_id) = selections
            .get(&question.id.to_string())
            .and_then(parse_selection)
        else {
            continue;
        };

        let Some(answer) = question.answers.iter().find(|a| a.id == answer_id) else {
            continue;
        };

        if answer.is_correct {
            grade.score += 1;
        }

        grade.answers.push(GradedAnswer {
            question_id: question.id,
            answer_id: answer.id,
            is_correct: answer.is_correct,
        });
    }

    grade
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(id: i64, question_id: i64, is_correct: bool) -> AnswerKey {
        AnswerKey {
            id,
            question_id,
            is_correct,
        }
    }

    /// Three questions, answers 10/20/30 correct, 11/21/31 wrong.
    fn sample_quiz() -> Vec<GradableQuestion> {
        gradable_questions(
            &[1, 2, 3],
            vec![
                key(10, 1, true),
                key(11, 1, false),
                key(20, 2, true),
                key(21, 2, false),
                key(30, 3, true),
                key(31, 3, false),
            ],
        )
    }

    fn selections(value: Value) -> HashMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn omitted_question_is_skipped() {
        let grade = grade(&sample_quiz(), &selections(json!({"1": 10, "2": 20})));

        assert_eq!(grade.score, 2);
        assert_eq!(grade.answers.len(), 2);
        assert!(grade.answers.iter().all(|a| a.question_id != 3));
    }

    #[test]
    fn wrong_answers_are_recorded_but_not_scored() {
        let grade = grade(&sample_quiz(), &selections(json!({"1": 11, "2": 20, "3": 31})));

        assert_eq!(grade.score, 1);
        assert_eq!(grade.answers.len(), 3);
        assert!(!grade.answers[0].is_correct);
        assert!(grade.answers[1].is_correct);
    }

    #[test]
    fn answer_of_another_question_is_skipped() {
        // 20 belongs to question 2, not question 1.
        let grade = grade(&sample_quiz(), &selections(json!({"1": 20})));

        assert_eq!(grade.score, 0);
        assert!(grade.answers.is_empty());
    }

    #[test]
    fn numeric_strings_grade_like_numbers() {
        let from_strings = grade(&sample_quiz(), &selections(json!({"1": "10", "2": " 21 "})));
        let from_numbers = grade(&sample_quiz(), &selections(json!({"1": 10, "2": 21})));

        assert_eq!(from_strings.score, from_numbers.score);
        assert_eq!(from_strings.answers, from_numbers.answers);
    }

    #[test]
    fn unusable_selections_are_skipped() {
        let grade = grade(
            &sample_quiz(),
            &selections(json!({"1": null, "2": "abc", "3": [30], "99": 10})),
        );

        assert_eq!(grade.score, 0);
        assert!(grade.answers.is_empty());
    }

    #[test]
    fn several_correct_options_each_count() {
        let questions = gradable_questions(&[1], vec![key(10, 1, true), key(11, 1, true)]);

        assert_eq!(grade(&questions, &selections(json!({"1": 11}))).score, 1);
    }

    #[test]
    fn question_without_options_never_matches() {
        let questions = gradable_questions(&[5], vec![]);

        assert!(grade(&questions, &selections(json!({"5": 1}))).answers.is_empty());
    }

    #[test]
    fn parse_selection_accepts_integral_floats() {
        assert_eq!(parse_selection(&json!(7.0)), Some(7));
        assert_eq!(parse_selection(&json!(7.5)), None);
        assert_eq!(parse_selection(&json!(true)), None);
    }
}
