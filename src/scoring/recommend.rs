//! Answer-triggered recommendation selection.

use std::borrow::Borrow;

use crate::model::{AnswerSet, Question, Recommendation};

/// Number of recommendations surfaced to the user
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Whether a question's recommendation trigger fires for the current answers.
///
/// With an explicit `trigger_option_values` list the answer must be one of
/// those values. Without one, only the last (least mature) option fires.
/// Unanswered questions and questions without a trigger id never fire.
#[must_use]
pub fn trigger_fires(question: &Question, answers: &AnswerSet) -> bool {
    if question.recommendation_trigger_id.is_none() {
        return false;
    }
    let Some(answer) = answers.get(&question.id) else {
        return false;
    };

    match &question.trigger_option_values {
        Some(values) => values.iter().any(|v| v == answer),
        None => question.last_option() == Some(answer),
    }
}

/// Select the prioritized, de-duplicated recommendations raised by `answers`.
///
/// Questions are scanned in order; each firing trigger appends its
/// recommendation unless that id was already seen. Trigger ids missing from
/// `recommendations` are skipped. The result is stably sorted by priority
/// (high, medium, low), keeping discovery order within a priority, and cut
/// to `limit` entries.
#[must_use]
pub fn select_recommendations<Q: Borrow<Question>>(
    questions: &[Q],
    answers: &AnswerSet,
    recommendations: &[Recommendation],
    limit: usize,
) -> Vec<Recommendation> {
    let mut selected: Vec<Recommendation> = Vec::new();

    for question in questions.iter().map(<Q as Borrow<Question>>::borrow) {
        if !trigger_fires(question, answers) {
            continue;
        }
        let Some(trigger_id) = question.recommendation_trigger_id.as_deref() else {
            continue;
        };
        if selected.iter().any(|r| r.id == trigger_id) {
            continue;
        }
        match recommendations.iter().find(|r| r.id == trigger_id) {
            Some(rec) => {
                tracing::debug!(
                    "Question '{}' triggered recommendation '{}'",
                    question.id,
                    rec.id
                );
                selected.push(rec.clone());
            }
            None => {
                tracing::debug!(
                    "Question '{}' triggers unknown recommendation '{}', skipping",
                    question.id,
                    trigger_id
                );
            }
        }
    }

    // Vec::sort_by_key is stable
    selected.sort_by_key(|r| r.priority);
    selected.truncate(limit);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn rec(id: &str, priority: Priority) -> Recommendation {
        Recommendation::new(id, id, "", "https://example.com", priority)
    }

    const OPTIONS: [&str; 4] = ["Yes, fully", "Partially", "No, in progress", "No, not started"];

    #[test]
    fn test_explicit_values_fire_only_on_listed_answers() {
        let q = Question::new("q", "", "a", OPTIONS).with_trigger("R", ["Partially"]);
        let fired = AnswerSet::new().with_answer("q", "Partially");
        assert!(trigger_fires(&q, &fired));

        let worst = AnswerSet::new().with_answer("q", "No, not started");
        assert!(!trigger_fires(&q, &worst));
    }

    #[test]
    fn test_fallback_fires_only_on_last_option() {
        let q = Question::new("q", "", "a", OPTIONS).with_last_option_trigger("R");
        for (answer, expected) in [
            ("Yes, fully", false),
            ("Partially", false),
            ("No, in progress", false),
            ("No, not started", true),
        ] {
            let answers = AnswerSet::new().with_answer("q", answer);
            assert_eq!(trigger_fires(&q, &answers), expected, "answer {answer}");
        }
    }

    #[test]
    fn test_explicit_empty_list_never_fires() {
        let q = Question::new("q", "", "a", OPTIONS).with_trigger("R", Vec::<String>::new());
        let answers = AnswerSet::new().with_answer("q", "No, not started");
        assert!(!trigger_fires(&q, &answers));
    }

    #[test]
    fn test_unanswered_and_untriggered_never_fire() {
        let triggered = Question::new("q", "", "a", OPTIONS).with_last_option_trigger("R");
        assert!(!trigger_fires(&triggered, &AnswerSet::new()));

        let plain = Question::new("q", "", "a", OPTIONS);
        let answers = AnswerSet::new().with_answer("q", "No, not started");
        assert!(!trigger_fires(&plain, &answers));
    }

    #[test]
    fn test_dedup_first_seen_wins() {
        let questions: Vec<Question> = (0..5)
            .map(|i| Question::new(format!("q{i}"), "", "a", OPTIONS).with_last_option_trigger("R"))
            .collect();
        let answers: AnswerSet = (0..5)
            .map(|i| (format!("q{i}"), "No, not started"))
            .collect();
        let selected = select_recommendations(&questions, &answers, &[rec("R", Priority::High)], 3);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "R");
    }

    #[test]
    fn test_priority_sort_is_stable_and_truncated() {
        let questions = vec![
            Question::new("q1", "", "a", OPTIONS).with_last_option_trigger("LOW"),
            Question::new("q2", "", "a", OPTIONS).with_last_option_trigger("MED_1"),
            Question::new("q3", "", "a", OPTIONS).with_last_option_trigger("HIGH_1"),
            Question::new("q4", "", "a", OPTIONS).with_last_option_trigger("MED_2"),
            Question::new("q5", "", "a", OPTIONS).with_last_option_trigger("HIGH_2"),
        ];
        let answers: AnswerSet = ["q1", "q2", "q3", "q4", "q5"]
            .into_iter()
            .map(|id| (id, "No, not started"))
            .collect();
        let catalog = vec![
            rec("LOW", Priority::Low),
            rec("MED_1", Priority::Medium),
            rec("MED_2", Priority::Medium),
            rec("HIGH_1", Priority::High),
            rec("HIGH_2", Priority::High),
        ];

        let all = select_recommendations(&questions, &answers, &catalog, 10);
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["HIGH_1", "HIGH_2", "MED_1", "MED_2", "LOW"]);

        let top = select_recommendations(&questions, &answers, &catalog, 3);
        let ids: Vec<&str> = top.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["HIGH_1", "HIGH_2", "MED_1"]);
    }

    #[test]
    fn test_dangling_trigger_is_skipped() {
        let questions = vec![
            Question::new("q1", "", "a", OPTIONS).with_last_option_trigger("MISSING"),
            Question::new("q2", "", "a", OPTIONS).with_last_option_trigger("R"),
        ];
        let answers = AnswerSet::new()
            .with_answer("q1", "No, not started")
            .with_answer("q2", "No, not started");
        let selected = select_recommendations(&questions, &answers, &[rec("R", Priority::Low)], 3);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "R");
    }

    #[test]
    fn test_zero_limit() {
        let questions = vec![Question::new("q", "", "a", OPTIONS).with_last_option_trigger("R")];
        let answers = AnswerSet::new().with_answer("q", "No, not started");
        assert!(select_recommendations(&questions, &answers, &[rec("R", Priority::High)], 0).is_empty());
    }
}
