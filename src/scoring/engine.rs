//! Question, category and overall scoring.
//!
//! Every function here is total: empty inputs and stale answers score as
//! zero instead of erroring, and nothing divides by zero.

use std::borrow::Borrow;

use crate::model::{AnswerSet, Question, RegionSelection};

/// Maximum score a single question can contribute
pub const MAX_QUESTION_SCORE: f64 = 100.0;

/// Score a single question on a descending linear scale (0-100).
///
/// Option 0 scores 100 and the last option scores 0, with equal spacing in
/// between. A single-option question scores 100 when answered. Unanswered
/// questions, answers that are not among the options and questions without
/// options all score 0.
#[must_use]
pub fn score_question(question: &Question, answers: &AnswerSet) -> f64 {
    let option_count = question.options.len();
    if option_count == 0 {
        return 0.0;
    }

    let Some(index) = answers.selected_index(question) else {
        if let Some(stale) = answers.get(&question.id) {
            tracing::debug!(
                "Answer '{}' for question '{}' is not among its options, scoring as unanswered",
                stale,
                question.id
            );
        }
        return 0.0;
    };

    if option_count == 1 {
        return MAX_QUESTION_SCORE;
    }

    let steps = (option_count - 1) as f64;
    ((steps - index as f64) / steps) * MAX_QUESTION_SCORE
}

/// Aggregate question scores into a rounded percentage of the maximum possible.
fn aggregate<'q>(questions: impl Iterator<Item = &'q Question>, answers: &AnswerSet) -> u32 {
    let (count, total) = questions.fold((0_usize, 0.0_f64), |(count, total), q| {
        (count + 1, total + score_question(q, answers))
    });

    let max_possible = count as f64 * MAX_QUESTION_SCORE;
    if max_possible <= 0.0 {
        return 0;
    }

    ((total / max_possible) * 100.0).round() as u32
}

/// Percentage score for one category over the filtered question set.
///
/// A category with no applicable questions scores 0.
#[must_use]
pub fn category_progress<Q: Borrow<Question>>(
    category_id: &str,
    questions: &[Q],
    answers: &AnswerSet,
) -> u32 {
    aggregate(
        questions
            .iter()
            .map(<Q as Borrow<Question>>::borrow)
            .filter(|q| q.category_id == category_id),
        answers,
    )
}

/// Percentage score across the whole filtered question set.
///
/// This is the total of all question scores over the maximum possible
/// total, so larger categories weigh more; it is not an average of the
/// category percentages.
#[must_use]
pub fn overall_progress<Q: Borrow<Question>>(questions: &[Q], answers: &AnswerSet) -> u32 {
    aggregate(questions.iter().map(<Q as Borrow<Question>>::borrow), answers)
}

/// Number of filtered questions holding a valid answer
#[must_use]
pub fn answered_count<Q: Borrow<Question>>(questions: &[Q], answers: &AnswerSet) -> usize {
    questions
        .iter()
        .map(<Q as Borrow<Question>>::borrow)
        .filter(|q| answers.is_validly_answered(q))
        .count()
}

/// Whether the assessment can be finished.
///
/// Every filtered question needs a valid answer. An empty filtered set only
/// counts as complete when a region has been chosen or the catalog itself
/// is empty, so an untouched assessment never reports itself as done.
#[must_use]
pub fn is_complete<Q: Borrow<Question>>(
    questions: &[Q],
    answers: &AnswerSet,
    catalog_question_count: usize,
    selection: &RegionSelection,
) -> bool {
    if questions.is_empty() {
        return catalog_question_count == 0 || selection.is_selected();
    }
    answered_count(questions, answers) == questions.len()
}

/// Whether every filtered question of a category holds a valid answer.
///
/// Categories without applicable questions count as answered, so they never
/// block moving on to the next category.
#[must_use]
pub fn is_category_answered<Q: Borrow<Question>>(
    category_id: &str,
    questions: &[Q],
    answers: &AnswerSet,
) -> bool {
    questions
        .iter()
        .map(<Q as Borrow<Question>>::borrow)
        .filter(|q| q.category_id == category_id)
        .all(|q| answers.is_validly_answered(q))
}

/// Human-readable progress line such as `"3 of 12 questions answered"`.
#[must_use]
pub fn progress_status<Q: Borrow<Question>>(
    questions: &[Q],
    answers: &AnswerSet,
    catalog_question_count: usize,
    selection: &RegionSelection,
) -> String {
    if questions.is_empty() {
        if catalog_question_count > 0 && !selection.is_selected() {
            return "Select a region to begin.".to_string();
        }
        return "0 of 0 questions answered".to_string();
    }
    format!(
        "{} of {} questions answered",
        answered_count(questions, answers),
        questions.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_option() -> Question {
        Question::new("q", "Q?", "a", ["A", "B", "C", "D"])
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_score_linear_scale() {
        let q = four_option();
        let expected = [100.0, 200.0 / 3.0, 100.0 / 3.0, 0.0];
        for (label, want) in ["A", "B", "C", "D"].iter().zip(expected) {
            let answers = AnswerSet::new().with_answer("q", *label);
            assert_close(score_question(&q, &answers), want);
        }
    }

    #[test]
    fn test_score_unanswered_and_stale() {
        let q = four_option();
        assert_close(score_question(&q, &AnswerSet::new()), 0.0);
        let stale = AnswerSet::new().with_answer("q", "E");
        assert_close(score_question(&q, &stale), 0.0);
    }

    #[test]
    fn test_score_single_option() {
        let q = Question::new("q", "Q?", "a", ["Only"]);
        assert_close(score_question(&q, &AnswerSet::new()), 0.0);
        let answers = AnswerSet::new().with_answer("q", "Only");
        assert_close(score_question(&q, &answers), 100.0);
    }

    #[test]
    fn test_score_no_options() {
        let q = Question::new("q", "Q?", "a", Vec::<String>::new());
        let answers = AnswerSet::new().with_answer("q", "anything");
        assert_close(score_question(&q, &answers), 0.0);
    }

    #[test]
    fn test_single_question_rounds_to_67() {
        let qs = vec![four_option()];
        let answers = AnswerSet::new().with_answer("q", "B");
        assert_eq!(overall_progress(&qs, &answers), 67);
        assert_eq!(category_progress("a", &qs, &answers), 67);
    }

    #[test]
    fn test_overall_is_question_weighted() {
        let qs = vec![
            Question::new("a1", "", "a", ["Y", "N"]),
            Question::new("a2", "", "a", ["Y", "N"]),
            Question::new("b1", "", "b", ["Y", "N"]),
        ];
        let answers = AnswerSet::new().with_answer("a1", "Y").with_answer("a2", "Y");
        assert_eq!(category_progress("a", &qs, &answers), 100);
        assert_eq!(category_progress("b", &qs, &answers), 0);
        // Average of the category scores would be 50
        assert_eq!(overall_progress(&qs, &answers), 67);
    }

    #[test]
    fn test_empty_sets_score_zero() {
        let empty: Vec<Question> = Vec::new();
        assert_eq!(overall_progress(&empty, &AnswerSet::new()), 0);
        let qs = vec![four_option()];
        assert_eq!(category_progress("missing", &qs, &AnswerSet::new()), 0);
    }

    #[test]
    fn test_accepts_borrowed_questions() {
        let qs = vec![four_option()];
        let refs: Vec<&Question> = qs.iter().collect();
        let answers = AnswerSet::new().with_answer("q", "A");
        assert_eq!(overall_progress(&refs, &answers), 100);
        assert_eq!(answered_count(&refs, &answers), 1);
    }

    #[test]
    fn test_completion_rules() {
        let qs = vec![four_option(), Question::new("q2", "", "a", ["Y", "N"])];
        let region = RegionSelection::Region("EU".to_string());
        let partial = AnswerSet::new().with_answer("q", "A");
        assert!(!is_complete(&qs, &partial, 2, &region));

        let stale = partial.clone().with_answer("q2", "Maybe");
        assert!(!is_complete(&qs, &stale, 2, &region));

        let full = partial.with_answer("q2", "N");
        assert!(is_complete(&qs, &full, 2, &region));
    }

    #[test]
    fn test_completion_with_empty_filtered_set() {
        let empty: Vec<Question> = Vec::new();
        let answers = AnswerSet::new();
        assert!(!is_complete(&empty, &answers, 5, &RegionSelection::Unselected));
        assert!(is_complete(&empty, &answers, 0, &RegionSelection::Unselected));
        assert!(is_complete(&empty, &answers, 5, &RegionSelection::All));
    }

    #[test]
    fn test_category_answered() {
        let qs = vec![
            Question::new("a1", "", "a", ["Y", "N"]),
            Question::new("b1", "", "b", ["Y", "N"]),
        ];
        let answers = AnswerSet::new().with_answer("a1", "N");
        assert!(is_category_answered("a", &qs, &answers));
        assert!(!is_category_answered("b", &qs, &answers));
        assert!(is_category_answered("empty", &qs, &answers));
    }

    #[test]
    fn test_progress_status() {
        let empty: Vec<Question> = Vec::new();
        let answers = AnswerSet::new();
        assert_eq!(
            progress_status(&empty, &answers, 3, &RegionSelection::Unselected),
            "Select a region to begin."
        );
        assert_eq!(
            progress_status(&empty, &answers, 0, &RegionSelection::Unselected),
            "0 of 0 questions answered"
        );

        let qs = vec![four_option(), Question::new("q2", "", "a", ["Y", "N"])];
        let answers = AnswerSet::new().with_answer("q2", "Y");
        assert_eq!(
            progress_status(&qs, &answers, 2, &RegionSelection::All),
            "1 of 2 questions answered"
        );
    }
}
