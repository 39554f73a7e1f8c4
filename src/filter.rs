//! Region-based question filtering.
//!
//! The filtered set is the basis for every downstream computation, so it
//! should be derived once per region change and reused as-is.

use crate::model::{Question, RegionSelection};

/// Narrow `questions` to those applicable to `selection`.
///
/// - [`RegionSelection::All`]: every question, in original order.
/// - [`RegionSelection::Unselected`]: only region-neutral questions.
/// - [`RegionSelection::Region`]: region-neutral questions plus those tagged
///   with that region.
pub fn filter_questions<'a>(questions: &'a [Question], selection: &RegionSelection) -> Vec<&'a Question> {
    let filtered: Vec<&Question> = match selection {
        RegionSelection::All => questions.iter().collect(),
        RegionSelection::Unselected => questions.iter().filter(|q| q.is_region_neutral()).collect(),
        RegionSelection::Region(region) => questions
            .iter()
            .filter(|q| q.is_region_neutral() || q.is_tagged_with(region))
            .collect(),
    };

    tracing::debug!(
        "Region filter {} kept {} of {} questions",
        selection,
        filtered.len(),
        questions.len()
    );

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question::new("neutral", "N", "a", ["Yes", "No"]),
            Question::new("eu", "E", "a", ["Yes", "No"]).with_regions(["EU"]),
            Question::new("eu_uk", "G", "b", ["Yes", "No"]).with_regions(["EU", "UK"]),
            Question::new("usa", "U", "b", ["Yes", "No"]).with_regions(["USA"]),
            Question::new("neutral_2", "N2", "b", ["Yes", "No"]),
        ]
    }

    fn ids(filtered: &[&Question]) -> Vec<String> {
        filtered.iter().map(|q| q.id.clone()).collect()
    }

    #[test]
    fn test_show_all_is_identity() {
        let qs = questions();
        let filtered = filter_questions(&qs, &RegionSelection::All);
        assert_eq!(filtered.len(), qs.len());
        assert!(filtered.iter().zip(&qs).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_unselected_keeps_only_neutral() {
        let qs = questions();
        let filtered = filter_questions(&qs, &RegionSelection::Unselected);
        assert_eq!(ids(&filtered), vec!["neutral", "neutral_2"]);
    }

    #[test]
    fn test_concrete_region() {
        let qs = questions();
        let uk = filter_questions(&qs, &RegionSelection::Region("UK".to_string()));
        assert_eq!(ids(&uk), vec!["neutral", "eu_uk", "neutral_2"]);

        let eu = filter_questions(&qs, &RegionSelection::Region("EU".to_string()));
        assert_eq!(ids(&eu), vec!["neutral", "eu", "eu_uk", "neutral_2"]);
    }

    #[test]
    fn test_unknown_region_behaves_like_neutral_only() {
        let qs = questions();
        let filtered = filter_questions(&qs, &RegionSelection::Region("APAC".to_string()));
        assert_eq!(ids(&filtered), vec!["neutral", "neutral_2"]);
    }

    #[test]
    fn test_deterministic() {
        let qs = questions();
        let selection = RegionSelection::Region("USA".to_string());
        assert_eq!(
            ids(&filter_questions(&qs, &selection)),
            ids(&filter_questions(&qs, &selection))
        );
    }
}
