use crate::models::Offer;
use std::collections::HashMap;

/// Relevance score for one offer: the weight of every keyword found in the
/// description or title, plus the bonus for each keyword that also appears
/// in the title. Matching is case-insensitive substring search. Returns the
/// matched keywords sorted, in the casing the caller supplied.
pub fn score_offer(
    offer: &Offer,
    keyword_weights: &HashMap<String, u32>,
    title_bonus: u32,
) -> (u32, Vec<String>) {
    let haystack = format!("{} {}", offer.description, offer.title).to_lowercase();
    let title = offer.title.to_lowercase();

    let mut score = 0;
    let mut matched = Vec::new();

    for (keyword, weight) in keyword_weights {
        let needle = keyword.to_lowercase();
        if haystack.contains(&needle) {
            score += weight;
            matched.push(keyword.clone());
            if title.contains(&needle) {
                score += title_bonus;
            }
        }
    }

    matched.sort();
    matched.dedup();
    (score, matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(title: &str, description: &str) -> Offer {
        Offer {
            title: title.to_string(),
            company: "Acme".to_string(),
            city: "Madrid".to_string(),
            province: "Madrid".to_string(),
            modality: "Remoto".to_string(),
            experience: "2 años".to_string(),
            salary: "Not specified".to_string(),
            description: description.to_string(),
            link: "https://www.infojobs.net/of-x".to_string(),
        }
    }

    fn weights(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries
            .iter()
            .map(|(keyword, weight)| (keyword.to_string(), *weight))
            .collect()
    }

    #[test]
    fn no_match_scores_zero_with_empty_set() {
        let (score, matched) = score_offer(
            &offer("Carpenter", "Woodworking position"),
            &weights(&[("python", 2), ("sql", 1)]),
            3,
        );
        assert_eq!(score, 0);
        assert!(matched.is_empty());
    }

    #[test]
    fn description_match_adds_weight_only() {
        let (score, matched) = score_offer(
            &offer("Backend Engineer", "We use Python daily"),
            &weights(&[("python", 2)]),
            3,
        );
        assert_eq!(score, 2);
        assert_eq!(matched, vec!["python"]);
    }

    #[test]
    fn title_match_adds_bonus_on_top() {
        let (score, matched) = score_offer(
            &offer("Python Developer", "Backend role using Python and SQL"),
            &weights(&[("python", 2)]),
            3,
        );
        assert_eq!(score, 5);
        assert_eq!(matched, vec!["python"]);
    }

    #[test]
    fn repeated_occurrences_count_once() {
        let (score, matched) = score_offer(
            &offer("SAP consultant", "sap sap sap everywhere, SAP"),
            &weights(&[("sap", 4)]),
            1,
        );
        assert_eq!(score, 4 + 1);
        assert_eq!(matched, vec!["sap"]);
    }

    #[test]
    fn matched_set_is_sorted() {
        let (score, matched) = score_offer(
            &offer("Data role", "aws, sql and python in the stack"),
            &weights(&[("sql", 1), ("python", 1), ("aws", 1)]),
            0,
        );
        assert_eq!(score, 3);
        assert_eq!(matched, vec!["aws", "python", "sql"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let (score, matched) = score_offer(
            &offer("PYTHON developer", "Looking for PyThOn people"),
            &weights(&[("Python", 2)]),
            3,
        );
        assert_eq!(score, 5);
        assert_eq!(matched, vec!["Python"]);
    }
}
