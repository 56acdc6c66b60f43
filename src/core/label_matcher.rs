/// Question label suggestions with fuzzy matching
///
/// Used when the user types something that is not a known label, so the
/// session can answer "did you mean ...?".

use crate::store::QuestionSet;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

pub struct LabelMatcher {
    matcher: SkimMatcherV2,
}

impl LabelMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Labels matching `query`, best first
    ///
    /// # Arguments
    /// * `questions` - Known questions
    /// * `query` - What the user typed
    /// * `limit` - Maximum results to return
    pub fn ranked<'a>(
        &self,
        questions: &'a QuestionSet,
        query: &str,
        limit: usize,
    ) -> Vec<(&'a str, i64)> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<(&str, i64)> = questions
            .labels()
            .filter_map(|label| {
                self.matcher
                    .fuzzy_match(label, query)
                    .map(|score| (label, score))
            })
            .collect();

        // Highest score first, ties broken alphabetically
        results.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        results.truncate(limit);

        results
    }

    /// Single best guess, if any label is close at all
    pub fn suggest<'a>(&self, questions: &'a QuestionSet, query: &str) -> Option<&'a str> {
        self.ranked(questions, query, 1)
            .into_iter()
            .next()
            .map(|(label, _)| label)
    }
}

impl Default for LabelMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> QuestionSet {
        vec![
            ("sorted_small".to_string(), vec![1, 2, 3]),
            ("unsorted_big".to_string(), vec![9, 1, 7, 3]),
            ("negatives".to_string(), vec![-4, -1, -9]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_suggest_close_label() {
        let questions = setup();
        let matcher = LabelMatcher::new();

        assert_eq!(matcher.suggest(&questions, "srtdsm"), Some("sorted_small"));
        assert_eq!(matcher.suggest(&questions, "negative"), Some("negatives"));
    }

    #[test]
    fn test_no_suggestion() {
        let questions = setup();
        let matcher = LabelMatcher::new();

        assert_eq!(matcher.suggest(&questions, "zzz"), None);
        assert_eq!(matcher.suggest(&questions, "   "), None);
        assert_eq!(matcher.suggest(&QuestionSet::new(), "sorted"), None);
    }

    #[test]
    fn test_ranked_limit() {
        let questions = setup();
        let matcher = LabelMatcher::new();

        let results = matcher.ranked(&questions, "sorted", 10);
        assert_eq!(results.len(), 2);
        assert!(matcher.ranked(&questions, "sorted", 1).len() == 1);
    }
}
