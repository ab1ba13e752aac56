//! Next-question selection for a quiz round.

use crate::domain::{CategoryId, Question, QuestionId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Picks an unseen question for one quiz round.
#[derive(Debug, Clone, Default)]
pub struct QuizSelector {
    /// Ids already shown in this round.
    previous: HashSet<QuestionId>,
    /// `None` means every category.
    category: Option<CategoryId>,
}

impl QuizSelector {
    /// Category id 0 is the "All" pseudo-category and disables the filter.
    pub fn new(
        previous: impl IntoIterator<Item = QuestionId>,
        category: Option<CategoryId>,
    ) -> Self {
        Self {
            previous: previous.into_iter().collect(),
            category: category.filter(|c| c.as_i64() != 0),
        }
    }

    /// Category the candidate pool should be restricted to, if any.
    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub fn is_eligible(&self, question: &Question) -> bool {
        if self.previous.contains(&question.id) {
            return false;
        }
        match self.category {
            Some(c) => question.category == Some(c.as_i64()),
            None => true,
        }
    }

    /// Choose uniformly among the eligible members of `pool`.
    ///
    /// Returns `None` once every question in scope has been seen.
    pub fn choose<R: Rng + ?Sized>(&self, pool: Vec<Question>, rng: &mut R) -> Option<Question> {
        let eligible: Vec<Question> = pool.into_iter().filter(|q| self.is_eligible(q)).collect();
        eligible.choose(rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewQuestion;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64, category: i64) -> Question {
        NewQuestion::new(format!("q{}", id), format!("a{}", id), Some(category), Some(1))
            .with_id(QuestionId::new(id))
    }

    fn pool() -> Vec<Question> {
        vec![
            question(1, 1),
            question(2, 1),
            question(3, 2),
            question(4, 2),
            question(5, 3),
        ]
    }

    fn ids(raw: &[i64]) -> Vec<QuestionId> {
        raw.iter().copied().map(QuestionId::new).collect()
    }

    #[test]
    fn test_category_zero_means_all() {
        let selector = QuizSelector::new(ids(&[]), Some(CategoryId::new(0)));
        assert_eq!(selector.category(), None);
    }

    #[test]
    fn test_no_category_skips_previous() {
        let selector = QuizSelector::new(ids(&[1, 2, 3, 4]), None);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = selector.choose(pool(), &mut rng).unwrap();
            assert_eq!(picked.id, QuestionId::new(5));
        }
    }

    #[test]
    fn test_category_filter_restricts_pool() {
        let selector = QuizSelector::new(ids(&[]), Some(CategoryId::new(2)));
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let picked = selector.choose(pool(), &mut rng).unwrap();
            assert_eq!(picked.category, Some(2));
        }
    }

    #[test]
    fn test_category_and_previous_combined() {
        let selector = QuizSelector::new(ids(&[3]), Some(CategoryId::new(2)));
        let mut rng = StdRng::seed_from_u64(1);
        let picked = selector.choose(pool(), &mut rng).unwrap();
        assert_eq!(picked.id, QuestionId::new(4));
    }

    #[test]
    fn test_exhausted_round_returns_none() {
        let selector = QuizSelector::new(ids(&[1, 2, 3, 4, 5]), None);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(selector.choose(pool(), &mut rng).is_none());

        let selector = QuizSelector::new(ids(&[5]), Some(CategoryId::new(3)));
        assert!(selector.choose(pool(), &mut rng).is_none());
    }

    #[test]
    fn test_unknown_category_returns_none() {
        let selector = QuizSelector::new(ids(&[]), Some(CategoryId::new(99)));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(selector.choose(pool(), &mut rng).is_none());
    }

    #[test]
    fn test_every_eligible_question_is_reachable() {
        let selector = QuizSelector::new(ids(&[1]), None);
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(selector.choose(pool(), &mut rng).unwrap().id);
        }
        let expected: HashSet<QuestionId> = ids(&[2, 3, 4, 5]).into_iter().collect();
        assert_eq!(seen, expected);
    }
}
