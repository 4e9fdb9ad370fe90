//! Domain-specific assertion helpers for wordgrid harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* ranking invariant was violated.

use wordgrid_core::Match;

/// Assert that a ranked result equals the expected word list, in order.
///
/// ```rust
/// assert_ranked!(engine.find(&words), ["chill", "cold", "wind"]);
/// ```
#[macro_export]
macro_rules! assert_ranked {
    ($actual:expr, [$($word:expr),* $(,)?]) => {{
        let actual: Vec<String> = $actual;
        let expected: Vec<&str> = vec![$($word),*];
        pretty_assertions::assert_eq!(
            actual.iter().map(String::as_str).collect::<Vec<_>>(),
            expected,
            "ranked words differ"
        );
    }};
}

/// Assert the ordering law over a ranked match list: counts never increase,
/// and equal counts appear in ascending word order. Also checks the cap and
/// that no zero-count or duplicate word slipped through.
pub fn assert_ranking_law(matches: &[Match]) {
    assert!(
        matches.len() <= wordgrid_core::RESULT_LIMIT,
        "ranking law violated: {} results exceed the cap of {}",
        matches.len(),
        wordgrid_core::RESULT_LIMIT
    );
    for m in matches {
        assert!(m.count > 0, "ranking law violated: zero-count word {:?} returned", m.word);
    }
    for pair in matches.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.count > b.count || (a.count == b.count && a.word < b.word),
            "ranking law violated: {a:?} ranked before {b:?}"
        );
    }
}
