//! Round generation: random round lists, multiple-choice alternatives and
//! size-comparison partners.

use crate::catalog::Country;
use crate::core::constants::ALTERNATIVES_PER_QUESTION;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

/// Pick up to `n` countries uniformly at random without replacement.
/// If fewer than `n` are available, all of them are returned in random order.
pub fn sample_rounds<'a, R: Rng>(
    countries: &[&'a Country],
    n: usize,
    rng: &mut R,
) -> Vec<&'a Country> {
    let mut pool = countries.to_vec();
    let take = n.min(pool.len());
    // Partial Fisher-Yates: the first `take` slots end up a uniform sample
    for i in 0..take {
        let j = rng.gen_range(i..pool.len());
        pool.swap(i, j);
    }
    pool.truncate(take);
    pool
}

/// Build the shuffled multiple-choice set for `correct`: the correct country plus three
/// distinct others from `pool`.
///
/// When `pool` holds fewer than four distinct countries the set is shorter and a
/// warning is logged; the dataset or region is too small for multiple choice.
pub fn build_alternatives<'a, R: Rng>(
    pool: &[&'a Country],
    correct: &'a Country,
    rng: &mut R,
) -> Vec<&'a Country> {
    let mut others: Vec<&'a Country> = Vec::with_capacity(pool.len());
    for &country in pool {
        if !country.same_as(correct) && !others.iter().any(|o| o.same_as(country)) {
            others.push(country);
        }
    }

    let wanted = ALTERNATIVES_PER_QUESTION - 1;
    if others.len() < wanted {
        warn!(
            available = others.len() + 1,
            required = ALTERNATIVES_PER_QUESTION,
            "not enough distinct countries for a full alternative set"
        );
    }

    let mut alternatives = Vec::with_capacity(ALTERNATIVES_PER_QUESTION);
    alternatives.push(correct);
    alternatives.extend(sample_rounds(&others, wanted, rng));
    alternatives.shuffle(rng);
    alternatives
}

/// Pick a random country from the full catalog whose name differs from `target`.
pub fn pick_comparison<'a, R: Rng>(
    catalog: &'a [Country],
    target: &Country,
    rng: &mut R,
) -> Option<&'a Country> {
    let candidates: Vec<&'a Country> = catalog.iter().filter(|c| c.name != target.name).collect();
    candidates.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Continent;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn make_countries(count: usize) -> Vec<Country> {
        (0..count)
            .map(|i| Country {
                name: format!("Country {}", i),
                code: format!("C{}", i),
                capital: format!("Capital {}", i),
                continent: Continent::Europe,
                area: i as f64 * 10.0,
                landlocked: false,
                borders: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_sample_rounds_no_duplicates() {
        let countries = make_countries(30);
        let refs: Vec<&Country> = countries.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..50 {
            let rounds = sample_rounds(&refs, 10, &mut rng);
            assert_eq!(rounds.len(), 10);
            let unique: HashSet<&str> = rounds.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(unique.len(), 10);
            assert!(rounds.iter().all(|r| countries.iter().any(|c| c.same_as(r))));
        }
    }

    #[test]
    fn test_sample_rounds_short_pool_returns_all() {
        let countries = make_countries(4);
        let refs: Vec<&Country> = countries.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let rounds = sample_rounds(&refs, 10, &mut rng);
        assert_eq!(rounds.len(), 4);
        let unique: HashSet<&str> = rounds.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_sample_rounds_empty_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(sample_rounds(&[], 10, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_rounds_covers_whole_pool() {
        // Every country should be drawn eventually
        let countries = make_countries(20);
        let refs: Vec<&Country> = countries.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut seen = HashSet::new();
        for _ in 0..100 {
            for c in sample_rounds(&refs, 10, &mut rng) {
                seen.insert(c.name.clone());
            }
        }
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn test_build_alternatives_four_distinct_with_correct() {
        let countries = make_countries(12);
        let refs: Vec<&Country> = countries.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for correct in &countries {
            let alts = build_alternatives(&refs, correct, &mut rng);
            assert_eq!(alts.len(), ALTERNATIVES_PER_QUESTION);
            assert_eq!(alts.iter().filter(|a| a.same_as(correct)).count(), 1);
            let unique: HashSet<&str> = alts.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(unique.len(), ALTERNATIVES_PER_QUESTION);
        }
    }

    #[test]
    fn test_build_alternatives_pool_of_exactly_four() {
        let countries = make_countries(4);
        let refs: Vec<&Country> = countries.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let alts = build_alternatives(&refs, &countries[2], &mut rng);
        let mut names: Vec<&str> = alts.iter().map(|c| c.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["Country 0", "Country 1", "Country 2", "Country 3"]);
    }

    #[test]
    fn test_build_alternatives_correct_position_varies() {
        let countries = make_countries(8);
        let refs: Vec<&Country> = countries.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut positions = HashSet::new();
        for _ in 0..100 {
            let alts = build_alternatives(&refs, &countries[0], &mut rng);
            positions.insert(alts.iter().position(|a| a.same_as(&countries[0])).unwrap());
        }
        assert_eq!(positions.len(), ALTERNATIVES_PER_QUESTION);
    }

    #[test]
    fn test_build_alternatives_starved_pool_terminates() {
        let countries = make_countries(2);
        // Duplicates in the pool must not count as distinct alternatives
        let refs: Vec<&Country> = vec![&countries[0], &countries[1], &countries[1], &countries[0]];
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let alts = build_alternatives(&refs, &countries[0], &mut rng);
        assert_eq!(alts.len(), 2);
        assert_eq!(alts.iter().filter(|a| a.same_as(&countries[0])).count(), 1);
    }

    #[test]
    fn test_pick_comparison_never_returns_target() {
        let countries = make_countries(3);
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..50 {
            let other = pick_comparison(&countries, &countries[1], &mut rng).unwrap();
            assert_ne!(other.name, countries[1].name);
        }
    }

    #[test]
    fn test_pick_comparison_single_country() {
        let countries = make_countries(1);
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        assert!(pick_comparison(&countries, &countries[0], &mut rng).is_none());
    }
}
