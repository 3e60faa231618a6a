use crate::error::{JokeError, Result};
use crate::model::Joke;
use rand::Rng;

/// Pick one joke uniformly at random from `jokes`.
///
/// Every index in `0..jokes.len()` is reachable, including the last one.
pub fn pick_random<'a, R: Rng + ?Sized>(jokes: &'a [Joke], rng: &mut R) -> Result<&'a Joke> {
    if jokes.is_empty() {
        return Err(JokeError::EmptySet { term: None });
    }

    let index = rng.gen_range(0..jokes.len());
    Ok(&jokes[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn jokes(n: usize) -> Vec<Joke> {
        (0..n)
            .map(|i| Joke {
                id: format!("j{}", i),
                text: format!("Joke number {}", i),
                status: 200,
            })
            .collect()
    }

    #[test]
    fn empty_input_is_an_error() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            pick_random(&[], &mut rng),
            Err(JokeError::EmptySet { term: None })
        ));
    }

    #[test]
    fn single_joke_is_always_picked() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = jokes(1);
        for _ in 0..20 {
            assert_eq!(pick_random(&pool, &mut rng).unwrap().id, "j0");
        }
    }

    #[test]
    fn every_index_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [2, 3, 5, 10] {
            let pool = jokes(n);
            let seen: HashSet<&str> = (0..2000)
                .map(|_| pick_random(&pool, &mut rng).unwrap().id.as_str())
                .collect();
            assert_eq!(seen.len(), n, "not every joke was picked for n={}", n);
            assert!(seen.contains(format!("j{}", n - 1).as_str()));
        }
    }

    #[test]
    fn works_with_thread_rng() {
        let pool = jokes(3);
        let picked = pick_random(&pool, &mut rand::thread_rng()).unwrap();
        assert!(pool.contains(picked));
    }
}
