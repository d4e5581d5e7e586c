//! Random number generator abstraction for determinism.
//!
//! In production, this wraps the thread-local RNG. In tests, a seeded or
//! scripted implementation is injected so phrase selection is repeatable.

use rand::Rng;

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Production RNG that delegates to the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRng;

impl DeterministicRng for SystemRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        rand::rng().random_range(min..=max)
    }
}

/// Picks one element of `items` using the RNG. Out-of-range values from a
/// misbehaving RNG are clamped to the last element.
///
/// # Panics
///
/// Panics on an empty slice; callers guarantee non-empty phrase tables at
/// construction time.
pub fn pick<'a, T: AsRef<str>>(rng: &mut dyn DeterministicRng, items: &'a [T]) -> &'a str {
    assert!(!items.is_empty(), "cannot pick from an empty table");
    let max = u32::try_from(items.len() - 1).unwrap_or(u32::MAX);
    let index = usize::try_from(rng.next_u32_range(0, max)).unwrap_or(usize::MAX);
    items[index.min(items.len() - 1)].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRng(u32);

    impl DeterministicRng for FixedRng {
        fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
            self.0.clamp(min, max)
        }
    }

    #[test]
    fn test_pick_returns_driven_index() {
        let items = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
        let mut rng = FixedRng(1);
        assert_eq!(pick(&mut rng, &items), "b");
    }

    #[test]
    fn test_pick_clamps_out_of_range_values() {
        let items = vec!["a".to_owned(), "b".to_owned()];
        let mut rng = FixedRng(99);
        assert_eq!(pick(&mut rng, &items), "b");
    }

    #[test]
    fn test_system_rng_stays_in_range() {
        let mut rng = SystemRng;
        for _ in 0..100 {
            let value = rng.next_u32_range(2, 5);
            assert!((2..=5).contains(&value));
        }
    }
}
