//! Initial contents for a [`Store`](super::Store).
//!
//! Sample data is a fixture concern, so stores never generate records on
//! their own: they are handed a [`Seeder`] once, at construction.

/// Produces the records a store starts with.
pub trait Seeder<E> {
    fn seed(&mut self) -> Vec<E>;
}

/// Starts a store with no records.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptySeed;

impl<E> Seeder<E> for EmptySeed {
    fn seed(&mut self) -> Vec<E> {
        Vec::new()
    }
}

/// Fixed records, handed over on the first call.
impl<E> Seeder<E> for Vec<E> {
    fn seed(&mut self) -> Vec<E> {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_seed_hands_records_over_once() {
        let mut seed = vec![1, 2, 3];
        assert_eq!(Seeder::<i32>::seed(&mut seed), vec![1, 2, 3]);
        assert!(Seeder::<i32>::seed(&mut seed).is_empty());
    }

    #[test]
    fn test_empty_seed() {
        let records: Vec<String> = EmptySeed.seed();
        assert!(records.is_empty());
    }
}
