//! Pool of people still eligible for duty.

use rand::Rng;

use crate::models::PersonIndex;

/// Ordered pool of eligible people. Members only ever leave, except through
/// [`RotationPool::refill`], which restores the full roster in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationPool {
    members: Vec<PersonIndex>,
    roster_size: usize,
}

impl RotationPool {
    /// Pool holding `1..=roster_size` in roster order.
    pub fn new(roster_size: usize) -> Self {
        Self {
            members: (1..=roster_size as PersonIndex).collect(),
            roster_size,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, person: PersonIndex) -> bool {
        self.members.contains(&person)
    }

    pub fn members(&self) -> &[PersonIndex] {
        &self.members
    }

    /// Draw a member uniformly at random without removing it.
    ///
    /// Returns `None` on an empty pool; nothing is drawn from the generator
    /// in that case.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<PersonIndex> {
        if self.members.is_empty() {
            return None;
        }
        let position = rng.gen_range(0..self.members.len());
        Some(self.members[position])
    }

    /// Remove the first occurrence of `person`. Returns whether it was present.
    pub fn retire(&mut self, person: PersonIndex) -> bool {
        match self.members.iter().position(|&p| p == person) {
            Some(position) => {
                self.members.remove(position);
                true
            }
            None => false,
        }
    }

    /// Put the whole roster back, in roster order.
    pub fn refill(&mut self) {
        self.members = (1..=self.roster_size as PersonIndex).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn test_new_pool_in_roster_order() {
        let pool = RotationPool::new(4);
        assert_eq!(pool.members(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_pick_does_not_remove() {
        let pool = RotationPool::new(3);
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        for _ in 0..20 {
            let person = pool.pick_random(&mut rng).unwrap();
            assert!(pool.contains(person));
        }
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_pick_on_empty_pool() {
        let pool = RotationPool::new(0);
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        assert_eq!(pool.pick_random(&mut rng), None);
    }

    #[test]
    fn test_retire_keeps_order() {
        let mut pool = RotationPool::new(5);
        assert!(pool.retire(3));
        assert!(!pool.retire(3));
        assert_eq!(pool.members(), &[1, 2, 4, 5]);
    }

    #[test]
    fn test_retired_person_never_drawn() {
        let mut pool = RotationPool::new(3);
        pool.retire(2);
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        for _ in 0..100 {
            assert_ne!(pool.pick_random(&mut rng), Some(2));
        }
    }

    #[test]
    fn test_refill_restores_roster() {
        let mut pool = RotationPool::new(3);
        pool.retire(1);
        pool.retire(3);
        pool.refill();
        assert_eq!(pool.members(), &[1, 2, 3]);
    }
}
