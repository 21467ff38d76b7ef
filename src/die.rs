use std::fmt;

use log::{trace, warn};
use rand::Rng;

use crate::{
    MIN_SIDES,
    entropy,
    error::{Error, Result},
};

/// A die with a fixed number of sides showing one face in `1..=sides`.
///
/// The face only changes through [`Die::roll`] or [`Die::roll_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    sides: u32,
    value: u32,
}

impl Die {
    /// Creates a die with `sides` faces currently showing `value`.
    ///
    /// Fails with [`Error::InvalidArgument`] when `sides` is below
    /// [`MIN_SIDES`] or `value` is not a face of the die.
    pub fn new(sides: u32, value: u32) -> Result<Self> {
        if sides < MIN_SIDES {
            warn!("Rejected die with `{sides}` sides");
            return Err(Error::InvalidArgument(format!(
                "At least {MIN_SIDES} sides required, got `{sides}`"
            )));
        }
        if !(1..=sides).contains(&value) {
            warn!("Rejected value `{value}` for a die with `{sides}` sides");
            return Err(Error::InvalidArgument(format!(
                "Die value `{value}` not legal for a die with `{sides}` sides"
            )));
        }
        Ok(Self { sides, value })
    }

    /// Rolls the die with the shared generator and returns the new face.
    pub fn roll(&mut self) -> u32 {
        self.value = entropy::roll(self.sides);
        trace!("Rolled `{}` on d{}", self.value, self.sides);
        self.value
    }

    /// Rolls the die with the given generator and returns the new face.
    pub fn roll_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        self.value = rng.random_range(1..=self.sides);
        trace!("Rolled `{}` on d{}", self.value, self.sides);
        self.value
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// The face in square brackets, e.g. `[5]`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.value)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn new_accepts_every_face() {
        for value in 1..=6 {
            let die = Die::new(6, value).unwrap();
            assert_eq!(die.sides(), 6);
            assert_eq!(die.value(), value);
        }
        assert!(Die::new(4, 4).is_ok());
    }

    #[test]
    fn new_rejects_too_few_sides() {
        for sides in 0..MIN_SIDES {
            let err = Die::new(sides, 1).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn new_rejects_values_off_the_die() {
        assert!(Die::new(6, 0).unwrap_err().is_invalid_argument());
        assert!(Die::new(6, 7).unwrap_err().is_invalid_argument());
        assert!(Die::new(20, 21).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn describe_brackets_the_value() {
        assert_eq!(Die::new(6, 5).unwrap().describe(), "[5]");
        assert_eq!(Die::new(20, 17).unwrap().to_string(), "[17]");
    }

    #[test]
    fn roll_returns_and_keeps_the_new_face() {
        let mut die = Die::new(8, 1).unwrap();
        for _ in 0..100 {
            let face = die.roll();
            assert_eq!(face, die.value());
            assert!((1..=8).contains(&face));
            assert_eq!(die.sides(), 8);
        }
    }

    #[test]
    fn roll_with_covers_every_face() {
        let mut rng = test_rng();
        let mut die = Die::new(6, 1).unwrap();
        let mut seen = [false; 6];
        for _ in 0..600 {
            let face = die.roll_with(&mut rng);
            assert!((1..=6).contains(&face));
            seen[face as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s), "faces seen: {seen:?}");
    }

    #[test]
    fn roll_with_is_reproducible() {
        let mut a = Die::new(20, 1).unwrap();
        let mut b = Die::new(20, 1).unwrap();
        let (mut rng_a, mut rng_b) = (test_rng(), test_rng());
        let rolls_a: Vec<u32> = (0..10).map(|_| a.roll_with(&mut rng_a)).collect();
        let rolls_b: Vec<u32> = (0..10).map(|_| b.roll_with(&mut rng_b)).collect();
        assert_eq!(rolls_a, rolls_b);
    }
}
