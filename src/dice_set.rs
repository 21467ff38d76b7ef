use std::{collections::HashMap, fmt, slice};

use log::{debug, warn};
use rand::Rng;

use crate::{
    MIN_DICE, MIN_SIDES,
    die::Die,
    error::{Error, Result},
};

/// At least [`MIN_DICE`] dice, all with the same number of sides.
///
/// Insertion order is the order used by indexed access, [`DiceSet::values`]
/// and the textual form.
#[derive(Debug, Clone)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    /// `count` dice with `sides` sides, all showing `1`.
    pub fn from_count(sides: u32, count: usize) -> Result<Self> {
        check_count(count)?;
        check_sides(sides)?;
        let dice = (0..count)
            .map(|_| Die::new(sides, 1))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::created(dice))
    }

    /// One die with `sides` sides per entry of `values`, showing that entry.
    pub fn from_values(sides: u32, values: &[u32]) -> Result<Self> {
        check_sides(sides)?;
        check_count(values.len())?;
        let dice = values
            .iter()
            .map(|&value| Die::new(sides, value))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::created(dice))
    }

    fn created(dice: Vec<Die>) -> Self {
        let set = Self { dice };
        debug!("Created dice set `{}`", set.descriptor());
        set
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Always false: a set holds at least [`MIN_DICE`] dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn sides(&self) -> u32 {
        // Non-empty by construction
        self.dice.first().map_or(0, Die::sides)
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn iter(&self) -> slice::Iter<'_, Die> {
        self.dice.iter()
    }

    /// Count and sides in dice notation, e.g. `5d20`.
    pub fn descriptor(&self) -> String {
        format!("{}d{}", self.len(), self.sides())
    }

    pub fn sum(&self) -> u64 {
        self.dice.iter().map(|d| u64::from(d.value())).sum()
    }

    pub fn roll_all(&mut self) {
        for die in self.dice.iter_mut() {
            die.roll();
        }
    }

    pub fn roll_all_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for die in self.dice.iter_mut() {
            die.roll_with(rng);
        }
    }

    /// Rolls only the die at `index` and returns its new face.
    pub fn roll_at(&mut self, index: usize) -> Result<u32> {
        Ok(self.die_mut(index)?.roll())
    }

    pub fn roll_at_with<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> Result<u32> {
        Ok(self.die_mut(index)?.roll_with(rng))
    }

    pub fn value_at(&self, index: usize) -> Result<u32> {
        self.dice
            .get(index)
            .map(Die::value)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// A snapshot of the current faces in insertion order.
    pub fn values(&self) -> Vec<u32> {
        self.dice.iter().map(Die::value).collect()
    }

    /// Whether both sets have the same count, the same sides, and show the
    /// same faces the same number of times, in any order.
    pub fn has_same_distribution(&self, other: &DiceSet) -> bool {
        self.len() == other.len()
            && self.sides() == other.sides()
            && self.face_counts() == other.face_counts()
    }

    fn face_counts(&self) -> HashMap<u32, usize> {
        let mut counts = HashMap::new();
        for die in &self.dice {
            *counts.entry(die.value()).or_insert(0) += 1;
        }
        counts
    }

    /// Every die's textual form joined without separator, e.g. `[2][5][2][3]`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn die_mut(&mut self, index: usize) -> Result<&mut Die> {
        let len = self.len();
        self.dice
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }
}

fn check_sides(sides: u32) -> Result<()> {
    if sides < MIN_SIDES {
        warn!("Rejected dice set with `{sides}` sides");
        return Err(Error::InvalidArgument(format!(
            "Dice must have at least {MIN_SIDES} sides, got `{sides}`"
        )));
    }
    Ok(())
}

fn check_count(count: usize) -> Result<()> {
    if count < MIN_DICE {
        warn!("Rejected dice set of `{count}` dice");
        return Err(Error::InvalidArgument(format!(
            "At least {MIN_DICE} dice required, got `{count}`"
        )));
    }
    Ok(())
}

impl fmt::Display for DiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for die in &self.dice {
            write!(f, "{die}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DiceSet {
    type Item = &'a Die;
    type IntoIter = slice::Iter<'a, Die>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
