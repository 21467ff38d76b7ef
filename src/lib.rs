//! Dice with a fixed number of sides, and sets of such dice.
//!
//! ```
//! use dice_set::DiceSet;
//!
//! let mut dice = DiceSet::from_values(20, &[3, 17, 5, 5, 20])?;
//! assert_eq!(dice.descriptor(), "5d20");
//! assert_eq!(dice.sum(), 50);
//! assert_eq!(dice.describe(), "[3][17][5][5][20]");
//!
//! dice.roll_all();
//! assert!(dice.values().iter().all(|v| (1..=20).contains(v)));
//! # Ok::<(), dice_set::Error>(())
//! ```

mod dice_set;
mod die;
pub mod entropy;
mod error;

pub use crate::{
    dice_set::DiceSet,
    die::Die,
    error::{Error, Result},
};

/// Fewest sides a die may have.
pub const MIN_SIDES: u32 = 4;
/// Fewest dice a set may hold.
pub const MIN_DICE: usize = 2;

pub const SIX_SIDED_DIE_EMOJI: &str = "🎲";
