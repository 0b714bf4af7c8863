//! # Internal card representation
//!
pub use crate::card::mana_cost::*;
use std::hash::{Hash, Hasher};

// NOTE: PartialEq and Eq are implemented below
/// Card represents a Magic: The Gathering card as it sits in a drafted or sealed pool
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Card {
  /// The card name, shared by every copy of the card
  pub name: String,
  /// The card colors, in canonical W, U, B, R, G order
  #[serde(default)]
  pub colors: Vec<ManaColor>,
  /// String representing the card mana cost, in "{X}{R}{R}" style format
  #[serde(default)]
  pub mana_cost: String,
  /// Converted mana cost
  #[serde(default)]
  pub cmc: u8,
  /// Type line text, e.g. "Creature — Elf Warrior"
  #[serde(default)]
  pub type_line: String,
  /// Release set code
  #[serde(default)]
  pub set: String,
  #[serde(default)]
  pub collector_number: String,
  /// Pick rating, higher is better
  #[serde(default)]
  pub rating: f64,
}

/// CardKind is the coarse category used to place cards into piles
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
  Creature,
  Land,
  Other,
}

impl Card {
  /// Returns a card with colors and converted mana cost derived from `mana_cost`
  pub fn new(name: &str, mana_cost: &str, type_line: &str) -> Self {
    let mut colors: Vec<ManaColor> = color_groups(mana_cost).into_iter().flatten().collect();
    colors.sort();
    colors.dedup();
    Self {
      name: name.to_string(),
      colors,
      mana_cost: mana_cost.to_string(),
      cmc: converted_mana_cost(mana_cost),
      type_line: type_line.to_string(),
      ..Self::default()
    }
  }

  /// Overrides the card colors, used for lands whose colors don't come from a mana cost
  pub fn with_colors(mut self, colors: &[ManaColor]) -> Self {
    self.colors = colors.to_vec();
    self.colors.sort();
    self.colors.dedup();
    self
  }

  pub fn with_printing(mut self, set: &str, collector_number: &str) -> Self {
    self.set = set.to_string();
    self.collector_number = collector_number.to_string();
    self
  }

  pub fn with_rating(mut self, rating: f64) -> Self {
    self.rating = rating;
    self
  }

  /// Returns true if the type line names the Land type
  pub fn is_land(&self) -> bool {
    self.has_type("Land")
  }

  /// Returns true if the type line names the Creature type
  pub fn is_creature(&self) -> bool {
    self.has_type("Creature")
  }

  /// Returns the card category. Land wins over Creature for land creatures.
  pub fn kind(&self) -> CardKind {
    if self.is_land() {
      CardKind::Land
    } else if self.is_creature() {
      CardKind::Creature
    } else {
      CardKind::Other
    }
  }

  /// Returns true if the card is colorless
  pub fn is_colorless(&self) -> bool {
    self.colors.is_empty()
  }

  fn has_type(&self, kind: &str) -> bool {
    self
      .type_line
      .split(|c: char| !c.is_alphanumeric())
      .any(|word| word == kind)
  }
}

impl PartialEq for Card {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name
  }
}

impl Eq for Card {}

impl Hash for Card {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.name.hash(state);
  }
}

impl Default for CardKind {
  fn default() -> Self {
    Self::Other
  }
}

/// Builds a card from its name, mana cost and type line
///
/// ```
/// # #[macro_use] extern crate deckfit;
/// let bears = card!("Grizzly Bears", "{1}{G}", "Creature — Bear");
/// assert_eq!(bears.cmc, 2);
/// ```
#[macro_export]
macro_rules! card {
  ($name:expr, $mana_cost:expr, $type_line:expr) => {
    $crate::card::Card::new($name, $mana_cost, $type_line)
  };
}
