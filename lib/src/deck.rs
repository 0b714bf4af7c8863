//! # Decks, piles and basic land configuration
//!
use crate::card::{Card, ManaColorCount};
use crate::color::{card_colors, order_color_pair, ColorInfo};
use crate::error::Error;
use crate::pile::{pile_index, PileId, PILE_COUNT, SPELL_PILES};

/// The most copies of a card name allowed in a constructed deck
pub const MAX_COPIES: usize = 4;

/// A Pile is an ordered bucket of cards within a deck
pub type Pile = Vec<Card>;

/// LandConfiguration holds the basic lands of a deck, which are tracked as
/// counts rather than as cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandConfiguration {
  /// True if basic land counts are computed from the deck colors
  #[serde(default = "default_auto")]
  pub auto: bool,
  #[serde(default)]
  pub basic: ManaColorCount,
}

fn default_auto() -> bool {
  true
}

impl Default for LandConfiguration {
  fn default() -> Self {
    Self {
      auto: true,
      basic: ManaColorCount::new(),
    }
  }
}

/// Per deck layout options
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckLayout {
  /// Arrange every non-land card on the creature cost ladder
  #[serde(default)]
  pub compact_arrange_by_cost: bool,
}

/// Where copies of a card are counted when enforcing `MAX_COPIES`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CopyScope {
  /// The cost piles and the lands pile
  MainDeck,
  /// Every pile except the unused pile
  EntirePool,
}

/// Deck owns a fixed row of piles, see `crate::pile` for the pile roles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
  pub piles: Vec<Pile>,
  #[serde(default)]
  pub lands: LandConfiguration,
  #[serde(default)]
  pub options: DeckLayout,
}

impl Default for Deck {
  fn default() -> Self {
    Self::new()
  }
}

impl Deck {
  /// Returns a deck with every pile empty and automatic basic lands
  pub fn new() -> Self {
    Self {
      piles: vec![Vec::new(); PILE_COUNT],
      lands: LandConfiguration::default(),
      options: DeckLayout::default(),
    }
  }

  /// Returns a deck with each card placed in the pile `pile_index` assigns it
  pub fn from_cards<I>(cards: I, options: DeckLayout) -> Self
  where
    I: IntoIterator<Item = Card>,
  {
    let mut deck = Self::new();
    deck.options = options;
    for card in cards {
      deck.push(card);
    }
    deck
  }

  /// Returns the deck with the given basic land configuration
  pub fn with_lands(mut self, auto: bool, basic: ManaColorCount) -> Self {
    self.lands = LandConfiguration { auto, basic };
    self
  }

  /// Returns an error if the deck does not have exactly one pile per pile role
  pub fn validate(&self) -> Result<(), Error> {
    if self.piles.len() != PILE_COUNT {
      return Err(Error::MalformedDeck(format!(
        "expected {} piles, found {}",
        PILE_COUNT,
        self.piles.len()
      )));
    }
    Ok(())
  }

  /// Returns the pile for `id`. Panics if the deck has not been validated and is short of piles.
  #[inline]
  pub fn pile(&self, id: PileId) -> &Pile {
    &self.piles[id.index()]
  }

  #[inline]
  pub fn pile_mut(&mut self, id: PileId) -> &mut Pile {
    &mut self.piles[id.index()]
  }

  /// Places `card` in its pile, respecting the deck layout
  pub fn push(&mut self, card: Card) {
    let id = pile_index(&card, self.options.compact_arrange_by_cost);
    self.pile_mut(id).push(card);
  }

  /// Cards in the twelve cost piles
  pub fn deck_cards(&self) -> impl Iterator<Item = &Card> {
    self.piles.iter().take(SPELL_PILES).flatten()
  }

  /// Cards in the cost piles and the lands pile. Basic lands are not included.
  pub fn main_deck(&self) -> impl Iterator<Item = &Card> {
    self.piles.iter().take(PileId::Sideboard.index()).flatten()
  }

  /// Non-basic lands plus basic lands
  pub fn land_count(&self) -> usize {
    self.pile(PileId::Lands).len() + self.lands.basic.total()
  }

  /// Cost pile cards plus every land
  pub fn total_cards(&self) -> usize {
    self.deck_cards().count() + self.land_count()
  }

  /// Playable deck size: cost piles, lands pile and basic lands
  pub fn main_deck_size(&self) -> usize {
    self.main_deck().count() + self.lands.basic.total()
  }

  /// Returns how many cards named `name` sit in `scope`
  pub fn copies_in_deck(&self, name: &str, scope: CopyScope) -> usize {
    let end = match scope {
      CopyScope::MainDeck => PileId::Sideboard.index(),
      CopyScope::EntirePool => PileId::Unused.index(),
    };
    self
      .piles
      .iter()
      .take(end)
      .flatten()
      .filter(|card| card.name == name)
      .count()
  }

  /// The (at most two) dominant colors of the non-land deck cards, in conventional pair order
  pub fn colors(&self) -> Vec<ColorInfo> {
    order_color_pair(card_colors(self.deck_cards(), false, Some(0.0), Some(2)))
  }
}
