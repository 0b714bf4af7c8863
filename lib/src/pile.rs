//! # Pile roles and card classification
//!
//! A deck is a fixed row of piles. The first twelve hold non-land cards by
//! converted mana cost, six for creatures followed by six for everything else.
//! They are followed by the lands pile, the sideboard and the unused pile.
use crate::card::{Card, CardKind};

/// Number of cost buckets per ladder (1, 2, 3, 4, 5, 6+)
pub const COST_BUCKETS: usize = 6;
/// Number of non-land piles (both ladders)
pub const SPELL_PILES: usize = 2 * COST_BUCKETS;
/// Total number of piles in a deck
pub const PILE_COUNT: usize = SPELL_PILES + 3;

/// CostBucket is a position on the cost ladder. Cost 0 and 1 share the
/// first bucket, cost 6 and above share the last.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CostBucket(u8);

impl CostBucket {
  pub fn from_cmc(cmc: u8) -> Self {
    let clamped = std::cmp::min(std::cmp::max(cmc, 1), COST_BUCKETS as u8);
    CostBucket(clamped - 1)
  }

  /// Zero based bucket position
  #[inline]
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

/// PileId enumerates every pile role in a deck
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PileId {
  Creatures(CostBucket),
  Other(CostBucket),
  Lands,
  Sideboard,
  Unused,
}

impl PileId {
  /// Position of the pile within `Deck::piles`
  pub fn index(self) -> usize {
    match self {
      Self::Creatures(bucket) => bucket.index(),
      Self::Other(bucket) => COST_BUCKETS + bucket.index(),
      Self::Lands => SPELL_PILES,
      Self::Sideboard => SPELL_PILES + 1,
      Self::Unused => SPELL_PILES + 2,
    }
  }

  /// Inverse of `index`
  pub fn from_index(index: usize) -> Option<Self> {
    match index {
      i if i < COST_BUCKETS => Some(Self::Creatures(CostBucket(i as u8))),
      i if i < SPELL_PILES => Some(Self::Other(CostBucket((i - COST_BUCKETS) as u8))),
      i if i == SPELL_PILES => Some(Self::Lands),
      i if i == SPELL_PILES + 1 => Some(Self::Sideboard),
      i if i == SPELL_PILES + 2 => Some(Self::Unused),
      _ => None,
    }
  }

  /// Every pile in deck order
  pub fn all() -> impl Iterator<Item = PileId> {
    (0..PILE_COUNT).filter_map(Self::from_index)
  }
}

/// Returns the pile a card belongs in. Lands go to the lands pile; everything
/// else goes on the creature ladder (always, when `compact`) or the other ladder.
pub fn pile_index(card: &Card, compact: bool) -> PileId {
  match card.kind() {
    CardKind::Land => PileId::Lands,
    CardKind::Creature => PileId::Creatures(CostBucket::from_cmc(card.cmc)),
    CardKind::Other if compact => PileId::Creatures(CostBucket::from_cmc(card.cmc)),
    CardKind::Other => PileId::Other(CostBucket::from_cmc(card.cmc)),
  }
}

/// Non-land cards split into creatures and everything else
#[derive(Debug, Default, Clone)]
pub struct CardsByType<'a> {
  pub creatures: Vec<&'a Card>,
  pub other: Vec<&'a Card>,
}

/// Creature and other card counts
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTypes {
  pub creatures: usize,
  pub other: usize,
}

/// Partitions the non-land cards of `cards`, preserving order. Lands are dropped.
pub fn cards_by_type<'a, I>(cards: I) -> CardsByType<'a>
where
  I: IntoIterator<Item = &'a Card>,
{
  let mut by_type = CardsByType::default();
  for card in cards {
    match card.kind() {
      CardKind::Creature => by_type.creatures.push(card),
      CardKind::Other => by_type.other.push(card),
      CardKind::Land => {}
    }
  }
  by_type
}

/// Counts creatures and other non-land cards
pub fn card_types<'a, I>(cards: I) -> CardTypes
where
  I: IntoIterator<Item = &'a Card>,
{
  let by_type = cards_by_type(cards);
  CardTypes {
    creatures: by_type.creatures.len(),
    other: by_type.other.len(),
  }
}

#[cfg(test)]
mod tests {
  use crate::card::*;
  use crate::pile::*;

  #[test]
  fn cost_buckets_clamp() {
    assert_eq!(CostBucket::from_cmc(0).index(), 0);
    assert_eq!(CostBucket::from_cmc(1).index(), 0);
    assert_eq!(CostBucket::from_cmc(3).index(), 2);
    assert_eq!(CostBucket::from_cmc(6).index(), 5);
    assert_eq!(CostBucket::from_cmc(12).index(), 5);
  }

  #[test]
  fn pile_index_round_trips() {
    for (i, pile) in PileId::all().enumerate() {
      assert_eq!(pile.index(), i);
    }
    assert_eq!(PileId::all().count(), PILE_COUNT);
    assert_eq!(PileId::from_index(PILE_COUNT), None);
    assert_eq!(PileId::Lands.index(), 12);
    assert_eq!(PileId::Sideboard.index(), 13);
    assert_eq!(PileId::Unused.index(), 14);
  }

  #[test]
  fn creatures_and_spells_use_separate_ladders() {
    let bears = card!("Grizzly Bears", "{1}{G}", "Creature — Bear");
    let shock = card!("Shock", "{R}", "Instant");
    let colossus = card!("Colossus", "{8}", "Artifact Creature — Golem");
    assert_eq!(pile_index(&bears, false), PileId::Creatures(CostBucket::from_cmc(2)));
    assert_eq!(pile_index(&bears, false).index(), 1);
    assert_eq!(pile_index(&shock, false).index(), 6);
    assert_eq!(pile_index(&colossus, false).index(), 5);
  }

  #[test]
  fn compact_puts_everything_on_the_creature_ladder() {
    let divination = card!("Divination", "{2}{U}", "Sorcery");
    assert_eq!(pile_index(&divination, false).index(), 8);
    assert_eq!(pile_index(&divination, true).index(), 2);
  }

  #[test]
  fn lands_go_to_the_lands_pile() {
    let land = card!("Evolving Wilds", "", "Land");
    assert_eq!(pile_index(&land, false), PileId::Lands);
    assert_eq!(pile_index(&land, true), PileId::Lands);
  }

  #[test]
  fn cards_by_type_drops_lands() {
    let cards = vec![
      card!("Grizzly Bears", "{1}{G}", "Creature — Bear"),
      card!("Forest", "", "Basic Land — Forest"),
      card!("Giant Growth", "{G}", "Instant"),
      card!("Dryad Arbor", "", "Land Creature — Forest Dryad"),
    ];
    let by_type = cards_by_type(&cards);
    assert_eq!(by_type.creatures.len(), 1);
    assert_eq!(by_type.other.len(), 1);
    assert_eq!(by_type.other[0].name, "Giant Growth");
    assert_eq!(card_types(&cards), CardTypes { creatures: 1, other: 1 });
  }
}
