//! # Deck normalization
//!
//! Turns a drafted or sealed pool of any size into a constructed deck of a fixed size.
//! The creature, other and land shares of the pool are scaled to the target size,
//! missing cards are made up with extra copies of cards already in the deck (never
//! more than `MAX_COPIES` of a name), surplus cards move to the sideboard, the
//! sideboard is pruned and ordered, and the basic lands are recomputed so the lands
//! hit their target exactly.
use crate::card::{Card, CardKind};
use crate::color::count_colors;
use crate::deck::{CopyScope, Deck, MAX_COPIES};
use crate::error::Error;
use crate::mana_base::{auto_land_weights, compute_basic_lands};
use crate::pile::{card_types, cards_by_type, PileId, SPELL_PILES};
use crate::sideboard::{cap_sideboard, prune_sideboard, reorder_sideboard, SIDEBOARD_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Size of a constructed deck
pub const DEFAULT_DECK_SIZE: usize = 60;

/// Share of the pool held by each card category, each in [0, 1]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PoolShares {
  pub creatures: f64,
  pub other: f64,
  pub lands: f64,
}

/// Integer card counts for a normalized deck
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DeckTargets {
  pub non_land: usize,
  pub land: usize,
}

/// Cards removed for exceeding `MAX_COPIES`, by the pile category they were removed from
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Eliminated {
  pub creatures: usize,
  pub other: usize,
  pub lands: usize,
}

/// Extra non-land cards to add, by category
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Additions {
  pub creatures: usize,
  pub other: usize,
}

/// Scales `shares` to `target_size` cards
///
/// Non-land cards round up and lands round down; whatever gap is left goes to the
/// non-land cards. A 35/25 split, which is what the usual 23 spell / 17 land pool
/// produces at 60 cards, is replaced with 36/24.
pub fn deck_targets(shares: &PoolShares, target_size: usize) -> DeckTargets {
  let size = target_size as f64;
  let non_land = ((shares.creatures + shares.other) * size).ceil() as i64;
  let land = std::cmp::min((shares.lands * size).floor() as usize, target_size);
  let gap = target_size as i64 - (non_land + land as i64);
  let mut targets = DeckTargets {
    non_land: std::cmp::max(non_land + gap, 0) as usize,
    land,
  };
  if targets.non_land == 35 && targets.land == 25 {
    targets = DeckTargets {
      non_land: 36,
      land: 24,
    };
  }
  targets
}

/// Splits the missing non-land cards between creatures and other spells
///
/// Both categories are sized from their pool share of every missing card (lands
/// included). The rounding leftover is settled on creatures, so the two always sum
/// to the missing non-land count.
pub fn split_additions(
  shares: &PoolShares,
  targets: &DeckTargets,
  total_non_land: usize,
  total_land: usize,
) -> Additions {
  let non_land_required = targets.non_land.saturating_sub(total_non_land) as i64;
  let land_required = targets.land.saturating_sub(total_land) as i64;
  let cards_required = (non_land_required + land_required) as f64;
  let mut creatures = (shares.creatures * cards_required).round() as i64;
  let mut other = (shares.other * cards_required).round() as i64;
  creatures += non_land_required - (creatures + other);
  if creatures < 0 {
    other += creatures;
    creatures = 0;
  }
  Additions {
    creatures: creatures as usize,
    other: other as usize,
  }
}

/// Removes every copy of a name past `MAX_COPIES`, counting across all piles
///
/// Each pile is scanned from its end, so the earliest copies in a pile are kept.
pub fn eliminate_extra_copies(deck: &mut Deck) -> Eliminated {
  let mut eliminated = Eliminated::default();
  let mut seen: HashMap<String, usize> = HashMap::new();
  for (p, pile) in deck.piles.iter_mut().enumerate() {
    for i in (0..pile.len()).rev() {
      let count = seen.entry(pile[i].name.clone()).or_insert(0);
      if *count < MAX_COPIES {
        *count += 1;
        continue;
      }
      pile.remove(i);
      match PileId::from_index(p) {
        Some(PileId::Creatures(_)) => eliminated.creatures += 1,
        Some(PileId::Other(_)) => eliminated.other += 1,
        Some(PileId::Lands) => eliminated.lands += 1,
        _ => {}
      }
    }
  }
  eliminated
}

/// Category shares over `total_cards`, the pool size before any copies were eliminated
pub fn pool_shares(deck: &Deck, eliminated: &Eliminated, total_cards: usize) -> PoolShares {
  if total_cards == 0 {
    return PoolShares::default();
  }
  let types = card_types(deck.deck_cards());
  let total = total_cards as f64;
  PoolShares {
    creatures: (types.creatures + eliminated.creatures) as f64 / total,
    other: (types.other + eliminated.other) as f64 / total,
    lands: (deck.land_count() + eliminated.lands) as f64 / total,
  }
}

// Passes over the candidates until `required` cards are added or a pass adds nothing.
// A candidate is copied into `target`, or the pile `pile_index` picks, while fewer
// than MAX_COPIES of its name sit in `scope`.
fn add_copies(
  deck: &mut Deck,
  candidates: &[Card],
  required: usize,
  scope: CopyScope,
  target: Option<PileId>,
) -> usize {
  let mut added = 0;
  while added < required {
    let mut added_this_pass = 0;
    for card in candidates {
      if added == required {
        break;
      }
      if deck.copies_in_deck(&card.name, scope) < MAX_COPIES {
        match target {
          Some(pile) => deck.pile_mut(pile).push(card.clone()),
          None => deck.push(card.clone()),
        }
        added += 1;
        added_this_pass += 1;
      }
    }
    if added_this_pass == 0 {
      break;
    }
  }
  added
}

// Moves `count` randomly chosen cost pile cards of `kind` to the sideboard
fn move_to_sideboard(deck: &mut Deck, kind: CardKind, count: usize, rng: &mut impl Rng) {
  if count == 0 {
    return;
  }
  let mut positions: Vec<(usize, usize)> = deck
    .piles
    .iter()
    .take(SPELL_PILES)
    .enumerate()
    .flat_map(|(p, pile)| {
      pile
        .iter()
        .enumerate()
        .filter(move |(_, card)| card.kind() == kind)
        .map(move |(i, _)| (p, i))
    })
    .collect();
  positions.shuffle(rng);
  positions.truncate(count);
  // remove from the back so the remaining positions stay valid
  positions.sort_unstable_by(|a, b| b.cmp(a));
  let mut moved = Vec::with_capacity(positions.len());
  for (p, i) in positions {
    moved.push(deck.piles[p].remove(i));
  }
  deck.pile_mut(PileId::Sideboard).extend(moved);
}

// Moves random non-basic lands to the sideboard until at most `max_lands` remain
fn trim_lands(deck: &mut Deck, max_lands: usize, rng: &mut impl Rng) {
  let lands = deck.pile(PileId::Lands).len();
  if lands <= max_lands {
    return;
  }
  let mut positions: Vec<usize> = (0..lands).collect();
  positions.shuffle(rng);
  positions.truncate(lands - max_lands);
  positions.sort_unstable_by(|a, b| b.cmp(a));
  let mut moved = Vec::with_capacity(positions.len());
  for i in positions {
    moved.push(deck.pile_mut(PileId::Lands).remove(i));
  }
  deck.pile_mut(PileId::Sideboard).extend(moved);
}

// Moves surplus non-land cards to the sideboard, split by the creature/other share
fn trim_non_land(deck: &mut Deck, max_non_land: usize, rng: &mut impl Rng) {
  let types = card_types(deck.deck_cards());
  let total = types.creatures + types.other;
  if total <= max_non_land {
    return;
  }
  let surplus = total - max_non_land;
  let creatures = (types.creatures as f64 / total as f64 * surplus as f64).round() as usize;
  let other = std::cmp::min(surplus - std::cmp::min(creatures, surplus), types.other);
  let creatures = surplus - other;
  debug!(
    "moving {} creatures and {} other cards to the sideboard",
    creatures, other
  );
  move_to_sideboard(deck, CardKind::Creature, creatures, rng);
  move_to_sideboard(deck, CardKind::Other, other, rng);
}

/// Returns a copy of `deck` normalized to `target_size` cards
///
/// # Arguments
///
/// * `deck` - The pool, already placed into piles. It is never modified.
/// * `target_size` - Main deck size, basic lands included
/// * `sealed` - Sealed sideboards keep every card; draft sideboards are cut to 15
/// * `rng` - Source of the shuffles that pick added and removed cards
///
/// The main deck (cost piles, lands pile and basic lands) reaches `target_size`
/// whenever the pool has enough distinct cards to copy from and some colored mana
/// to base the basic lands on. No name ends up with more than `MAX_COPIES` copies
/// across the main deck and sideboard.
pub fn normalize(
  deck: &Deck,
  target_size: usize,
  sealed: bool,
  rng: &mut impl Rng,
) -> Result<Deck, Error> {
  deck.validate()?;
  if target_size == 0 {
    return Err(Error::InvalidTarget("deck size must be positive".to_string()));
  }
  let mut deck = deck.clone();

  let total_cards = deck.total_cards();
  let eliminated = eliminate_extra_copies(&mut deck);
  let shares = pool_shares(&deck, &eliminated, total_cards);
  let targets = deck_targets(&shares, target_size);
  let types = card_types(deck.deck_cards());
  let total_non_land = types.creatures + types.other;
  let additions = split_additions(&shares, &targets, total_non_land, deck.land_count());
  debug!(
    "pool of {} cards ({:?} eliminated), targets {:?}, additions {:?}",
    total_cards, eliminated, targets, additions
  );

  let (mut creatures, mut other) = {
    let by_type = cards_by_type(deck.deck_cards());
    let creatures: Vec<Card> = by_type.creatures.into_iter().cloned().collect();
    let other: Vec<Card> = by_type.other.into_iter().cloned().collect();
    (creatures, other)
  };
  creatures.shuffle(rng);
  other.shuffle(rng);
  let added_creatures = add_copies(
    &mut deck,
    &creatures,
    additions.creatures,
    CopyScope::MainDeck,
    None,
  );
  let added_other = add_copies(&mut deck, &other, additions.other, CopyScope::MainDeck, None);
  let shortfall = (additions.creatures + additions.other) - (added_creatures + added_other);
  if shortfall > 0 {
    let remaining: Vec<Card> = creatures.into_iter().chain(other.into_iter()).collect();
    add_copies(&mut deck, &remaining, shortfall, CopyScope::MainDeck, None);
  }

  trim_non_land(&mut deck, targets.non_land, rng);
  trim_lands(&mut deck, targets.land, rng);

  let pruned = prune_sideboard(&mut deck);
  if pruned > 0 {
    debug!("pruned {} sideboard cards over the copy limit", pruned);
  }
  if !sealed {
    cap_sideboard(&mut deck, SIDEBOARD_SIZE);
  }
  reorder_sideboard(&mut deck);

  // keep the share of non-basic lands among all lands
  let non_basic_lands = deck.pile(PileId::Lands).len();
  let land_count = deck.land_count();
  let non_basic_target = if land_count > 0 {
    (targets.land as f64 * non_basic_lands as f64 / land_count as f64).round() as usize
  } else {
    0
  };
  let non_basic_required = non_basic_target.saturating_sub(non_basic_lands);
  if non_basic_required > 0 {
    let mut lands = deck.pile(PileId::Lands).clone();
    lands.shuffle(rng);
    add_copies(
      &mut deck,
      &lands,
      non_basic_required,
      CopyScope::EntirePool,
      Some(PileId::Lands),
    );
  }

  let weights = if deck.lands.auto {
    auto_land_weights(&deck)
  } else {
    // manual basics keep their color balance, counted with the non-basic sources
    let mut weights = count_colors(deck.pile(PileId::Lands), None);
    for (color, count) in deck.lands.basic.iter() {
      weights.add(color, count);
    }
    weights
  };
  deck.lands.basic = compute_basic_lands(&weights, deck.pile(PileId::Lands), targets.land)?;

  info!(
    "normalized {} card pool to {} cards ({} non-land, {} lands, {} sideboard)",
    total_cards,
    deck.main_deck_size(),
    deck.deck_cards().count(),
    deck.land_count(),
    deck.pile(PileId::Sideboard).len()
  );
  Ok(deck)
}

/// Normalizes `deck` to a 60 card constructed deck
pub fn arena_60_card_deck(deck: &Deck, sealed: bool, rng: &mut impl Rng) -> Result<Deck, Error> {
  normalize(deck, DEFAULT_DECK_SIZE, sealed, rng)
}
