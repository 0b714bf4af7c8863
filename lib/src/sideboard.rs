//! # Sideboard pruning and ordering
//!
use crate::card::{Card, ManaColor};
use crate::deck::{CopyScope, Deck, Pile, MAX_COPIES};
use crate::error::Error;
use crate::pile::PileId;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Sideboard size for draft decks. Sealed sideboards are not capped.
pub const SIDEBOARD_SIZE: usize = 15;

struct UnplayedKey {
  color_order: usize,
  color_tag: String,
  creature: bool,
  cmc: u8,
}

/// Color signature of a card: its color codes joined by commas, or "C" if it has none
pub fn color_tag(card: &Card) -> String {
  if card.colors.is_empty() {
    return ManaColor::Colorless.code().to_string();
  }
  card
    .colors
    .iter()
    .map(|color| color.code())
    .collect::<Vec<_>>()
    .join(",")
}

// Each non-land deck card counts once for every color it has, and once more for its signature
fn deck_color_counts(deck: &Deck) -> HashMap<String, usize> {
  let mut counts = HashMap::new();
  for card in deck.deck_cards().filter(|card| !card.is_land()) {
    for color in &card.colors {
      *counts.entry(color.code().to_string()).or_insert(0) += 1;
    }
    *counts.entry(color_tag(card)).or_insert(0) += 1;
  }
  counts
}

fn unplayed_order(deck: &Deck, pile: PileId) -> Vec<(usize, UnplayedKey)> {
  let counts = deck_color_counts(deck);
  let mut keyed: Vec<(usize, UnplayedKey)> = deck
    .pile(pile)
    .iter()
    .enumerate()
    .map(|(i, card)| {
      let color_tag = color_tag(card);
      let key = UnplayedKey {
        color_order: counts.get(&color_tag).cloned().unwrap_or(0),
        color_tag,
        creature: card.is_creature(),
        cmc: card.cmc,
      };
      (i, key)
    })
    .collect();
  keyed.sort_by(|(_, a), (_, b)| {
    b.color_order
      .cmp(&a.color_order)
      .then_with(|| a.color_tag.cmp(&b.color_tag))
      .then_with(|| b.creature.cmp(&a.creature))
      .then_with(|| a.cmc.cmp(&b.cmc))
  });
  keyed
}

/// Returns the cards of `pile` ordered for display next to the deck
///
/// Cards are grouped by color signature. Signatures seen most often among the
/// deck cards come first, then signatures sort by name, creatures lead within a
/// signature, and cheaper cards lead within that. With `deck_colors_only`, cards
/// whose signature never appears in the deck are left out.
pub fn order_unplayed_pile(deck: &Deck, pile: PileId, deck_colors_only: bool) -> Result<Pile, Error> {
  deck.validate()?;
  Ok(unplayed_pile(deck, pile, deck_colors_only))
}

fn unplayed_pile(deck: &Deck, pile: PileId, deck_colors_only: bool) -> Pile {
  let cards = deck.pile(pile);
  unplayed_order(deck, pile)
    .into_iter()
    .filter(|(_, key)| !deck_colors_only || key.color_order > 0)
    .map(|(i, _)| cards[i].clone())
    .collect()
}

/// Removes sideboard copies that would take a name past `MAX_COPIES` together with
/// the main deck. Returns the number of cards removed.
pub(crate) fn prune_sideboard(deck: &mut Deck) -> usize {
  let sideboard = std::mem::replace(deck.pile_mut(PileId::Sideboard), Vec::new());
  let before = sideboard.len();
  let mut kept_copies: HashMap<String, usize> = HashMap::new();
  let mut kept = Vec::with_capacity(before);
  for card in sideboard {
    let in_main = deck.copies_in_deck(&card.name, CopyScope::MainDeck);
    let copies = kept_copies.entry(card.name.clone()).or_insert(0);
    if in_main + *copies < MAX_COPIES {
      *copies += 1;
      kept.push(card);
    }
  }
  let removed = before - kept.len();
  *deck.pile_mut(PileId::Sideboard) = kept;
  removed
}

/// Cuts the sideboard down to `max_cards`, keeping the highest rated cards that
/// share a color signature with the deck. Off-color cards fill any remaining
/// slots in display order.
pub(crate) fn cap_sideboard(deck: &mut Deck, max_cards: usize) {
  if deck.pile(PileId::Sideboard).len() <= max_cards {
    return;
  }
  let order = unplayed_order(deck, PileId::Sideboard);
  let sideboard = deck.pile(PileId::Sideboard);
  let mut keep: Vec<usize> = order
    .iter()
    .filter(|(_, key)| key.color_order > 0)
    .map(|(i, _)| *i)
    .collect();
  // sort_by is stable, so equal ratings stay in display order
  keep.sort_by(|&a, &b| {
    sideboard[b]
      .rating
      .partial_cmp(&sideboard[a].rating)
      .unwrap_or(Ordering::Equal)
  });
  keep.truncate(max_cards);
  let fill = max_cards - keep.len();
  keep.extend(
    order
      .iter()
      .filter(|(_, key)| key.color_order == 0)
      .map(|(i, _)| *i)
      .take(fill),
  );
  let capped: Pile = keep.iter().map(|&i| sideboard[i].clone()).collect();
  debug!(
    "sideboard capped from {} to {} cards",
    sideboard.len(),
    capped.len()
  );
  *deck.pile_mut(PileId::Sideboard) = capped;
}

/// Re-sorts the sideboard with `order_unplayed_pile`
pub(crate) fn reorder_sideboard(deck: &mut Deck) {
  let ordered = unplayed_pile(deck, PileId::Sideboard, false);
  *deck.pile_mut(PileId::Sideboard) = ordered;
}
