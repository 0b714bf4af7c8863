//! # Basic land allocation
//!
//! Turns a per-color demand signal into integer basic land counts whose sum is
//! exactly the number of basic land slots left after non-basic lands.
use crate::card::{Card, ManaColor, ManaColorCount};
use crate::color::{count_colors, rank_colors};
use crate::deck::Deck;
use crate::error::Error;
use crate::pile::PileId;

/// Added to every color with a nonzero pip count before allocation
const SPLASH_BONUS: usize = 8;

/// Returns the total number of lands (basic and non-basic) for a deck size
pub fn land_count_for_deck_size(deck_size: usize) -> usize {
  match deck_size {
    40 => 17,
    60 => 24,
    n => (n as f64 * 0.4).round() as usize,
  }
}

/// Returns basic land counts for a deck whose colored mana demand is `card_colors`
///
/// # Arguments
///
/// * `card_colors` - Per-color demand weights, usually pip counts
/// * `non_basic_lands` - Lands already in the deck; their colors count as existing sources
/// * `total_land_cards` - Target land count including `non_basic_lands`
///
///# Details
///
/// 1. Each color with positive weight gets a continuous target share of
///    `total_land_cards`, raised to at least 1.
/// 2. Sources already provided by `non_basic_lands` are subtracted from each target,
///    but every demanded color still requires at least 1, so a color can't be
///    squeezed out of the basic land split by its non-basic sources.
/// 3. The remaining basic land slots are split in proportion to those requirements.
/// 4. Each share is rounded down, then the color furthest from its continuous share
///    in the direction of the gap is adjusted by one until the counts sum exactly to
///    the number of basic land slots. Ties go to the earliest color in W, U, B, R, G order.
///
/// Zero total weight yields zero basic lands. Asking for fewer lands than
/// `non_basic_lands` already holds is `Error::InvalidTarget`.
pub fn compute_basic_lands(
  card_colors: &ManaColorCount,
  non_basic_lands: &[Card],
  total_land_cards: usize,
) -> Result<ManaColorCount, Error> {
  if non_basic_lands.len() > total_land_cards {
    return Err(Error::InvalidTarget(format!(
      "{} non-basic lands exceed the land target of {}",
      non_basic_lands.len(),
      total_land_cards
    )));
  }
  let total_card_colors = card_colors.total();
  if total_card_colors == 0 {
    return Ok(ManaColorCount::new());
  }

  let mut mana_targets = [0f64; 5];
  for (i, (_, weight)) in card_colors.iter().enumerate() {
    if weight > 0 {
      let target = weight as f64 / total_card_colors as f64 * total_land_cards as f64;
      mana_targets[i] = target.max(1.0);
    }
  }

  let mana_existing = count_colors(non_basic_lands, None);
  let mut mana_required = [0f64; 5];
  for (i, &color) in ManaColor::ALL.iter().enumerate() {
    if mana_targets[i] > 0.0 {
      mana_required[i] = (mana_targets[i] - mana_existing.get(color) as f64).max(1.0);
    }
  }
  let total_mana_required: f64 = mana_required.iter().sum();

  let basic_lands_required = total_land_cards - non_basic_lands.len();
  let mut basic_lands = [0f64; 5];
  let mut basic_lands_rounded = [0usize; 5];
  for i in 0..basic_lands.len() {
    basic_lands[i] = mana_required[i] / total_mana_required * basic_lands_required as f64;
    basic_lands_rounded[i] = basic_lands[i].floor() as usize;
  }

  let mut basic_lands_rounded_sum: usize = basic_lands_rounded.iter().sum();
  while basic_lands_rounded_sum != basic_lands_required {
    let is_rounded_larger = basic_lands_rounded_sum > basic_lands_required;
    let mut max_difference_idx = None;
    let mut max_difference_value = 0f64;
    for i in 0..basic_lands.len() {
      let rounded = basic_lands_rounded[i] as f64;
      let difference = (rounded - basic_lands[i]).abs();
      let in_direction = if is_rounded_larger {
        rounded > basic_lands[i]
      } else {
        rounded < basic_lands[i]
      };
      if in_direction && max_difference_value < difference {
        max_difference_value = difference;
        max_difference_idx = Some(i);
      }
    }
    // The rounded values can only stall if every continuous share is already an
    // integer, which means the sum already matches
    let idx = match max_difference_idx {
      Some(idx) => idx,
      None => break,
    };
    if is_rounded_larger {
      basic_lands_rounded[idx] -= 1;
      basic_lands_rounded_sum -= 1;
    } else {
      basic_lands_rounded[idx] += 1;
      basic_lands_rounded_sum += 1;
    }
  }

  let mut result = ManaColorCount::new();
  for (i, &color) in ManaColor::ALL.iter().enumerate() {
    result.set(color, basic_lands_rounded[i]);
  }
  debug!(
    "basic lands for weights {:?} with {} non-basic lands and {} total: {:?}",
    card_colors,
    non_basic_lands.len(),
    total_land_cards,
    result
  );
  Ok(result)
}

/// Returns the demand weights used for automatic basic lands
///
/// Pips are counted across the cost piles, counted again with hybrid symbols
/// resolved toward the two most common colors, and every color that shows up at
/// all gets a flat bonus.
pub fn auto_land_weights(deck: &Deck) -> ManaColorCount {
  let card_colors = count_colors(deck.deck_cards(), None);
  let color_ranking = rank_colors(&card_colors);
  let mut card_colors = count_colors(deck.deck_cards(), Some(&color_ranking));
  for &color in ManaColor::ALL.iter() {
    if card_colors.get(color) > 0 {
      card_colors.add(color, SPLASH_BONUS);
    }
  }
  card_colors
}

/// Returns basic land counts for `deck` at `deck_size` cards
pub fn auto_lands(deck: &Deck, deck_size: usize) -> Result<ManaColorCount, Error> {
  auto_lands_for_total(deck, land_count_for_deck_size(deck_size))
}

/// Returns basic land counts for `deck` so that its lands total `total_land_cards`
pub fn auto_lands_for_total(deck: &Deck, total_land_cards: usize) -> Result<ManaColorCount, Error> {
  deck.validate()?;
  if deck.deck_cards().next().is_none() {
    return Ok(ManaColorCount::new());
  }
  compute_basic_lands(
    &auto_land_weights(deck),
    deck.pile(PileId::Lands),
    total_land_cards,
  )
}

#[cfg(test)]
mod tests {
  use crate::card::*;
  use crate::deck::*;
  use crate::mana_base::*;

  fn dual(name: &str, a: ManaColor, b: ManaColor) -> Card {
    card!(name, "", "Land").with_colors(&[a, b])
  }

  #[test]
  fn single_color_takes_every_land() {
    let weights = ManaColorCount::from_wubrg(10, 0, 0, 0, 0);
    let lands = compute_basic_lands(&weights, &[], 17).unwrap();
    assert_eq!(lands, ManaColorCount::from_wubrg(17, 0, 0, 0, 0));
  }

  #[test]
  fn zero_weights_yield_no_lands() {
    let lands = compute_basic_lands(&ManaColorCount::new(), &[], 17).unwrap();
    assert_eq!(lands, ManaColorCount::new());
  }

  #[test]
  fn zero_target_yields_no_lands() {
    let weights = ManaColorCount::from_wubrg(3, 4, 0, 0, 0);
    let lands = compute_basic_lands(&weights, &[], 0).unwrap();
    assert_eq!(lands.total(), 0);
  }

  #[test]
  fn too_many_non_basics_is_an_invalid_target() {
    let weights = ManaColorCount::from_wubrg(3, 4, 0, 0, 0);
    let non_basics = vec![dual("Azorius Guildgate", ManaColor::White, ManaColor::Blue); 3];
    let res = compute_basic_lands(&weights, &non_basics, 2);
    match res {
      Err(Error::InvalidTarget(_)) => {}
      other => panic!("expected InvalidTarget, got {:?}", other),
    }
  }

  #[test]
  fn splash_color_keeps_a_land() {
    let weights = ManaColorCount::from_wubrg(100, 0, 0, 0, 1);
    let lands = compute_basic_lands(&weights, &[], 17).unwrap();
    assert_eq!(lands, ManaColorCount::from_wubrg(16, 0, 0, 0, 1));
  }

  #[test]
  fn existing_sources_are_subtracted() {
    let weights = ManaColorCount::from_wubrg(10, 10, 0, 0, 0);
    let non_basics = vec![dual("Azorius Guildgate", ManaColor::White, ManaColor::Blue); 2];
    let lands = compute_basic_lands(&weights, &non_basics, 17).unwrap();
    // 7.5 each, the tie goes to white
    assert_eq!(lands, ManaColorCount::from_wubrg(8, 7, 0, 0, 0));
  }

  #[test]
  fn over_supplied_color_still_requires_a_basic() {
    let weights = ManaColorCount::from_wubrg(10, 1, 0, 0, 0);
    let non_basics = vec![card!("Blue Source", "", "Land").with_colors(&[ManaColor::Blue]); 5];
    let lands = compute_basic_lands(&weights, &non_basics, 17).unwrap();
    assert_eq!(lands, ManaColorCount::from_wubrg(11, 1, 0, 0, 0));
  }

  #[test]
  fn rounded_sum_is_always_exact() {
    let weight_sets = vec![
      ManaColorCount::from_wubrg(1, 0, 0, 0, 0),
      ManaColorCount::from_wubrg(1, 1, 1, 0, 0),
      ManaColorCount::from_wubrg(1, 1, 1, 1, 1),
      ManaColorCount::from_wubrg(13, 9, 0, 0, 0),
      ManaColorCount::from_wubrg(18, 0, 9, 0, 8),
      ManaColorCount::from_wubrg(50, 3, 7, 1, 0),
      ManaColorCount::from_wubrg(0, 0, 0, 23, 17),
    ];
    let non_basic_sets = vec![
      vec![],
      vec![dual("Azorius Guildgate", ManaColor::White, ManaColor::Blue)],
      vec![
        dual("Azorius Guildgate", ManaColor::White, ManaColor::Blue),
        dual("Gruul Guildgate", ManaColor::Red, ManaColor::Green),
        card!("Evolving Wilds", "", "Land"),
      ],
    ];
    for weights in &weight_sets {
      for non_basics in &non_basic_sets {
        for total in non_basics.len()..=40 {
          let lands = compute_basic_lands(weights, non_basics, total).unwrap();
          assert_eq!(
            lands.total(),
            total - non_basics.len(),
            "weights {:?} non-basics {} total {}",
            weights,
            non_basics.len(),
            total
          );
          for (color, weight) in weights.iter() {
            if weight == 0 {
              assert_eq!(lands.get(color), 0);
            }
          }
        }
      }
    }
  }

  #[test]
  fn land_count_by_deck_size() {
    assert_eq!(land_count_for_deck_size(40), 17);
    assert_eq!(land_count_for_deck_size(60), 24);
    assert_eq!(land_count_for_deck_size(45), 18);
    assert_eq!(land_count_for_deck_size(100), 40);
    assert_eq!(land_count_for_deck_size(0), 0);
  }

  #[test]
  fn auto_lands_two_colors() {
    let mut cards = Vec::new();
    for i in 0..10 {
      cards.push(card!(&format!("Red Card {}", i), "{1}{R}", "Instant"));
    }
    for i in 0..5 {
      cards.push(card!(&format!("Green Card {}", i), "{1}{G}", "Creature — Elf"));
    }
    let deck = Deck::from_cards(cards, DeckLayout::default());
    assert_eq!(auto_land_weights(&deck), ManaColorCount::from_wubrg(0, 0, 0, 18, 13));
    let lands = auto_lands(&deck, 40).unwrap();
    assert_eq!(lands, ManaColorCount::from_wubrg(0, 0, 0, 10, 7));
  }

  #[test]
  fn auto_lands_resolves_hybrids_toward_main_colors() {
    let mut cards = Vec::new();
    for i in 0..6 {
      cards.push(card!(&format!("White Card {}", i), "{1}{W}", "Creature — Soldier"));
    }
    for i in 0..4 {
      cards.push(card!(&format!("Black Card {}", i), "{1}{B}", "Sorcery"));
    }
    for i in 0..2 {
      cards.push(card!(&format!("Hybrid Card {}", i), "{U/B}", "Instant"));
    }
    let deck = Deck::from_cards(cards, DeckLayout::default());
    assert_eq!(auto_land_weights(&deck), ManaColorCount::from_wubrg(14, 0, 14, 0, 0));
    let lands = auto_lands(&deck, 40).unwrap();
    assert_eq!(lands, ManaColorCount::from_wubrg(9, 0, 8, 0, 0));
  }

  #[test]
  fn auto_lands_of_empty_deck() {
    let deck = Deck::new();
    assert_eq!(auto_lands(&deck, 40).unwrap(), ManaColorCount::new());
  }

  #[test]
  fn auto_lands_counts_non_basics() {
    let mut cards = Vec::new();
    for i in 0..12 {
      cards.push(card!(&format!("Blue Card {}", i), "{2}{U}", "Creature — Merfolk"));
    }
    for i in 0..12 {
      cards.push(card!(&format!("Red Card {}", i), "{2}{R}", "Instant"));
    }
    cards.push(dual("Izzet Guildgate", ManaColor::Blue, ManaColor::Red));
    cards.push(dual("Izzet Guildgate", ManaColor::Blue, ManaColor::Red));
    let deck = Deck::from_cards(cards, DeckLayout::default());
    let lands = auto_lands(&deck, 60).unwrap();
    assert_eq!(lands.total(), 22);
    assert_eq!(lands, ManaColorCount::from_wubrg(0, 11, 0, 11, 0));
  }
}
