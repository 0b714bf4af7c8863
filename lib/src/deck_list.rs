//! # Text deck lists
//!
//! Renders decks as plain text, either as "<count> <name>" lines or in the format the
//! Arena client imports, "<count> <name> (<SET>) <collector_number>".
use crate::card::{Card, ManaColor, ManaColorCount};
use crate::deck::Deck;
use crate::error::Error;
use crate::normalize::arena_60_card_deck;
use crate::options::DeckListFormat;
use crate::pile::PileId;
use crate::sideboard::SIDEBOARD_SIZE;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::HashMap;

/// SetData answers the set metadata questions deck list rendering needs
pub trait SetData {
  /// Returns true if boosters of `set_code` mix printings from several sets,
  /// in which case deck lists order cards by set before collector number
  fn expansion_set(&self, set_code: &str) -> bool;
  /// Returns the basic land printing for `color` in `set_code`
  fn basic_land(&self, set_code: &str, color: ManaColor) -> Option<Card>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetInfo {
  pub code: String,
  #[serde(default)]
  pub expansion: bool,
  /// Basic land printings, looked up by name
  #[serde(default)]
  pub basic_lands: Vec<Card>,
}

/// SetCatalog is a `SetData` loaded from a JSON list of `SetInfo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetCatalog {
  pub sets: Vec<SetInfo>,
}

impl SetCatalog {
  pub fn new(sets: Vec<SetInfo>) -> Self {
    Self { sets }
  }

  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }

  fn find(&self, set_code: &str) -> Option<&SetInfo> {
    self
      .sets
      .iter()
      .find(|set| set.code.eq_ignore_ascii_case(set_code))
  }
}

impl SetData for SetCatalog {
  fn expansion_set(&self, set_code: &str) -> bool {
    self.find(set_code).map_or(false, |set| set.expansion)
  }

  fn basic_land(&self, set_code: &str, color: ManaColor) -> Option<Card> {
    let name = color.basic_land_name();
    self
      .find(set_code)
      .and_then(|set| set.basic_lands.iter().find(|card| card.name == name))
      .cloned()
  }
}

fn split_collector_number(collector_number: &str) -> (Option<u64>, &str) {
  let end = collector_number
    .find(|c: char| !c.is_ascii_digit())
    .unwrap_or_else(|| collector_number.len());
  (collector_number[..end].parse().ok(), &collector_number[end..])
}

/// Orders collector numbers by their leading number, so "9" sorts before "10"
pub fn compare_collector_numbers(a: &str, b: &str) -> Ordering {
  match (split_collector_number(a), split_collector_number(b)) {
    ((Some(x), x_rest), (Some(y), y_rest)) => x.cmp(&y).then_with(|| x_rest.cmp(y_rest)),
    _ => a.cmp(b),
  }
}

fn arena_format(format: DeckListFormat) -> bool {
  match format {
    DeckListFormat::Normal => false,
    DeckListFormat::Arena | DeckListFormat::Arena60 => true,
  }
}

/// Renders `cards` as one line per card name
///
/// Cards are ordered by collector number (by set first, for expansion sets, and by
/// name last) and each
/// name is listed once, at the position of its first printing, with the number of
/// copies. Arena lines name the set and collector number of that first printing.
pub fn as_text<'a, I, S>(cards: I, set_code: &str, format: DeckListFormat, sets: &S) -> String
where
  I: IntoIterator<Item = &'a Card>,
  S: SetData + ?Sized,
{
  let mut ordered: Vec<&Card> = cards.into_iter().collect();
  let by_set = sets.expansion_set(set_code);
  ordered.sort_by(|a, b| {
    let set_order = if by_set {
      a.set.cmp(&b.set)
    } else {
      Ordering::Equal
    };
    set_order
      .then_with(|| compare_collector_numbers(&a.collector_number, &b.collector_number))
      .then_with(|| a.name.cmp(&b.name))
  });

  let mut entries: Vec<(&Card, usize)> = Vec::new();
  let mut positions: HashMap<&str, usize> = HashMap::new();
  for card in ordered {
    match positions.get(card.name.as_str()) {
      Some(&i) => entries[i].1 += 1,
      None => {
        positions.insert(&card.name, entries.len());
        entries.push((card, 1));
      }
    }
  }

  let arena = arena_format(format);
  entries
    .into_iter()
    .map(|(card, count)| {
      if arena {
        format!(
          "{} {} ({}) {}",
          count,
          card.name,
          card.set.to_uppercase(),
          card.collector_number
        )
      } else {
        format!("{} {}", count, card.name)
      }
    })
    .collect::<Vec<_>>()
    .join("\n")
}

fn basic_land_lines<S>(basic: &ManaColorCount, set_code: &str, format: DeckListFormat, sets: &S) -> Vec<String>
where
  S: SetData + ?Sized,
{
  let mut lines = Vec::new();
  let mut printings = Vec::new();
  for (color, count) in basic.iter().filter(|(_, count)| *count > 0) {
    let printing = if arena_format(format) {
      sets.basic_land(set_code, color)
    } else {
      None
    };
    match printing {
      Some(card) => printings.extend(std::iter::repeat(card).take(count)),
      None => {
        if arena_format(format) {
          warn!(
            "no {} printing for set {}, listing it without one",
            color.basic_land_name(),
            set_code
          );
        }
        lines.push(format!("{} {}", count, color.basic_land_name()));
      }
    }
  }
  if !printings.is_empty() {
    lines.insert(0, as_text(&printings, set_code, format, sets));
  }
  lines
}

/// Renders `deck` as it stands: the main deck and basic lands in one block, then a
/// blank line and the sideboard. Draft sideboards are cut to 15 cards.
pub fn deck_list<S>(
  sets: &S,
  set_code: &str,
  format: DeckListFormat,
  sealed: bool,
  deck: &Deck,
) -> Result<String, Error>
where
  S: SetData + ?Sized,
{
  deck.validate()?;
  let mut main = Vec::new();
  let main_text = as_text(deck.main_deck(), set_code, format, sets);
  if !main_text.is_empty() {
    main.push(main_text);
  }
  main.extend(basic_land_lines(&deck.lands.basic, set_code, format, sets));
  let mut list = main.join("\n");

  let sideboard = deck.pile(PileId::Sideboard);
  let sideboard = if sealed {
    &sideboard[..]
  } else {
    &sideboard[..std::cmp::min(sideboard.len(), SIDEBOARD_SIZE)]
  };
  if !sideboard.is_empty() {
    list.push_str("\n\n");
    list.push_str(&as_text(sideboard, set_code, format, sets));
  }
  Ok(list)
}

/// Renders `deck` in `format`. `DeckListFormat::Arena60` normalizes the deck to 60
/// cards first and renders it as Arena lines.
pub fn export_deck<S>(
  sets: &S,
  set_code: &str,
  format: DeckListFormat,
  sealed: bool,
  deck: &Deck,
  rng: &mut impl Rng,
) -> Result<String, Error>
where
  S: SetData + ?Sized,
{
  deck.validate()?;
  match format {
    DeckListFormat::Arena60 => {
      let deck60 = arena_60_card_deck(deck, sealed, rng)?;
      deck_list(sets, set_code, DeckListFormat::Arena, sealed, &deck60)
    }
    _ => deck_list(sets, set_code, format, sealed, deck),
  }
}

/// Normalizes `deck` to 60 cards and renders it as Arena lines
pub fn arena_60_card_deck_list<S>(
  sets: &S,
  set_code: &str,
  sealed: bool,
  deck: &Deck,
  rng: &mut impl Rng,
) -> Result<String, Error>
where
  S: SetData + ?Sized,
{
  export_deck(sets, set_code, DeckListFormat::Arena60, sealed, deck, rng)
}
