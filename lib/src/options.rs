//! # Deck building options
//!
//! Options are supplied as a partial JSON object; anything missing takes its default.

/// Text format used when exporting a deck list
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckListFormat {
  /// "<count> <name>" lines with basic lands by name
  Normal,
  /// "<count> <name> (<SET>) <collector_number>" lines importable by the Arena client
  Arena,
  /// Arena lines for the deck normalized to 60 cards
  Arena60,
}

impl Default for DeckListFormat {
  fn default() -> Self {
    Self::Normal
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckOptions {
  #[serde(default = "default_number_of_packs")]
  pub number_of_packs: usize,
  #[serde(default = "default_sealed_number_of_packs")]
  pub sealed_number_of_packs: usize,
  #[serde(default = "default_deck_size")]
  pub deck_size: usize,
  #[serde(default)]
  pub deck_list_format: DeckListFormat,
}

fn default_number_of_packs() -> usize {
  3
}

fn default_sealed_number_of_packs() -> usize {
  6
}

fn default_deck_size() -> usize {
  40
}

impl Default for DeckOptions {
  fn default() -> Self {
    Self {
      number_of_packs: default_number_of_packs(),
      sealed_number_of_packs: default_sealed_number_of_packs(),
      deck_size: default_deck_size(),
      deck_list_format: DeckListFormat::default(),
    }
  }
}

impl DeckOptions {
  pub fn new() -> Self {
    Self::default()
  }

  /// Packs opened per player for the given format
  pub fn pack_count(&self, sealed: bool) -> usize {
    if sealed {
      self.sealed_number_of_packs
    } else {
      self.number_of_packs
    }
  }
}
