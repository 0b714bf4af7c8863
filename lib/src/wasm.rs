//! # JavaScript host interface
//!
//! Defines the interface between deckfit and a browser host, which hands over a
//! pool as JSON and gets back the normalized deck and its text deck list
use crate::deck::Deck;
use crate::deck_list::{deck_list, SetCatalog};
use crate::error::Error;
use crate::normalize::{arena_60_card_deck, normalize};
use crate::options::{DeckListFormat, DeckOptions};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

/// Input format expected from the host
#[derive(Debug, Serialize, Deserialize)]
pub struct Input {
    /// The pool, already placed into piles
    pub deck: Deck,
    #[serde(default)]
    pub options: DeckOptions,
    /// True for sealed pools, whose sideboards are not capped
    #[serde(default)]
    pub sealed: bool,
    /// Set the pool was opened from, used for deck list ordering and basic land printings
    #[serde(default)]
    pub set_code: String,
    #[serde(default)]
    pub sets: SetCatalog,
    /// Seed for the shuffles, so a host can reproduce a result
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Output format returned to the host
#[derive(Debug, Serialize, Deserialize)]
pub struct Output {
    pub deck: Deck,
    pub deck_list: String,
}

/// Normalizes a pool and renders its deck list
/// Assumes that input deserializes into a valid `Input`, and returns a serialized `Output`
/// or an error string
/// # Example
///
///  ```js
///  const input = {deck: {piles: [...]}, options: {deck_list_format: "arena"}, set_code: "m19"};
///  const output = require('deckfit').deckfit_run(input);
///  console.log(output.deck_list);
///  ```
#[wasm_bindgen]
pub fn deckfit_run(input: &JsValue) -> JsValue {
    let input: Input = match input.into_serde() {
        Err(e) => {
            return JsValue::from_str(&format!("Error deserializing deck inputs: {:#?}", e));
        }
        Ok(v) => v,
    };
    let mut rng = match input.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let result = match run_impl(&input, &mut rng) {
        Err(e) => {
            return JsValue::from_str(&format!("Error normalizing deck: {}", e));
        }
        Ok(v) => v,
    };
    match JsValue::from_serde(&result) {
        Err(e) => JsValue::from_str(&format!("Error serializing deck outputs: {:#?}", e)),
        Ok(v) => v,
    }
}

/// Normalizes `input.deck` to `options.deck_size` cards (60 for `DeckListFormat::Arena60`)
/// and renders the result in the requested format
pub fn run_impl(input: &Input, rng: &mut impl Rng) -> Result<Output, Error> {
    let options = &input.options;
    let (deck, format) = match options.deck_list_format {
        DeckListFormat::Arena60 => (
            arena_60_card_deck(&input.deck, input.sealed, rng)?,
            DeckListFormat::Arena,
        ),
        format => (
            normalize(&input.deck, options.deck_size, input.sealed, rng)?,
            format,
        ),
    };
    let deck_list = deck_list(&input.sets, &input.set_code, format, input.sealed, &deck)?;
    info!(
        "{} card deck for set {} ({} packs)",
        deck.main_deck_size(),
        input.set_code,
        options.pack_count(input.sealed)
    );
    Ok(Output { deck, deck_list })
}

#[cfg(test)]
mod tests {
    use crate::card::*;
    use crate::deck::*;
    use crate::wasm::*;

    fn input(format: &str) -> Input {
        let mut cards = Vec::new();
        for i in 0..13 {
            cards.push(card!(&format!("Creature {}", i), "{1}{G}", "Creature — Elf"));
        }
        for i in 0..10 {
            cards.push(card!(&format!("Spell {}", i), "{G}", "Instant"));
        }
        let deck = Deck::from_cards(cards, DeckLayout::default())
            .with_lands(true, ManaColorCount::from_wubrg(0, 0, 0, 0, 17));
        let json = format!(
            r#"{{"deck":{},"options":{{"deck_list_format":"{}"}},"seed":11}}"#,
            serde_json::to_string(&deck).unwrap(),
            format
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn run_impl_forty_card_deck() {
        let input = input("normal");
        assert_eq!(input.options.deck_size, 40);
        let mut rng = SmallRng::seed_from_u64(input.seed.unwrap());
        let output = run_impl(&input, &mut rng).unwrap();
        assert_eq!(output.deck.main_deck_size(), 40);
        assert!(output.deck_list.ends_with("17 Forest"));
    }

    #[test]
    fn run_impl_arena_60() {
        let input = input("arena60");
        let mut rng = SmallRng::seed_from_u64(input.seed.unwrap());
        let output = run_impl(&input, &mut rng).unwrap();
        assert_eq!(output.deck.main_deck_size(), 60);
        assert_eq!(output.deck.lands.basic.g, 24);
        assert!(output.deck_list.contains("24 Forest"));
    }

    #[test]
    fn run_impl_reports_malformed_decks() {
        let mut input = input("normal");
        input.deck.piles.clear();
        let mut rng = SmallRng::seed_from_u64(1);
        let err = run_impl(&input, &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedDeck("expected 15 piles, found 0".to_string())
        );
    }
}
