//! # Magic: The Gathering Deck Normalization Library
//!
//! deckfit turns a drafted or sealed card pool into a constructed deck of a fixed size. It keeps
//! the creature, spell and land proportions of the pool, respects the four copy limit, picks and
//! orders a sideboard, and computes a basic land mana base whose color split tracks the colored
//! mana the deck asks for, summing exactly to the land target.

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate rand;
extern crate regex;
extern crate wasm_bindgen;

#[macro_use]
pub mod card;
pub mod color;
pub mod deck;
pub mod deck_list;
pub mod error;
pub mod mana_base;
pub mod normalize;
pub mod options;
pub mod pile;
pub mod sideboard;
pub mod wasm;

pub use crate::deck::Deck;
pub use crate::deck_list::{export_deck, SetCatalog, SetData};
pub use crate::error::Error;
pub use crate::mana_base::compute_basic_lands;
pub use crate::normalize::normalize;
pub use crate::wasm::deckfit_run;
