//! # Cards, mana colors and mana costs
//!
#[macro_use]
mod card;
mod mana_color_count;
mod mana_cost;

pub use card::*;
pub use mana_color_count::*;
