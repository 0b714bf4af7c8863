//! # Errors raised by deck normalization and mana base allocation
//!
use std::fmt;

/// Error represents the only conditions the engine reports to its caller.
/// Everything else (empty pools, zero color weights, running out of candidate
/// cards) degrades to a valid, possibly empty, result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Error {
  /// The input deck is missing piles or otherwise has the wrong shape
  MalformedDeck(String),
  /// A deck size or land total that cannot produce a deck
  InvalidTarget(String),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MalformedDeck(msg) => write!(f, "malformed deck: {}", msg),
      Self::InvalidTarget(msg) => write!(f, "invalid target: {}", msg),
    }
  }
}

impl std::error::Error for Error {}
