//! # Mana colors and mana cost symbol parsing
//!
//! Mana costs are stored as text in the "{2}{W}{W/U}" style. Parsing only needs
//! two facts out of that text: which colors each symbol names, and the converted
//! mana cost.
use regex::Regex;

/// ManaColor represents a [color](https://mtg.gamepedia.com/Color)
///
/// Declaration order is the canonical W, U, B, R, G order used everywhere a
/// color mapping is iterated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ManaColor {
  #[serde(rename = "W")]
  White = 0,
  #[serde(rename = "U")]
  Blue = 1,
  #[serde(rename = "B")]
  Black = 2,
  #[serde(rename = "R")]
  Red = 3,
  #[serde(rename = "G")]
  Green = 4,
  #[serde(rename = "C")]
  #[serde(other)]
  Colorless = 5,
}

impl ManaColor {
  /// The five colors in canonical order
  pub const ALL: [ManaColor; 5] = [
    ManaColor::White,
    ManaColor::Blue,
    ManaColor::Black,
    ManaColor::Red,
    ManaColor::Green,
  ];

  pub fn from_str(color: &str) -> Self {
    match color.chars().next() {
      Some(c) => Self::from_char(c).unwrap_or(Self::Colorless),
      None => Self::Colorless,
    }
  }

  /// Returns the color for a cost letter, or None for anything that isn't one of WUBRG
  pub fn from_char(c: char) -> Option<Self> {
    match c {
      'W' => Some(Self::White),
      'U' => Some(Self::Blue),
      'B' => Some(Self::Black),
      'R' => Some(Self::Red),
      'G' => Some(Self::Green),
      _ => None,
    }
  }

  /// Single letter code, "C" for colorless
  pub fn code(self) -> &'static str {
    match self {
      Self::White => "W",
      Self::Blue => "U",
      Self::Black => "B",
      Self::Red => "R",
      Self::Green => "G",
      Self::Colorless => "C",
    }
  }

  /// Name of the basic land that taps for this color
  pub fn basic_land_name(self) -> &'static str {
    match self {
      Self::White => "Plains",
      Self::Blue => "Island",
      Self::Black => "Swamp",
      Self::Red => "Mountain",
      Self::Green => "Forest",
      Self::Colorless => "Colorless",
    }
  }
}

/// Returns the inner text of every "{...}" symbol in `mana_cost`, in order
pub fn mana_symbols(mana_cost: &str) -> Vec<&str> {
  lazy_static! {
    static ref MANA_SYMBOL_REGEX: Regex =
      Regex::new(r"\{([^{}]*)\}").expect("Failed to compile MANA_SYMBOL_REGEX regex");
  }
  MANA_SYMBOL_REGEX
    .captures_iter(mana_cost)
    .filter_map(|caps| caps.get(1))
    .map(|m| m.as_str())
    .collect()
}

/// Returns one entry per colored symbol, holding every color that symbol can be paid with.
/// A hybrid symbol like {W/U} yields [W, U]; generic symbols like {2} or {X} are skipped.
pub fn color_groups(mana_cost: &str) -> Vec<Vec<ManaColor>> {
  mana_symbols(mana_cost)
    .into_iter()
    .filter_map(|symbol| {
      let mut colors: Vec<ManaColor> = Vec::with_capacity(2);
      for c in symbol.chars() {
        if let Some(color) = ManaColor::from_char(c) {
          if !colors.contains(&color) {
            colors.push(color);
          }
        }
      }
      if colors.is_empty() {
        None
      } else {
        Some(colors)
      }
    })
    .collect()
}

/// Returns the converted mana cost of a mana cost string
///
/// Numeric symbols count their value, variable symbols ({X}, {Y}, {Z}) count zero,
/// and every other symbol counts one. A hybrid with a generic half like {2/W}
/// counts the generic half.
pub fn converted_mana_cost(mana_cost: &str) -> u8 {
  mana_symbols(mana_cost)
    .into_iter()
    .map(|symbol| {
      let mut halves = symbol.split('/');
      let first = halves.next().unwrap_or("");
      if let Ok(n) = first.parse::<u8>() {
        return n;
      }
      match first {
        "X" | "Y" | "Z" => 0,
        _ => 1,
      }
    })
    .fold(0u8, |accum, n| accum.saturating_add(n))
}

#[cfg(test)]
mod tests {
  use crate::card::mana_cost::*;

  #[test]
  fn empty_string() {
    assert_eq!(mana_symbols("").len(), 0);
    assert_eq!(color_groups("").len(), 0);
    assert_eq!(converted_mana_cost(""), 0);
  }

  #[test]
  fn simple_test_0() {
    let groups = color_groups("{1}{U}");
    assert_eq!(groups, vec![vec![ManaColor::Blue]]);
    assert_eq!(converted_mana_cost("{1}{U}"), 2);
  }

  #[test]
  fn x_test_0() {
    let groups = color_groups("{X}{R}{R}");
    assert_eq!(groups, vec![vec![ManaColor::Red], vec![ManaColor::Red]]);
    assert_eq!(converted_mana_cost("{X}{R}{R}"), 2);
  }

  // Hybrid mana is of the for {B/R}
  #[test]
  fn hybrid_test_0() {
    let groups = color_groups("{W/U}{2}");
    assert_eq!(groups, vec![vec![ManaColor::White, ManaColor::Blue]]);
    assert_eq!(converted_mana_cost("{W/U}{2}"), 3);
  }

  #[test]
  fn generic_hybrid_test_0() {
    let groups = color_groups("{2/W}{2/W}");
    assert_eq!(groups, vec![vec![ManaColor::White], vec![ManaColor::White]]);
    assert_eq!(converted_mana_cost("{2/W}{2/W}"), 4);
  }

  #[test]
  fn phyrexian_test_0() {
    let groups = color_groups("{3}{G/P}");
    assert_eq!(groups, vec![vec![ManaColor::Green]]);
    assert_eq!(converted_mana_cost("{3}{G/P}"), 4);
  }

  #[test]
  fn split_card_reads_both_faces() {
    assert_eq!(converted_mana_cost("{B/R} // {2}{B}{R}"), 5);
    assert_eq!(color_groups("{B/R} // {2}{B}{R}").len(), 3);
  }

  #[test]
  fn color_codes() {
    assert_eq!(ManaColor::from_str("G"), ManaColor::Green);
    assert_eq!(ManaColor::from_str("X"), ManaColor::Colorless);
    assert_eq!(ManaColor::Blue.code(), "U");
    assert_eq!(ManaColor::Black.basic_land_name(), "Swamp");
    let json = serde_json::to_string(&ManaColor::ALL).unwrap();
    assert_eq!(json, r#"["W","U","B","R","G"]"#);
  }
}
