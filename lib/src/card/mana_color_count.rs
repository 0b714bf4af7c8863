use crate::card::ManaColor;

/// ManaColorCount maps each of the five colors to a count.
/// Used both for colored mana requirements and for basic land counts.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaColorCount {
  #[serde(rename = "W", default)]
  pub w: usize,
  #[serde(rename = "U", default)]
  pub u: usize,
  #[serde(rename = "B", default)]
  pub b: usize,
  #[serde(rename = "R", default)]
  pub r: usize,
  #[serde(rename = "G", default)]
  pub g: usize,
}

impl ManaColorCount {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a count with the given values in W, U, B, R, G order
  pub fn from_wubrg(w: usize, u: usize, b: usize, r: usize, g: usize) -> Self {
    Self { w, u, b, r, g }
  }

  /// Returns the count for `color`. Colorless is never tracked and is always 0.
  #[inline]
  pub fn get(&self, color: ManaColor) -> usize {
    match color {
      ManaColor::White => self.w,
      ManaColor::Blue => self.u,
      ManaColor::Black => self.b,
      ManaColor::Red => self.r,
      ManaColor::Green => self.g,
      ManaColor::Colorless => 0,
    }
  }

  #[inline]
  pub fn set(&mut self, color: ManaColor, count: usize) {
    match color {
      ManaColor::White => self.w = count,
      ManaColor::Blue => self.u = count,
      ManaColor::Black => self.b = count,
      ManaColor::Red => self.r = count,
      ManaColor::Green => self.g = count,
      ManaColor::Colorless => {}
    }
  }

  #[inline]
  pub fn add(&mut self, color: ManaColor, count: usize) {
    let current = self.get(color);
    self.set(color, current + count);
  }

  /// Returns the sum over all five colors
  pub fn total(&self) -> usize {
    self.w + self.u + self.b + self.r + self.g
  }

  /// Iterates (color, count) pairs in canonical W, U, B, R, G order
  pub fn iter(&self) -> impl Iterator<Item = (ManaColor, usize)> + '_ {
    ManaColor::ALL.iter().map(move |&color| (color, self.get(color)))
  }
}

#[cfg(test)]
mod tests {
  use crate::card::*;

  #[test]
  fn colorless_is_ignored() {
    let mut count = ManaColorCount::new();
    count.add(ManaColor::Colorless, 3);
    count.add(ManaColor::Red, 2);
    count.add(ManaColor::Red, 1);
    assert_eq!(count.get(ManaColor::Colorless), 0);
    assert_eq!(count.r, 3);
    assert_eq!(count.total(), 3);
  }

  #[test]
  fn iterates_in_canonical_order() {
    let count = ManaColorCount::from_wubrg(1, 2, 3, 4, 5);
    let pairs: Vec<_> = count.iter().collect();
    assert_eq!(
      pairs,
      vec![
        (ManaColor::White, 1),
        (ManaColor::Blue, 2),
        (ManaColor::Black, 3),
        (ManaColor::Red, 4),
        (ManaColor::Green, 5),
      ]
    );
  }

  #[test]
  fn serializes_with_color_codes() {
    let count = ManaColorCount::from_wubrg(17, 0, 0, 0, 0);
    let json = serde_json::to_string(&count).unwrap();
    assert_eq!(json, r#"{"W":17,"U":0,"B":0,"R":0,"G":0}"#);
    let back: ManaColorCount = serde_json::from_str(r#"{"U":3}"#).unwrap();
    assert_eq!(back, ManaColorCount::from_wubrg(0, 3, 0, 0, 0));
  }
}
