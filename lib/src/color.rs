//! # Colored mana requirements
//!
//! Counts how much of each color a set of cards asks for, ranks colors by that
//! demand, and summarizes the color makeup of a pile for display.
use crate::card::{color_groups, Card, ManaColor, ManaColorCount};

/// The ten two color pairs in their conventional order
const STANDARD_PAIRS: [(ManaColor, ManaColor); 10] = [
  (ManaColor::White, ManaColor::Blue),  // azorius
  (ManaColor::Blue, ManaColor::Black),  // dimir
  (ManaColor::Black, ManaColor::Red),   // rakdos
  (ManaColor::Red, ManaColor::Green),   // gruul
  (ManaColor::Green, ManaColor::White), // selesnya
  (ManaColor::White, ManaColor::Black), // orzhov
  (ManaColor::Blue, ManaColor::Red),    // izzet
  (ManaColor::Black, ManaColor::Green), // golgari
  (ManaColor::Red, ManaColor::White),   // boros
  (ManaColor::Green, ManaColor::Blue),  // simic
];

/// ColorInfo summarizes how many cards of a color appear in a set of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorInfo {
  pub code: ManaColor,
  /// Basic land name for the color, "Colorless" for C
  pub name: String,
  pub count: usize,
  /// Share of `count` among all counted colors, in [0, 1]
  pub percent: f64,
}

/// Counts colored mana symbols across `cards`
///
/// Cards with a mana cost contribute one count per color named by each colored
/// symbol. When `color_ranking` is supplied, a symbol naming exactly two colors
/// where only one of them ranks in the top two counts only that one. Cards without
/// a mana cost (lands, mostly) contribute their listed colors instead.
pub fn count_colors<'a, I>(cards: I, color_ranking: Option<&[ManaColor]>) -> ManaColorCount
where
  I: IntoIterator<Item = &'a Card>,
{
  let top_two = |color: ManaColor| -> bool {
    color_ranking
      .and_then(|ranking| ranking.iter().position(|&c| c == color))
      .map_or(false, |rank| rank < 2)
  };
  let mut counts = ManaColorCount::new();
  for card in cards {
    if card.mana_cost.is_empty() {
      for &color in &card.colors {
        counts.add(color, 1);
      }
      continue;
    }
    for group in color_groups(&card.mana_cost) {
      let counted: &[ManaColor] = if color_ranking.is_some() && group.len() == 2 {
        match (top_two(group[0]), top_two(group[1])) {
          (true, false) => &group[..1],
          (false, true) => &group[1..],
          _ => &group[..],
        }
      } else {
        &group[..]
      };
      for &color in counted {
        counts.add(color, 1);
      }
    }
  }
  counts
}

/// Returns the five colors ordered by descending count. Ties keep canonical order.
pub fn rank_colors(counts: &ManaColorCount) -> Vec<ManaColor> {
  let mut ranking: Vec<(ManaColor, usize)> = counts.iter().collect();
  // sort_by is stable
  ranking.sort_by(|a, b| b.1.cmp(&a.1));
  ranking.into_iter().map(|(color, _)| color).collect()
}

/// Counts the listed colors of `cards`, with colorless cards counted under C
///
/// Lands are skipped unless `include_lands`. The result is sorted by descending
/// count, then optionally restricted to entries whose percent is strictly above
/// `percent_filter`, then truncated to `max_colors` entries.
pub fn card_colors<'a, I>(
  cards: I,
  include_lands: bool,
  percent_filter: Option<f64>,
  max_colors: Option<usize>,
) -> Vec<ColorInfo>
where
  I: IntoIterator<Item = &'a Card>,
{
  let mut counts = ManaColorCount::new();
  let mut colorless = 0;
  for card in cards {
    if !include_lands && card.is_land() {
      continue;
    }
    if card.colors.is_empty() {
      colorless += 1;
    } else {
      for &color in &card.colors {
        counts.add(color, 1);
      }
    }
  }
  let mut colors: Vec<(ManaColor, usize)> = counts.iter().collect();
  colors.push((ManaColor::Colorless, colorless));
  let total: usize = colors.iter().map(|(_, count)| count).sum();
  let mut infos: Vec<ColorInfo> = colors
    .into_iter()
    .map(|(code, count)| ColorInfo {
      code,
      name: code.basic_land_name().to_string(),
      count,
      percent: if total > 0 {
        count as f64 / total as f64
      } else {
        0.0
      },
    })
    .collect();
  infos.sort_by(|a, b| b.count.cmp(&a.count));
  if let Some(filter) = percent_filter {
    infos.retain(|info| info.percent > filter);
  }
  if let Some(max_colors) = max_colors {
    infos.truncate(max_colors);
  }
  infos
}

/// Puts a two color pair into its conventional order (e.g. W before U, G before W).
/// Anything other than exactly two entries comes back unchanged.
pub fn order_color_pair(mut colors: Vec<ColorInfo>) -> Vec<ColorInfo> {
  if colors.len() == 2 {
    let swap = STANDARD_PAIRS
      .iter()
      .any(|&(first, second)| colors[0].code == second && colors[1].code == first);
    if swap {
      colors.swap(0, 1);
    }
  }
  colors
}
