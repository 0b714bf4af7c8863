#[macro_use]
extern crate criterion;
#[macro_use]
extern crate deckfit;

use criterion::Criterion;
use deckfit::card::{Card, ManaColorCount};
use deckfit::deck::{Deck, DeckLayout};
use deckfit::mana_base::compute_basic_lands;
use deckfit::normalize::normalize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn sealed_pool() -> Deck {
    let costs = ["{G}", "{1}{G}", "{2}{R}", "{1}{R}{G}", "{3}{R/G}", "{4}{G}{G}"];
    let mut cards: Vec<Card> = Vec::new();
    for i in 0..48 {
        let cost = costs[i % costs.len()];
        let card = if i % 3 == 0 {
            card!(&format!("Spell {}", i), cost, "Sorcery")
        } else {
            card!(&format!("Creature {}", i), cost, "Creature — Beast")
        };
        cards.push(card.with_rating((i % 7) as f64));
    }
    Deck::from_cards(cards, DeckLayout::default())
        .with_lands(true, ManaColorCount::from_wubrg(0, 0, 0, 8, 9))
}

fn criterion_function(c: &mut Criterion) {
    let deck = sealed_pool();
    c.bench_function("normalize sealed pool to 60", move |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| normalize(&deck, 60, true, &mut rng).expect("normalize failed"))
    });
    c.bench_function("compute_basic_lands five colors", |b| {
        let weights = ManaColorCount::from_wubrg(13, 2, 7, 19, 11);
        b.iter(|| compute_basic_lands(&weights, &[], 17).expect("compute_basic_lands failed"))
    });
}

criterion_group!(benches, criterion_function);
criterion_main!(benches);
