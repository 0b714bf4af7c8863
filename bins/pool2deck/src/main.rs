extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate deckfit;
extern crate rand;

use deckfit::deck::Deck;
use deckfit::deck_list::{export_deck, SetCatalog};
use deckfit::options::{DeckListFormat, DeckOptions};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

const USAGE: &str = "usage: pool2deck <deck.json> [--options options.json] [--sets sets.json] \
                     [--set CODE] [--format normal|arena|arena60] [--sealed] [--seed N]";

#[derive(Debug)]
enum Error {
    Json(serde_json::Error),
    Io(std::io::Error),
    Deck(deckfit::Error),
    Usage(String),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<deckfit::Error> for Error {
    fn from(error: deckfit::Error) -> Self {
        Self::Deck(error)
    }
}

struct Args {
    deck_path: String,
    options_path: Option<String>,
    sets_path: Option<String>,
    set_code: String,
    format: Option<DeckListFormat>,
    sealed: bool,
    seed: Option<u64>,
}

fn parse_args(args: &[String]) -> Result<Args, Error> {
    let mut parsed = Args {
        deck_path: String::new(),
        options_path: None,
        sets_path: None,
        set_code: String::new(),
        format: None,
        sealed: false,
        seed: None,
    };
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| Error::Usage(format!("{} needs a value\n{}", name, USAGE)))
        };
        match arg.as_str() {
            "--options" => parsed.options_path = Some(value("--options")?),
            "--sets" => parsed.sets_path = Some(value("--sets")?),
            "--set" => parsed.set_code = value("--set")?,
            "--format" => {
                let format = value("--format")?;
                parsed.format = Some(serde_json::from_str(&format!("\"{}\"", format))?);
            }
            "--seed" => {
                let seed = value("--seed")?;
                parsed.seed = Some(
                    seed.parse()
                        .map_err(|_| Error::Usage(format!("bad seed {}\n{}", seed, USAGE)))?,
                );
            }
            "--sealed" => parsed.sealed = true,
            path if parsed.deck_path.is_empty() => parsed.deck_path = path.to_string(),
            other => return Err(Error::Usage(format!("unexpected argument {}\n{}", other, USAGE))),
        }
    }
    if parsed.deck_path.is_empty() {
        return Err(Error::Usage(USAGE.to_string()));
    }
    Ok(parsed)
}

fn read_file(path: &str) -> Result<String, Error> {
    let mut contents = String::new();
    File::open(Path::new(path))?.read_to_string(&mut contents)?;
    Ok(contents)
}

fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    let args: Vec<String> = env::args().collect();
    let args = parse_args(&args)?;

    info!("Loading deck @ {}", args.deck_path);
    let deck: Deck = serde_json::from_str(&read_file(&args.deck_path)?)?;
    let mut options = match &args.options_path {
        Some(path) => serde_json::from_str(&read_file(path)?)?,
        None => DeckOptions::default(),
    };
    if let Some(format) = args.format {
        options.deck_list_format = format;
    }
    let sets = match &args.sets_path {
        Some(path) => SetCatalog::from_json(&read_file(path)?)?,
        None => SetCatalog::default(),
    };
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let deck = if options.deck_list_format == DeckListFormat::Arena60 {
        deck
    } else {
        info!("Normalizing deck to {} cards", options.deck_size);
        deckfit::normalize(&deck, options.deck_size, args.sealed, &mut rng)?
    };
    let list = export_deck(
        &sets,
        &args.set_code,
        options.deck_list_format,
        args.sealed,
        &deck,
        &mut rng,
    )?;
    println!("{}", list);
    Ok(())
}
