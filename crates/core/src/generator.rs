use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::model::{
    AccentColor, Category, Choice, GameMode, LETTER_OPTIONS, MAX_COUNT, NUMBER_OPTIONS,
    ODD_ONE_OUT_ITEMS, Pictogram, Prompt, Round, Shape, Topic,
};

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Produce a fresh round for `mode`.
///
/// Every value is drawn uniformly from a fixed table, and the option order is
/// shuffled, so the correct button lands anywhere.
pub fn generate_round<R: Rng>(mode: GameMode, rng: &mut R) -> Round {
    match mode {
        GameMode::Numbers => numbers_round(rng),
        GameMode::Letters => letters_round(rng),
        GameMode::OddOneOut => odd_one_out_round(rng),
        GameMode::ShapeMatch => shape_match_round(rng),
    }
}

/// Pick one of the topic's modes uniformly and generate a round for it.
pub fn generate_for_topic<R: Rng>(topic: Topic, rng: &mut R) -> Round {
    let mode = pick(rng, topic.modes());
    generate_round(mode, rng)
}

// Callers only pass the fixed, non-empty tables from `model`.
fn pick<R: Rng, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

fn numbers_round<R: Rng>(rng: &mut R) -> Round {
    let count = rng.random_range(1..=MAX_COUNT);
    let pictograms: Vec<Pictogram> = Category::pooled()
        .choose_multiple(rng, usize::from(count))
        .copied()
        .collect();

    let mut options = vec![count];
    while options.len() < NUMBER_OPTIONS {
        let candidate = rng.random_range(1..=MAX_COUNT);
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }
    options.shuffle(rng);

    Round::assemble(
        Prompt::Count { pictograms },
        options.into_iter().map(Choice::Number).collect(),
        Choice::Number(count),
    )
}

fn letters_round<R: Rng>(rng: &mut R) -> Round {
    let alphabet: Vec<char> = ALPHABET.chars().collect();
    let target = pick(rng, &alphabet);

    let distractors: Vec<char> = alphabet.into_iter().filter(|ch| *ch != target).collect();
    let mut options: Vec<char> = distractors
        .choose_multiple(rng, LETTER_OPTIONS - 1)
        .copied()
        .collect();
    options.push(target);
    options.shuffle(rng);

    Round::assemble(
        Prompt::Letter { target },
        options.into_iter().map(Choice::Letter).collect(),
        Choice::Letter(target),
    )
}

fn odd_one_out_round<R: Rng>(rng: &mut R) -> Round {
    let same_category = pick(rng, &Category::ALL);
    let others: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|category| *category != same_category)
        .collect();
    let odd_category = pick(rng, &others);

    let same = pick(rng, same_category.items());
    // Categories are disjoint today; resample anyway so a shared pictogram can
    // never produce a round without an odd item.
    let odd = loop {
        let candidate = pick(rng, odd_category.items());
        if candidate != same {
            break candidate;
        }
    };

    let odd_slot = rng.random_range(0..ODD_ONE_OUT_ITEMS);
    let mut items = [same; ODD_ONE_OUT_ITEMS];
    items[odd_slot] = odd;

    Round::assemble(
        Prompt::OddOneOut { items, same },
        (0..ODD_ONE_OUT_ITEMS).map(Choice::Slot).collect(),
        Choice::Slot(odd_slot),
    )
}

fn shape_match_round<R: Rng>(rng: &mut R) -> Round {
    let shape = pick(rng, &Shape::ALL);
    let accent = pick(rng, &AccentColor::PALETTE);

    let mut options = Shape::ALL.map(Choice::Shape).to_vec();
    options.shuffle(rng);

    Round::assemble(
        Prompt::Shape { shape, accent },
        options,
        Choice::Shape(shape),
    )
}
