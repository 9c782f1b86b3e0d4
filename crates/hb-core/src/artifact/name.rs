//! Random artifact names
//!
//! Either a made-up word in quotes (`'Ostaril'`) or an "of ..." title.
//! Cursed artifacts draw their titles from a darker list.

use crate::rng::RandomSource;

const ONSETS: &[&str] = &[
    "b", "br", "d", "dr", "f", "g", "gl", "k", "l", "m", "n", "r", "s", "st", "t", "th", "v", "z",
];
const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ae", "ai", "ia", "or", "ul"];
const CODAS: &[&str] = &["l", "n", "r", "s", "th", "nd", "rn", "x", "m", "g"];

const BLESSED_TITLES: &[&str] = &[
    "of Power",
    "of the Dawn",
    "of Westernesse",
    "of the Eldar",
    "of Light",
    "of the Magi",
    "of Stars",
    "of the Valar",
    "of Courage",
    "of Holding",
];

const CURSED_TITLES: &[&str] = &[
    "of Doom",
    "of Despair",
    "of the Pit",
    "of Sorrow",
    "of Morgoth",
    "of Ruin",
    "of the Abyss",
    "of Hatred",
    "of Woe",
    "of Shadows",
];

fn pick<R: RandomSource + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.randint0(pool.len() as u32) as usize]
}

/// A pronounceable word of two to four syllables
fn random_word<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let syllables = 1 + rng.randint1(3);
    let mut word = String::new();
    for i in 0..syllables {
        // Vowel-leading first syllable one time in five
        if i > 0 || !rng.one_in(5) {
            word.push_str(pick(rng, ONSETS));
        }
        word.push_str(pick(rng, VOWELS));
        if i + 1 == syllables && !rng.one_in(3) {
            word.push_str(pick(rng, CODAS));
        }
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => word,
    }
}

/// Name a freshly forged artifact.
pub fn random_artifact_name<R: RandomSource + ?Sized>(rng: &mut R, cursed: bool) -> String {
    if rng.one_in(3) {
        let titles = if cursed { CURSED_TITLES } else { BLESSED_TITLES };
        return pick(rng, titles).to_string();
    }
    format!("'{}'", random_word(rng))
}
