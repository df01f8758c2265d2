//! Closed vocabularies offered by the choice fields

pub const SOURCE_OPTIONS: &[&str] = &["Passage", "Salon", "Recommendation"];

pub const SPECIALITE_OPTIONS: &[&str] = &[
    "Filières Scientifiques",
    "BAC Français",
    "Maths",
    "Maths Technique",
    "Gestion",
    "Filières Langues Étrangères",
    "Filières Lettres et Philosophie",
];

pub const PROGRAMME_OPTIONS: &[&str] = &[
    "LAC 1", "LAC 2", "LAC 3", "LINFO 1", "LINFO 2", "LINFO 3", "LFC 1", "LFC 2", "Master MM",
];

/// Option following `current` in `options`, wrapping around.
///
/// A value that is not in the list (including the empty string) moves to the
/// first option.
pub fn next_option(options: &'static [&'static str], current: &str) -> Option<&'static str> {
    if options.is_empty() {
        return None;
    }
    let next = match options.iter().position(|o| *o == current) {
        Some(i) => (i + 1) % options.len(),
        None => 0,
    };
    Some(options[next])
}

/// Option preceding `current` in `options`, wrapping around.
///
/// A value that is not in the list moves to the last option.
pub fn prev_option(options: &'static [&'static str], current: &str) -> Option<&'static str> {
    if options.is_empty() {
        return None;
    }
    let prev = match options.iter().position(|o| *o == current) {
        Some(0) | None => options.len() - 1,
        Some(i) => i - 1,
    };
    Some(options[prev])
}
