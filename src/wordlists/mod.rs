//! Word lists for Diffle solving
//!
//! Real games load their lists from files through [`loader`]. The sample
//! lists below let the binary run without any data files.

pub mod loader;

/// Built-in guess vocabulary
pub const SAMPLE_ALLOWED: &[&str] = &[
    "a", "at", "act", "arc", "art", "bat", "cab", "car", "cart", "case", "cast", "cat", "coat",
    "cot", "crab", "crate", "dart", "date", "east", "eat", "heart", "hat", "hate", "later",
    "least", "mat", "neat", "pace", "pact", "part", "paste", "rat", "react", "rest", "sat",
    "scat", "seat", "set", "slate", "star", "stare", "state", "tab", "tac", "tack", "tact",
    "taste", "tea", "tear", "tease", "trace", "tract", "trait", "treat", "waste", "water",
    "attic", "caster", "traces", "scatter", "stacked", "abstract", "tractates", "characters",
];

/// Built-in answer list, a subset of [`SAMPLE_ALLOWED`]
pub const SAMPLE_ANSWERS: &[&str] = &[
    "act", "art", "cart", "cast", "cat", "coat", "crate", "east", "heart", "hate", "later",
    "least", "pact", "paste", "react", "scat", "seat", "slate", "stare", "state", "taste",
    "tease", "trace", "tract", "trait", "treat", "waste", "water", "attic", "caster",
    "scatter", "abstract",
];
