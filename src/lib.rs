pub mod config;
pub mod core;
pub mod scoring;

pub use crate::core::jamo_mapper::{to_compat, to_compat_with_fallback};
pub use crate::core::keystrokes::{to_display_jamos, to_keystroke_units, to_keystrokes};
pub use crate::core::unicode::{
    classify, decompose_all_syllables, decompose_syllable, normalize, split_by_class,
    HangulCharClass,
};
pub use scoring::{
    calculate_correct_jamos, calculate_correct_keystrokes, select_best_answer, BestAnswer,
    MatchResult, ScoringMode,
};
