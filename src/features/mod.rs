//! Feature modules built on the transcompiler
//!
//! - Cheat sheets pairing commands with their spoken forms
//! - Speech scripts: sentence splitting and paced playback segments

pub mod cheatsheet;
pub mod script;

pub use cheatsheet::{
    cheat_sheet_for, complete_cheat_sheet, extract_commands, filter_pairs, SymbolPair,
};
pub use script::{plan_segments, split_sentences, PauseSettings, Segment};
