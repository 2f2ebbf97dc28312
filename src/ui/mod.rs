//! UI module - terminal prompts and text rendering

pub mod display;
pub mod prompt;

pub use display::{render_battle, render_map, render_summary};
pub use prompt::{parse_leading_integer, Prompter};
