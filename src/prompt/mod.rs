// src/prompt/mod.rs

//! Prompt construction helpers: `{{key}}` templating, few-shot prompt
//! assembly and sequential transformation chains.

mod chain;
mod few_shot;
mod template;

pub use chain::{Chain, Step, run_chain};
pub use few_shot::build_few_shot;
pub use template::render;
