//! Terminal output helpers: a busy spinner and renderers for prompts and
//! model responses.

pub mod render;
pub mod spinner;

pub use spinner::{Spinner, start_loading_spinner};
