//! Frequency analysis and substitution-cipher decoding for Cyrillic text.
//!
//! Three independent pieces make up the crate: a [`preprocess`]or that
//! normalizes raw input down to the lowercase Cyrillic alphabet, a
//! [`freq`]uency table rendered as a bar chart by [`plot`], and an ordered
//! substitution-table remapper that never rewrites the same text position
//! twice.

pub mod error;
pub mod freq;
pub mod io_utils;
pub mod keymap;
pub mod plot;
pub mod preprocess;
pub mod remap;

pub use error::ChastotaError;
pub use keymap::parse_key_map;
pub use plot::{render_console, render_png, PlotOptions};
pub use remap::{remap, CharMap, Rule};
