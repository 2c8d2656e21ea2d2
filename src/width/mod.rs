//! Display width helpers for rendered symbols.

mod utils;

pub use utils::{display_width, pad_to_width};
