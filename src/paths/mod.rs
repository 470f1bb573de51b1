//! Path text handling: sanitize, split, resolve.
//!
//! Everything except [`absolute_path`] is a pure string algorithm. Inputs are `&str`
//! because the rules work on code points; callers holding a `Path` should go through
//! `to_string_lossy()`.

mod absolute;
mod components;
mod sanitize;

pub use absolute::absolute_path;
pub use components::{PathComponents, basename, decompose, dirname, dirname_levels, filename};
pub use sanitize::sanitize;
