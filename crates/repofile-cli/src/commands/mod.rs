//! Command implementations for repofile-cli

pub mod apply;
pub mod check;
pub mod render;

pub use apply::{ApplyOptions, run_apply};
pub use check::run_check;
pub use render::run_render;
