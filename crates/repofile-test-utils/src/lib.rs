//! Shared test utilities for the repofile workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`faulty`]: [`FaultyFs`], a filesystem that fails at a chosen stage
//! - [`scratch`]: [`ScratchDir`], a temp directory with repo file helpers

pub mod faulty;
pub mod scratch;

pub use faulty::{FaultyFs, Stage};
pub use scratch::ScratchDir;
