//! Terminal arcade (workspace facade crate).
//!
//! Re-exports the workspace crates as `arcade::{core,input,persist,term,types}`
//! and hosts the per-game frame loops in [`app`].

pub mod app;

pub use arcade_core as core;
pub use arcade_input as input;
pub use arcade_persist as persist;
pub use arcade_term as term;
pub use arcade_types as types;
