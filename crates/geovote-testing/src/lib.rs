//! Testing infrastructure for geovote integration tests.
//!
//! - `TestWorld`: isolated config directory plus binary runner
//! - `fixtures`: sample region trees, member summaries and dashboard stats
//! - `surface`: a `RenderSurface` that records what the controller asked for
//! - `assertions`: checks for controller invariants

pub mod assertions;
pub mod fixtures;
pub mod surface;
pub mod world;

pub use surface::{RecordingSurface, RenderCall};
pub use world::TestWorld;
