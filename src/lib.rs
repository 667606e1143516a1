//! Freehand sketch pad engine.
//!
//! Mouse and touch input are normalized into one gesture stream, gated by a
//! two-state stroke machine, and rendered segment by segment onto a persistent
//! Cairo surface. The [`pad::SketchPad`] component ties these together.

pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod pad;
pub mod script;
pub mod util;

pub use config::Config;
pub use error::SketchError;
pub use pad::{PadConfig, SketchPad};
