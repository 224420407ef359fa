//! Glint engine crate.
//!
//! This crate owns the graphics-driver seam and the shader program build
//! pipeline consumed by the demo app and by tooling.

pub mod asset;
pub mod driver;
pub mod program;

pub mod logging;
