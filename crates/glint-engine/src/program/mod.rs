//! Shader program build pipeline.
//!
//! Turns a [`glint_shader::ShaderSourcePair`] into a linked program handle
//! through a [`crate::driver::ShaderDriver`]. Every failure path releases the
//! driver objects it allocated; the caller never receives a partially-built
//! program.

mod builder;
mod error;

pub use builder::{build_program, compile_stage};
pub use error::BuildError;
