//! Graphics-driver seam.
//!
//! This module is responsible for:
//! - the [`ShaderDriver`] contract the program builder runs against
//! - the production glow (OpenGL) implementation of that contract
//! - draining and reporting pending driver error flags

mod debug;
mod glow;

pub use debug::drain_errors;
pub use self::glow::GlowDriver;

use std::fmt;

use glint_shader::ShaderStage;

/// Driver operations required to build a shader program.
///
/// The handle types are associated so shader and program handles cannot be
/// mixed up at a call site. All operations are synchronous; the driver is
/// expected to run them to completion before returning. Nothing here reads
/// or mutates the driver's current-binding state — only objects allocated
/// through this trait are touched.
pub trait ShaderDriver {
    /// Handle to one shader stage object.
    type Shader: Copy + Eq + fmt::Debug;
    /// Handle to a program object.
    type Program: Copy + Eq + fmt::Debug;

    /// Allocates a shader object for the given stage.
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    /// Replaces the source text of a shader object.
    fn shader_source(&self, shader: Self::Shader, source: &str);
    /// Compiles the shader object's current source.
    fn compile_shader(&self, shader: Self::Shader);
    /// Whether the last compile of this shader object succeeded.
    fn compile_status(&self, shader: Self::Shader) -> bool;
    /// The driver's full info log for a shader object.
    fn shader_log(&self, shader: Self::Shader) -> String;
    /// Releases a shader object.
    fn delete_shader(&self, shader: Self::Shader);

    /// Allocates a program object.
    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Links the program's attached stages.
    fn link_program(&self, program: Self::Program);
    /// Asks the driver to validate the program against the current state.
    fn validate_program(&self, program: Self::Program);
    /// Whether the last link of this program object succeeded.
    fn link_status(&self, program: Self::Program) -> bool;
    /// The driver's full info log for a program object.
    fn program_log(&self, program: Self::Program) -> String;
    /// Releases a program object.
    fn delete_program(&self, program: Self::Program);
}
