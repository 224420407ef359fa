use std::fmt;

use glint_shader::ShaderStage;

/// A failed shader program build.
///
/// Driver info logs are carried verbatim so the offending source line can be
/// located from the message alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The driver could not allocate a program object.
    CreateProgram(String),
    /// The driver could not allocate a shader object for `stage`.
    CreateShader { stage: ShaderStage, reason: String },
    /// A stage failed to compile.
    Compile { stage: ShaderStage, log: String },
    /// The program failed to link.
    Link { log: String },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::CreateProgram(reason) => {
                write!(f, "failed to create program object: {reason}")
            }
            BuildError::CreateShader { stage, reason } => {
                write!(f, "failed to create {stage} shader object: {reason}")
            }
            BuildError::Compile { stage, log } => {
                write!(f, "{stage} shader compilation failed:\n{log}")
            }
            BuildError::Link { log } => write!(f, "program link failed:\n{log}"),
        }
    }
}

impl std::error::Error for BuildError {}
