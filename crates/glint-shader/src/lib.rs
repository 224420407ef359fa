//! Tagged shader asset format (`.shader`) — splitter and shared types.
//!
//! A `.shader` asset holds the sources for both pipeline stages in one text
//! file. Lines containing the `#shader` marker switch the active section;
//! everything else is raw source for whichever stage is active.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`source`] | `ShaderStage`, `ShaderSourcePair` |
//! | [`splitter`] | `split_source` entry point, `MARKER` |
//!
//! # Quick start
//!
//! ```rust
//! use glint_shader::split_source;
//!
//! let asset = "\
//! #shader vertex
//! void main() { gl_Position = vec4(0.0); }
//! #shader fragment
//! void main() {}
//! ";
//!
//! let pair = split_source(asset);
//! assert_eq!(pair.vertex, "void main() { gl_Position = vec4(0.0); }\n");
//! assert_eq!(pair.fragment, "void main() {}\n");
//! ```

pub mod source;
pub mod splitter;

pub use source::{ShaderSourcePair, ShaderStage};
pub use splitter::{split_source, MARKER};
