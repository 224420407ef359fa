use std::fmt;

/// One of the two shader kinds handled by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Stable lowercase name, used in asset markers and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two per-stage source blobs produced by splitting a tagged asset.
///
/// A stage whose marker never appeared in the asset is left empty; that is
/// not an error here — it surfaces later as a compile failure for the stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSourcePair {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSourcePair {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self { vertex: vertex.into(), fragment: fragment.into() }
    }

    /// Source text for one stage.
    pub fn source(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}
