//! Disk loading for tagged shader assets.

use std::path::Path;

use anyhow::{Context, Result};

use glint_shader::{split_source, ShaderSourcePair, ShaderStage};

/// Reads a tagged shader asset from disk and splits it into per-stage
/// sources.
///
/// A missing stage section is not an error at this point — the hard failure
/// belongs to the compile step — but it is worth a warning while the asset
/// path is still known.
pub fn load_source_pair(path: impl AsRef<Path>) -> Result<ShaderSourcePair> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read shader asset {}", path.display()))?;

    let pair = split_source(&text);
    for stage in [ShaderStage::Vertex, ShaderStage::Fragment] {
        if pair.source(stage).is_empty() {
            log::warn!(
                "{}: no `#shader {stage}` section; the {stage} stage will fail to compile",
                path.display()
            );
        }
    }

    Ok(pair)
}

#[cfg(test)]
mod asset_tests {
    use super::*;

    #[test]
    fn missing_file_error_carries_path() {
        let err = load_source_pair("/definitely/not/here.shader").unwrap_err();
        assert!(format!("{err:#}").contains("not/here.shader"));
    }

    #[test]
    fn reads_and_splits_from_disk() {
        let path = std::env::temp_dir().join("glint_asset_roundtrip.shader");
        std::fs::write(&path, "#shader vertex\nv\n#shader fragment\nf\n").unwrap();
        let pair = load_source_pair(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(pair.vertex, "v\n");
        assert_eq!(pair.fragment, "f\n");
    }
}
