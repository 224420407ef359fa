use crate::source::{ShaderSourcePair, ShaderStage};

/// Literal token that switches the active section of a tagged asset.
///
/// The token may appear anywhere in the line; the remainder of that line
/// selects the stage by substring match (`"vertex"` or `"fragment"`,
/// case-sensitive). The marker line itself is never part of any output blob.
pub const MARKER: &str = "#shader";

// ── Splitter ──────────────────────────────────────────────────────────────

/// Splits a tagged shader asset into per-stage source blobs.
///
/// Single pass over the input lines:
/// - a line containing [`MARKER`] switches the active section and is dropped
/// - every other line is appended (plus `\n`) to the active section's blob
/// - lines before the first marker have no section and are dropped
///
/// A marker line that names no recognized stage leaves the active section
/// unchanged. No validation is performed on the section contents; an absent
/// section simply yields an empty blob.
pub fn split_source(src: &str) -> ShaderSourcePair {
    let mut section: Option<ShaderStage> = None;
    let mut pair = ShaderSourcePair::default();

    for line in src.lines() {
        if let Some(at) = line.find(MARKER) {
            let rest = &line[at + MARKER.len()..];
            if rest.contains(ShaderStage::Vertex.name()) {
                section = Some(ShaderStage::Vertex);
            } else if rest.contains(ShaderStage::Fragment.name()) {
                section = Some(ShaderStage::Fragment);
            }
            continue;
        }

        let Some(stage) = section else { continue };

        let blob = match stage {
            ShaderStage::Vertex => &mut pair.vertex,
            ShaderStage::Fragment => &mut pair.fragment,
        };
        blob.push_str(line);
        blob.push('\n');
    }

    pair
}
