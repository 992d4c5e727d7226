/// Opening marker of a documentation block
const OPEN_MARKER: &str = "/**";
/// Closing marker of a documentation block
const CLOSE_MARKER: &str = "*/";

/// The first documentation comment block found in a file.
///
/// `start..end` is the exact byte span in the source text, inclusive of
/// both markers; `text` is the substring at that span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Locate the first `/** ... */` block in `text`.
///
/// The close marker is searched for after the open marker, so the nearest
/// close wins (non-greedy). Returns `None` when the file has no complete
/// block. Only the first block is considered; any later blocks in the
/// same file are left alone.
pub fn extract(text: &str) -> Option<DocBlock> {
    let start = text.find(OPEN_MARKER)?;
    let search_from = start + OPEN_MARKER.len();
    let close = text[search_from..].find(CLOSE_MARKER)?;
    let end = search_from + close + CLOSE_MARKER.len();

    Some(DocBlock {
        start,
        end,
        text: text[start..end].to_string(),
    })
}
