// ============================================================================
// Text normalization for locations and traces
// ============================================================================

/// Remove blank lines and trailing whitespace, then trim the whole block.
///
/// Interior indentation is kept so XCTest's nested trace output still lines up:
/// ```text
/// "\n\n   t =  1.00s Start\n\n      t = 2.00s Tear Down   \n"
///   -> "t =  1.00s Start\n      t = 2.00s Tear Down"
/// ```
pub fn strip_and_remove_newlines(text: &str) -> String {
    let joined = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    joined.trim().to_string()
}

/// The last `count` newline-separated lines of `text`. A count of 0 keeps every line.
pub fn last_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let start = match count {
        0 => 0,
        n => lines.len().saturating_sub(n),
    };
    lines[start..].join("\n")
}
