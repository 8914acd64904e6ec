//! Fenced `ansi` code blocks understood by chat clients.

const FENCE: &str = "```";
const LANGUAGE: &str = "ansi";

/// Wraps `text` into a fenced `ansi` code block: three backticks, `ansi`, a newline,
/// the text, a newline and three closing backticks.
///
/// # Examples
///
/// ```
/// let block = ansi_block::fence::wrap("\u{1b}[31mhi\u{1b}[0m");
/// assert_eq!(block, "```ansi\n\u{1b}[31mhi\u{1b}[0m\n```");
/// ```
pub fn wrap(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + 2 * FENCE.len() + LANGUAGE.len() + 2);
    output.push_str(FENCE);
    output.push_str(LANGUAGE);
    output.push('\n');
    output.push_str(text);
    output.push('\n');
    output.push_str(FENCE);
    output
}

/// Extracts the body of a fenced `ansi` code block produced by [`wrap()`], so that
/// `unwrap(&wrap(text)) == Some(text)`. Whitespace around the block and a `\r\n` line ending
/// after the opening fence are tolerated. Only the `\n` before the closing fence is stripped;
/// a preceding `\r` remains a part of the body.
///
/// Returns `None` if `block` is not a fenced `ansi` block.
pub fn unwrap(block: &str) -> Option<&str> {
    let block = block.trim();
    let rest = block.strip_prefix(FENCE)?.strip_prefix(LANGUAGE)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;
    let body = rest.strip_suffix(FENCE)?;
    if body.is_empty() {
        // The opening line break also served as the closing one.
        return None;
    }
    body.strip_suffix('\n')
}
