/// Number of characters of permit text embedded in a prompt.
pub const MAX_INPUT_CHARS: usize = 8000;

/// Returns the first `MAX_INPUT_CHARS` characters of `text`.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_input(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Builds the instruction sent upstream as the sole user message.
///
/// The text is cut to `MAX_INPUT_CHARS` before surrounding whitespace is
/// trimmed, so nothing past the limit of the original input is embedded.
pub fn build_prompt(permit_text: &str) -> String {
    let permit_text = truncate_input(permit_text).trim();

    format!(
        "You are helping a member of the public understand a government permit.\n\
         Explain the permit below in plain English at about an 8th-grade reading level.\n\
         \n\
         Cover each of the following explicitly:\n\
         1. What the permit allows the holder to do.\n\
         2. Key conditions or restrictions.\n\
         3. Deadlines, expiration dates, or renewal requirements.\n\
         4. Actions the holder must take to stay in compliance.\n\
         \n\
         Keep the answer under 300 words. Use short bullet points where they help.\n\
         \n\
         Permit text:\n\
         \"\"\"\n\
         {permit_text}\n\
         \"\"\""
    )
}
