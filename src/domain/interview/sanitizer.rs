//! Strips formatting markers from model output.

/// Characters the chat surface cannot render.
pub const FORMATTING_MARKERS: [char; 4] = ['*', '_', '~', '`'];

/// Removes every formatting marker and leaves all other characters,
/// whitespace included, exactly as they were.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !FORMATTING_MARKERS.contains(c))
        .collect()
}
