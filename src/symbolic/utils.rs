// the collection of utility functions for equation string proceeding

/// remove every whitespace character, interior ones included: "2 x + 3" -> "2x+3"
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn find_char_positions(input: &str, target_char: char) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut start_pos = 0;

    while let Some(pos) = input[start_pos..].find(target_char) {
        positions.push(start_pos + pos);
        start_pos += pos + target_char.len_utf8();
    }

    positions
}

/// split the string at the given char positions, dropping the chars at those positions.
/// n positions always give n+1 pieces, empty pieces included
pub fn split_at_positions<'a>(input: &'a str, positions: &[usize]) -> Vec<&'a str> {
    let mut pieces = Vec::with_capacity(positions.len() + 1);
    let mut start = 0;
    for &pos in positions {
        pieces.push(&input[start..pos]);
        // skip the separator itself
        start = pos + input[pos..].chars().next().map_or(0, char::len_utf8);
    }
    pieces.push(&input[start..]);
    pieces
}
