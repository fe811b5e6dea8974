use crate::id3::v1::GENRES;

/// Expand ID3v1 genre references inside an ID3v2 genre string.
///
/// `(17)` becomes `Rock`, `(RX)` becomes `Remix` and `(CR)` becomes `Cover`, `((` is an
/// escaped `(`. The resolved pieces are joined with single spaces. A bare number such as
/// `17` is looked up as a whole.
pub fn expand_genre(genre: &str) -> String {
    let trimmed = genre.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        if let Some(name) = lookup(trimmed) {
            return name.to_string();
        }
    }

    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut rest = genre;

    while let Some(c) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("((") {
            current.push('(');
            rest = after;
            continue;
        }

        if c == '(' {
            if let Some(close) = rest.find(')') {
                if let Some(name) = lookup(&rest[1..close]) {
                    flush(&mut parts, &mut current);
                    parts.push(name.to_string());
                    rest = &rest[close + 1..];
                    continue;
                }
            }
        }

        current.push(c);
        rest = &rest[c.len_utf8()..];
    }
    flush(&mut parts, &mut current);

    parts.join(" ")
}

fn lookup(code: &str) -> Option<&'static str> {
    match code {
        "RX" => Some("Remix"),
        "CR" => Some("Cover"),
        _ if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) => code
            .parse::<usize>()
            .ok()
            .and_then(|idx| GENRES.get(idx).copied()),
        _ => None,
    }
}

fn flush(parts: &mut Vec<String>, current: &mut String) {
    let piece = current.trim();
    if !piece.is_empty() {
        parts.push(piece.to_string());
    }
    current.clear();
}
