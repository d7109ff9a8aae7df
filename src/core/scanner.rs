// File: src/core/scanner.rs
use crate::core::types::{Symbol, TokenType};
use std::collections::HashSet;

/// Command names recognized as Greek letters. LaTeX defines no \omicron and
/// no capital command for letters whose capital matches a Latin glyph, so
/// the closed list is 23 lowercase plus 11 capitalized names. Anything else
/// after a backslash is an unrecognized command and contributes no symbol.
const GREEK_NAMES: [&str; 34] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi", "psi",
    "omega", "Gamma", "Delta", "Theta", "Lambda", "Xi", "Pi", "Sigma", "Upsilon", "Phi", "Psi",
    "Omega",
];

/// One classified region of card text. Classifying the whole text in a
/// single pass keeps placeholder codes out of the literal-letter scan and
/// keeps command letters from leaking into it, without any ordering games
/// between removal passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Plain text, scanned for literal Latin letters.
    Literal(&'a str),
    /// A backslash command; the payload excludes the backslash.
    Command(&'a str),
    /// A placeholder token such as "VL1" or "Vg12".
    Token(&'a str),
}

/// Classifies `text` left to right. At each position a placeholder token is
/// tried first, then a command; everything else accumulates into literal
/// runs. A failed token match at one position does not block a match at the
/// next ("VVL1" contains the token "VL1").
pub fn scan(text: &str) -> Vec<Span<'_>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut lit_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(end) = token_end(bytes, i) {
            if lit_start < i {
                spans.push(Span::Literal(&text[lit_start..i]));
            }
            spans.push(Span::Token(&text[i..end]));
            i = end;
            lit_start = i;
        } else if bytes[i] == b'\\' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_alphabetic() {
            let mut end = i + 1;
            while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
                end += 1;
            }
            if lit_start < i {
                spans.push(Span::Literal(&text[lit_start..i]));
            }
            spans.push(Span::Command(&text[i + 1..end]));
            i = end;
            lit_start = i;
        } else {
            // Matches only ever start on ASCII bytes, so stepping one byte
            // through multi-byte characters is safe: every slice boundary we
            // actually use falls on a character boundary.
            i += 1;
        }
    }

    if lit_start < bytes.len() {
        spans.push(Span::Literal(&text[lit_start..]));
    }
    spans
}

/// If a placeholder token starts at `i`, returns the byte offset just past
/// its digits.
fn token_end(bytes: &[u8], i: usize) -> Option<usize> {
    if i + 2 >= bytes.len() {
        return None;
    }
    TokenType::from_code(std::str::from_utf8(&bytes[i..i + 2]).ok()?)?;
    let mut end = i + 2;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == i + 2 {
        None
    } else {
        Some(end)
    }
}

/// Symbols already committed by the card author: recognized Greek commands
/// (recorded with their backslash) plus every literal Latin letter. Token
/// spans and unrecognized commands contribute nothing.
pub fn static_symbols(text: &str) -> HashSet<Symbol> {
    let mut used = HashSet::new();
    for span in scan(text) {
        match span {
            Span::Command(name) => {
                if GREEK_NAMES.contains(&name) {
                    used.insert(format!("\\{}", name));
                }
            }
            Span::Literal(run) => {
                for c in run.chars() {
                    if c.is_ascii_alphabetic() {
                        used.insert(c.to_string());
                    }
                }
            }
            Span::Token(_) => {}
        }
    }
    used
}

/// Distinct placeholder tokens in first-discovery order. The order is part
/// of the contract: it is the tie-break key when the engine sorts tokens
/// for substitution.
pub fn find_tokens(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for span in scan(text) {
        if let Span::Token(tok) = span {
            if seen.insert(tok) {
                tokens.push(tok.to_string());
            }
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_text_into_spans() {
        let spans = scan("Let VL1 be \\alpha-big");
        assert_eq!(
            spans,
            vec![
                Span::Literal("Let "),
                Span::Token("VL1"),
                Span::Literal(" be "),
                Span::Command("alpha"),
                Span::Literal("-big"),
            ]
        );
    }

    #[test]
    fn finds_distinct_tokens_in_discovery_order() {
        let tokens = find_tokens("Vg2 then VL1, VL12 and Vg2 again, VN3");
        assert_eq!(tokens, vec!["Vg2", "VL1", "VL12", "VN3"]);
    }

    #[test]
    fn token_requires_digits() {
        assert!(find_tokens("VL alone and Vg, no digits").is_empty());
    }

    #[test]
    fn overlapping_code_prefix_still_matches() {
        // "VV" fails (no digit follows) but "VL1" one byte later must match.
        assert_eq!(find_tokens("VVL1"), vec!["VL1"]);
    }

    #[test]
    fn greek_commands_become_static_symbols() {
        let used = static_symbols("\\alpha + \\Sigma = ?");
        assert!(used.contains("\\alpha"));
        assert!(used.contains("\\Sigma"));
        assert_eq!(used.len(), 2);
    }

    #[test]
    fn literal_latin_letters_become_static_symbols() {
        let used = static_symbols("x + y = 3");
        assert_eq!(used, HashSet::from(["x".to_string(), "y".to_string()]));
    }

    #[test]
    fn token_codes_never_leak_into_latin_scan() {
        // Only the token "VL1" and no other letters: nothing is static.
        assert!(static_symbols("VL1 VN2 Vg3").is_empty());
    }

    #[test]
    fn unrecognized_command_letters_do_not_leak() {
        // \frac is not Greek; its letters must not be read as literals.
        let used = static_symbols("\\frac \\mathbb");
        assert!(used.is_empty());
    }

    #[test]
    fn greek_name_must_match_exactly() {
        // "theta" inside a longer command name is not a match.
        assert!(static_symbols("\\thetabar").is_empty());
        assert_eq!(
            static_symbols("\\theta"),
            HashSet::from(["\\theta".to_string()])
        );
    }

    #[test]
    fn non_ascii_text_is_skipped_cleanly() {
        let used = static_symbols("π ≤ Σ but n counts");
        assert_eq!(
            used,
            HashSet::from(["b".to_string(), "u".to_string(), "t".to_string(),
                           "n".to_string(), "c".to_string(), "o".to_string(),
                           "s".to_string()])
        );
    }
}
