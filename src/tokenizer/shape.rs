/// Tokens at least this long get the shape `LONG`.
const LONG_TOKEN_CHARS: usize = 100;
/// Repeats of one shape character kept before truncation.
const MAX_SHAPE_RUN: usize = 4;

/// Abstract character-class signature of a token.
///
/// Lowercase letters map to `x`, uppercase to `X`, digits to `d`; any other
/// character is kept as is. Runs of the same class are cut after four.
pub fn shape(text: &str) -> String {
    if text.chars().count() >= LONG_TOKEN_CHARS {
        return "LONG".to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut last: Option<char> = None;
    let mut run = 0usize;
    for ch in text.chars() {
        let class = if ch.is_alphabetic() {
            if ch.is_uppercase() { 'X' } else { 'x' }
        } else if ch.is_numeric() {
            'd'
        } else {
            ch
        };
        if last == Some(class) {
            run += 1;
        } else {
            run = 0;
            last = Some(class);
        }
        if run < MAX_SHAPE_RUN {
            out.push(class);
        }
    }
    out
}
