//! Splits path data into command letters and raw number tokens.
//!
//! Numbers are kept as text here; the interpreter parses them, so a
//! malformed number is reported at the token the command needed.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Command(u8),
    Number(&'a str),
}

impl Token<'_> {
    pub fn is_command(&self) -> bool {
        matches!(self, Token::Command(_))
    }
}

pub const COMMAND_LETTERS: &[u8] = b"MmLlHhVvCcSsQqTtAaZz";

#[inline]
pub fn is_command_letter(c: u8) -> bool {
    COMMAND_LETTERS.contains(&c)
}

#[inline]
fn is_separator(c: u8) -> bool {
    c == b',' || c.is_ascii_whitespace()
}

// Arc argument slots 3 and 4 are the large-arc and sweep flags, which may
// be written as single digits with no separator ("a5 5 0 115 5").
const ARC_ARGS: usize = 7;
const ARC_FLAG_SLOTS: [usize; 2] = [3, 4];

pub fn tokenize(d: &str) -> Vec<Token<'_>> {
    let bytes = d.as_bytes();
    let mut i = 0usize;
    let mut tokens = Vec::new();
    let mut arc_slot: Option<usize> = None;

    while i < bytes.len() {
        let c = bytes[i];
        if is_separator(c) {
            i += 1;
            continue;
        }
        if is_command_letter(c) {
            arc_slot = matches!(c, b'A' | b'a').then_some(0);
            tokens.push(Token::Command(c));
            i += 1;
            continue;
        }
        let start = i;
        let is_flag = arc_slot.is_some_and(|s| ARC_FLAG_SLOTS.contains(&s)) && (c == b'0' || c == b'1');
        if is_flag {
            i += 1;
        } else {
            i = scan_number(bytes, i);
            if i == start {
                // Not a number: swallow up to the next separator so the
                // interpreter can report it.
                while i < bytes.len() && !is_separator(bytes[i]) && !is_command_letter(bytes[i]) {
                    i += 1;
                }
            }
        }
        tokens.push(Token::Number(&d[start..i]));
        if let Some(s) = arc_slot.as_mut() {
            *s = (*s + 1) % ARC_ARGS;
        }
    }
    tokens
}

/// End of the number starting at `i`, or `i` if none starts there.
///
/// A sign begins a new number unless it follows an exponent marker, and
/// a second decimal point begins a new number ("1-2" and "0.5.5" are two
/// numbers each).
fn scan_number(bytes: &[u8], mut i: usize) -> usize {
    let start = i;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let mut digits = false;
    let mut seen_dot = false;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => digits = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        i += 1;
    }
    if !digits {
        return start;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}
