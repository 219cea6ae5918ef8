use crate::domain::model::TransformMode;

/// Code points whose full uppercase mapping expands but whose simple
/// mapping (UnicodeData.txt) is a single code point: the Greek letters with
/// ypogegrammeni map to their prosgegrammeni forms.
const SIMPLE_UPPER_OVERRIDES: [(char, char); 27] = [
    ('\u{1F80}', '\u{1F88}'),
    ('\u{1F81}', '\u{1F89}'),
    ('\u{1F82}', '\u{1F8A}'),
    ('\u{1F83}', '\u{1F8B}'),
    ('\u{1F84}', '\u{1F8C}'),
    ('\u{1F85}', '\u{1F8D}'),
    ('\u{1F86}', '\u{1F8E}'),
    ('\u{1F87}', '\u{1F8F}'),
    ('\u{1F90}', '\u{1F98}'),
    ('\u{1F91}', '\u{1F99}'),
    ('\u{1F92}', '\u{1F9A}'),
    ('\u{1F93}', '\u{1F9B}'),
    ('\u{1F94}', '\u{1F9C}'),
    ('\u{1F95}', '\u{1F9D}'),
    ('\u{1F96}', '\u{1F9E}'),
    ('\u{1F97}', '\u{1F9F}'),
    ('\u{1FA0}', '\u{1FA8}'),
    ('\u{1FA1}', '\u{1FA9}'),
    ('\u{1FA2}', '\u{1FAA}'),
    ('\u{1FA3}', '\u{1FAB}'),
    ('\u{1FA4}', '\u{1FAC}'),
    ('\u{1FA5}', '\u{1FAD}'),
    ('\u{1FA6}', '\u{1FAE}'),
    ('\u{1FA7}', '\u{1FAF}'),
    ('\u{1FB3}', '\u{1FBC}'),
    ('\u{1FC3}', '\u{1FCC}'),
    ('\u{1FF3}', '\u{1FFC}'),
];

/// Same as [`SIMPLE_UPPER_OVERRIDES`], for lowercase. `İ` lowercases to a
/// plain `i` without the combining dot.
const SIMPLE_LOWER_OVERRIDES: [(char, char); 1] = [('\u{130}', 'i')];

#[inline]
fn lookup(table: &[(char, char)], ch: char) -> Option<char> {
    table
        .binary_search_by_key(&ch, |&(from, _)| from)
        .ok()
        .map(|idx| table[idx].1)
}

/// Simple (single code point) uppercase mapping.
///
/// Characters with no simple mapping whose full mapping expands to several
/// code points, such as `ß` → `SS`, are returned unchanged.
#[inline]
pub fn simple_upper(ch: char) -> char {
    lookup(&SIMPLE_UPPER_OVERRIDES, ch)
        .or_else(|| single(ch.to_uppercase()))
        .unwrap_or(ch)
}

/// Simple (single code point) lowercase mapping. See [`simple_upper`].
#[inline]
pub fn simple_lower(ch: char) -> char {
    lookup(&SIMPLE_LOWER_OVERRIDES, ch)
        .or_else(|| single(ch.to_lowercase()))
        .unwrap_or(ch)
}

#[inline]
fn single(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    let first = mapping.next()?;
    match mapping.next() {
        None => Some(first),
        Some(_) => None,
    }
}

#[inline]
pub fn invert_char(ch: char) -> char {
    if ch.is_lowercase() {
        simple_upper(ch)
    } else if ch.is_uppercase() {
        simple_lower(ch)
    } else {
        ch
    }
}

pub fn to_upper(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    to_upper_with(text, &mut res);
    res
}

pub fn to_upper_with(text: &str, buf: &mut String) {
    buf.extend(text.chars().map(simple_upper));
}

pub fn to_lower(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    to_lower_with(text, &mut res);
    res
}

pub fn to_lower_with(text: &str, buf: &mut String) {
    buf.extend(text.chars().map(simple_lower));
}

pub fn invert_case(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    invert_case_with(text, &mut res);
    res
}

pub fn invert_case_with(text: &str, buf: &mut String) {
    buf.extend(text.chars().map(invert_char));
}

/// 依模式轉換文字，永遠回傳新的字串
pub fn transform(text: &str, mode: TransformMode) -> String {
    let mut res = String::with_capacity(text.len());
    transform_with(text, mode, &mut res);
    res
}

pub fn transform_with(text: &str, mode: TransformMode, buf: &mut String) {
    match mode {
        TransformMode::Upper => to_upper_with(text, buf),
        TransformMode::Lower => to_lower_with(text, buf),
        TransformMode::Invert => invert_case_with(text, buf),
    }
}
