//! Text normalization ahead of frequency counting.

const NBSP: char = '\u{00A0}';

/// Lowercase Cyrillic letters counted by the histogram. `ё` sits outside
/// this range; it is collapsed to a Latin `e` beforehand and the filter
/// then drops it.
fn is_alphabet(c: char) -> bool {
    ('а'..='я').contains(&c)
}

/// Sentence punctuation kept by [`for_display`].
fn is_display_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\'' | ' ')
}

/// Shared normalization: no-break spaces and newlines become plain spaces,
/// the text is lowercased and the letter variant `ё` collapses to `e`.
fn normalize(text: &str) -> String {
    text.replace(NBSP, " ")
        .replace('\n', " ")
        .to_lowercase()
        .replace('ё', "e")
}

/// Prepare raw text for frequency counting.
///
/// Only the 32 lowercase Cyrillic letters survive; digits, punctuation,
/// whitespace and Latin letters are all stripped. Empty input yields empty
/// output, and text already in this form passes through unchanged.
pub fn for_frequency(text: &str) -> String {
    normalize(text).chars().filter(|&c| is_alphabet(c)).collect()
}

/// Normalize text but keep sentence punctuation and spaces.
///
/// Intended for readable output rather than counting; the filter admits
/// `.,;:!?"'` and the space character in addition to the alphabet.
pub fn for_display(text: &str) -> String {
    normalize(text)
        .chars()
        .filter(|&c| is_alphabet(c) || is_display_punctuation(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_lowercase_text_is_untouched() {
        assert_eq!(for_frequency("привет"), "привет");
    }

    #[test]
    fn digits_punctuation_and_latin_are_stripped() {
        assert_eq!(for_frequency("1. Hello, мир 42!"), "мир");
    }

    #[test]
    fn yo_collapses_and_its_latin_stand_in_is_filtered() {
        assert_eq!(for_frequency("ёлка"), "лка");
        assert_eq!(for_frequency("Ёлка"), "лка");
    }

    #[test]
    fn newlines_and_no_break_spaces_vanish_with_the_rest() {
        assert_eq!(for_frequency("кот\nпёс\u{00A0}ещё"), "котпсещ");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(for_frequency(""), "");
        assert_eq!(for_display(""), "");
    }

    #[test]
    fn display_mode_keeps_punctuation_and_spaces() {
        assert_eq!(for_display("Привет, мир!"), "привет, мир!");
        assert_eq!(for_display("кот и\nпёс."), "кот и пс.");
    }
}
