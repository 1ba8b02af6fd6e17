//! Character classes used by the lexer.
//!
//! Letters and whitespace are decided by Unicode general category, so
//! non-ASCII text classifies the same way ASCII does.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Checks if a character can start or continue an identifier.
///
/// A letter is any character in Unicode general category `L` (`Lu`, `Ll`,
/// `Lt`, `Lm`, `Lo`). Combining marks and letter-like numbers such as
/// U+216B (Ⅻ) are not letters, nor are digits and underscores.
///
/// # Example
///
/// ```
/// use mini_lex::unicode::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('Z'));
/// assert!(is_letter('α'));  // Greek alpha
/// assert!(is_letter('字'));
/// assert!(!is_letter('1'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('\u{216B}'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Checks if a character is whitespace.
///
/// Whitespace is the ASCII controls `\t` through `\r`, the information
/// separators U+001C through U+001F, and every Unicode separator (`Zs`, `Zl`,
/// `Zp`) except the no-break spaces U+00A0, U+2007 and U+202F. U+0085 (next
/// line) is a control character and is not whitespace.
///
/// # Example
///
/// ```
/// use mini_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\n'));
/// assert!(is_whitespace('\u{3000}'));
/// assert!(!is_whitespace('\u{A0}'));
/// assert!(!is_whitespace('x'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\t'..='\r' | '\u{1C}'..='\u{1F}' => true,
        '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.general_category_group() == GeneralCategoryGroup::Separator,
    }
}

/// Checks if a character opens a group.
#[inline]
pub fn is_open(c: char) -> bool {
    c == '('
}

/// Checks if a character closes a group.
#[inline]
pub fn is_close(c: char) -> bool {
    c == ')'
}
