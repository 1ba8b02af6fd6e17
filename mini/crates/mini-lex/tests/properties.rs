//! Property-based tests for the scanner, using proptest for arbitrary inputs.

use mini_lex::unicode::{is_close, is_letter, is_open, is_whitespace};
use mini_lex::{tokenize, Lexer, TokenKind};
use mini_util::SourceText;
use proptest::prelude::*;

fn classified(c: char) -> bool {
    is_letter(c) || is_whitespace(c) || is_open(c) || is_close(c)
}

proptest! {
    #[test]
    fn token_count_bounded_by_char_count(input in any::<String>()) {
        let tokens: Vec<_> = Lexer::new(&input).collect();
        prop_assert!(tokens.len() <= input.chars().count());
    }

    #[test]
    fn tokenize_is_idempotent(input in any::<String>()) {
        let source = SourceText::new("prop", input);
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn spans_and_dropped_chars_cover_content(input in any::<String>()) {
        let tokens: Vec<_> = Lexer::new(&input).collect();

        let mut offset = 0;
        for token in &tokens {
            // Anything between tokens must be unclassified characters.
            let gap = &input[offset..token.span.start];
            prop_assert!(gap.chars().all(|c| !classified(c)), "gap {:?}", gap);
            prop_assert!(token.span.start < token.span.end);
            offset = token.span.end;
        }
        prop_assert!(input[offset..].chars().all(|c| !classified(c)));
    }

    #[test]
    fn tokens_match_their_kind(input in "[a-zé \t\n()+0-9_]{0,64}") {
        for token in Lexer::new(&input) {
            let text = token.text(&input);
            let ok = match token.kind {
                TokenKind::Identifier => text.chars().all(is_letter),
                TokenKind::Whitespace => text.chars().all(is_whitespace),
                TokenKind::Open => text == "(",
                TokenKind::Close => text == ")",
            };
            prop_assert!(ok, "{:?} matched {:?}", token.kind, text);
        }
    }

    #[test]
    fn adjacent_runs_never_share_a_kind(input in "[a-z \n()]{0,64}") {
        let kinds: Vec<_> = Lexer::new(&input).map(|t| t.kind).collect();
        for pair in kinds.windows(2) {
            let run = matches!(pair[0], TokenKind::Identifier | TokenKind::Whitespace);
            prop_assert!(!(run && pair[0] == pair[1]), "split run in {:?}", kinds);
        }
    }

    #[test]
    fn letter_strings_are_one_identifier(input in "[a-zA-Zα-ω]{1,100}") {
        let kinds: Vec<_> = Lexer::new(&input).map(|t| t.kind).collect();
        prop_assert_eq!(kinds, vec![TokenKind::Identifier]);
    }

    #[test]
    fn delimiters_are_one_token_each(input in "[()]{0,50}") {
        let tokens: Vec<_> = Lexer::new(&input).collect();
        prop_assert_eq!(tokens.len(), input.len());
    }
}
