use lexkit::json::{self, JsonTokenKind};
use lexkit::lexer::{Lexer, definitions};
use proptest::prelude::*;

/// JSON-ish text built from bare characters, keywords and well-formed strings.
fn json_like() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-z0-9 \\t\\n{}\\[\\]:,@é]{1,4}",
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
        r#""([a-z tfn]|\\["\\/nt])*""#,
    ];
    prop::collection::vec(piece, 0..12).prop_map(|pieces| pieces.concat())
}

/// Whitespace and `#` comments are the only text allowed between tokens.
fn is_skippable(gap: &str) -> bool {
    let mut in_comment = false;
    gap.chars().all(|c| {
        match c {
            '#' => in_comment = true,
            '\n' => in_comment = false,
            _ => {}
        }
        in_comment || c.is_whitespace()
    })
}

proptest! {
    /// Concatenating skipped whitespace and token lexemes reproduces the input.
    #[test]
    fn json_lexing_is_lossless(source in json_like()) {
        let tokens = json::lexer(&source).tokenize().expect("rule set has a catch-all");

        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(JsonTokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == JsonTokenKind::Eof).count(), 1);

        let mut rebuilt = String::new();
        let mut previous = 0;
        for token in &tokens {
            let gap = &source[previous..token.span.start.offset];
            prop_assert!(gap.chars().all(char::is_whitespace));
            prop_assert_eq!(token.lexeme, &source[token.span.start.offset..token.span.end.offset]);
            rebuilt.push_str(gap);
            rebuilt.push_str(token.lexeme);
            previous = token.span.end.offset;
        }
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn comment_skipping_is_lossless(source in "[a-z #\\n@]{0,64}") {
        let tokens = Lexer::new(&source)
            .with(definitions::skip_whitespace())
            .with(definitions::skip_line_comment('#'))
            .with(definitions::identifier("word"))
            .with(definitions::end_of_input("eof"))
            .with(definitions::anything("other"))
            .tokenize()
            .expect("rule set has a catch-all");

        let mut rebuilt = String::new();
        let mut previous = 0;
        for token in &tokens {
            let gap = &source[previous..token.span.start.offset];
            prop_assert!(is_skippable(gap), "unexpected gap {:?}", gap);
            prop_assert!(!token.lexeme.contains('#'));
            rebuilt.push_str(gap);
            rebuilt.push_str(token.lexeme);
            previous = token.span.end.offset;
        }
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn token_positions_agree_with_offsets(source in "[a-z \\n]{0,48}") {
        let tokens = Lexer::new(&source)
            .with(definitions::skip_whitespace())
            .with(definitions::identifier("word"))
            .with(definitions::end_of_input("eof"))
            .tokenize()
            .expect("every character is covered");

        for token in tokens {
            let before = &source[..token.span.start.offset];
            let line = before.matches('\n').count() + 1;
            let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
            prop_assert_eq!((token.start_line(), token.start_column()), (line, column));
        }
    }

    /// Identical input and rules always give identical streams.
    #[test]
    fn lexing_is_deterministic(source in "[a-z0-9 {}\\[\\],:]{0,48}") {
        let first = json::lexer(&source).tokenize().expect("lexes");
        let second = json::lexer(&source).tokenize().expect("lexes");
        prop_assert_eq!(first, second);
    }
}
