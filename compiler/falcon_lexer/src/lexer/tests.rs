use super::*;
use crate::tokenize;
use pretty_assertions::assert_eq;

fn lex_all(source: &str) -> Vec<Token> {
    tokenize(source)
        .collect::<Result<Vec<_>, _>>()
        .expect("source should tokenize")
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source).into_iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<String> {
    lex_all(source)
        .into_iter()
        .filter(|t| !t.is_end())
        .map(|t| t.text)
        .collect()
}

fn first_error(source: &str) -> LexError {
    tokenize(source)
        .find_map(Result::err)
        .expect("source should fail to tokenize")
}

// === Identifiers and the `int` states ===

#[test]
fn test_int_prefix_falls_back_to_identifier() {
    assert_eq!(
        kinds("intA"),
        vec![TokenKind::Identifier, TokenKind::EndOfInput]
    );
    assert_eq!(texts("intA"), vec!["intA"]);
}

#[test]
fn test_int_keyword_disambiguation() {
    let cases = [
        ("i", TokenKind::Identifier),
        ("in", TokenKind::Identifier),
        ("int", TokenKind::IntKeyword),
        ("int_", TokenKind::Identifier),
        ("int9", TokenKind::Identifier),
        ("inx", TokenKind::Identifier),
        ("integer", TokenKind::Identifier),
        ("ix", TokenKind::Identifier),
        ("if", TokenKind::If),
    ];
    for (source, expected) in cases {
        assert_eq!(kinds(source), vec![expected, TokenKind::EndOfInput], "{source}");
        assert_eq!(texts(source), vec![source], "{source}");
    }
}

#[test]
fn test_int_keyword_stops_at_non_identifier_byte() {
    assert_eq!(
        kinds("int(a)"),
        vec![
            TokenKind::IntKeyword,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::RParen,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_statement_keywords() {
    assert_eq!(
        kinds("if else for while do break continue"),
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_underscore_identifiers() {
    assert_eq!(texts("_ _x a_1"), vec!["_", "_x", "a_1"]);
}

// === Literals ===

#[test]
fn test_int_literal_kept_verbatim() {
    let tokens = lex_all("007");
    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].text, "007");
}

#[test]
fn test_literal_then_identifier() {
    assert_eq!(
        kinds("12ab"),
        vec![
            TokenKind::IntLiteral,
            TokenKind::Identifier,
            TokenKind::EndOfInput
        ]
    );
}

// === Operators ===

#[test]
fn test_operators_maximal_munch() {
    assert_eq!(
        kinds(">= > <= < == = != && || + - * / %"),
        vec![
            TokenKind::GE,
            TokenKind::GT,
            TokenKind::LE,
            TokenKind::LT,
            TokenKind::Equal,
            TokenKind::Assignment,
            TokenKind::NotEqual,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_adjacent_operators_without_spaces() {
    assert_eq!(texts("a>=b==c"), vec!["a", ">=", "b", "==", "c"]);
    assert_eq!(texts("x===y"), vec!["x", "==", "=", "y"]);
    assert_eq!(texts("a<-1"), vec!["a", "<", "-", "1"]);
}

#[test]
fn test_compound_assignment_and_update_operators() {
    assert_eq!(
        kinds("+= -= *= /= %= ++ --"),
        vec![
            TokenKind::PlusAssign,
            TokenKind::MinusAssign,
            TokenKind::StarAssign,
            TokenKind::SlashAssign,
            TokenKind::PercentAssign,
            TokenKind::Increment,
            TokenKind::Decrement,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_update_operators_munch_left_to_right() {
    assert_eq!(texts("a+++b"), vec!["a", "++", "+", "b"]);
    assert_eq!(texts("a---b"), vec!["a", "--", "-", "b"]);
    assert_eq!(texts("- -a"), vec!["-", "-", "a"]);
    assert_eq!(texts("a+=-1"), vec!["a", "+=", "-", "1"]);
    assert_eq!(texts("a-==b"), vec!["a", "-=", "=", "b"]);
}

#[test]
fn test_conditional_and_comma_punctuation() {
    assert_eq!(
        kinds("c ? a : b, d"),
        vec![
            TokenKind::Identifier,
            TokenKind::Question,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_declaration_statement() {
    let tokens = lex_all("int a = 10;");
    let summary: Vec<_> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(
        summary,
        vec![
            "[IntKeyword]: int",
            "[Identifier]: a",
            "[Assignment]: =",
            "[IntLiteral]: 10",
            "[Semicolon]: ;",
            "[EndOfInput]",
        ]
    );
}

// === Comments and whitespace ===

#[test]
fn test_line_comment_skipped() {
    assert_eq!(texts("a // the rest = 1;\nb"), vec!["a", "b"]);
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(
        kinds("a; // trailing"),
        vec![
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn test_slash_is_division_when_not_doubled() {
    assert_eq!(texts("a/b"), vec!["a", "/", "b"]);
    assert_eq!(texts("a/ /b"), vec!["a", "/", "/", "b"]);
    assert_eq!(texts("a/=b//c"), vec!["a", "/=", "b"]);
    assert_eq!(kinds("/"), vec![TokenKind::Slash, TokenKind::EndOfInput]);
}

#[test]
fn test_whitespace_kinds() {
    assert_eq!(texts(" \t\r\na\r\n\tb "), vec!["a", "b"]);
}

// === Spans and positions ===

#[test]
fn test_spans_cover_token_text() {
    let source = "  count >= 10 ;";
    for token in lex_all(source) {
        assert_eq!(&source[token.span.to_range()], token.text);
    }
}

#[test]
fn test_end_of_input_span_after_trailing_whitespace() {
    let tokens = lex_all("a  ");
    assert_eq!(tokens.last().map(|t| t.span), Some(Span::point(3)));
}

// === Errors ===

#[test]
fn test_lone_ampersand_is_incomplete() {
    let err = first_error("a & b");
    assert_eq!(
        err,
        LexError::IncompleteOperator {
            op: '&',
            expected: "&&",
            span: Span::new(2, 3),
        }
    );
    assert_eq!(err.position(), 3);
}

#[test]
fn test_lone_pipe_and_bang_are_incomplete() {
    assert!(matches!(
        first_error("a |"),
        LexError::IncompleteOperator { op: '|', .. }
    ));
    assert!(matches!(
        first_error("!a"),
        LexError::IncompleteOperator { op: '!', .. }
    ));
}

#[test]
fn test_unrecognized_character() {
    let err = first_error("a = $;");
    assert_eq!(
        err,
        LexError::UnrecognizedCharacter {
            ch: '$',
            span: Span::new(4, 5),
        }
    );
    assert_eq!(err.to_string(), "unrecognized character `$` at position 5");
}

#[test]
fn test_unrecognized_multibyte_character() {
    let err = first_error("é");
    assert_eq!(err.span(), Span::new(0, 2));
}

#[test]
fn test_positions_count_bytes_not_characters() {
    // `é` in the comment is two bytes, so `@` is the sixth character but
    // starts at byte offset 6.
    let err = first_error("// é\n@");
    assert_eq!(err.span(), Span::new(6, 7));
    assert_eq!(err.position(), 7);
}

#[test]
fn test_error_codes() {
    assert_eq!(first_error("#").code(), falcon_diagnostic::ErrorCode::E0001);
    assert_eq!(first_error("&").code(), falcon_diagnostic::ErrorCode::E0002);
    let diag = first_error("a & b").to_diagnostic();
    assert_eq!(diag.span(), Some(Span::new(2, 3)));
}

// === Cursor control ===

#[test]
fn test_end_of_input_repeats() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().map(|t| t.kind), Ok(TokenKind::Identifier));
    for _ in 0..3 {
        assert_eq!(lexer.next_token().map(|t| t.kind), Ok(TokenKind::EndOfInput));
    }
}

#[test]
fn test_set_position_rewinds() {
    let mut lexer = Lexer::new("a = b;");
    let mark = lexer.position();
    let first = lexer.next_token().expect("a");
    let _ = lexer.next_token().expect("=");
    lexer.set_position(mark);
    assert_eq!(lexer.next_token().expect("a again"), first);
}

#[test]
fn test_done_ignores_trailing_trivia() {
    let mut lexer = Lexer::new("a // bye\n  ");
    assert!(!lexer.done());
    let _ = lexer.next_token().expect("a");
    assert!(lexer.done());
}

#[test]
fn test_stream_stops_after_error() {
    let items: Vec<_> = tokenize("a & b").collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
}

#[test]
fn test_stream_ends_after_end_of_input() {
    let mut tokens = tokenize("");
    assert!(matches!(tokens.next(), Some(Ok(t)) if t.is_end()));
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
}

// === Property tests ===

mod proptest_reconstruction {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn token_texts_rebuild_source(
            // A slash is always followed by something other than a slash,
            // so no `//` comment ever swallows the rest of the input.
            source in "([ \t\r\n]|[a-zA-Z0-9_;(){}+*%<>=?:,-]|[/][a-zA-Z0-9_ ;(){}=]|&&|[|][|]|!=){0,48}"
        ) {
            let tokens: Vec<Token> = tokenize(&source)
                .collect::<Result<_, _>>()
                .map_err(|e| TestCaseError::fail(e.to_string()))?;

            let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
            let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(rebuilt, expected);

            for token in &tokens {
                prop_assert_eq!(&source[token.span.to_range()], token.text.as_str());
            }
            prop_assert!(tokens.last().is_some_and(Token::is_end));
        }
    }
}
