use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_token_display() {
    let token = Token::new(TokenKind::Identifier, "count", Span::new(0, 5));
    assert_eq!(token.to_string(), "[Identifier]: count");
}

#[test]
fn test_end_of_input_display_has_no_text() {
    let token = Token::end_of_input(12);
    assert!(token.is_end());
    assert_eq!(token.span, Span::point(12));
    assert_eq!(token.to_string(), "[EndOfInput]");
}

#[test]
fn test_describe_matches_display() {
    assert_eq!(TokenKind::Semicolon.to_string(), "`;`");
    assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
}

#[test]
fn test_assignment_operators() {
    assert!(TokenKind::Assignment.is_assignment_operator());
    assert!(TokenKind::PercentAssign.is_assignment_operator());
    assert!(!TokenKind::Equal.is_assignment_operator());
    assert!(!TokenKind::Increment.is_assignment_operator());
}
