use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_line_from_offset_multiple_lines() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2);
    assert_eq!(table.line_from_offset(12), 3);
    assert_eq!(table.line_count(), 3);
}

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 4));
    assert_eq!(table.offset_to_line_col(source, 10), (3, 1));
}

#[test]
fn test_offset_past_end_clamps_to_last_column() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 40), (1, 3));
}

#[test]
fn test_line_text() {
    let source = "int a = 1;\r\na = a + 1;\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("int a = 1;"));
    assert_eq!(table.line_text(source, 2), Some("a = a + 1;"));
    assert_eq!(table.line_text(source, 3), Some(""));
    assert_eq!(table.line_text(source, 0), None);
    assert_eq!(table.line_text(source, 9), None);
}

#[test]
fn test_span_to_line_col() {
    assert_eq!(span_to_line_col("a;\n  b;", Span::new(5, 6)), (2, 3));
}
