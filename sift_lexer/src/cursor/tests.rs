use sift_token::Position;

use super::Cursor;

// === Priming ===

#[test]
fn new_primes_first_byte() {
    let cursor = Cursor::new(b"abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.pos(), Position::START);
    assert_eq!(cursor.index(), 0);
    assert!(!cursor.is_exhausted());
}

#[test]
fn empty_source_is_exhausted_at_start() {
    let cursor = Cursor::new(b"");
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.pos(), Position::START);
}

#[test]
fn leading_interior_null_is_not_exhaustion() {
    let cursor = Cursor::new(b"\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_exhausted());
}

// === Advance and position arithmetic ===

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), Position::new(1, 2));
    assert_eq!(cursor.index(), 1);
}

#[test]
fn newline_resets_column_for_following_byte() {
    let mut cursor = Cursor::new(b"a\nb");
    cursor.advance();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.pos(), Position::new(1, 2));
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), Position::new(2, 1));
}

#[test]
fn carriage_return_is_an_ordinary_column_byte() {
    let mut cursor = Cursor::new(b"a\r\nb");
    cursor.advance();
    assert_eq!(cursor.pos(), Position::new(1, 2)); // at '\r'
    cursor.advance();
    assert_eq!(cursor.pos(), Position::new(1, 3)); // at '\n'
    cursor.advance();
    assert_eq!(cursor.pos(), Position::new(2, 1)); // at 'b'
}

#[test]
fn advance_past_end_parks_the_position() {
    let mut cursor = Cursor::new(b"ab");
    cursor.advance_n(2);
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.pos(), Position::new(1, 3));
    assert_eq!(cursor.index(), 2);

    cursor.advance();
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.pos(), Position::new(1, 3));
    assert_eq!(cursor.index(), 2);
}

#[test]
fn advance_n_routes_through_advance() {
    let mut cursor = Cursor::new(b"x\ny");
    cursor.advance_n(2);
    assert_eq!(cursor.current(), b'y');
    assert_eq!(cursor.pos(), Position::new(2, 1));
}

// === Exhaustion vs. interior NUL ===

#[test]
fn interior_null_is_not_exhausted() {
    let mut cursor = Cursor::new(b"a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_exhausted());
    assert_eq!(cursor.index(), 1);
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn exhausted_after_last_byte() {
    let mut cursor = Cursor::new(b"x");
    assert!(!cursor.is_exhausted());
    cursor.advance();
    assert!(cursor.is_exhausted());
}

// === eat_while ===

#[test]
fn eat_while_consumes_matching_bytes() {
    let mut cursor = Cursor::new(b"aaab");
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.index(), 3);
    assert_eq!(cursor.pos(), Position::new(1, 4));
}

#[test]
fn eat_while_stops_at_exhaustion() {
    let mut cursor = Cursor::new(b"aaa");
    cursor.eat_while(|b| b == b'a');
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.index(), 3);
}

#[test]
fn eat_while_no_match_does_not_move() {
    let mut cursor = Cursor::new(b"hello");
    cursor.eat_while(|b| b == b'z');
    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.current(), b'h');
}

// === Slices ===

#[test]
fn slice_from_extracts_to_current() {
    let mut cursor = Cursor::new(b"abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.slice_from(0), b"abc");
    assert_eq!(cursor.slice_from(1), b"bc");
}

#[test]
fn slice_extracts_range() {
    let cursor = Cursor::new(b"hello world");
    assert_eq!(cursor.slice(0, 5), b"hello");
    assert_eq!(cursor.slice(6, 11), b"world");
    assert_eq!(cursor.slice(2, 2), b"");
}

#[test]
fn slice_from_at_exhaustion_covers_the_tail() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance_n(3);
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.slice_from(1), b"bc");
}

// === Run lengths ===

#[test]
fn line_run_len_stops_at_line_ends_and_nul() {
    assert_eq!(Cursor::new(b"abc\ndef").line_run_len(), 3);
    assert_eq!(Cursor::new(b"abc\rdef").line_run_len(), 3);
    assert_eq!(Cursor::new(b"ab\0def").line_run_len(), 2);
    assert_eq!(Cursor::new(b"abcdef").line_run_len(), 6);
}

#[test]
fn line_run_len_zero_at_stop_byte() {
    assert_eq!(Cursor::new(b"\nx").line_run_len(), 0);
    assert_eq!(Cursor::new(b"").line_run_len(), 0);
}

#[test]
fn line_run_len_counts_from_current_byte() {
    let mut cursor = Cursor::new(b"#foo\nbar");
    cursor.advance(); // past '#'
    assert_eq!(cursor.line_run_len(), 3);
}

#[test]
fn string_run_len_stops_at_each_delimiter() {
    assert_eq!(Cursor::new(b"ab\"x").string_run_len(), 2);
    assert_eq!(Cursor::new(b"ab\\x").string_run_len(), 2);
    assert_eq!(Cursor::new(b"ab\rx").string_run_len(), 2);
    assert_eq!(Cursor::new(b"ab\nx").string_run_len(), 2);
    assert_eq!(Cursor::new(b"ab\0x").string_run_len(), 2);
    assert_eq!(Cursor::new(b"abcd").string_run_len(), 4);
}

#[test]
fn string_run_len_picks_earliest_delimiter() {
    assert_eq!(Cursor::new(b"a\\\"x").string_run_len(), 1);
    assert_eq!(Cursor::new(b"a\"\\x").string_run_len(), 1);
}

#[test]
fn run_len_zero_when_exhausted() {
    let mut cursor = Cursor::new(b"ab");
    cursor.advance_n(2);
    assert_eq!(cursor.line_run_len(), 0);
    assert_eq!(cursor.string_run_len(), 0);
}

// === Property tests ===

mod proptest_cursor {
    use proptest::prelude::*;
    use sift_token::Position;

    use super::super::Cursor;

    proptest! {
        #[test]
        fn advance_matches_scalar_position_model(
            bytes in proptest::collection::vec(any::<u8>(), 0..256)
        ) {
            let mut cursor = Cursor::new(&bytes);
            let mut line: u32 = 1;
            let mut column: u32 = 1;
            for &b in &bytes {
                prop_assert!(!cursor.is_exhausted());
                prop_assert_eq!(cursor.current(), b);
                prop_assert_eq!(cursor.pos(), Position::new(line, column));
                if b == b'\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
                cursor.advance();
            }
            prop_assert!(cursor.is_exhausted());
            prop_assert_eq!(cursor.pos(), Position::new(line, column));
        }

        #[test]
        fn line_run_len_matches_scalar_scan(
            bytes in proptest::collection::vec(any::<u8>(), 0..256)
        ) {
            let cursor = Cursor::new(&bytes);
            let expected = bytes
                .iter()
                .take_while(|&&b| b != b'\r' && b != b'\n' && b != 0)
                .count();
            prop_assert_eq!(cursor.line_run_len(), expected);
        }

        #[test]
        fn string_run_len_matches_scalar_scan(
            bytes in proptest::collection::vec(any::<u8>(), 0..256)
        ) {
            let cursor = Cursor::new(&bytes);
            let expected = bytes
                .iter()
                .take_while(|&&b| {
                    b != b'"' && b != b'\\' && b != b'\r' && b != b'\n' && b != 0
                })
                .count();
            prop_assert_eq!(cursor.string_run_len(), expected);
        }
    }
}
