use super::*;

#[test]
fn odd_word_count_puts_extra_word_on_first_line() {
    assert_eq!(split_caption("ONE TWO THREE"), ("ONE TWO".to_owned(), "THREE".to_owned()));
}

#[test]
fn two_words_split_evenly() {
    assert_eq!(split_caption("A B"), ("A".to_owned(), "B".to_owned()));
}

#[test]
fn four_words_split_evenly() {
    assert_eq!(split_caption("A B C D"), ("A B".to_owned(), "C D".to_owned()));
}

#[test]
fn five_words_use_ceiling_midpoint() {
    assert_eq!(split_caption("a b c d e"), ("a b c".to_owned(), "d e".to_owned()));
}

#[test]
fn single_word_leaves_second_line_empty() {
    assert_eq!(split_caption("SECURITY"), ("SECURITY".to_owned(), String::new()));
}

#[test]
fn empty_text_yields_two_empty_lines() {
    assert_eq!(split_caption(""), (String::new(), String::new()));
    assert_eq!(split_caption("   "), (String::new(), String::new()));
}

#[test]
fn ideographic_space_separates_words() {
    assert_eq!(split_caption("TRAFIC\u{3000}CONTROL"), ("TRAFIC".to_owned(), "CONTROL".to_owned()));
}

#[test]
fn repeated_whitespace_collapses_to_single_spaces() {
    assert_eq!(split_caption("  A   B \t C  "), ("A B".to_owned(), "C".to_owned()));
}
