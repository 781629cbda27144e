//! Tests for the character-sequence adaptor.

#![cfg(feature = "text")]

use regex::Regex;
use seqext::carrier::SinglyList;
use seqext::prelude::*;

// =============================================================================
// Carrier behavior
// =============================================================================

#[test]
fn test_text_is_a_char_carrier() {
    let t = ExtText::from("abc");
    assert_eq!(t.len(), 3);
    assert!(t.contains(&'b'));
    assert!(!t.contains(&'z'));
}

#[test]
fn test_text_len_counts_chars_not_bytes() {
    let t = ExtText::from("héllo");
    assert_eq!(t.len(), 5);
}

#[test]
fn test_text_filter_and_take() {
    let t = ExtText::from("a1b2c3");
    assert_eq!(t.filter(|c| c.is_ascii_alphabetic()), "abc");
    assert_eq!(t.take(2), "a1");
}

#[test]
fn test_text_concat() {
    let a = ExtText::from("Hello, ");
    let b = Text::from("world");
    assert_eq!(a.concat(&b), "Hello, world");
}

#[test]
fn test_text_sort() {
    let mut t = ExtText::from("dcba");
    t.sort();
    assert_eq!(t, "abcd");
}

// =============================================================================
// Rebinding out of Text
// =============================================================================

#[test]
fn test_map_out_of_text_lands_in_vec() {
    // Text is not parameterized; its override names Vec as the analogous
    // kind for any non-char result.
    let t = ExtText::from("abc");
    let codes: ExtVec<u32> = t.map(|c| *c as u32);
    assert_eq!(codes, seq![97u32, 98, 99]);
}

#[test]
fn test_zip_n_with_text_participant() {
    use std::collections::LinkedList;

    let nums = seq![4, 3, 2, 1];
    let shorts: LinkedList<i16> = [1, 2, 3, 4].into_iter().collect();
    let word = Text::from("cats");

    let zipped = nums.zip_n((&shorts, &word));
    assert_eq!(
        zipped,
        seq![(4, 1i16, 'c'), (3, 2i16, 'a'), (2, 3i16, 't'), (1, 4i16, 's')]
    );
}

#[test]
fn test_zip_out_of_text() {
    let t = ExtText::from("ab");
    let nums = vec![1, 2];
    let zipped: ExtVec<(char, i32)> = t.zip(&nums);
    assert_eq!(zipped, seq![('a', 1), ('b', 2)]);
}

// =============================================================================
// Splitting and joining
// =============================================================================

#[test]
fn test_split_on_whitespace() {
    let msg = ExtText::from("the quick  brown\tfox");
    let words = msg.split();
    assert_eq!(words.len(), 4);
    assert_eq!(
        words,
        seq![
            ExtText::from("the"),
            ExtText::from("quick"),
            ExtText::from("brown"),
            ExtText::from("fox")
        ]
    );
}

#[test]
fn test_split_empty_and_blank() {
    assert!(ExtText::from("").split().is_empty());
    assert!(ExtText::from("   ").split().is_empty());
}

#[test]
fn test_tokens_with_custom_pattern() {
    let csv = ExtText::from("a,bb,,ccc");
    let pattern = Regex::new(r"[^,]+").unwrap();
    let fields = csv.tokens(&pattern);
    assert_eq!(
        fields,
        seq![ExtText::from("a"), ExtText::from("bb"), ExtText::from("ccc")]
    );
}

#[test]
fn test_join_with_delimiter() {
    let parts = seq![Text::from("hello"), Text::from("world")];
    let joined = ExtText::from(", ").join(&parts);
    assert_eq!(joined, "hello, world");
}

#[test]
fn test_join_single_part_has_no_delimiter() {
    let parts = seq![Text::from("only")];
    assert_eq!(ExtText::from("|").join(&parts), "only");
}

#[test]
fn test_join_empty_collection() {
    let parts: ExtVec<Text> = seq![];
    assert_eq!(ExtText::from(", ").join(&parts), "");
}

#[test]
fn test_join_from_a_linked_kind() {
    let parts = seq![SinglyList<Text>; Text::from("a"), Text::from("b"), Text::from("c")];
    assert_eq!(ExtText::from("-").join(&parts), "a-b-c");
}

#[test]
fn test_split_then_join_roundtrip() {
    let msg = ExtText::from("one two three");
    let words = msg.split();
    let texts: ExtVec<Text> = words.map(|w| w.inner().clone());
    assert_eq!(ExtText::from(" ").join(&texts), "one two three");
}

// =============================================================================
// Case folding
// =============================================================================

#[test]
fn test_case_folding() {
    let t = ExtText::from("Hello, World!");
    assert_eq!(t.to_lowercase(), "hello, world!");
    assert_eq!(t.to_uppercase(), "HELLO, WORLD!");
    assert_eq!(t, "Hello, World!");
}
