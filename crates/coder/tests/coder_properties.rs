//! Behavioural properties of the Huffman coder over generated texts.

use huffcode_coder::{
    code_batch, CodeTree, CoderConfig, EffectiveCoder, HuffmanCoder, MergeStrategy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Random text over the first `alphabet` lowercase letters, skewed towards `a`.
fn random_text(rng: &mut StdRng, alphabet: u8, len: usize) -> String {
    (0..len)
        .map(|_| {
            let a = rng.gen_range(0..alphabet);
            let b = rng.gen_range(0..alphabet);
            (b'a' + a.min(b)) as char
        })
        .collect()
}

fn sample_texts() -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut texts = Vec::new();
    for _ in 0..200 {
        let alphabet = rng.gen_range(1..=26);
        let len = rng.gen_range(1..=300);
        texts.push(random_text(&mut rng, alphabet, len));
    }
    // Uniform texts produce many probability ties
    texts.push("abcdefgh".repeat(5));
    texts.push("aabbccddeeffgghh".to_string());
    texts
}

#[test]
fn entry_per_distinct_character() {
    let mut coder = HuffmanCoder::new();

    for text in sample_texts() {
        coder.create_code(&text);
        let table = coder.result().expect("non-empty text has a table");

        let distinct: HashSet<char> = text.chars().collect();
        let coded: HashSet<char> = table.iter().map(|w| w.character).collect();
        assert_eq!(table.len(), distinct.len());
        assert_eq!(coded, distinct);
    }
}

#[test]
fn codes_are_prefix_free() {
    let mut coder = HuffmanCoder::new();

    for text in sample_texts() {
        coder.create_code(&text);
        let table = coder.result().unwrap();
        if table.len() >= 2 {
            assert!(table.is_prefix_free(), "codes for {:?} are not prefix free", text);
            assert!(table.iter().all(|w| !w.code.is_empty()));
        }
    }
}

#[test]
fn probabilities_sum_to_one() {
    let mut coder = HuffmanCoder::new();

    for text in sample_texts() {
        coder.create_code(&text);
        let sum: f64 = coder.result().unwrap().iter().map(|w| w.probability).sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum was {}", sum);
    }
}

#[test]
fn kraft_equality_holds() {
    // A full binary merge tree uses the whole code space.
    let mut coder = HuffmanCoder::new();

    for text in sample_texts() {
        coder.create_code(&text);
        let table = coder.result().unwrap();
        if table.len() >= 2 {
            let kraft: f64 = table.iter().map(|w| 0.5f64.powi(w.code_len() as i32)).sum();
            assert!((kraft - 1.0).abs() < 1e-12);
        }
    }
}

#[test]
fn strategies_produce_identical_codes() {
    let texts = sample_texts();
    let heap = code_batch(
        &texts,
        &CoderConfig {
            merge_strategy: MergeStrategy::Heap,
            ..Default::default()
        },
    );
    let sorted = code_batch(
        &texts,
        &CoderConfig {
            merge_strategy: MergeStrategy::SortedReduction,
            ..Default::default()
        },
    );

    assert_eq!(heap, sorted);
}

#[test]
fn resubmission_keeps_result() {
    let mut coder = HuffmanCoder::new();

    for text in sample_texts() {
        assert!(coder.create_code(&text));
        let first = coder.result().cloned();
        assert!(!coder.create_code(&text));
        assert_eq!(coder.result().cloned(), first);
    }
}

#[test]
fn documented_scenarios() {
    let mut coder = HuffmanCoder::new();

    coder.create_code("aaab");
    let table = coder.result().unwrap();
    assert_eq!(table.code_of('a'), Some("0"));
    assert_eq!(table.code_of('b'), Some("1"));
    assert_eq!(table.get('a').map(|w| w.probability), Some(0.75));

    coder.create_code("aaaabbbcc");
    let table = coder.result().unwrap();
    assert_eq!(table.code_of('a'), Some("1"));
    assert_eq!(table.code_of('b'), Some("00"));
    assert_eq!(table.code_of('c'), Some("01"));

    coder.create_code("zzzz");
    let table = coder.result().unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.code_of('z'), Some(""));
    assert!(table.is_degenerate());

    assert!(coder.create_code(""));
    assert!(coder.result().is_none());
}

#[test]
fn display_tree_has_one_leaf_per_word() {
    fn leaves(tree: &CodeTree) -> usize {
        if tree.is_leaf() {
            1
        } else {
            tree.children().iter().map(leaves).sum()
        }
    }

    let mut coder = HuffmanCoder::new();
    for text in sample_texts() {
        coder.create_code(&text);
        let table = coder.result().unwrap();
        if table.len() >= 2 {
            let tree = CodeTree::from_code_words(table);
            assert_eq!(leaves(&tree), table.len());
            let longest = table.iter().map(|w| w.code_len()).max().unwrap_or(0);
            assert_eq!(tree.depth(), longest + 1);
        }
    }
}
