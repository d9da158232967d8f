//! End-to-end tests for the Kasiski pipeline
//!
//! The classic-ciphertext expectations are golden values: the sequence map,
//! spacings, and ranking for this text are pinned so the pipeline cannot
//! drift silently.

use keyscope::kasiski::{find_repeat_sequences, rank_key_lengths, spacings};

const CIPHERTEXT: &str =
    "PPQCAXQVEKGYBNKMAZUYBNGBALJONITSZMJYIMVRAGVOHTVRAUCTKSGDDWUOXITLAZUVAVVRAZCVKBQPIWPOU";

#[test]
fn classic_ciphertext_sequence_map() {
    let sequences = find_repeat_sequences(CIPHERTEXT, 3).unwrap();
    assert_eq!(sequences.len(), 3);
    assert_eq!(sequences["YBN"], vec![11, 19]);
    assert_eq!(sequences["AZU"], vec![16, 64]);
    assert_eq!(sequences["VRA"], vec![38, 46, 70]);
}

#[test]
fn classic_ciphertext_spacings() {
    let sequences = find_repeat_sequences(CIPHERTEXT, 3).unwrap();
    let mut spaces = spacings(&sequences);
    spaces.sort_unstable();
    assert_eq!(spaces, vec![8, 8, 24, 48]);
}

#[test]
fn classic_ciphertext_top_three() {
    let sequences = find_repeat_sequences(CIPHERTEXT, 3).unwrap();
    let top = rank_key_lengths(&spacings(&sequences), Some(3)).unwrap();
    let top: Vec<(usize, usize)> = top.iter().map(|c| (c.length, c.votes)).collect();
    assert_eq!(top, vec![(2, 4), (4, 4), (8, 4)]);
}

#[test]
fn classic_ciphertext_full_ranking() {
    let sequences = find_repeat_sequences(CIPHERTEXT, 3).unwrap();
    let ranked = rank_key_lengths(&spacings(&sequences), None).unwrap();
    let ranked: Vec<(usize, usize)> = ranked.iter().map(|c| (c.length, c.votes)).collect();
    assert_eq!(
        ranked,
        vec![
            (2, 4),
            (4, 4),
            (8, 4),
            (3, 2),
            (6, 2),
            (12, 2),
            (24, 2),
            (16, 1),
            (48, 1)
        ]
    );
}

#[test]
fn known_period_ranks_first() {
    // A 5-char block repeated 20 times: every repeated substring recurs with
    // period exactly 5, so every spacing is 5 and the ranking is unanimous.
    let text = "abcde".repeat(20);
    let sequences = find_repeat_sequences(&text, 3).unwrap();
    let ranked = rank_key_lengths(&spacings(&sequences), None).unwrap();
    assert_eq!(ranked[0].length, 5);
    assert!(ranked.iter().all(|c| c.length % 5 == 0));
}
