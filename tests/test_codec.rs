//! Tests for Hamming(7,4) encoding and single-bit correction
//!
//! Known vectors, exhaustive round trips over all 16 messages, every single
//! bit flip, and batch behaviour.

use hamming74::codec::*;
use hamming74::domain::{CodewordRow, MessageRow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn message(bits: &str) -> MessageRow {
    let mut row = MessageRow::zeros();
    for (i, c) in bits.chars().enumerate() {
        row.set(i, c == '1');
    }
    row
}

fn codeword(bits: &str) -> CodewordRow {
    let mut row = CodewordRow::zeros();
    for (i, c) in bits.chars().enumerate() {
        row.set(i, c == '1');
    }
    row
}

fn all_messages() -> Vec<MessageRow> {
    (0u8..16)
        .map(|v| MessageRow::new([v & 8 != 0, v & 4 != 0, v & 2 != 0, v & 1 != 0]))
        .collect()
}

// ============================================================================
// Known Vectors
// ============================================================================

#[test]
fn test_encode_known_vectors() {
    let encoded = encode(&[message("1010"), message("0010"), message("1101")]);
    let rendered: Vec<String> = encoded.iter().map(|r| r.to_string()).collect();
    assert_eq!(rendered, vec!["1011010", "0010110", "1101001"]);
}

#[test]
fn test_correct_clean_codewords() {
    let decoded = correct(&[codeword("1011010"), codeword("0010110"), codeword("1101001")]);
    let rendered: Vec<String> = decoded.iter().map(|r| r.to_string()).collect();
    assert_eq!(rendered, vec!["1010", "0010", "1101"]);
}

#[test]
fn test_correct_clean_codewords_for_other_messages() {
    let clean: Vec<CodewordRow> = encode(&[message("1110"), message("0001")]);
    let decoded = correct(&clean);
    assert_eq!(decoded[0].to_string(), "1110");
    assert_eq!(decoded[1].to_string(), "0001");
}

#[test]
fn test_correct_each_single_flip_of_known_codeword() {
    let clean = codeword("1011010");
    let corrupted: Vec<CodewordRow> = (0..7).map(|p| clean.with_flipped(p)).collect();

    // Every corrupted row differs from the clean one in exactly one place
    for row in &corrupted {
        let differing = (0..7).filter(|&i| row.get(i) != clean.get(i)).count();
        assert_eq!(differing, 1);
    }

    for decoded in correct(&corrupted) {
        assert_eq!(decoded.to_string(), "1010");
    }
}

// ============================================================================
// Exhaustive Properties
// ============================================================================

#[test]
fn test_round_trip_all_messages() {
    for m in all_messages() {
        assert_eq!(correct(&encode(&[m])), vec![m], "message {}", m);
    }
}

#[test]
fn test_single_flip_corrected_for_all_messages_and_positions() {
    for m in all_messages() {
        let clean = encode_row(&m);
        for position in 0..7 {
            let decoded = decode_row(clean.with_flipped(position));
            assert_eq!(decoded.message, m, "message {} flip {}", m, position);
            assert_eq!(decoded.corrected_position, Some(position));
        }
    }
}

#[test]
fn test_zero_syndrome_on_clean_codewords() {
    for m in all_messages() {
        let s = syndrome(&encode_row(&m));
        assert!(s.is_zero(), "message {} has syndrome {}", m, s.bits());
        assert_eq!(s.wrong_bit_index(), -1);
    }
}

#[test]
fn test_codewords_are_distinct() {
    let codewords = encode(&all_messages());
    for (i, a) in codewords.iter().enumerate() {
        for b in &codewords[i + 1..] {
            let distance = (0..7).filter(|&k| a.get(k) != b.get(k)).count();
            assert!(distance >= 3, "{} and {} are only {} apart", a, b, distance);
        }
    }
}

#[test]
fn test_data_positions_carry_message() {
    for m in all_messages() {
        let c = encode_row(&m);
        for (bit, &column) in DATA_COLUMNS.iter().enumerate() {
            assert_eq!(c.get(column), m.get(bit));
        }
    }
}

#[test]
fn test_double_flip_still_returns_a_row() {
    // Not correctable, but decoding must still produce one row per input
    let clean = codeword("1011010");
    let corrupted = clean.with_flipped(0).with_flipped(1);
    let decoded = correct(&[corrupted]);
    assert_eq!(decoded.len(), 1);
    assert_ne!(decoded[0].to_string(), "1010");
}

// ============================================================================
// Batch Behaviour
// ============================================================================

#[test]
fn test_batch_matches_row_by_row() {
    let mut rng = StdRng::seed_from_u64(74);
    let messages: Vec<MessageRow> = (0..200)
        .map(|_| MessageRow::new([rng.random(), rng.random(), rng.random(), rng.random()]))
        .collect();

    let batch = encode(&messages);
    let one_by_one: Vec<CodewordRow> = messages.iter().map(encode_row).collect();
    assert_eq!(batch, one_by_one);

    let corrupted: Vec<CodewordRow> = batch
        .iter()
        .map(|c| {
            let position: usize = rng.random_range(0..8);
            if position == 7 {
                *c
            } else {
                c.with_flipped(position)
            }
        })
        .collect();

    let decoded = correct(&corrupted);
    let decoded_one_by_one: Vec<MessageRow> =
        corrupted.iter().copied().map(correct_row).collect();
    assert_eq!(decoded, decoded_one_by_one);
    assert_eq!(decoded, messages);
}

#[test]
fn test_empty_batches() {
    assert!(encode(&[]).is_empty());
    assert!(correct(&[]).is_empty());
    assert!(decode(&[]).is_empty());
}
