//! Weight decomposition for level 3 tokens.
//!
//! The value is split greedily over the weights 2048, 1024, ..., 1. Each weight
//! carries a label (11 down to 0) and the labels of the weights that were
//! taken are written out in decimal and concatenated. Labels 10 and 11 are
//! written as two characters, so 3072 (2048 + 1024) decodes to `1110`.

/// Weight of the first round.
const TOP_WEIGHT: i64 = 2048;

/// Label of the first round.
const TOP_LABEL: u32 = 11;

/// Number of rounds, one per weight from 2048 down to 1.
const ROUNDS: u32 = 12;

/// Decodes `n` into the integer spelled by the concatenated labels of the
/// weights it is made of.
///
/// Returns 0 when no weight was taken, which covers 0 and negative input.
/// Input of 4096 or more runs through all twelve rounds and the remainder
/// past the smallest weight is dropped.
pub fn decode_weight(n: i64) -> i64 {
    let mut remaining = n;
    let mut weight = TOP_WEIGHT;
    let mut label = TOP_LABEL;
    let mut digits = String::new();

    for _ in 0..ROUNDS {
        if remaining <= 0 {
            break;
        }
        if remaining >= weight {
            digits.push_str(&label.to_string());
            remaining -= weight;
        }
        weight /= 2;
        label = label.saturating_sub(1);
    }

    // At most twelve labels, "11109876543210", which fits in an i64.
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(3, 10)]
    #[case(5, 20)]
    #[case(1024, 10)]
    #[case(2048, 11)]
    #[case(3072, 1110)]
    #[case(2049, 110)]
    #[case(1536, 109)]
    fn decodes_known_values(#[case] input: i64, #[case] expected: i64) {
        assert_eq!(decode_weight(input), expected);
    }

    #[test]
    fn all_weights_concatenate_every_label() {
        assert_eq!(decode_weight(4095), 11_109_876_543_210);
    }

    #[test]
    fn negative_input_decodes_to_zero() {
        assert_eq!(decode_weight(-1), 0);
        assert_eq!(decode_weight(i64::MIN), 0);
    }

    #[test]
    fn oversized_input_stops_after_twelve_rounds() {
        assert_eq!(decode_weight(4096), 11_109_876_543_210);
        assert_eq!(decode_weight(10_000), 11_109_876_543_210);
    }
}
