// src/report/score.rs
// =============================================================================
// Turns the three bucket sizes into a 0-10 score.
//
// Weights: a passed check adds 1, a critical issue subtracts 1 and a
// warning subtracts 0.5. The sum is divided by the number of findings and
// scaled to 10, then clamped. Only the counts matter, never the text.
// =============================================================================

pub fn calculate_score(critical: usize, warnings: usize, passed: usize) -> f64 {
    let total = critical + warnings + passed;
    if total == 0 {
        return 0.0;
    }

    let raw = (passed as f64 - critical as f64 - 0.5 * warnings as f64) / total as f64 * 10.0;
    raw.clamp(0.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(calculate_score(0, 0, 0), 0.0);
    }

    #[test]
    fn test_all_passed_is_ten() {
        assert_eq!(calculate_score(0, 0, 4), 10.0);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(calculate_score(5, 2, 1), 0.0);
    }

    #[test]
    fn test_mixed_counts() {
        // (6 - 1 - 0.5) / 8 * 10 = 5.625
        assert!((calculate_score(1, 1, 6) - 5.625).abs() < 1e-9);
    }

    #[test]
    fn test_always_in_range() {
        for c in 0..8 {
            for w in 0..8 {
                for p in 0..8 {
                    let score = calculate_score(c, w, p);
                    assert!((0.0..=10.0).contains(&score), "({c}, {w}, {p}) -> {score}");
                    if c + w + p > 0 {
                        let expected = (10.0 * (p as f64 - c as f64 - 0.5 * w as f64)
                            / (c + w + p) as f64)
                            .clamp(0.0, 10.0);
                        assert!((score - expected).abs() < 1e-9);
                    }
                }
            }
        }
    }
}
