//! Adaptive code parameter suggestion.
//!
//! Suggests `(k, n)` based on how many storage targets are available,
//! balancing overhead against the number of share losses tolerated.

/// Suggested code parameters with an optional safety warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSuggestion {
    /// Shares required to recover a message (`k`).
    pub required: usize,
    /// Total shares produced per message (`n`).
    pub total: usize,
    /// Safety warning, if any (e.g. a single parity share).
    pub warning: Option<String>,
}

impl ParamSuggestion {
    /// Number of share losses the suggestion tolerates.
    pub fn tolerance(&self) -> usize {
        self.total - self.required
    }
}

/// Suggest `(k, n)` for the given number of storage targets.
///
/// The total share count never exceeds the target count, so every
/// share can land on a distinct target.
///
/// | Targets | k | n  | Overhead | Tolerance  |
/// |---------|---|----|----------|------------|
/// | 1       | 1 | 1  | 1.0x     | 0 losses   |
/// | 2       | 1 | 2  | 2.0x     | 1 loss     |
/// | 3       | 2 | 3  | 1.5x     | 1 loss     |
/// | 4       | 2 | 4  | 2.0x     | 2 losses   |
/// | 5       | 3 | 5  | 1.67x    | 2 losses   |
/// | 6-11    | 4 | 6  | 1.5x     | 2 losses   |
/// | 12+     | 8 | 12 | 1.5x     | 4 losses   |
pub fn suggest_params(targets: usize) -> ParamSuggestion {
    let (required, total) = match targets {
        0 | 1 => (1, 1),
        2 => (1, 2),
        3 => (2, 3),
        4 => (2, 4),
        5 => (3, 5),
        6..=11 => (4, 6),
        _ => (8, 12),
    };

    let warning = match total - required {
        0 => Some(
            "no redundancy: losing any single share loses the message.".to_string(),
        ),
        1 => Some(
            "minimal redundancy: while a lost share is being restored, \
             a second loss is unrecoverable. Use a tolerance of at least \
             two for production workloads."
                .to_string(),
        ),
        _ => None,
    };

    ParamSuggestion {
        required,
        total,
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_target() {
        let s = suggest_params(1);
        assert_eq!((s.required, s.total), (1, 1));
        assert!(s.warning.is_some(), "no redundancy must warn");
    }

    #[test]
    fn test_two_targets_mirror() {
        let s = suggest_params(2);
        assert_eq!((s.required, s.total), (1, 2));
        assert_eq!(s.tolerance(), 1);
        assert!(s.warning.is_some(), "single-loss tolerance must warn");
    }

    #[test]
    fn test_five_targets() {
        let s = suggest_params(5);
        assert_eq!((s.required, s.total), (3, 5));
        assert!(s.warning.is_none());
    }

    #[test]
    fn test_large_clusters_cap_out() {
        let s = suggest_params(50);
        assert_eq!((s.required, s.total), (8, 12));
        assert_eq!(s.tolerance(), 4);
        assert!(s.warning.is_none());
    }

    #[test]
    fn test_total_never_exceeds_targets() {
        for targets in 0..=40 {
            let s = suggest_params(targets);
            assert!(
                s.total <= targets.max(1),
                "n={} exceeds targets={targets}",
                s.total
            );
            assert!(s.required <= s.total);
        }
    }

    #[test]
    fn test_suggestions_are_valid_code_parameters() {
        use crate::code::Code;
        for targets in 0..=30 {
            let s = suggest_params(targets);
            Code::new(s.required, s.total).unwrap();
        }
    }
}
