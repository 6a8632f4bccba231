//! Aggregation: MET tally to recommendation tier.
//!
//! The tier is a function of the MET count alone, with inclusive cut
//! points on an integer in `[0, 9]`. These cut points are screening
//! policy, not a tuning knob.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rubric criteria in a full screening pass.
pub const TOTAL_CRITERIA: usize = 9;

/// Overall recommendation tier for one screening pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Recommend,
    ConditionalRecommend,
    DoNotRecommend,
}

impl Recommendation {
    /// The fixed recommendation line embedded into reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Recommend => "RECOMMEND for further due diligence",
            Recommendation::ConditionalRecommend => "CONDITIONAL RECOMMEND - address key gaps",
            Recommendation::DoNotRecommend => "DO NOT RECOMMEND - insufficient criteria met",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a MET tally onto a recommendation tier.
pub fn recommend(met_count: usize) -> Recommendation {
    if met_count >= 7 {
        Recommendation::Recommend
    } else if met_count >= 5 {
        Recommendation::ConditionalRecommend
    } else {
        Recommendation::DoNotRecommend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(recommend(9), Recommendation::Recommend);
        assert_eq!(recommend(7), Recommendation::Recommend);
        assert_eq!(recommend(6), Recommendation::ConditionalRecommend);
        assert_eq!(recommend(5), Recommendation::ConditionalRecommend);
        assert_eq!(recommend(4), Recommendation::DoNotRecommend);
        assert_eq!(recommend(0), Recommendation::DoNotRecommend);
    }

    #[test]
    fn test_recommendation_strings() {
        assert_eq!(
            recommend(8).to_string(),
            "RECOMMEND for further due diligence"
        );
        assert_eq!(
            recommend(5).to_string(),
            "CONDITIONAL RECOMMEND - address key gaps"
        );
        assert_eq!(
            recommend(2).to_string(),
            "DO NOT RECOMMEND - insufficient criteria met"
        );
    }
}
