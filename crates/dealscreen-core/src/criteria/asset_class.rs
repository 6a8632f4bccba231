//! Asset Class Exclusion criterion.
//!
//! **Question**: Is this a direct company investment rather than a fund commitment?
//!
//! Fund commitments are excluded outright, so the fund branch is checked
//! before any direct-investment signal is considered.
//!
//! | Verdict | Condition |
//! |---------|-----------|
//! | **NOT MET** | Fund-type phrase present (checked first) |
//! | **MET** | Direct company investment signal present |
//! | **NOT MET** | Neither signal found |

use crate::criteria::{Check, ScreeningContext, FUND_TYPES};
use crate::keywords::any_present;
use crate::types::{Criterion, Verdict};

/// The Asset Class Exclusion check.
pub struct AssetClassCheck;

impl AssetClassCheck {
    pub fn new() -> Self {
        Self
    }

    fn fund_investment(&self, text: &str) -> bool {
        any_present(text, FUND_TYPES)
    }

    fn direct_investment(&self, text: &str) -> bool {
        any_present(text, &["company", "business", "startup", "direct investment"])
    }
}

impl Default for AssetClassCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for AssetClassCheck {
    fn criterion(&self) -> Criterion {
        Criterion::AssetClassExclusion
    }

    fn question(&self) -> &'static str {
        "Is this a direct company investment rather than a fund commitment?"
    }

    fn evaluate(&self, cx: &ScreeningContext) -> Verdict {
        let text = cx.analysis;

        if self.fund_investment(text) {
            Verdict::not_met("Fund investment identified - excluded due to team bandwidth")
        } else if self.direct_investment(text) {
            Verdict::met("Direct company investment identified")
        } else {
            Verdict::not_met("Asset class information unclear or absent")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn evaluate(text: &str) -> Verdict {
        AssetClassCheck::new().evaluate(&ScreeningContext::new(text))
    }

    #[test]
    fn test_direct_investment_met() {
        let verdict = evaluate("A direct investment into an operating business.");
        assert_eq!(verdict.status, Status::Met);
        assert!(verdict.explanation.contains("Direct company investment"));
    }

    #[test]
    fn test_fund_commitment_not_met() {
        let verdict = evaluate("A commitment to a regional venture fund.");
        assert_eq!(verdict.status, Status::NotMet);
        assert!(verdict.explanation.contains("Fund investment"));
    }

    #[test]
    fn test_fund_exclusion_beats_direct_signal() {
        // Fund branch is checked first even when "company" also appears.
        let verdict = evaluate("A hedge fund company with strong returns.");
        assert_eq!(verdict.status, Status::NotMet);
        assert!(verdict.explanation.contains("Fund investment"));
    }

    #[test]
    fn test_no_signal_not_met() {
        let verdict = evaluate("An interesting opportunity.");
        assert_eq!(verdict.status, Status::NotMet);
        assert!(verdict.explanation.contains("unclear or absent"));
    }
}
