//! Sector Focus criterion.
//!
//! **Question**: Does the company operate in a target sector?
//!
//! The only criterion with a cross-dependency: when no target or
//! excluded sector is named, a deal that already met enough of the other
//! criteria passes on an opportunistic basis. It must therefore be
//! evaluated after the other eight.
//!
//! | Verdict | Condition |
//! |---------|-----------|
//! | **MET** | Target sector named (first by list order wins) |
//! | **NOT MET** | Excluded sector named |
//! | **MET** | Sector unclear, `met_elsewhere` >= 6 (opportunistic) |
//! | **NOT MET** | Sector unclear, `met_elsewhere` < 6 |

use crate::criteria::{
    Check, ScreeningContext, EXCLUDED_SECTORS, OPPORTUNISTIC_MET_FLOOR, TARGET_SECTORS,
};
use crate::keywords::any_present;
use crate::types::{Criterion, Verdict};

/// The Sector Focus check.
pub struct SectorFocusCheck;

impl SectorFocusCheck {
    pub fn new() -> Self {
        Self
    }

    /// Display name of the first target sector mentioned, by list order
    /// (not by position in the text).
    fn target_sector(&self, text: &str) -> Option<&'static str> {
        let lower = text.to_lowercase();
        TARGET_SECTORS
            .iter()
            .find(|(phrase, _)| lower.contains(phrase))
            .map(|(_, display)| *display)
    }
}

impl Default for SectorFocusCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for SectorFocusCheck {
    fn criterion(&self) -> Criterion {
        Criterion::SectorFocus
    }

    fn question(&self) -> &'static str {
        "Does the company operate in a target sector?"
    }

    fn evaluate(&self, cx: &ScreeningContext) -> Verdict {
        let text = cx.analysis;

        if let Some(sector) = self.target_sector(text) {
            Verdict::met(format!("Company operates in {sector} - target sector"))
        } else if any_present(text, EXCLUDED_SECTORS) {
            Verdict::not_met("Company in consumer or traditional infrastructure sectors")
        } else if cx.met_elsewhere >= OPPORTUNISTIC_MET_FLOOR {
            Verdict::met("Opportunistic - meets other criteria and not in excluded sectors")
        } else {
            Verdict::not_met("Sector information not clear")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn evaluate(text: &str, met_elsewhere: usize) -> Verdict {
        let cx = ScreeningContext {
            analysis: text,
            met_elsewhere,
        };
        SectorFocusCheck::new().evaluate(&cx)
    }

    #[test]
    fn test_target_sector_met() {
        let verdict = evaluate("A healthcare services roll-up.", 0);
        assert_eq!(verdict.status, Status::Met);
        assert_eq!(
            verdict.explanation,
            "Company operates in Healthcare - target sector"
        );
    }

    #[test]
    fn test_first_target_sector_by_list_order_named() {
        // "education" appears first in the text, but "healthcare" comes
        // first in the target list.
        let verdict = evaluate("Education tools for healthcare staff.", 0);
        assert_eq!(verdict.status, Status::Met);
        assert!(verdict.explanation.contains("Healthcare"));
    }

    #[test]
    fn test_excluded_sector_not_met() {
        let verdict = evaluate("A consumer brand portfolio.", 8);
        assert_eq!(verdict.status, Status::NotMet);
        assert!(verdict.explanation.contains("consumer"));
    }

    #[test]
    fn test_target_sector_wins_over_excluded_mention() {
        let verdict = evaluate("Healthcare products sold through consumer channels.", 0);
        assert_eq!(verdict.status, Status::Met);
    }

    #[test]
    fn test_opportunistic_at_floor_met() {
        let verdict = evaluate("A B2B logistics platform.", 6);
        assert_eq!(verdict.status, Status::Met);
        assert!(verdict.explanation.contains("Opportunistic"));
    }

    #[test]
    fn test_opportunistic_below_floor_not_met() {
        let verdict = evaluate("A B2B logistics platform.", 5);
        assert_eq!(verdict.status, Status::NotMet);
        assert_eq!(verdict.explanation, "Sector information not clear");
    }
}
