//! Financial Milestones criterion.
//!
//! **Question**: Is the business profitable, or close enough on current funding?
//!
//! | Verdict | Condition |
//! |---------|-----------|
//! | **MET** | New JV (milestone history not applicable) |
//! | **MET** | Already EBITDA positive |
//! | **MET** | Profitability within a year, no further funding rounds |
//! | **NOT MET** | Timeline too long or more funding needed first |

use crate::criteria::{Check, ScreeningContext, JV_PHRASES};
use crate::keywords::any_present;
use crate::types::{Criterion, Verdict};

/// The Financial Milestones check.
pub struct MilestonesCheck;

impl MilestonesCheck {
    pub fn new() -> Self {
        Self
    }

    fn new_jv(&self, text: &str) -> bool {
        any_present(text, &["new"]) && any_present(text, JV_PHRASES)
    }

    fn ebitda_positive(&self, text: &str) -> bool {
        any_present(text, &["ebitda positive", "positive ebitda"])
    }

    fn timeline_within_year(&self, text: &str) -> bool {
        any_present(text, &["within one year", "12 months", "less than a year"])
    }

    fn additional_funding_needed(&self, text: &str) -> bool {
        any_present(
            text,
            &["additional funding", "more funding", "next round", "series"],
        )
    }
}

impl Default for MilestonesCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for MilestonesCheck {
    fn criterion(&self) -> Criterion {
        Criterion::FinancialMilestones
    }

    fn question(&self) -> &'static str {
        "Is the business EBITDA positive, or on track within a year on current funding?"
    }

    fn evaluate(&self, cx: &ScreeningContext) -> Verdict {
        let text = cx.analysis;

        if self.new_jv(text) {
            Verdict::met("Not applicable - new joint venture")
        } else if self.ebitda_positive(text) {
            Verdict::met("Company is already EBITDA positive")
        } else if self.timeline_within_year(text) && !self.additional_funding_needed(text) {
            Verdict::met("Timeline to positive EBITDA is within one year with current funding")
        } else {
            Verdict::not_met(
                "Timeline exceeds one year or additional funding rounds needed before profitability",
            )
        }
    }
}
