//! Fee Terms criterion.
//!
//! **Question**: Are there management fees that would hit the P&L?
//!
//! Silence counts against this criterion: fee terms left unmentioned are
//! treated as a red flag, not as neutral.
//!
//! | Verdict | Condition |
//! |---------|-----------|
//! | **MET** | Explicit no-management-fee phrasing |
//! | **NOT MET** | Management fees mentioned without that phrasing |
//! | **NOT MET** | Fee information entirely absent |

use crate::criteria::{Check, ScreeningContext};
use crate::keywords::any_present;
use crate::types::{Criterion, Verdict};

/// The Fee Terms check.
pub struct FeeTermsCheck;

impl FeeTermsCheck {
    pub fn new() -> Self {
        Self
    }

    fn no_management_fees(&self, text: &str) -> bool {
        any_present(text, &["no management fee", "no direct management fee"])
    }

    fn management_fees_mentioned(&self, text: &str) -> bool {
        any_present(text, &["management fee"])
    }
}

impl Default for FeeTermsCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for FeeTermsCheck {
    fn criterion(&self) -> Criterion {
        Criterion::FeeTerms
    }

    fn question(&self) -> &'static str {
        "Are the terms free of management fees that would hit the P&L?"
    }

    fn evaluate(&self, cx: &ScreeningContext) -> Verdict {
        let text = cx.analysis;

        if self.no_management_fees(text) {
            Verdict::met("No direct management fees that would impact the P&L")
        } else if self.management_fees_mentioned(text) {
            Verdict::not_met("Management fees present that would hit the P&L")
        } else {
            Verdict::not_met("Fee information not mentioned - missing information counts against")
        }
    }
}
