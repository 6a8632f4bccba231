//! Return Threshold criterion.
//!
//! **Question**: Do projected returns clear the 15% IRR bar?
//!
//! An IRR below the bar can still pass when the opportunity is framed as
//! low-risk; a missing projection cannot.
//!
//! | Verdict | Condition |
//! |---------|-----------|
//! | **MET** | IRR >= 15% |
//! | **MET** | IRR below 15% with a low-risk framing |
//! | **NOT MET** | IRR below 15% without that framing |
//! | **NOT MET** | Return projections not provided |

use crate::criteria::{Check, ScreeningContext, MIN_IRR_THRESHOLD};
use crate::extract::{self, format_percentage};
use crate::keywords::any_present;
use crate::types::{Criterion, Verdict};

/// The Return Threshold check.
pub struct ReturnThresholdCheck;

impl ReturnThresholdCheck {
    pub fn new() -> Self {
        Self
    }

    fn low_risk_framing(&self, text: &str) -> bool {
        any_present(text, &["low risk", "low-risk"])
    }
}

impl Default for ReturnThresholdCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for ReturnThresholdCheck {
    fn criterion(&self) -> Criterion {
        Criterion::ReturnThreshold
    }

    fn question(&self) -> &'static str {
        "Does the projected IRR meet the 15% threshold, or is low return justified?"
    }

    fn evaluate(&self, cx: &ScreeningContext) -> Verdict {
        let text = cx.analysis;
        let low_risk = self.low_risk_framing(text);

        match extract::irr_percentage(text) {
            Some(irr) if irr >= MIN_IRR_THRESHOLD => Verdict::met(format!(
                "IRR of {} meets {MIN_IRR_THRESHOLD}% threshold",
                format_percentage(irr)
            )),
            Some(irr) if irr > 0.0 && low_risk => Verdict::met(format!(
                "IRR of {} below {MIN_IRR_THRESHOLD}% but justified as a low-risk opportunity",
                format_percentage(irr)
            )),
            Some(irr) if irr > 0.0 => Verdict::not_met(format!(
                "IRR of {} below {MIN_IRR_THRESHOLD}% without low-risk justification",
                format_percentage(irr)
            )),
            // A literal 0% IRR lands here alongside a missing projection.
            _ => Verdict::not_met("Return projections not provided"),
        }
    }
}
