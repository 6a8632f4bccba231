//! Investor Syndication criterion.
//!
//! **Question**: Is there a lead investor in the syndicate?
//!
//! This criterion cannot fail by policy: a named lead investor is a
//! positive signal, but its absence is not a rejection reason. Only the
//! explanation changes.

use crate::criteria::{Check, ScreeningContext};
use crate::keywords::any_present;
use crate::types::{Criterion, Verdict};

/// The Investor Syndication check.
pub struct SyndicationCheck;

impl SyndicationCheck {
    pub fn new() -> Self {
        Self
    }

    fn lead_investor_mentioned(&self, text: &str) -> bool {
        any_present(text, &["lead investor"])
    }
}

impl Default for SyndicationCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for SyndicationCheck {
    fn criterion(&self) -> Criterion {
        Criterion::InvestorSyndication
    }

    fn question(&self) -> &'static str {
        "Is a lead investor identified in the syndicate?"
    }

    fn evaluate(&self, cx: &ScreeningContext) -> Verdict {
        if self.lead_investor_mentioned(cx.analysis) {
            Verdict::met("Lead investor identified in syndicate")
        } else {
            Verdict::met("No lead investor identified - not a rejection criterion by policy")
        }
    }
}
