//! Investment Size criterion.
//!
//! **Question**: Is the ticket at least $5m, ideally $7.9m or more?
//!
//! Both thresholds are inclusive. Tickets below $5m raise portfolio
//! management concerns (too many small positions); an unspecified size
//! counts against.

use crate::criteria::{Check, ScreeningContext, MIN_INVESTMENT_SIZE, PREFERRED_INVESTMENT_SIZE};
use crate::extract::{self, format_currency};
use crate::types::{Criterion, Verdict};

/// The Investment Size check.
pub struct InvestmentSizeCheck;

impl InvestmentSizeCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InvestmentSizeCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for InvestmentSizeCheck {
    fn criterion(&self) -> Criterion {
        Criterion::InvestmentSize
    }

    fn question(&self) -> &'static str {
        "Is the ticket size at or above the $5m minimum?"
    }

    fn evaluate(&self, cx: &ScreeningContext) -> Verdict {
        match extract::investment_amount(cx.analysis) {
            Some(amount) if amount >= PREFERRED_INVESTMENT_SIZE => Verdict::met(format!(
                "Investment size {} meets preferred threshold with strong preference noted",
                format_currency(amount)
            )),
            Some(amount) if amount >= MIN_INVESTMENT_SIZE => Verdict::met(format!(
                "Investment size {} meets minimum threshold, below the preferred ticket size",
                format_currency(amount)
            )),
            Some(amount) if amount > 0.0 => Verdict::not_met(format!(
                "Investment size {} below ${MIN_INVESTMENT_SIZE}m minimum - too many small deals",
                format_currency(amount)
            )),
            // A literal $0m ticket lands here alongside a missing one.
            _ => Verdict::not_met("Investment size not specified"),
        }
    }
}
