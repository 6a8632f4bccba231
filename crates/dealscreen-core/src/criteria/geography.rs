//! Geography/Structure criterion.
//!
//! **Question**: Is this a GCC JV, a dividend payer, or a KGI co-investment?
//!
//! | Verdict | Condition |
//! |---------|-----------|
//! | **MET** | GCC joint venture with expansion/partner signals |
//! | **MET** | Dividend payer with yield strictly above 4% |
//! | **MET** | KGI co-investment or participation |
//! | **NOT MET** | None of the three categories hold |

use crate::criteria::{is_kgi_coinvestment, Check, ScreeningContext, JV_PHRASES, MIN_DIVIDEND_YIELD};
use crate::extract;
use crate::keywords::any_present;
use crate::types::{Criterion, Verdict};

/// The Geography/Structure check.
pub struct GeographyCheck;

impl GeographyCheck {
    pub fn new() -> Self {
        Self
    }

    /// GCC joint venture backed by expansion or partner-structure signals.
    fn gcc_jv_opportunity(&self, text: &str) -> bool {
        any_present(text, &["gcc"])
            && any_present(text, JV_PHRASES)
            && any_present(text, &["expansion", "partner", "business model", "proven"])
    }

    /// Dividend payer whose extracted yield clears the minimum.
    fn dividend_opportunity(&self, text: &str) -> bool {
        if !any_present(text, &["dividend"]) {
            return false;
        }
        // Strictly greater than: a yield of exactly 4% does not qualify.
        matches!(extract::yield_percentage(text), Some(y) if y > MIN_DIVIDEND_YIELD)
    }
}

impl Default for GeographyCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for GeographyCheck {
    fn criterion(&self) -> Criterion {
        Criterion::GeographyStructure
    }

    fn question(&self) -> &'static str {
        "Is this a GCC JV, a dividend-paying investment, or a KGI co-investment?"
    }

    fn evaluate(&self, cx: &ScreeningContext) -> Verdict {
        let text = cx.analysis;

        if self.gcc_jv_opportunity(text) {
            Verdict::met("GCC JV opportunity identified with expansion plans and partner structure")
        } else if self.dividend_opportunity(text) {
            Verdict::met("Dividend-paying investment with yield greater than 4%")
        } else if is_kgi_coinvestment(text) {
            Verdict::met("KGI co-investment opportunity identified")
        } else {
            Verdict::not_met(
                "Does not meet any of the three required categories: \
                 GCC JV, dividend-paying (>4%), or KGI co-investment",
            )
        }
    }
}
