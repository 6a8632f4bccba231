//! Process Timeline criterion.
//!
//! **Question**: Does the deal timeline leave room for proper diligence?
//!
//! KGI co-investments ride on the partner's diligence and accept a
//! shorter window (3 weeks); standard deals need 8. Both floors are
//! inclusive.
//!
//! | Verdict | Condition |
//! |---------|-----------|
//! | **MET** | KGI co-investment with >= 3 weeks |
//! | **MET** | Standard deal with >= 8 weeks |
//! | **NOT MET** | Timeline present but too short |
//! | **NOT MET** | Timeline information absent |

use crate::criteria::{
    is_kgi_coinvestment, Check, ScreeningContext, MIN_KGI_TIMELINE_WEEKS, MIN_TIMELINE_WEEKS,
};
use crate::extract;
use crate::types::{Criterion, Verdict};

/// The Process Timeline check.
pub struct TimelineCheck;

impl TimelineCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimelineCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for TimelineCheck {
    fn criterion(&self) -> Criterion {
        Criterion::ProcessTimeline
    }

    fn question(&self) -> &'static str {
        "Does the process timeline allow adequate diligence?"
    }

    fn evaluate(&self, cx: &ScreeningContext) -> Verdict {
        let text = cx.analysis;
        let kgi = is_kgi_coinvestment(text);

        match extract::timeline_weeks(text) {
            Some(weeks) if kgi && weeks >= MIN_KGI_TIMELINE_WEEKS => Verdict::met(format!(
                "KGI co-investment with {weeks} week timeline meets lighter diligence requirements"
            )),
            Some(weeks) if weeks >= MIN_TIMELINE_WEEKS => Verdict::met(format!(
                "Timeline of {weeks} weeks meets standard deal requirements"
            )),
            Some(weeks) if weeks > 0 => Verdict::not_met(format!(
                "Timeline of {weeks} weeks too short - risk of reduced diligence quality"
            )),
            // A literal "0 week" mention lands here alongside a missing one.
            _ => Verdict::not_met("Timeline information absent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn evaluate(text: &str) -> Verdict {
        TimelineCheck::new().evaluate(&ScreeningContext::new(text))
    }

    #[test]
    fn test_standard_timeline_met_at_floor() {
        let verdict = evaluate("An 8 week exclusivity period.");
        assert_eq!(verdict.status, Status::Met);
        assert!(verdict.explanation.contains("8 weeks"));
        assert!(verdict.explanation.contains("standard deal"));
    }

    #[test]
    fn test_standard_timeline_one_below_floor_not_met() {
        let verdict = evaluate("A 7 week exclusivity period.");
        assert_eq!(verdict.status, Status::NotMet);
        assert!(verdict.explanation.contains("too short"));
    }

    #[test]
    fn test_kgi_timeline_met_at_lower_floor() {
        let verdict = evaluate("KGI co-investment closing on a 3 week timeline.");
        assert_eq!(verdict.status, Status::Met);
        assert!(verdict.explanation.contains("KGI co-investment"));
    }

    #[test]
    fn test_kgi_timeline_below_lower_floor_not_met() {
        let verdict = evaluate("KGI co-investment closing on a 2 week timeline.");
        assert_eq!(verdict.status, Status::NotMet);
    }

    #[test]
    fn test_kgi_signal_without_coinvestment_uses_standard_floor() {
        let verdict = evaluate("KGI mentioned in passing; 4 week process.");
        assert_eq!(verdict.status, Status::NotMet);
    }

    #[test]
    fn test_timeline_absent_not_met() {
        let verdict = evaluate("Timing to be agreed.");
        assert_eq!(verdict.status, Status::NotMet);
        assert!(verdict.explanation.contains("absent"));
    }
}
