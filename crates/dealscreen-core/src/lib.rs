//! # dealscreen-core
//!
//! Deterministic investment-criteria evaluation engine.
//!
//! This crate screens a free-text opportunity analysis against a fixed
//! rubric of nine criteria and aggregates the per-criterion verdicts
//! into an overall recommendation tier.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **No I/O**: Evaluation is substring and regex matching only
//! 3. **Total**: Missing data degrades to an "absent" verdict branch, never an error
//! 4. **Parallel-safe**: Stateless; independent screenings need no coordination
//!
//! ## Example
//!
//! ```rust
//! use dealscreen_core::{screen, Recommendation};
//!
//! let result = screen(
//!     "Company Name: Gulf Medical Partners\n\
//!      A new joint venture in the GCC healthcare market with a proven local partner.\n\
//!      Direct investment of $10m into the company, with no management fees.\n\
//!      Projected IRR of 22% and an 8 week process run by the lead investor.",
//! );
//!
//! assert_eq!(result.recommendation, Recommendation::Recommend);
//! assert!(result.findings.investment_size.status.is_met());
//! ```

pub mod criteria;
pub mod extract;
pub mod keywords;
pub mod recommendation;
pub mod types;

// Re-export main types at crate root
pub use criteria::{
    AssetClassCheck, Check, FeeTermsCheck, GeographyCheck, InvestmentSizeCheck, MilestonesCheck,
    ReturnThresholdCheck, ScreeningContext, SectorFocusCheck, SyndicationCheck, TimelineCheck,
};
pub use recommendation::{recommend, Recommendation, TOTAL_CRITERIA};
pub use types::{CriteriaFindings, Criterion, ScreeningResult, Status, Verdict};

use tracing::debug;

/// Screen one opportunity analysis against the full rubric.
///
/// The eight context-free criteria run first, in registry order. Sector
/// focus runs last with the MET tally over those eight, because its
/// opportunistic branch depends on how strong the deal already looks.
///
/// # Arguments
///
/// * `analysis` - Free-text analysis of the opportunity document
///
/// # Returns
///
/// A [`ScreeningResult`] with one [`Verdict`] per criterion, the MET
/// tally, and the recommendation tier.
pub fn screen(analysis: &str) -> ScreeningResult {
    let cx = ScreeningContext::new(analysis);

    let geography_structure = GeographyCheck::new().evaluate(&cx);
    let financial_milestones = MilestonesCheck::new().evaluate(&cx);
    let asset_class_exclusion = AssetClassCheck::new().evaluate(&cx);
    let investor_syndication = SyndicationCheck::new().evaluate(&cx);
    let fee_terms = FeeTermsCheck::new().evaluate(&cx);
    let investment_size = InvestmentSizeCheck::new().evaluate(&cx);
    let process_timeline = TimelineCheck::new().evaluate(&cx);
    let return_threshold = ReturnThresholdCheck::new().evaluate(&cx);

    let met_elsewhere = [
        &geography_structure,
        &financial_milestones,
        &asset_class_exclusion,
        &investor_syndication,
        &fee_terms,
        &investment_size,
        &process_timeline,
        &return_threshold,
    ]
    .iter()
    .filter(|verdict| verdict.status.is_met())
    .count();

    let sector_cx = ScreeningContext {
        analysis,
        met_elsewhere,
    };
    let sector_focus = SectorFocusCheck::new().evaluate(&sector_cx);

    let findings = CriteriaFindings {
        geography_structure,
        financial_milestones,
        asset_class_exclusion,
        investor_syndication,
        fee_terms,
        investment_size,
        process_timeline,
        return_threshold,
        sector_focus,
    };

    for (criterion, verdict) in findings.iter() {
        debug!(
            criterion = criterion.name(),
            status = ?verdict.status,
            explanation = %verdict.explanation,
            "criterion evaluated"
        );
    }

    let met_count = findings.met_count();
    let recommendation = recommend(met_count);
    debug!(
        met_count,
        total = TOTAL_CRITERIA,
        recommendation = recommendation.as_str(),
        "screening pass complete"
    );

    ScreeningResult {
        company: extract::company_name(analysis)
            .unwrap_or_else(|| extract::UNKNOWN_COMPANY.to_string()),
        findings,
        met_count,
        total: TOTAL_CRITERIA,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STRONG_DEAL: &str = "Company Name: Gulf Medical Partners\n\
        A new joint venture in the GCC healthcare market with a proven local partner.\n\
        Direct investment of $10m into the company, with no management fees.\n\
        Projected IRR of 22% and an 8 week process run by the lead investor.";

    const WEAK_DEAL: &str = "An opportunity to commit to a consumer-focused venture fund.";

    #[test]
    fn test_strong_deal_recommended() {
        let result = screen(STRONG_DEAL);

        assert_eq!(result.company, "Gulf Medical Partners");
        assert_eq!(result.met_count, 9);
        assert_eq!(result.total, 9);
        assert_eq!(result.recommendation, Recommendation::Recommend);
        for (criterion, verdict) in result.findings.iter() {
            assert!(verdict.status.is_met(), "{} should be met", criterion.name());
        }
    }

    #[test]
    fn test_weak_deal_not_recommended() {
        let result = screen(WEAK_DEAL);

        assert_eq!(result.company, "Unknown Company");
        // Only syndication passes; it cannot fail by policy.
        assert_eq!(result.met_count, 1);
        assert!(result.findings.investor_syndication.status.is_met());
        assert_eq!(result.recommendation, Recommendation::DoNotRecommend);
    }

    #[test]
    fn test_opportunistic_sector_pass_through_full_pipeline() {
        // No sector keyword at all, but seven of the other eight pass.
        let result = screen(
            "A new JV with the operating company, $8m ticket, no management fees, \
             IRR of 18%, 9 week process.",
        );

        assert!(result.findings.sector_focus.status.is_met());
        assert!(result
            .findings
            .sector_focus
            .explanation
            .contains("Opportunistic"));
        assert_eq!(result.recommendation, Recommendation::Recommend);
    }

    #[test]
    fn test_middling_deal_conditional() {
        let result = screen(
            "EBITDA positive business with a $6m ticket and a management fee of 1.5%, \
             10 week process.",
        );

        assert_eq!(result.met_count, 5);
        assert_eq!(result.recommendation, Recommendation::ConditionalRecommend);
        // Five met elsewhere is one short of the opportunistic floor.
        assert_eq!(
            result.findings.sector_focus.explanation,
            "Sector information not clear"
        );
    }

    #[test]
    fn test_screening_is_idempotent() {
        assert_eq!(screen(STRONG_DEAL), screen(STRONG_DEAL));
        assert_eq!(screen(WEAK_DEAL), screen(WEAK_DEAL));
    }

    #[test]
    fn test_empty_input_degrades_cleanly() {
        let result = screen("");

        assert_eq!(result.company, "Unknown Company");
        assert_eq!(result.met_count, 1); // syndication only
        assert_eq!(result.recommendation, Recommendation::DoNotRecommend);
        for (_, verdict) in result.findings.iter() {
            assert!(!verdict.explanation.is_empty());
        }
    }

    #[test]
    fn test_result_serializes_for_report_layer() {
        let result = screen(STRONG_DEAL);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["company"], "Gulf Medical Partners");
        assert_eq!(json["met_count"], 9);
        assert_eq!(json["findings"]["sector_focus"]["status"], "MET");
        assert_eq!(json["findings"]["sector_focus"]["marker"], "🟢");
    }

    proptest! {
        #[test]
        fn prop_screen_never_panics(text in ".*") {
            let result = screen(&text);
            prop_assert_eq!(result.total, TOTAL_CRITERIA);
        }

        #[test]
        fn prop_screen_is_deterministic(text in ".*") {
            prop_assert_eq!(screen(&text), screen(&text));
        }

        #[test]
        fn prop_tally_matches_findings(text in ".*") {
            let result = screen(&text);
            prop_assert_eq!(result.met_count, result.findings.met_count());
        }
    }
}
