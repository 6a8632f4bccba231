//! The nine criterion checks.
//!
//! Each check is a pure decision chain over keyword predicates and
//! extracted values: branches are tried top to bottom, the first branch
//! whose condition holds produces the verdict, and every chain ends in a
//! mandatory default. No check returns more than one verdict and no
//! branch can fail.
//!
//! Checks run in [`crate::types::Criterion::ALL`] order. The first eight
//! read only the analysis text; [`SectorFocusCheck`] additionally reads
//! `met_elsewhere`, the MET tally over the other eight, so it must run
//! last in a screening pass.

mod asset_class;
mod fees;
mod geography;
mod milestones;
mod returns;
mod sector;
mod size;
mod syndication;
mod timeline;

pub use asset_class::AssetClassCheck;
pub use fees::FeeTermsCheck;
pub use geography::GeographyCheck;
pub use milestones::MilestonesCheck;
pub use returns::ReturnThresholdCheck;
pub use sector::SectorFocusCheck;
pub use size::InvestmentSizeCheck;
pub use syndication::SyndicationCheck;
pub use timeline::TimelineCheck;

use crate::keywords::any_present;
use crate::types::{Criterion, Verdict};

// Rubric thresholds. Strict-vs-inclusive comparisons at these values are
// load-bearing; see the per-check modules.
pub const MIN_INVESTMENT_SIZE: f64 = 5.0; // million
pub const PREFERRED_INVESTMENT_SIZE: f64 = 7.9; // million
pub const MIN_IRR_THRESHOLD: f64 = 15.0; // percent
pub const MIN_DIVIDEND_YIELD: f64 = 4.0; // percent, strict
pub const MIN_TIMELINE_WEEKS: u32 = 8;
pub const MIN_KGI_TIMELINE_WEEKS: u32 = 3;

/// MET count over the other eight criteria required for the sector-focus
/// opportunistic branch.
pub const OPPORTUNISTIC_MET_FLOOR: usize = 6;

/// Target sectors as (match phrase, display name), in priority order.
pub const TARGET_SECTORS: &[(&str, &str)] = &[
    ("healthcare", "Healthcare"),
    ("education", "Education"),
    ("data economy", "Data Economy"),
    ("energy transition", "Energy Transition"),
    ("industrials", "Industrials"),
];

/// Sectors the mandate excludes outright.
pub const EXCLUDED_SECTORS: &[&str] = &["consumer", "traditional infrastructure"];

/// Phrases identifying a fund commitment rather than a direct deal.
pub const FUND_TYPES: &[&str] = &[
    "venture fund",
    "pe fund",
    "hedge fund",
    "fund investment",
    "pooled investment",
];

pub(crate) const JV_PHRASES: &[&str] = &["joint venture", "jv"];

/// KGI co-investment signal, shared by the geography and timeline checks.
pub(crate) fn is_kgi_coinvestment(text: &str) -> bool {
    any_present(text, &["kgi"]) && any_present(text, &["co-investment", "participation"])
}

/// Input to a criterion check.
#[derive(Debug, Clone, Copy)]
pub struct ScreeningContext<'a> {
    /// Free-text analysis of the opportunity.
    pub analysis: &'a str,
    /// MET tally over the previously evaluated criteria. Only the
    /// sector-focus check reads it.
    pub met_elsewhere: usize,
}

impl<'a> ScreeningContext<'a> {
    pub fn new(analysis: &'a str) -> Self {
        Self {
            analysis,
            met_elsewhere: 0,
        }
    }
}

/// A single rubric criterion check.
pub trait Check {
    /// Which registry entry this check fills.
    fn criterion(&self) -> Criterion;

    /// The one-line rubric question the check answers.
    fn question(&self) -> &'static str;

    /// Evaluate the check against one screening context. Pure and total.
    fn evaluate(&self, cx: &ScreeningContext) -> Verdict;
}
