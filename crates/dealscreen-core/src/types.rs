//! Core result types for the screening engine.
//!
//! The criterion set is closed: nine rubric checks, evaluated in a fixed
//! order. Results are therefore modeled as enums and fixed-field structs
//! rather than string-keyed maps.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::recommendation::Recommendation;

/// Outcome of a single criterion check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "MET")]
    Met,
    #[serde(rename = "NOT MET")]
    NotMet,
}

impl Status {
    /// Display glyph for the status.
    ///
    /// A pure function of the status, never independent state.
    pub fn marker(self) -> &'static str {
        match self {
            Status::Met => "🟢",
            Status::NotMet => "🔴",
        }
    }

    pub fn is_met(self) -> bool {
        matches!(self, Status::Met)
    }
}

/// The outcome of one criterion on one analysis text.
///
/// Constructed once per evaluator invocation and never mutated. The
/// explanation is always non-empty and embeds extracted values (amounts,
/// percentages, week counts) where the branch depends on them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verdict {
    pub status: Status,
    pub explanation: String,
}

impl Verdict {
    pub fn met(explanation: impl Into<String>) -> Self {
        Self {
            status: Status::Met,
            explanation: explanation.into(),
        }
    }

    pub fn not_met(explanation: impl Into<String>) -> Self {
        Self {
            status: Status::NotMet,
            explanation: explanation.into(),
        }
    }

    /// Display glyph, derived from the status.
    pub fn marker(&self) -> &'static str {
        self.status.marker()
    }
}

// Serialized form carries the derived marker so downstream report
// templates never have to recompute it.
impl Serialize for Verdict {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Verdict", 3)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("explanation", &self.explanation)?;
        state.serialize_field("marker", self.marker())?;
        state.end()
    }
}

/// The nine rubric criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion {
    GeographyStructure,
    FinancialMilestones,
    AssetClassExclusion,
    InvestorSyndication,
    FeeTerms,
    InvestmentSize,
    ProcessTimeline,
    ReturnThreshold,
    SectorFocus,
}

impl Criterion {
    /// Registry order. Sector focus is last because its opportunistic
    /// branch consumes the MET count over the other eight.
    pub const ALL: [Criterion; 9] = [
        Criterion::GeographyStructure,
        Criterion::FinancialMilestones,
        Criterion::AssetClassExclusion,
        Criterion::InvestorSyndication,
        Criterion::FeeTerms,
        Criterion::InvestmentSize,
        Criterion::ProcessTimeline,
        Criterion::ReturnThreshold,
        Criterion::SectorFocus,
    ];

    /// Display label used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Criterion::GeographyStructure => "Geography/Structure",
            Criterion::FinancialMilestones => "Financial Milestones",
            Criterion::AssetClassExclusion => "Asset Class Exclusion",
            Criterion::InvestorSyndication => "Investor Syndication",
            Criterion::FeeTerms => "Fee Terms",
            Criterion::InvestmentSize => "Investment Size",
            Criterion::ProcessTimeline => "Process Timeline",
            Criterion::ReturnThreshold => "Return Threshold",
            Criterion::SectorFocus => "Sector Focus",
        }
    }
}

/// One verdict per criterion for a single screening pass.
///
/// A fixed-field struct rather than a general mapping: the key set is
/// closed and iteration order matters for the sector-focus dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaFindings {
    pub geography_structure: Verdict,
    pub financial_milestones: Verdict,
    pub asset_class_exclusion: Verdict,
    pub investor_syndication: Verdict,
    pub fee_terms: Verdict,
    pub investment_size: Verdict,
    pub process_timeline: Verdict,
    pub return_threshold: Verdict,
    pub sector_focus: Verdict,
}

impl CriteriaFindings {
    pub fn get(&self, criterion: Criterion) -> &Verdict {
        match criterion {
            Criterion::GeographyStructure => &self.geography_structure,
            Criterion::FinancialMilestones => &self.financial_milestones,
            Criterion::AssetClassExclusion => &self.asset_class_exclusion,
            Criterion::InvestorSyndication => &self.investor_syndication,
            Criterion::FeeTerms => &self.fee_terms,
            Criterion::InvestmentSize => &self.investment_size,
            Criterion::ProcessTimeline => &self.process_timeline,
            Criterion::ReturnThreshold => &self.return_threshold,
            Criterion::SectorFocus => &self.sector_focus,
        }
    }

    /// Iterate verdicts in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &Verdict)> {
        Criterion::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Tally of MET verdicts. Order-independent.
    pub fn met_count(&self) -> usize {
        self.iter().filter(|(_, v)| v.status.is_met()).count()
    }
}

/// Full engine output for one screening pass, handed to the report layer
/// as opaque structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub company: String,
    pub findings: CriteriaFindings,
    pub met_count: usize,
    pub total: usize,
    pub recommendation: Recommendation,
}
