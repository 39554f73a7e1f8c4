//! Five-tier maturity classification of the overall score.

use serde::Serialize;

/// One maturity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaturityTier {
    /// Tier name
    pub name: &'static str,
    /// Lowest overall percentage that reaches this tier
    pub min_score: u32,
    /// Color name used by renderers
    pub color: &'static str,
    /// Narrative shown alongside the tier
    pub description: &'static str,
}

/// Maturity tiers in ascending threshold order.
pub const MATURITY_TIERS: [MaturityTier; 5] = [
    MaturityTier {
        name: "Initial",
        min_score: 0,
        color: "red",
        description: "Basic AI security policies may be emerging, but significant gaps exist. Your organisation should focus on establishing foundational controls and awareness.",
    },
    MaturityTier {
        name: "Developing",
        min_score: 21,
        color: "amber",
        description: "Basic AI security policies are in place, but significant gaps remain. Your organisation should focus on formalising processes and expanding controls.",
    },
    MaturityTier {
        name: "Defined",
        min_score: 41,
        color: "yellow",
        description: "AI security processes are formally defined and documented. Consistent implementation across projects is the next key area of focus.",
    },
    MaturityTier {
        name: "Managed",
        min_score: 61,
        color: "sky",
        description: "AI security is actively managed with quantitative insights. Proactive measures are in place, and continuous improvement is a goal.",
    },
    MaturityTier {
        name: "Optimising",
        min_score: 81,
        color: "green",
        description: "AI security practices are mature and continuously optimised using data-driven insights and predictive analytics. You are a leader in AI security.",
    },
];

/// A classified tier together with its position in [`MATURITY_TIERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaturityLevel {
    pub tier: MaturityTier,
    /// Zero-based ordinal, used to fill progress-bar segments
    pub stage_index: usize,
}

impl MaturityLevel {
    /// Total number of stages
    #[must_use]
    pub const fn stage_count() -> usize {
        MATURITY_TIERS.len()
    }
}

/// Classify an overall percentage into a maturity tier.
///
/// Tiers are scanned from the highest threshold down and the first one the
/// score reaches wins, so thresholds are inclusive (41 is "Defined"). The
/// lowest tier starts at 0 and always matches.
#[must_use]
pub fn classify(overall_percent: u32) -> MaturityLevel {
    MATURITY_TIERS
        .iter()
        .enumerate()
        .rev()
        .find(|(_, tier)| tier.min_score <= overall_percent)
        .map_or(
            MaturityLevel {
                tier: MATURITY_TIERS[0],
                stage_index: 0,
            },
            |(stage_index, tier)| MaturityLevel {
                tier: *tier,
                stage_index,
            },
        )
}
