//! CEFR proficiency estimation from difficulty-tier accuracy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scorer::DifficultyBreakdown;

/// CEFR proficiency bands, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    #[serde(rename = "C1/C2")]
    C1C2,
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1C2 => "C1/C2",
        };
        f.write_str(s)
    }
}

/// Estimate a CEFR band from per-tier accuracy.
///
/// Branches run from most to least proficient; the first satisfied
/// condition wins. An empty tier counts as a 0 rate, so a student with
/// no data at all lands on A1.
pub fn determine_cefr(stats: &DifficultyBreakdown) -> CefrLevel {
    let l1_rate = stats.foundation.rate();
    let l2_rate = stats.intermediate.rate();
    let l3_rate = stats.advanced.rate();

    if l3_rate >= 0.7 && l2_rate >= 0.8 {
        return CefrLevel::C1C2;
    }
    if l3_rate >= 0.3 || l2_rate >= 0.7 {
        return CefrLevel::B2;
    }
    if l2_rate >= 0.4 || (l1_rate >= 0.9 && stats.intermediate.total == 0) {
        return CefrLevel::B1;
    }
    if l1_rate >= 0.6 {
        return CefrLevel::A2;
    }
    CefrLevel::A1
}
