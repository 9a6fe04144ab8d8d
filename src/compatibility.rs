// src/compatibility.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::*;

// ---------------------------
// ## Element Relations
// ---------------------------

/// Directed relation from one element to another on the fixed
/// generation/destruction graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRelation {
    Identical,
    Generates,
    GeneratedBy,
    Destroys,
    DestroyedBy,
}

impl ElementRelation {
    /// Fixed contribution weight of the relation, before position
    /// weighting. Feeding the other side outranks being fed; identity is
    /// mildly positive; destroying is damped relative to being destroyed.
    pub fn weight(self) -> f64 {
        match self {
            ElementRelation::Generates => 1.0,
            ElementRelation::GeneratedBy => 0.75,
            ElementRelation::Identical => 0.5,
            ElementRelation::Destroys => -0.75,
            ElementRelation::DestroyedBy => -1.0,
        }
    }
}

impl fmt::Display for ElementRelation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let relation_str = match self {
            ElementRelation::Identical => "Identical",
            ElementRelation::Generates => "Generates",
            ElementRelation::GeneratedBy => "Generated By",
            ElementRelation::Destroys => "Destroys",
            ElementRelation::DestroyedBy => "Destroyed By",
        };
        write!(f, "{}", relation_str)
    }
}

/// Relation of `from` toward `to`. For any two distinct elements exactly
/// one of the four directed edges applies.
pub fn element_relation(from: Element, to: Element) -> ElementRelation {
    if from == to {
        ElementRelation::Identical
    } else if from.generates() == to {
        ElementRelation::Generates
    } else if to.generates() == from {
        ElementRelation::GeneratedBy
    } else if from.destroys() == to {
        ElementRelation::Destroys
    } else {
        ElementRelation::DestroyedBy
    }
}

// ---------------------------
// ## Pair Scoring
// ---------------------------

/// The day pillar carries the day master and weighs double.
const DAY_MASTER_WEIGHT: f64 = 2.0;
const POSITION_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Normalized score in [0, 100].
    pub score: f64,
    /// Weighted contribution of each pillar position.
    pub breakdown: HashMap<PillarPosition, f64>,
}

/// Scores how `a`'s chart relates toward `b`'s. The relation graph is
/// directional, so swapping the arguments may change the score.
pub fn score_compatibility(a: &FourPillars, b: &FourPillars) -> CompatibilityResult {
    let mut breakdown = HashMap::new();
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;

    for position in PillarPosition::all() {
        let relation = element_relation(
            a.pillar(position).stem.element(),
            b.pillar(position).stem.element(),
        );
        let position_weight = if position == PillarPosition::Day {
            DAY_MASTER_WEIGHT
        } else {
            POSITION_WEIGHT
        };
        let contribution = relation.weight() * position_weight;
        breakdown.insert(position, contribution);
        weighted_sum += contribution;
        weight_total += position_weight;
    }

    let score = (weighted_sum + weight_total) / (2.0 * weight_total) * 100.0;
    CompatibilityResult { score, breakdown }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn chart(year: u8, month: u8, day: u8, hour: u8) -> FourPillars {
        FourPillars {
            year: Pillar::from_sexagenary_index(year),
            month: Pillar::from_sexagenary_index(month),
            day: Pillar::from_sexagenary_index(day),
            hour: Pillar::from_sexagenary_index(hour),
            source_moment: CorrectedMoment {
                year: 2000,
                month: 1,
                day: 1,
                hour: 12,
                minute: 0,
                second: 0,
            },
        }
    }

    #[test]
    fn relation_table_is_exhaustive_over_all_pairs() {
        for from in Element::all() {
            for to in Element::all() {
                let relation = element_relation(from, to);
                match relation {
                    ElementRelation::Identical => assert_eq!(from, to),
                    ElementRelation::Generates => assert_eq!(from.generates(), to),
                    ElementRelation::GeneratedBy => assert_eq!(to.generates(), from),
                    ElementRelation::Destroys => assert_eq!(from.destroys(), to),
                    ElementRelation::DestroyedBy => assert_eq!(to.destroys(), from),
                }
            }
        }
    }

    #[test]
    fn each_element_sees_every_relation_exactly_once() {
        for from in Element::all() {
            for relation in [
                ElementRelation::Identical,
                ElementRelation::Generates,
                ElementRelation::GeneratedBy,
                ElementRelation::Destroys,
                ElementRelation::DestroyedBy,
            ] {
                let count = Element::all()
                    .filter(|to| element_relation(from, *to) == relation)
                    .count();
                assert_eq!(count, 1, "{} should have one {} partner", from, relation);
            }
        }
    }

    #[test]
    fn identical_charts_score_seventy_five() {
        let a = chart(0, 14, 28, 42);
        let result = score_compatibility(&a, &a);
        assert_relative_eq!(result.score, 75.0);
        assert_eq!(result.breakdown.len(), 4);
        assert_relative_eq!(result.breakdown[&PillarPosition::Day], 1.0);
        assert_relative_eq!(result.breakdown[&PillarPosition::Year], 0.5);
    }

    #[test]
    fn scores_stay_within_bounds_across_chart_pairs() {
        for seed in 0..60u8 {
            let a = chart(seed, (seed + 7) % 60, (seed + 21) % 60, (seed + 35) % 60);
            let b = chart(
                (seed + 30) % 60,
                (seed + 44) % 60,
                (seed + 3) % 60,
                (seed + 52) % 60,
            );
            let result = score_compatibility(&a, &b);
            assert!(
                (0.0..=100.0).contains(&result.score),
                "seed {} scored {}",
                seed,
                result.score
            );
        }
    }

    #[test]
    fn generation_outranks_being_generated() {
        // Gap (wood) day feeds Byeong (fire); the reverse is weaker.
        let wood_day = chart(0, 0, 0, 0);
        let fire_day = chart(2, 2, 2, 2);
        let forward = score_compatibility(&wood_day, &fire_day);
        let backward = score_compatibility(&fire_day, &wood_day);
        assert!(forward.score > backward.score);
        assert_relative_eq!(forward.score, 100.0);
        assert_relative_eq!(backward.score, 87.5);
    }

    #[test]
    fn destruction_relations_drag_the_score_down() {
        // Gap (wood) day destroys Mu (earth); being destroyed is worst.
        let wood_day = chart(0, 0, 0, 0);
        let earth_day = chart(4, 4, 4, 4);
        let destroying = score_compatibility(&wood_day, &earth_day);
        let destroyed = score_compatibility(&earth_day, &wood_day);
        assert_relative_eq!(destroying.score, 12.5);
        assert_relative_eq!(destroyed.score, 0.0);
        assert!(destroyed.score < destroying.score);
    }
}
