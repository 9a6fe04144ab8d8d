// src/sexagenary.rs

use super::*;

// ---------------------------
// ## Cycle Calibration
// ---------------------------

/// Day-cycle calibration: `(JDN + DAY_EPOCH_OFFSET) mod 60` with index 0 =
/// Gap-Ja. Anchored on 1949-10-01 (JDN 2433191) and 2024-01-01
/// (JDN 2460311), both published Gap-Ja days.
pub const DAY_EPOCH_OFFSET: i64 = 49;

/// Year-cycle calibration: Gregorian year 4 opened a sexagenary cycle, so
/// `(year - YEAR_EPOCH) mod 60` with index 0 = Gap-Ja. 1984 → Gap-Ja.
pub const YEAR_EPOCH: i32 = 4;

pub fn day_pillar_index(day_count: i64) -> u8 {
    (day_count + DAY_EPOCH_OFFSET).rem_euclid(60) as u8
}

pub fn year_pillar_index(sexagenary_year: i32) -> u8 {
    (sexagenary_year - YEAR_EPOCH).rem_euclid(60) as u8
}

// ---------------------------
// ## Index Decomposition
// ---------------------------

pub fn stem_of(sexagenary_index: u8) -> Stem {
    Stem::from_index(sexagenary_index % 10).unwrap_or(Stem::Gap)
}

pub fn branch_of(sexagenary_index: u8) -> Branch {
    Branch::from_index(sexagenary_index % 12).unwrap_or(Branch::Ja)
}

// ---------------------------
// ## Derived Stems and Branches
// ---------------------------

/// Five-tigers rule: the year stem fixes the stem of the first solar-term
/// month (the In month); each later month advances the stem by one.
pub fn month_stem(year_stem: Stem, month_branch_ordinal: u8) -> Stem {
    let first_month_stem = match year_stem {
        Stem::Gap | Stem::Gi => Stem::Byeong,
        Stem::Eul | Stem::Gyeong => Stem::Mu,
        Stem::Byeong | Stem::Sin => Stem::Gyeong,
        Stem::Jeong | Stem::Im => Stem::Im,
        Stem::Mu | Stem::Gye => Stem::Gap,
    };
    stem_of(first_month_stem.index() + month_branch_ordinal % 12)
}

/// Five-rats rule: the day stem fixes the stem of the Ja hour block; each
/// later block advances the stem by one.
pub fn hour_stem(day_stem: Stem, hour_branch_ordinal: u8) -> Stem {
    let first_hour_stem = match day_stem {
        Stem::Gap | Stem::Gi => Stem::Gap,
        Stem::Eul | Stem::Gyeong => Stem::Byeong,
        Stem::Byeong | Stem::Sin => Stem::Mu,
        Stem::Jeong | Stem::Im => Stem::Gyeong,
        Stem::Mu | Stem::Gye => Stem::Im,
    };
    stem_of(first_hour_stem.index() + hour_branch_ordinal % 12)
}

/// The month branch runs In, Myo, ... around the cycle from ordinal 0.
pub fn month_branch(month_branch_ordinal: u8) -> Branch {
    branch_of(month_branch_ordinal % 12 + 2)
}

/// The hour branch runs Ja, Chuk, ... directly from the block ordinal.
pub fn hour_branch(hour_branch_ordinal: u8) -> Branch {
    branch_of(hour_branch_ordinal % 12)
}
