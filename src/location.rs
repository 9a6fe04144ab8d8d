// src/location.rs

use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::*;

// ---------------------------
// ## Region Registry
// ---------------------------

/// Administrative category of a registry entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum RegionGroup {
    SpecialCity,
    MetropolitanCity,
    SelfGoverningCity,
    Province,
    SelfGoverningProvince,
    Overseas,
}

impl fmt::Display for RegionGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let group_str = match self {
            RegionGroup::SpecialCity => "Special City",
            RegionGroup::MetropolitanCity => "Metropolitan City",
            RegionGroup::SelfGoverningCity => "Self-Governing City",
            RegionGroup::Province => "Province",
            RegionGroup::SelfGoverningProvince => "Self-Governing Province",
            RegionGroup::Overseas => "Overseas",
        };
        write!(f, "{}", group_str)
    }
}

/// True-solar-time correction for one region, in minutes relative to KST.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct LocationOffset {
    pub name: &'static str,
    pub region_group: RegionGroup,
    pub minutes: i32,
}

/// Correction applied when the birth place is outside Korea or unknown:
/// the conventional baseline for the 135°E legal meridian, not zero.
pub const OVERSEAS_OFFSET_MINUTES: i32 = -30;

/// Korean legal time runs on meridian 135°E while the peninsula sits around
/// 126-129.5°E, so every regional correction is negative. Each entry is
/// `round((longitude - 135°) × 4 min/deg)` for the region's seat of
/// government. Registration order is the stable listing order.
static REGION_OFFSETS: [LocationOffset; 18] = [
    LocationOffset { name: "Seoul", region_group: RegionGroup::SpecialCity, minutes: -32 },
    LocationOffset { name: "Busan", region_group: RegionGroup::MetropolitanCity, minutes: -24 },
    LocationOffset { name: "Daegu", region_group: RegionGroup::MetropolitanCity, minutes: -26 },
    LocationOffset { name: "Incheon", region_group: RegionGroup::MetropolitanCity, minutes: -33 },
    LocationOffset { name: "Gwangju", region_group: RegionGroup::MetropolitanCity, minutes: -33 },
    LocationOffset { name: "Daejeon", region_group: RegionGroup::MetropolitanCity, minutes: -30 },
    LocationOffset { name: "Ulsan", region_group: RegionGroup::MetropolitanCity, minutes: -23 },
    LocationOffset { name: "Sejong", region_group: RegionGroup::SelfGoverningCity, minutes: -31 },
    LocationOffset { name: "Gyeonggi", region_group: RegionGroup::Province, minutes: -32 },
    LocationOffset { name: "Gangwon", region_group: RegionGroup::Province, minutes: -29 },
    LocationOffset { name: "Chungbuk", region_group: RegionGroup::Province, minutes: -30 },
    LocationOffset { name: "Chungnam", region_group: RegionGroup::Province, minutes: -33 },
    LocationOffset { name: "Jeonbuk", region_group: RegionGroup::Province, minutes: -31 },
    LocationOffset { name: "Jeonnam", region_group: RegionGroup::Province, minutes: -34 },
    LocationOffset { name: "Gyeongbuk", region_group: RegionGroup::Province, minutes: -25 },
    LocationOffset { name: "Gyeongnam", region_group: RegionGroup::Province, minutes: -25 },
    LocationOffset { name: "Jeju", region_group: RegionGroup::SelfGoverningProvince, minutes: -34 },
    LocationOffset { name: "Overseas", region_group: RegionGroup::Overseas, minutes: OVERSEAS_OFFSET_MINUTES },
];

pub struct LocationOffsetTable;

impl LocationOffsetTable {
    /// Exact-match lookup. Unknown names degrade to the overseas entry;
    /// this is a documented fallback, never an error.
    pub fn resolve(name: &str) -> LocationOffset {
        match REGION_OFFSETS.iter().find(|entry| entry.name == name) {
            Some(entry) => *entry,
            None => {
                debug!(location = name, "unknown location, using overseas offset");
                Self::overseas()
            }
        }
    }

    pub fn overseas() -> LocationOffset {
        REGION_OFFSETS[REGION_OFFSETS.len() - 1]
    }

    /// All entries in registration order.
    pub fn list_all() -> &'static [LocationOffset] {
        &REGION_OFFSETS
    }

    /// Entries of one administrative group, in registration order.
    pub fn list_by_region_group(group: RegionGroup) -> impl Iterator<Item = LocationOffset> {
        REGION_OFFSETS
            .iter()
            .copied()
            .filter(move |entry| entry.region_group == group)
    }

    /// Human-readable summary, e.g. `Seoul: -32min`.
    pub fn describe(name: &str) -> String {
        let entry = Self::resolve(name);
        format!("{}: {:+}min", entry.name, entry.minutes)
    }
}

// ---------------------------
// ## True-Local-Time Adjuster
// ---------------------------

/// Applies a minute offset to a wall-clock moment and normalizes every
/// overflowing field, cascading minute → hour → day → month → year. The
/// loops make no assumption about the size of the offset.
pub fn adjust_moment(moment: &NaiveMoment, offset_minutes: i32) -> CorrectedMoment {
    if offset_minutes == 0 {
        return CorrectedMoment {
            year: moment.year,
            month: moment.month,
            day: moment.day,
            hour: moment.hour,
            minute: moment.minute,
            second: moment.second,
        };
    }

    let mut year = moment.year;
    let mut month = moment.month as i32;
    let mut day = moment.day as i32;
    let mut hour = moment.hour as i32;
    let mut minute = moment.minute as i32 + offset_minutes;

    while minute >= 60 {
        minute -= 60;
        hour += 1;
    }
    while minute < 0 {
        minute += 60;
        hour -= 1;
    }

    while hour >= 24 {
        hour -= 24;
        day += 1;
    }
    while hour < 0 {
        hour += 24;
        day -= 1;
    }

    while day > calendar::days_in_month(year, month as u32) as i32 {
        day -= calendar::days_in_month(year, month as u32) as i32;
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    while day < 1 {
        month -= 1;
        if month < 1 {
            month = 12;
            year -= 1;
        }
        day += calendar::days_in_month(year, month as u32) as i32;
    }

    CorrectedMoment {
        year,
        month: month as u32,
        day: day as u32,
        hour: hour as u32,
        minute: minute as u32,
        second: moment.second,
    }
}
