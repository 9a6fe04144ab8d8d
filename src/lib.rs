// src/lib.rs

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub mod calendar;
pub mod compatibility;
pub mod elements;
pub mod location;
pub mod pillars;
pub mod sexagenary;

pub use compatibility::{element_relation, score_compatibility, CompatibilityResult, ElementRelation};
pub use elements::{analyze_elements, classify_character, CharacterType, ElementProfile, PolarityBalance};
pub use location::{adjust_moment, LocationOffset, LocationOffsetTable, RegionGroup};
pub use pillars::compute_four_pillars;

// ---------------------------
// ## Enumerations
// ---------------------------

/// The ten heavenly stems (천간), in cycle order starting from Gap (갑/甲).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Gap = 0,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

impl Stem {
    pub fn from_index(index: u8) -> Option<Stem> {
        match index {
            0 => Some(Stem::Gap),
            1 => Some(Stem::Eul),
            2 => Some(Stem::Byeong),
            3 => Some(Stem::Jeong),
            4 => Some(Stem::Mu),
            5 => Some(Stem::Gi),
            6 => Some(Stem::Gyeong),
            7 => Some(Stem::Sin),
            8 => Some(Stem::Im),
            9 => Some(Stem::Gye),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn all() -> impl Iterator<Item = Stem> {
        (0..10).map(Stem::from_index).flatten()
    }

    pub fn hanja(self) -> char {
        match self {
            Stem::Gap => '甲',
            Stem::Eul => '乙',
            Stem::Byeong => '丙',
            Stem::Jeong => '丁',
            Stem::Mu => '戊',
            Stem::Gi => '己',
            Stem::Gyeong => '庚',
            Stem::Sin => '辛',
            Stem::Im => '壬',
            Stem::Gye => '癸',
        }
    }

    pub fn hangul(self) -> char {
        match self {
            Stem::Gap => '갑',
            Stem::Eul => '을',
            Stem::Byeong => '병',
            Stem::Jeong => '정',
            Stem::Mu => '무',
            Stem::Gi => '기',
            Stem::Gyeong => '경',
            Stem::Sin => '신',
            Stem::Im => '임',
            Stem::Gye => '계',
        }
    }

    /// Each stem carries a fixed element: two stems per element in cycle order.
    pub fn element(self) -> Element {
        match self {
            Stem::Gap | Stem::Eul => Element::Wood,
            Stem::Byeong | Stem::Jeong => Element::Fire,
            Stem::Mu | Stem::Gi => Element::Earth,
            Stem::Gyeong | Stem::Sin => Element::Metal,
            Stem::Im | Stem::Gye => Element::Water,
        }
    }

    /// Even-indexed stems are yang, odd-indexed stems are yin.
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let stem_str = match self {
            Stem::Gap => "Gap",
            Stem::Eul => "Eul",
            Stem::Byeong => "Byeong",
            Stem::Jeong => "Jeong",
            Stem::Mu => "Mu",
            Stem::Gi => "Gi",
            Stem::Gyeong => "Gyeong",
            Stem::Sin => "Sin",
            Stem::Im => "Im",
            Stem::Gye => "Gye",
        };
        write!(f, "{}", stem_str)
    }
}

/// The twelve earthly branches (지지), in cycle order starting from Ja (자/子).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Ja = 0,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

impl Branch {
    pub fn from_index(index: u8) -> Option<Branch> {
        match index {
            0 => Some(Branch::Ja),
            1 => Some(Branch::Chuk),
            2 => Some(Branch::In),
            3 => Some(Branch::Myo),
            4 => Some(Branch::Jin),
            5 => Some(Branch::Sa),
            6 => Some(Branch::O),
            7 => Some(Branch::Mi),
            8 => Some(Branch::Sin),
            9 => Some(Branch::Yu),
            10 => Some(Branch::Sul),
            11 => Some(Branch::Hae),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn all() -> impl Iterator<Item = Branch> {
        (0..12).map(Branch::from_index).flatten()
    }

    pub fn hanja(self) -> char {
        match self {
            Branch::Ja => '子',
            Branch::Chuk => '丑',
            Branch::In => '寅',
            Branch::Myo => '卯',
            Branch::Jin => '辰',
            Branch::Sa => '巳',
            Branch::O => '午',
            Branch::Mi => '未',
            Branch::Sin => '申',
            Branch::Yu => '酉',
            Branch::Sul => '戌',
            Branch::Hae => '亥',
        }
    }

    pub fn hangul(self) -> char {
        match self {
            Branch::Ja => '자',
            Branch::Chuk => '축',
            Branch::In => '인',
            Branch::Myo => '묘',
            Branch::Jin => '진',
            Branch::Sa => '사',
            Branch::O => '오',
            Branch::Mi => '미',
            Branch::Sin => '신',
            Branch::Yu => '유',
            Branch::Sul => '술',
            Branch::Hae => '해',
        }
    }

    /// Zodiac animal of the branch, as shown on a year pillar.
    pub fn animal(self) -> &'static str {
        match self {
            Branch::Ja => "Rat",
            Branch::Chuk => "Ox",
            Branch::In => "Tiger",
            Branch::Myo => "Rabbit",
            Branch::Jin => "Dragon",
            Branch::Sa => "Snake",
            Branch::O => "Horse",
            Branch::Mi => "Goat",
            Branch::Sin => "Monkey",
            Branch::Yu => "Rooster",
            Branch::Sul => "Dog",
            Branch::Hae => "Pig",
        }
    }

    /// Branch element table. Earth takes the four storage branches
    /// Jin/Sul/Chuk/Mi; the other elements take two branches each.
    pub fn element(self) -> Element {
        match self {
            Branch::In | Branch::Myo => Element::Wood,
            Branch::Sa | Branch::O => Element::Fire,
            Branch::Jin | Branch::Sul | Branch::Chuk | Branch::Mi => Element::Earth,
            Branch::Sin | Branch::Yu => Element::Metal,
            Branch::Hae | Branch::Ja => Element::Water,
        }
    }

    /// Even-indexed branches are yang, odd-indexed branches are yin.
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let branch_str = match self {
            Branch::Ja => "Ja",
            Branch::Chuk => "Chuk",
            Branch::In => "In",
            Branch::Myo => "Myo",
            Branch::Jin => "Jin",
            Branch::Sa => "Sa",
            Branch::O => "O",
            Branch::Mi => "Mi",
            Branch::Sin => "Sin",
            Branch::Yu => "Yu",
            Branch::Sul => "Sul",
            Branch::Hae => "Hae",
        };
        write!(f, "{}", branch_str)
    }
}

/// The five elements (오행), in the fixed Wood-Fire-Earth-Metal-Water order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood = 0,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub fn from_index(index: u8) -> Option<Element> {
        match index {
            0 => Some(Element::Wood),
            1 => Some(Element::Fire),
            2 => Some(Element::Earth),
            3 => Some(Element::Metal),
            4 => Some(Element::Water),
            _ => None,
        }
    }

    pub fn all() -> impl Iterator<Item = Element> {
        (0..5).map(Element::from_index).flatten()
    }

    /// Generation cycle: Wood → Fire → Earth → Metal → Water → Wood.
    pub fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// Destruction cycle: Wood → Earth → Water → Fire → Metal → Wood.
    pub fn destroys(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let element_str = match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        };
        write!(f, "{}", element_str)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Polarity::Yang => write!(f, "Yang"),
            Polarity::Yin => write!(f, "Yin"),
        }
    }
}

/// The four pillar positions of a chart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub fn all() -> impl Iterator<Item = PillarPosition> {
        [
            PillarPosition::Year,
            PillarPosition::Month,
            PillarPosition::Day,
            PillarPosition::Hour,
        ]
        .iter()
        .copied()
    }
}

impl fmt::Display for PillarPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let position_str = match self {
            PillarPosition::Year => "Year",
            PillarPosition::Month => "Month",
            PillarPosition::Day => "Day",
            PillarPosition::Hour => "Hour",
        };
        write!(f, "{}", position_str)
    }
}

// ---------------------------
// ## Structures
// ---------------------------

/// A wall-clock birth moment with no timezone semantics attached.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaiveMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl NaiveMoment {
    /// Validates every field against its natural range, including the day
    /// against the proleptic-Gregorian length of the month.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, SajuError> {
        if !(1..=12).contains(&month) {
            return Err(SajuError::InvalidCalendarInput(format!(
                "month {} is outside 1-12",
                month
            )));
        }
        let month_days = calendar::days_in_month(year, month);
        if !(1..=month_days).contains(&day) {
            return Err(SajuError::InvalidCalendarInput(format!(
                "day {} is outside 1-{} for {}-{:02}",
                day, month_days, year, month
            )));
        }
        if hour > 23 {
            return Err(SajuError::InvalidCalendarInput(format!(
                "hour {} is outside 0-23",
                hour
            )));
        }
        if minute > 59 {
            return Err(SajuError::InvalidCalendarInput(format!(
                "minute {} is outside 0-59",
                minute
            )));
        }
        if second > 59 {
            return Err(SajuError::InvalidCalendarInput(format!(
                "second {} is outside 0-59",
                second
            )));
        }
        Ok(NaiveMoment {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Accepts a fractional-minute clock reading and truncates it to whole
    /// minute and second precision.
    pub fn from_fractional_minute(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: f64,
    ) -> Result<Self, SajuError> {
        if !minute.is_finite() || !(0.0..60.0).contains(&minute) {
            return Err(SajuError::InvalidCalendarInput(format!(
                "fractional minute {} is outside 0-60",
                minute
            )));
        }
        let whole_minute = minute.trunc() as u32;
        let second = ((minute - minute.trunc()) * 60.0).trunc() as u32;
        NaiveMoment::new(year, month, day, hour, whole_minute, second)
    }
}

impl From<NaiveDateTime> for NaiveMoment {
    fn from(date_time: NaiveDateTime) -> Self {
        NaiveMoment {
            year: date_time.year(),
            month: date_time.month(),
            day: date_time.day(),
            hour: date_time.hour(),
            minute: date_time.minute(),
            second: date_time.second(),
        }
    }
}

impl fmt::Display for NaiveMoment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// A moment after the true-local-time correction. Every field is back within
/// its natural range; only `adjust_moment` produces values of this type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectedMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl fmt::Display for CorrectedMoment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// One stem-branch pair. Valid pairs satisfy `stem mod 2 == branch mod 2`;
/// the constructors below only ever produce the 60 valid combinations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn from_sexagenary_index(index: u8) -> Pillar {
        Pillar {
            stem: sexagenary::stem_of(index),
            branch: sexagenary::branch_of(index),
        }
    }

    /// Recovers the 0-59 cycle index from the pair.
    pub fn sexagenary_index(self) -> u8 {
        let stem = self.stem.index() as i32;
        let branch = self.branch.index() as i32;
        (6 * stem - 5 * branch).rem_euclid(60) as u8
    }

    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.stem, self.branch)
    }
}

/// The complete chart for one birth moment, together with the corrected
/// moment it was derived from. Never mutated after construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub source_moment: CorrectedMoment,
}

impl FourPillars {
    pub fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }
}

impl fmt::Display for FourPillars {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInfo {
    pub moment: NaiveMoment,
    pub location: String,
}

impl BirthInfo {
    pub fn new(moment: NaiveMoment, location: impl Into<String>) -> Self {
        BirthInfo {
            moment,
            location: location.into(),
        }
    }

    pub fn from_datetime(date_time: NaiveDateTime, location: impl Into<String>) -> Self {
        BirthInfo::new(NaiveMoment::from(date_time), location)
    }

    pub fn generate_report(&self) -> Result<SajuReport, SajuError> {
        generate_saju_report(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SajuReport {
    pub birth_info: BirthInfo,
    pub four_pillars: FourPillars,
    pub element_profile: ElementProfile,
    pub character: CharacterType,
}

// ---------------------------
// ## Error Handling
// ---------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SajuError {
    InvalidCalendarInput(String),
    UnsupportedYear(i32),
}

impl fmt::Display for SajuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SajuError::InvalidCalendarInput(msg) => write!(f, "Invalid Calendar Input: {}", msg),
            SajuError::UnsupportedYear(year) => write!(
                f,
                "Unsupported Year: {} is outside {}-{}",
                year,
                calendar::MIN_YEAR,
                calendar::MAX_YEAR
            ),
        }
    }
}

impl Error for SajuError {}

// ---------------------------
// ## Report Generation
// ---------------------------

/// Computes the full profile for one birth: the four pillars, the element
/// distribution, and the coarse character classification.
pub fn generate_saju_report(birth_info: &BirthInfo) -> Result<SajuReport, SajuError> {
    let four_pillars = compute_four_pillars(&birth_info.moment, &birth_info.location)?;
    let element_profile = analyze_elements(&four_pillars);
    let character = classify_character(&element_profile);

    Ok(SajuReport {
        birth_info: birth_info.clone(),
        four_pillars,
        element_profile,
        character,
    })
}
