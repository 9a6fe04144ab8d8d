// src/elements.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use super::*;

// ---------------------------
// ## Element Distribution
// ---------------------------

/// Counts of the eight chart symbols (four stems, four branches) across
/// the five elements and the two polarities. Each axis sums to 8.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementProfile {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
    pub yang: u8,
    pub yin: u8,
}

impl ElementProfile {
    pub fn count_of(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// The most represented element; ties resolve to the earliest element
    /// in the fixed Wood-Fire-Earth-Metal-Water order.
    pub fn dominant(&self) -> Element {
        let mut dominant = Element::Wood;
        for element in Element::all() {
            if self.count_of(element) > self.count_of(dominant) {
                dominant = element;
            }
        }
        dominant
    }

    /// Elements absent from the chart, in fixed order.
    pub fn missing(&self) -> Vec<Element> {
        Element::all().filter(|e| self.count_of(*e) == 0).collect()
    }

    pub fn polarity_balance(&self) -> PolarityBalance {
        if self.yang > self.yin {
            PolarityBalance::YangLeaning
        } else if self.yin > self.yang {
            PolarityBalance::YinLeaning
        } else {
            PolarityBalance::Balanced
        }
    }

    fn record(&mut self, element: Element, polarity: Polarity) {
        match element {
            Element::Wood => self.wood += 1,
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Metal => self.metal += 1,
            Element::Water => self.water += 1,
        }
        match polarity {
            Polarity::Yang => self.yang += 1,
            Polarity::Yin => self.yin += 1,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolarityBalance {
    YangLeaning,
    YinLeaning,
    Balanced,
}

/// Maps each of the eight symbols through the fixed element and polarity
/// tables and tallies the distribution.
pub fn analyze_elements(four_pillars: &FourPillars) -> ElementProfile {
    let mut profile = ElementProfile::default();
    for position in PillarPosition::all() {
        let pillar = four_pillars.pillar(position);
        profile.record(pillar.stem.element(), pillar.stem.polarity());
        profile.record(pillar.branch.element(), pillar.branch.polarity());
    }
    profile
}

// ---------------------------
// ## Character Classification
// ---------------------------

/// Coarse temperament label derived from the dominant element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterType {
    Benevolent,
    Passionate,
    Grounded,
    Resolute,
    Adaptive,
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let character_str = match self {
            CharacterType::Benevolent => "Benevolent",
            CharacterType::Passionate => "Passionate",
            CharacterType::Grounded => "Grounded",
            CharacterType::Resolute => "Resolute",
            CharacterType::Adaptive => "Adaptive",
        };
        write!(f, "{}", character_str)
    }
}

pub fn classify_character(profile: &ElementProfile) -> CharacterType {
    match profile.dominant() {
        Element::Wood => CharacterType::Benevolent,
        Element::Fire => CharacterType::Passionate,
        Element::Earth => CharacterType::Grounded,
        Element::Metal => CharacterType::Resolute,
        Element::Water => CharacterType::Adaptive,
    }
}
