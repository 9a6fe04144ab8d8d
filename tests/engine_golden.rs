//! Golden anchors and end-to-end invariants for the saju engine.
//!
//! The sexagenary anchors come from published almanac dates: 1949-10-01 and
//! 2024-01-01 are Gap-Ja days, 1984 opened a sexagenary year cycle.

use saju_core::{
    adjust_moment, analyze_elements, compute_four_pillars, generate_saju_report,
    score_compatibility, BirthInfo, Branch, CharacterType, Element, NaiveMoment, PillarPosition,
    Stem,
};

#[test]
fn published_gap_ja_days_anchor_the_day_cycle() {
    // Noon births far from midnight: the -30min overseas correction cannot
    // move the calendar date.
    let founding = NaiveMoment::new(1949, 10, 1, 12, 0, 0).unwrap();
    let chart = compute_four_pillars(&founding, "Overseas").unwrap();
    assert_eq!((chart.day.stem, chart.day.branch), (Stem::Gap, Branch::Ja));

    let new_year = NaiveMoment::new(2024, 1, 1, 12, 0, 0).unwrap();
    let chart = compute_four_pillars(&new_year, "Overseas").unwrap();
    assert_eq!((chart.day.stem, chart.day.branch), (Stem::Gap, Branch::Ja));

    // J2000 cross-check: 2000-01-01 is a Mu-O day.
    let millennium = NaiveMoment::new(2000, 1, 1, 12, 0, 0).unwrap();
    let chart = compute_four_pillars(&millennium, "Overseas").unwrap();
    assert_eq!((chart.day.stem, chart.day.branch), (Stem::Mu, Branch::O));
}

#[test]
fn day_cycle_closes_after_sixty_days() {
    // 2024-01-01 plus sixty days is 2024-03-01 across the leap day.
    let first = NaiveMoment::new(2024, 1, 1, 12, 0, 0).unwrap();
    let later = NaiveMoment::new(2024, 3, 1, 12, 0, 0).unwrap();
    let first_chart = compute_four_pillars(&first, "Seoul").unwrap();
    let later_chart = compute_four_pillars(&later, "Seoul").unwrap();
    assert_eq!(first_chart.day, later_chart.day);
}

#[test]
fn leap_day_offset_rolls_into_march() {
    let moment = NaiveMoment::new(2024, 2, 29, 23, 45, 0).unwrap();
    let corrected = adjust_moment(&moment, 20);
    assert_eq!((corrected.year, corrected.month, corrected.day), (2024, 3, 1));
    assert_eq!((corrected.hour, corrected.minute), (0, 5));
}

#[test]
fn negative_offset_rolls_back_across_the_year() {
    let moment = NaiveMoment::new(2024, 1, 1, 0, 10, 0).unwrap();
    let corrected = adjust_moment(&moment, -30);
    assert_eq!(
        (corrected.year, corrected.month, corrected.day),
        (2023, 12, 31)
    );
    assert_eq!((corrected.hour, corrected.minute), (23, 40));
}

#[test]
fn ipchun_eve_chart_keeps_the_previous_year() {
    // 2024-02-04 00:10 in Seoul corrects to 2024-02-03 23:38, which is
    // still inside the Gye-Myo year and its closing Eul-Chuk month.
    let moment = NaiveMoment::new(2024, 2, 4, 0, 10, 0).unwrap();
    let chart = compute_four_pillars(&moment, "Seoul").unwrap();

    assert_eq!(
        (chart.source_moment.month, chart.source_moment.day),
        (2, 3)
    );
    assert_eq!((chart.year.stem, chart.year.branch), (Stem::Gye, Branch::Myo));
    assert_eq!((chart.month.stem, chart.month.branch), (Stem::Eul, Branch::Chuk));
    assert_eq!((chart.day.stem, chart.day.branch), (Stem::Jeong, Branch::Yu));
    assert_eq!((chart.hour.stem, chart.hour.branch), (Stem::Gyeong, Branch::Ja));
}

#[test]
fn cycle_opening_chart_of_1984() {
    // 1984-02-04 noon: the Gap-Ja year begins with its Byeong-In month.
    let moment = NaiveMoment::new(1984, 2, 4, 12, 0, 0).unwrap();
    let chart = compute_four_pillars(&moment, "Overseas").unwrap();

    assert_eq!((chart.year.stem, chart.year.branch), (Stem::Gap, Branch::Ja));
    assert_eq!(
        (chart.month.stem, chart.month.branch),
        (Stem::Byeong, Branch::In)
    );
    assert_eq!((chart.day.stem, chart.day.branch), (Stem::Mu, Branch::Jin));
    assert_eq!((chart.hour.stem, chart.hour.branch), (Stem::Mu, Branch::O));
}

#[test]
fn charts_are_deterministic_and_self_consistent() {
    let moments = [
        NaiveMoment::new(1955, 3, 21, 5, 40, 0).unwrap(),
        NaiveMoment::new(1972, 9, 9, 18, 15, 0).unwrap(),
        NaiveMoment::new(1991, 6, 18, 7, 10, 0).unwrap(),
        NaiveMoment::new(2008, 12, 25, 0, 30, 0).unwrap(),
        NaiveMoment::new(2024, 2, 29, 23, 45, 0).unwrap(),
    ];
    for moment in &moments {
        for location in ["Seoul", "Gwangju", "Jeju", "Overseas"] {
            let chart = compute_four_pillars(moment, location).unwrap();
            assert_eq!(compute_four_pillars(moment, location).unwrap(), chart);

            // Parity invariant on every pillar.
            for position in PillarPosition::all() {
                let pillar = chart.pillar(position);
                assert_eq!(pillar.stem.index() % 2, pillar.branch.index() % 2);
            }

            // Element and polarity counts always cover the eight symbols.
            let profile = analyze_elements(&chart);
            let total: u8 = Element::all().map(|e| profile.count_of(e)).sum();
            assert_eq!(total, 8);
            assert_eq!(profile.yang + profile.yin, 8);
        }
    }
}

#[test]
fn compatibility_scores_stay_in_bounds_both_ways() {
    let first = compute_four_pillars(
        &NaiveMoment::new(1990, 3, 15, 8, 30, 0).unwrap(),
        "Seoul",
    )
    .unwrap();
    let second = compute_four_pillars(
        &NaiveMoment::new(1992, 10, 8, 21, 5, 0).unwrap(),
        "Busan",
    )
    .unwrap();

    let forward = score_compatibility(&first, &second);
    let backward = score_compatibility(&second, &first);
    for result in [&forward, &backward] {
        assert!((0.0..=100.0).contains(&result.score));
        assert_eq!(result.breakdown.len(), 4);
        for position in PillarPosition::all() {
            assert!(result.breakdown.contains_key(&position));
        }
    }
}

#[test]
fn report_composes_chart_analysis_and_classification() {
    let moment = NaiveMoment::new(1990, 3, 15, 8, 30, 0).unwrap();
    let report = generate_saju_report(&BirthInfo::new(moment, "Seoul")).unwrap();

    assert_eq!(report.four_pillars.year.hanja(), "庚午");
    assert_eq!(report.element_profile.earth, 4);
    assert_eq!(report.element_profile.water, 0);
    assert_eq!(report.character, CharacterType::Grounded);
    assert_eq!(report.birth_info.location, "Seoul");
}
