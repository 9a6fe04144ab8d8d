// src/pillars.rs

use super::*;

/// Composes the corrector, the calendar converter, and the sexagenary
/// tables into the four pillars of a birth moment. Pure: the same moment
/// and location always produce the same chart.
pub fn compute_four_pillars(
    moment: &NaiveMoment,
    location_name: &str,
) -> Result<FourPillars, SajuError> {
    let offset = LocationOffsetTable::resolve(location_name);
    let corrected = adjust_moment(moment, offset.minutes);

    let day_count = calendar::continuous_day_count(&corrected)?;
    let month_ordinal = calendar::month_branch_ordinal(&corrected)?;
    let hour_ordinal = calendar::hour_branch_ordinal(corrected.hour);

    let year = Pillar::from_sexagenary_index(sexagenary::year_pillar_index(
        calendar::sexagenary_year(&corrected)?,
    ));

    let month = Pillar {
        stem: sexagenary::month_stem(year.stem, month_ordinal),
        branch: sexagenary::month_branch(month_ordinal),
    };

    let day = Pillar::from_sexagenary_index(sexagenary::day_pillar_index(day_count));

    let hour = Pillar {
        stem: sexagenary::hour_stem(day.stem, hour_ordinal),
        branch: sexagenary::hour_branch(hour_ordinal),
    };

    Ok(FourPillars {
        year,
        month,
        day,
        hour,
        source_moment: corrected,
    })
}
