//! The field-resolution engine: reconstructing a concrete date from a
//! partially redundant set of parsed calendar fields.
//!
//! Resolution runs in three steps. Derivation pre-passes rewrite compound
//! fields (`ProlepticMonth`, `Era` + `YearOfEra`) into their primitive
//! equivalents. The closed `COMBINATIONS` table is then scanned once with
//! first-match short-circuiting; the matching entry consumes its fields and
//! produces a date under the caller's [`ResolutionMode`]. Finally any fields
//! left in the map are cross-validated against the resolved date.

use crate::{
    date::PlainDate,
    fields::{DateField, FieldMap},
    options::ResolutionMode,
    week, year, JalaliError, JalaliResult,
};

/// A resolvable field combination: the fields it consumes and the resolver
/// run when all of them are present.
struct Combination {
    requires: &'static [DateField],
    resolve: fn(&mut FieldMap, ResolutionMode) -> JalaliResult<PlainDate>,
    /// Whether leftover fields are cross-checked even in `Balance` mode.
    cross_check_all_modes: bool,
}

const COMBINATIONS: &[Combination] = &[
    Combination {
        requires: &[DateField::EpochDay],
        resolve: resolve_epoch_day,
        cross_check_all_modes: true,
    },
    Combination {
        requires: &[DateField::Year, DateField::MonthOfYear, DateField::DayOfMonth],
        resolve: resolve_year_month_day,
        cross_check_all_modes: false,
    },
    Combination {
        requires: &[DateField::Year, DateField::DayOfYear],
        resolve: resolve_year_day,
        cross_check_all_modes: false,
    },
    Combination {
        requires: &[
            DateField::Year,
            DateField::MonthOfYear,
            DateField::AlignedWeekOfMonth,
            DateField::AlignedDayOfWeekInMonth,
        ],
        resolve: resolve_aligned_week_of_month,
        cross_check_all_modes: false,
    },
    Combination {
        requires: &[
            DateField::Year,
            DateField::AlignedWeekOfYear,
            DateField::AlignedDayOfWeekInYear,
        ],
        resolve: resolve_aligned_week_of_year,
        cross_check_all_modes: false,
    },
    Combination {
        requires: &[
            DateField::WeekBasedYear,
            DateField::WeekOfWeekBasedYear,
            DateField::DayOfWeek,
        ],
        resolve: resolve_week_date,
        cross_check_all_modes: false,
    },
];

/// Resolves the provided field map into a concrete date.
///
/// Fields are removed from the map as they are consumed; on success the map
/// holds only fields that were cross-validated away, so a second pass over
/// it never reprocesses calendar fields. The map must not be shared between
/// concurrent resolve attempts; each call owns its own.
pub fn resolve_date(fields: &mut FieldMap, mode: ResolutionMode) -> JalaliResult<PlainDate> {
    derive_year_fields(fields, mode)?;

    for combination in COMBINATIONS {
        if combination
            .requires
            .iter()
            .all(|&field| fields.contains(field))
        {
            let date = (combination.resolve)(fields, mode)?;
            let check = combination.cross_check_all_modes || mode != ResolutionMode::Balance;
            if check {
                cross_validate(fields, &date)?;
            }
            return Ok(date);
        }
    }

    Err(JalaliError::state().with_message("no resolvable combination of fields was provided."))
}

/// Rewrites compound year fields into their primitive equivalents.
fn derive_year_fields(fields: &mut FieldMap, mode: ResolutionMode) -> JalaliResult<()> {
    if let Some(proleptic) = fields.remove(DateField::ProlepticMonth) {
        DateField::ProlepticMonth.validate(proleptic)?;
        insert_or_conflict(fields, DateField::Year, proleptic.div_euclid(12))?;
        insert_or_conflict(fields, DateField::MonthOfYear, proleptic.rem_euclid(12) + 1)?;
    }

    match (
        fields.contains(DateField::Era),
        fields.contains(DateField::YearOfEra),
    ) {
        (true, true) => {
            let era = take(fields, DateField::Era)?;
            let year_of_era = take(fields, DateField::YearOfEra)?;
            DateField::Era.validate(era)?;
            DateField::YearOfEra.validate(year_of_era)?;
            let y = if era == 1 { year_of_era } else { 1 - year_of_era };
            insert_or_conflict(fields, DateField::Year, y)?;
        }
        (false, true) if !fields.contains(DateField::Year) => {
            // Without an era the year-of-era is ambiguous; only the strict
            // mode refuses to assume the current era.
            if mode == ResolutionMode::Reject {
                return Err(JalaliError::state()
                    .with_message("year-of-era requires an era to be resolvable."));
            }
            let year_of_era = take(fields, DateField::YearOfEra)?;
            DateField::YearOfEra.validate(year_of_era)?;
            fields.insert(DateField::Year, year_of_era);
        }
        _ => {}
    }

    Ok(())
}

/// Inserts a derived field, failing when it conflicts with a present one.
fn insert_or_conflict(fields: &mut FieldMap, field: DateField, value: i64) -> JalaliResult<()> {
    if let Some(existing) = fields.get(field) {
        if existing != value {
            return Err(JalaliError::state().with_message(
                "derived field value conflicts with an explicitly provided one.",
            ));
        }
        return Ok(());
    }
    fields.insert(field, value);
    Ok(())
}

/// Removes a field the matched combination guaranteed to be present.
#[inline]
fn take(fields: &mut FieldMap, field: DateField) -> JalaliResult<i64> {
    fields.remove(field).ok_or_else(JalaliError::assert)
}

/// Cross-validates every remaining field against the resolved date.
fn cross_validate(fields: &mut FieldMap, date: &PlainDate) -> JalaliResult<()> {
    for field in DateField::ALL {
        let Some(value) = fields.remove(field) else {
            continue;
        };
        if date.get(field) != value {
            return Err(JalaliError::state().with_message(
                "a remaining field does not match the resolved date.",
            ));
        }
    }
    Ok(())
}

// ==== Combination resolvers ====

fn resolve_epoch_day(fields: &mut FieldMap, _: ResolutionMode) -> JalaliResult<PlainDate> {
    let epoch_day = take(fields, DateField::EpochDay)?;
    PlainDate::from_epoch_day(epoch_day)
}

fn resolve_year_month_day(fields: &mut FieldMap, mode: ResolutionMode) -> JalaliResult<PlainDate> {
    let y = take(fields, DateField::Year)?;
    let month = take(fields, DateField::MonthOfYear)?;
    let day = take(fields, DateField::DayOfMonth)?;
    DateField::Year.validate(y)?;
    match mode {
        ResolutionMode::Reject => {
            DateField::MonthOfYear.validate(month)?;
            DateField::DayOfMonth.validate(day)?;
            PlainDate::try_new(y as i32, month as u8, day as u8)
        }
        ResolutionMode::Constrain => {
            DateField::MonthOfYear.validate(month)?;
            PlainDate::new_clamping_day(y, month as u8, day.clamp(1, 31) as u8)
        }
        ResolutionMode::Balance => PlainDate::try_new(y as i32, 1, 1)?
            .plus_months(sub_one(month)?)?
            .plus_days(sub_one(day)?),
    }
}

fn resolve_year_day(fields: &mut FieldMap, mode: ResolutionMode) -> JalaliResult<PlainDate> {
    let y = take(fields, DateField::Year)?;
    let day_of_year = take(fields, DateField::DayOfYear)?;
    DateField::Year.validate(y)?;
    match mode {
        ResolutionMode::Reject => {
            DateField::DayOfYear.validate(day_of_year)?;
            PlainDate::from_year_day(y as i32, day_of_year as u16)
        }
        ResolutionMode::Constrain => {
            let clamped = day_of_year.clamp(1, i64::from(year::days_in_year(y as i32)));
            PlainDate::from_year_day(y as i32, clamped as u16)
        }
        ResolutionMode::Balance => {
            PlainDate::try_new(y as i32, 1, 1)?.plus_days(sub_one(day_of_year)?)
        }
    }
}

fn resolve_aligned_week_of_month(
    fields: &mut FieldMap,
    mode: ResolutionMode,
) -> JalaliResult<PlainDate> {
    let y = take(fields, DateField::Year)?;
    let month = take(fields, DateField::MonthOfYear)?;
    let week = take(fields, DateField::AlignedWeekOfMonth)?;
    let day = take(fields, DateField::AlignedDayOfWeekInMonth)?;
    DateField::Year.validate(y)?;

    match mode {
        ResolutionMode::Reject => {
            DateField::MonthOfYear.validate(month)?;
            DateField::AlignedWeekOfMonth.validate(week)?;
            DateField::AlignedDayOfWeekInMonth.validate(day)?;
            let date = PlainDate::try_new(y as i32, month as u8, 1)?
                .plus_days(aligned_offset(week, day)?)?;
            if i64::from(date.month_ordinal()) != month || i64::from(date.year()) != y {
                return Err(JalaliError::state()
                    .with_message("the aligned week does not lie within the month."));
            }
            Ok(date)
        }
        ResolutionMode::Constrain => {
            DateField::MonthOfYear.validate(month)?;
            PlainDate::try_new(y as i32, month as u8, 1)?
                .plus_days(aligned_offset(week.clamp(1, 5), day.clamp(1, 7))?)
        }
        ResolutionMode::Balance => PlainDate::try_new(y as i32, 1, 1)?
            .plus_months(sub_one(month)?)?
            .plus_days(aligned_offset(week, day)?),
    }
}

fn resolve_aligned_week_of_year(
    fields: &mut FieldMap,
    mode: ResolutionMode,
) -> JalaliResult<PlainDate> {
    let y = take(fields, DateField::Year)?;
    let week = take(fields, DateField::AlignedWeekOfYear)?;
    let day = take(fields, DateField::AlignedDayOfWeekInYear)?;
    DateField::Year.validate(y)?;

    match mode {
        ResolutionMode::Reject => {
            DateField::AlignedWeekOfYear.validate(week)?;
            DateField::AlignedDayOfWeekInYear.validate(day)?;
            let date =
                PlainDate::try_new(y as i32, 1, 1)?.plus_days(aligned_offset(week, day)?)?;
            if i64::from(date.year()) != y {
                return Err(JalaliError::state()
                    .with_message("the aligned week does not lie within the year."));
            }
            Ok(date)
        }
        ResolutionMode::Constrain => PlainDate::try_new(y as i32, 1, 1)?
            .plus_days(aligned_offset(week.clamp(1, 53), day.clamp(1, 7))?),
        ResolutionMode::Balance => {
            PlainDate::try_new(y as i32, 1, 1)?.plus_days(aligned_offset(week, day)?)
        }
    }
}

fn resolve_week_date(fields: &mut FieldMap, mode: ResolutionMode) -> JalaliResult<PlainDate> {
    let week_based_year = take(fields, DateField::WeekBasedYear)?;
    let week = take(fields, DateField::WeekOfWeekBasedYear)?;
    let day_of_week = take(fields, DateField::DayOfWeek)?;
    DateField::WeekBasedYear.validate(week_based_year)?;
    week::of_week_date(week_based_year as i32, week, day_of_week, mode)
}

/// Computes `(week - 1) * 7 + (day - 1)` with overflow checks.
fn aligned_offset(week: i64, day: i64) -> JalaliResult<i64> {
    sub_one(week)?
        .checked_mul(7)
        .and_then(|days| days.checked_add(sub_one(day).ok()?))
        .ok_or_else(|| {
            JalaliError::overflow().with_message("aligned-week offset exceeds the supported range.")
        })
}

#[inline]
fn sub_one(value: i64) -> JalaliResult<i64> {
    value.checked_sub(1).ok_or_else(|| {
        JalaliError::overflow().with_message("field value exceeds the supported range.")
    })
}
