//! # USNO ΔT readers
//!
//! Parsers for the fixed-width ΔT (TT − UT1) files published by the USNO:
//!
//! - `deltat.data` (1973 → present, monthly):
//!
//!   ```text
//!    1973  2  1  43.4724
//!   ^^^^^ ^^ ^^ ^^^^^^^^
//!   1..5  6..8 9..11 12..
//!   ```
//!
//!   Each row is dated at 12:00 UT of its calendar day.
//!
//! - `historic_deltat.data` (1657 → 1984, half-yearly), two header lines then:
//!
//!   ```text
//!   1657.0    44.0   ...
//!   0..4      10..20
//!   ```
//!
//!   Column 5 is the year fraction digit: `5` means 1 July, anything else 1 January.
//!
//! Blank lines are skipped. Any other malformed row is an
//! [`IersParseError`](crate::skyframe_errors::IersParseError) carrying its 1-based line number.
use std::{ops::Range, str::FromStr};

use camino::Utf8Path;
use rust_decimal::Decimal;

use super::{DeltaTRow, DeltaTTable};
use crate::{
    skyframe_errors::{IersParseError, SkyframeError},
    time::{julian_date, modified_julian_date, CalendarDate, TimeOfDay},
};

/// Number of header lines at the top of `historic_deltat.data`.
const HISTORIC_HEADER_LINES: usize = 2;

/// Slice `range` out of `line`, clamping the end to the line length.
///
/// A line that does not even reach `range.start` is too short.
pub(crate) fn column(
    line: &str,
    range: Range<usize>,
    line_no: usize,
) -> Result<&str, IersParseError> {
    let end = range.end.min(line.len());
    line.get(range.start..end)
        .map(str::trim)
        .ok_or(IersParseError::TooShortLine(line_no))
}

pub(crate) fn decimal_field(
    line: &str,
    range: Range<usize>,
    line_no: usize,
    field: &'static str,
) -> Result<Decimal, IersParseError> {
    let raw = column(line, range, line_no)?;
    Decimal::from_str(raw).map_err(|_| IersParseError::InvalidField {
        line: line_no,
        field,
        value: raw.to_string(),
    })
}

fn integer_field<T: FromStr>(
    line: &str,
    range: Range<usize>,
    line_no: usize,
    field: &'static str,
) -> Result<T, IersParseError> {
    let raw = column(line, range, line_no)?;
    raw.parse::<T>().map_err(|_| IersParseError::InvalidField {
        line: line_no,
        field,
        value: raw.to_string(),
    })
}

/// MJD of 12:00 UT on the given calendar day.
fn noon_mjd(year: i32, month: u8, day: u8, line_no: usize) -> Result<Decimal, IersParseError> {
    let date =
        CalendarDate::new(year, month, day).map_err(|_| IersParseError::InvalidField {
            line: line_no,
            field: "date",
            value: format!("{year:04}-{month:02}-{day:02}"),
        })?;
    let noon = TimeOfDay {
        hour: 12,
        minute: 0,
        second: 0,
    };
    Ok(modified_julian_date(julian_date(&date, &noon)))
}

fn parse_deltat_line(line: &str, line_no: usize) -> Result<DeltaTRow, IersParseError> {
    let year = integer_field::<i32>(line, 1..5, line_no, "year")?;
    let month = integer_field::<u8>(line, 6..8, line_no, "month")?;
    let day = integer_field::<u8>(line, 9..11, line_no, "day")?;
    let delta_t = decimal_field(line, 12..line.len().max(12), line_no, "ΔT")?;

    Ok(DeltaTRow {
        mjd: noon_mjd(year, month, day, line_no)?,
        delta_t,
    })
}

fn parse_historic_line(line: &str, line_no: usize) -> Result<DeltaTRow, IersParseError> {
    let year = integer_field::<i32>(line, 0..4, line_no, "year")?;
    let month = if line.as_bytes().get(5) == Some(&b'5') {
        7
    } else {
        1
    };
    let delta_t = decimal_field(line, 10..20, line_no, "ΔT")?;

    Ok(DeltaTRow {
        mjd: noon_mjd(year, month, 1, line_no)?,
        delta_t,
    })
}

/// Parse the content of a `deltat.data` file.
pub fn parse_deltat(content: &str) -> Result<DeltaTTable, SkyframeError> {
    let rows = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_deltat_line(line, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(IersParseError::EmptyTable.into());
    }
    Ok(DeltaTTable::new(rows))
}

/// Parse the content of a `historic_deltat.data` file, skipping its header.
///
/// The rows are returned unmerged; see [`DeltaTTable::merge_historic`].
pub fn parse_historic_deltat(content: &str) -> Result<Vec<DeltaTRow>, SkyframeError> {
    let rows = content
        .lines()
        .enumerate()
        .skip(HISTORIC_HEADER_LINES)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_historic_line(line, i + 1))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn read_deltat_file(path: &Utf8Path) -> Result<DeltaTTable, SkyframeError> {
    parse_deltat(&std::fs::read_to_string(path)?)
}

pub fn read_historic_deltat_file(path: &Utf8Path) -> Result<Vec<DeltaTRow>, SkyframeError> {
    parse_historic_deltat(&std::fs::read_to_string(path)?)
}
