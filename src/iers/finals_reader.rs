//! # IERS Bulletin A reader
//!
//! Parser for the fixed-width `finals2000A.all` file (see the IERS `readme.finals2000A`).
//! Only the columns needed for polar motion and UT1 are read:
//!
//! | Columns  | Field                                   |
//! |----------|-----------------------------------------|
//! | `7..15`  | MJD                                     |
//! | `16`     | polar-motion flag (`I` = IERS, `P` = prediction) |
//! | `18..27` | PM-x, arcsec                            |
//! | `37..46` | PM-y, arcsec                            |
//! | `58..68` | UT1 − UTC, seconds                      |
//!
//! Rows whose flag is not `I` (predictions, or lines too short to carry a flag) are
//! skipped.
use camino::Utf8Path;

use super::{deltat_reader::decimal_field, PolarMotionRow, PolarMotionTable};
use crate::skyframe_errors::{IersParseError, SkyframeError};

const IERS_FLAG_COLUMN: usize = 16;

fn is_iers_row(line: &str) -> bool {
    line.as_bytes().get(IERS_FLAG_COLUMN) == Some(&b'I')
}

fn parse_finals_line(line: &str, line_no: usize) -> Result<PolarMotionRow, IersParseError> {
    Ok(PolarMotionRow {
        mjd: decimal_field(line, 7..15, line_no, "MJD")?,
        x: decimal_field(line, 18..27, line_no, "PM-x")?,
        y: decimal_field(line, 37..46, line_no, "PM-y")?,
        dut1: decimal_field(line, 58..68, line_no, "UT1-UTC")?,
    })
}

/// Parse the content of a `finals2000A.all` file.
pub fn parse_finals(content: &str) -> Result<PolarMotionTable, SkyframeError> {
    let rows = content
        .lines()
        .enumerate()
        .filter(|(_, line)| is_iers_row(line))
        .map(|(i, line)| parse_finals_line(line, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(IersParseError::EmptyTable.into());
    }
    Ok(PolarMotionTable::new(rows))
}

pub fn read_finals_file(path: &Utf8Path) -> Result<PolarMotionTable, SkyframeError> {
    parse_finals(&std::fs::read_to_string(path)?)
}
