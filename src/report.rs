use std::{
    fmt::Display,
    io::{self, Write},
    str::FromStr,
};

use itertools::Itertools;

use crate::{bar::Bar, bar_kind::BarKind, plate::Plate, row::Row};

const CELL_WIDTH: usize = 5;
const LABEL_WIDTH: usize = CELL_WIDTH - 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
}

impl ReportFormat {
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Csv => "csv",
        }
    }
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err("Invalid report format.".to_string()),
        }
    }
}

/// Text report line width: the total plus room for the widest run of big plates.
#[must_use]
pub fn line_width(kind: BarKind) -> usize {
    match kind {
        BarKind::Barbell => 36,
        BarKind::TrapBar => 41,
    }
}

fn cell(plate: Plate) -> String {
    let label = plate.to_string().chars().take(LABEL_WIDTH).collect::<String>();
    format!("{label:>CELL_WIDTH$}")
}

/// Big plates in fixed-width cells: one per loaded plate, blanks for empty columns.
#[must_use]
pub fn big_plate_cells(row: &Row) -> String {
    let columns = row.columns.iter().map(|column| match column {
        Some(stack) => cell(stack.plate).repeat(stack.count),
        None => " ".repeat(CELL_WIDTH),
    });
    let unlisted = row.unlisted.iter().map(|plate| cell(*plate));
    columns.chain(unlisted).collect()
}

#[must_use]
pub fn small_plates(row: &Row) -> String {
    row.small.iter().join(" ")
}

///
/// # Errors
/// If writing to `out` fails.
///
pub fn write_text<W: Write>(out: &mut W, rows: &[Row], width: usize) -> io::Result<()> {
    let dashes = "-".repeat(width);
    for row in rows {
        writeln!(out, "{:>5}:{}", row.total, big_plate_cells(row))?;
        writeln!(out, "{:>width$}", small_plates(row))?;
        writeln!(out, "{dashes}")?;
    }
    Ok(())
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) || field.starts_with(' ') || field.ends_with(' ') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

///
/// # Errors
/// If writing to `out` fails.
///
pub fn write_csv<W: Write>(out: &mut W, rows: &[Row]) -> io::Result<()> {
    writeln!(out, "Total,Big Plates,Small Plates")?;
    for row in rows {
        writeln!(
            out,
            "{},{},{}",
            row.total,
            csv_field(&big_plate_cells(row)),
            csv_field(&small_plates(row))
        )?;
    }
    Ok(())
}

///
/// # Errors
/// If writing to `out` fails.
///
pub fn write_report<W: Write>(
    out: &mut W,
    format: ReportFormat,
    bar: &Bar,
    rows: &[Row],
) -> io::Result<()> {
    match format {
        ReportFormat::Text => write_text(out, rows, line_width(bar.kind())),
        ReportFormat::Csv => write_csv(out, rows),
    }
}

/// One report in a stream holding several. Text reports get a bar title line;
/// CSV reports are written bare so each one still starts with its header row.
///
/// # Errors
/// If writing to `out` fails.
///
pub fn write_section<W: Write>(
    out: &mut W,
    format: ReportFormat,
    bar: &Bar,
    rows: &[Row],
) -> io::Result<()> {
    if format == ReportFormat::Text {
        writeln!(out, "{bar}")?;
    }
    write_report(out, format, bar, rows)
}
