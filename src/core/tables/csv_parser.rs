//! CSV parser for requirement tables and the major catalog

use super::headers::{Column, HeaderMap};
use crate::core::deficit::clamp_credits;
use crate::core::error::{AdvisorError, DataWarning};
use crate::core::models::requirement::{
    DEFAULT_GRADUATION_CREDITS, DEFAULT_MAJOR_ELECTIVE, DEFAULT_MAJOR_REQUIRED,
};
use crate::core::models::{MultiRequirement, PrimaryRequirement, ProgramType};
use crate::core::repository::CatalogEntry;

/// Rows parsed from one table plus the data-quality findings met on the way
#[derive(Debug, Clone)]
pub struct TableParse<T> {
    /// Usable rows in file order
    pub rows: Vec<T>,
    /// Clamped, defaulted or skipped cells and rows
    pub warnings: Vec<DataWarning>,
}

/// Split a CSV line into trimmed fields
///
/// Double-quoted fields may contain commas; `""` inside quotes is a literal quote.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Non-blank lines with their 1-based line numbers
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Read the header line and check that the required columns exist
fn read_header<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    source_name: &str,
    required: &[Column],
) -> Result<HeaderMap, AdvisorError> {
    let (line_no, header_line) = lines.next().ok_or_else(|| AdvisorError::Table {
        source_name: source_name.to_string(),
        line: 1,
        message: "table is empty".to_string(),
    })?;
    let header = HeaderMap::from_cells(&parse_csv_line(header_line));
    if let Some(missing) = required.iter().find(|&&column| !header.has(column)) {
        return Err(AdvisorError::Table {
            source_name: source_name.to_string(),
            line: line_no,
            message: format!("missing required column '{}'", missing.name()),
        });
    }
    Ok(header)
}

/// Typed access to one data row, recording warnings as it goes
struct RowReader<'a> {
    fields: Vec<String>,
    header: &'a HeaderMap,
    source_name: &'a str,
    line: usize,
    warnings: &'a mut Vec<DataWarning>,
}

impl RowReader<'_> {
    fn text(&self, column: Column) -> Option<&str> {
        self.header
            .position(column)
            .and_then(|idx| self.fields.get(idx))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Credit cell: `None` when absent, blank or unreadable (with a warning);
    /// negative values clamp to zero (with a warning)
    fn credits(&mut self, column: Column) -> Option<u32> {
        let raw = self.text(column)?.to_string();
        let Some(value) = parse_integer(&raw) else {
            self.warnings.push(DataWarning::UnreadableValue {
                table: self.source_name.to_string(),
                line: self.line,
                column: column.name(),
                raw,
            });
            return None;
        };
        let (credits, clamped) = clamp_credits(value);
        if clamped {
            self.warnings.push(DataWarning::NegativeValueClamped {
                table: self.source_name.to_string(),
                line: self.line,
                column: column.name(),
                value,
            });
        }
        Some(credits)
    }

    fn skip(&mut self, reason: String) {
        self.warnings.push(DataWarning::RowSkipped {
            table: self.source_name.to_string(),
            line: self.line,
            reason,
        });
    }

    /// The (major, program type, year) key; `None` skips the row
    fn key(&mut self) -> Option<(String, ProgramType, u32)> {
        let Some(major) = self.text(Column::Major).map(ToString::to_string) else {
            self.skip("missing major name".to_string());
            return None;
        };
        let raw_program = self.text(Column::ProgramType).unwrap_or_default().to_string();
        let program = match raw_program.parse::<ProgramType>() {
            Ok(program) => program,
            Err(e) => {
                self.skip(e.to_string());
                return None;
            }
        };
        let year = self
            .text(Column::AdmissionYear)
            .and_then(parse_integer)
            .and_then(|year| u32::try_from(year).ok());
        let Some(year) = year else {
            self.skip(format!("unreadable admission year for {major}"));
            return None;
        };
        Some((major, program, year))
    }
}

/// Parse an integer cell, accepting integral spreadsheet floats such as `15.0`
fn parse_integer(raw: &str) -> Option<i64> {
    let cleaned = raw.trim().replace(',', "");
    cleaned.parse::<i64>().ok().or_else(|| {
        cleaned
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

fn parse_rows<T>(
    content: &str,
    source_name: &str,
    required: &[Column],
    mut build: impl FnMut(&mut RowReader<'_>) -> Option<T>,
) -> Result<TableParse<T>, AdvisorError> {
    let mut lines = data_lines(content);
    let header = read_header(&mut lines, source_name, required)?;
    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    for (line, text) in lines {
        let mut reader = RowReader {
            fields: parse_csv_line(text),
            header: &header,
            source_name,
            line,
            warnings: &mut warnings,
        };
        if let Some(row) = build(&mut reader) {
            rows.push(row);
        }
    }

    Ok(TableParse { rows, warnings })
}

/// Parse the primary (home-major) requirement table
///
/// # Errors
/// Returns an error if the table is empty or lacks the major, program type or
/// admission year column.
pub fn parse_primary_csv(
    content: &str,
    source_name: &str,
) -> Result<TableParse<PrimaryRequirement>, AdvisorError> {
    let required = [Column::Major, Column::ProgramType, Column::AdmissionYear];
    parse_rows(content, source_name, &required, |row| {
        let (major, program_type, admission_year) = row.key()?;
        let major_required = row
            .credits(Column::MajorRequired)
            .unwrap_or(DEFAULT_MAJOR_REQUIRED);
        let major_elective = row
            .credits(Column::MajorElective)
            .unwrap_or(DEFAULT_MAJOR_ELECTIVE);
        Some(PrimaryRequirement {
            major,
            program_type,
            admission_year,
            major_required,
            major_elective,
            major_required_changed: row
                .credits(Column::MajorRequiredChanged)
                .unwrap_or(major_required),
            major_elective_changed: row
                .credits(Column::MajorElectiveChanged)
                .unwrap_or(major_elective),
            basic_literacy: row.credits(Column::BasicLiteracy),
            basic_science: row.credits(Column::BasicScience),
            core_liberal: row.credits(Column::CoreLiberal),
            graduation_credits: row
                .credits(Column::GraduationCredits)
                .unwrap_or(DEFAULT_GRADUATION_CREDITS),
        })
    })
}

/// Parse the multi-major requirement table
///
/// # Errors
/// Returns an error if the table is empty or lacks the major, program type or
/// admission year column.
pub fn parse_multi_csv(
    content: &str,
    source_name: &str,
) -> Result<TableParse<MultiRequirement>, AdvisorError> {
    let required = [Column::Major, Column::ProgramType, Column::AdmissionYear];
    parse_rows(content, source_name, &required, |row| {
        let (major, program_type, admission_year) = row.key()?;
        let (default_required, default_elective, _) = program_type.default_multi_requirement();
        let multi_required = row
            .credits(Column::MultiRequired)
            .unwrap_or(default_required);
        let multi_elective = row
            .credits(Column::MultiElective)
            .unwrap_or(default_elective);
        Some(MultiRequirement {
            major,
            program_type,
            admission_year,
            multi_required,
            multi_elective,
            total: row
                .credits(Column::MultiTotal)
                .unwrap_or(multi_required.saturating_add(multi_elective)),
            max_graduation_credits: row.credits(Column::MaxGraduationCredits),
        })
    })
}

/// Parse the major catalog
///
/// The program-type cell may list several programs separated by `/`, `;`, `|`
/// or (inside quotes) `,`.
///
/// # Errors
/// Returns an error if the table is empty or lacks the major column.
pub fn parse_catalog_csv(
    content: &str,
    source_name: &str,
) -> Result<TableParse<CatalogEntry>, AdvisorError> {
    parse_rows(content, source_name, &[Column::Major], |row| {
        let Some(name) = row.text(Column::Major).map(ToString::to_string) else {
            row.skip("missing major name".to_string());
            return None;
        };
        let listed = row.text(Column::ProgramType).unwrap_or_default().to_string();
        let mut programs = Vec::new();
        for token in listed
            .split(['/', ';', '|', ','])
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            match token.parse::<ProgramType>() {
                Ok(program) if !programs.contains(&program) => programs.push(program),
                Ok(_) => {}
                Err(e) => row.skip(format!("{name}: {e}; program ignored")),
            }
        }
        Some(CatalogEntry { name, programs })
    })
}
