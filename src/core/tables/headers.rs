//! Header normalization for requirement tables
//!
//! Spreadsheet exports spell the same column several ways
//! (`본전공_전공필수`, `본전공 전공필수`, `req_major_required`, ...). Every header
//! is folded once at load time onto a canonical [`Column`]; nothing downstream
//! looks at raw header text.

use std::collections::HashMap;

/// Canonical requirement-table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Major (or course) name
    Major,
    /// Program type
    ProgramType,
    /// Reference admission year
    AdmissionYear,
    /// Home-major 전공필수
    MajorRequired,
    /// Home-major 전공선택
    MajorElective,
    /// Home-major 전공필수 once a program is declared
    MajorRequiredChanged,
    /// Home-major 전공선택 once a program is declared
    MajorElectiveChanged,
    /// 기초교양(기초문해)
    BasicLiteracy,
    /// 기초교양(기초과학)
    BasicScience,
    /// 핵심교양
    CoreLiberal,
    /// Graduation credits
    GraduationCredits,
    /// Multi-major 전공필수
    MultiRequired,
    /// Multi-major 전공선택
    MultiElective,
    /// Multi-major total
    MultiTotal,
    /// Double-major graduation-credit ceiling
    MaxGraduationCredits,
}

const ALIASES: &[(&str, Column)] = &[
    ("전공명", Column::Major),
    ("과정명", Column::Major),
    ("major", Column::Major),
    ("majorname", Column::Major),
    ("제도유형", Column::ProgramType),
    ("제도", Column::ProgramType),
    ("programtype", Column::ProgramType),
    ("기준학번", Column::AdmissionYear),
    ("학번", Column::AdmissionYear),
    ("admissionyear", Column::AdmissionYear),
    ("본전공전공필수", Column::MajorRequired),
    ("reqmajorrequired", Column::MajorRequired),
    ("majorrequired", Column::MajorRequired),
    ("본전공전공선택", Column::MajorElective),
    ("reqmajorelective", Column::MajorElective),
    ("majorelective", Column::MajorElective),
    ("본전공변화전공필수", Column::MajorRequiredChanged),
    ("reqmajorrequiredchanged", Column::MajorRequiredChanged),
    ("majorrequiredchanged", Column::MajorRequiredChanged),
    ("본전공변화전공선택", Column::MajorElectiveChanged),
    ("reqmajorelectivechanged", Column::MajorElectiveChanged),
    ("majorelectivechanged", Column::MajorElectiveChanged),
    ("기초교양기초문해", Column::BasicLiteracy),
    ("기초문해", Column::BasicLiteracy),
    ("reqbasicliteracy", Column::BasicLiteracy),
    ("basicliteracy", Column::BasicLiteracy),
    ("기초교양기초과학", Column::BasicScience),
    ("기초과학", Column::BasicScience),
    ("reqbasicscience", Column::BasicScience),
    ("basicscience", Column::BasicScience),
    ("핵심교양", Column::CoreLiberal),
    ("reqcoreliberal", Column::CoreLiberal),
    ("coreliberal", Column::CoreLiberal),
    ("졸업학점", Column::GraduationCredits),
    ("graduationcredits", Column::GraduationCredits),
    ("다전공전공필수", Column::MultiRequired),
    ("reqmultirequired", Column::MultiRequired),
    ("multirequired", Column::MultiRequired),
    ("다전공전공선택", Column::MultiElective),
    ("reqmultielective", Column::MultiElective),
    ("multielective", Column::MultiElective),
    ("다전공계", Column::MultiTotal),
    ("multitotal", Column::MultiTotal),
    ("total", Column::MultiTotal),
    ("최대졸업학점", Column::MaxGraduationCredits),
    ("maxgraduationcredits", Column::MaxGraduationCredits),
];

impl Column {
    /// Canonical snake-case name, used in warnings
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::ProgramType => "program_type",
            Self::AdmissionYear => "admission_year",
            Self::MajorRequired => "req_major_required",
            Self::MajorElective => "req_major_elective",
            Self::MajorRequiredChanged => "req_major_required_changed",
            Self::MajorElectiveChanged => "req_major_elective_changed",
            Self::BasicLiteracy => "req_basic_literacy",
            Self::BasicScience => "req_basic_science",
            Self::CoreLiberal => "req_core_liberal",
            Self::GraduationCredits => "graduation_credits",
            Self::MultiRequired => "req_multi_required",
            Self::MultiElective => "req_multi_elective",
            Self::MultiTotal => "total",
            Self::MaxGraduationCredits => "max_graduation_credits",
        }
    }

    /// Map a raw header cell onto its canonical column
    #[must_use]
    pub fn from_header(raw: &str) -> Option<Self> {
        let folded = fold_header(raw);
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == folded)
            .map(|&(_, column)| column)
    }
}

/// Fold a header for alias comparison: drop a BOM, whitespace, `_`, `-` and
/// parentheses, lowercase the rest
fn fold_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '_' | '-' | '(' | ')'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Column positions for one table
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    positions: HashMap<Column, usize>,
}

impl HeaderMap {
    /// Build from the header cells; the first cell naming a column wins
    #[must_use]
    pub fn from_cells(cells: &[String]) -> Self {
        let mut positions = HashMap::new();
        for (idx, cell) in cells.iter().enumerate() {
            if let Some(column) = Column::from_header(cell) {
                positions.entry(column).or_insert(idx);
            }
        }
        Self { positions }
    }

    /// Position of a column, if present
    #[must_use]
    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    /// Whether the table has a column
    #[must_use]
    pub fn has(&self, column: Column) -> bool {
        self.positions.contains_key(&column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelling_variants_fold_together() {
        for raw in ["본전공_전공필수", "본전공 전공필수", "req_major_required", "Major Required"] {
            assert_eq!(Column::from_header(raw), Some(Column::MajorRequired), "{raw}");
        }
        for raw in ["기초교양(기초문해)", "기초교양_기초문해", "기초문해"] {
            assert_eq!(Column::from_header(raw), Some(Column::BasicLiteracy), "{raw}");
        }
        assert_eq!(Column::from_header("\u{feff}전공명"), Some(Column::Major));
        assert_eq!(Column::from_header("비고"), None);
    }

    #[test]
    fn test_changed_columns_stay_distinct() {
        assert_eq!(
            Column::from_header("본전공변화_전공선택"),
            Some(Column::MajorElectiveChanged)
        );
        assert_eq!(Column::from_header("본전공_전공선택"), Some(Column::MajorElective));
    }

    #[test]
    fn test_header_map_first_wins() {
        let cells: Vec<String> = ["전공명", "major", "제도유형"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let map = HeaderMap::from_cells(&cells);
        assert_eq!(map.position(Column::Major), Some(0));
        assert_eq!(map.position(Column::ProgramType), Some(2));
        assert!(!map.has(Column::AdmissionYear));
    }
}
