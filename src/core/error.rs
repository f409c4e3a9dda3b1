//! Error and data-quality warning types

use std::fmt;
use std::path::PathBuf;

/// Failures surfaced to callers of the advisor core.
///
/// Missing reference data is never an error (lookups degrade to defaults) and
/// arithmetic anomalies are clamped and reported as [`DataWarning`]s instead.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// Admission type outside the closed set accepted by the intake form
    #[error(
        "Invalid admission type: '{0}' \
         (expected 신입학, 3학년 편입학(동일계) or 3학년 편입학(비동일계))"
    )]
    InvalidAdmissionType(String),

    /// Program type outside the closed set of multi-major programs
    #[error(
        "Invalid program type: '{0}' \
         (expected 복수전공, 부전공, 융합전공, 융합부전공, 연계전공 or 마이크로디그리)"
    )]
    InvalidProgramType(String),

    /// Student kind other than new applicant / existing participant
    #[error("Invalid student type: '{0}' (expected 신규 신청자 or 기존 참여자)")]
    InvalidStudentKind(String),

    /// A field required for the requested evaluation was not supplied
    #[error("Missing field `{field}`: {context}")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
        /// Why the field is needed
        context: &'static str,
    },

    /// Reading an input file failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A requirement table is structurally unusable
    #[error("{source_name}:{line}: {message}")]
    Table {
        /// Table file name (or label for in-memory content)
        source_name: String,
        /// 1-based line number
        line: usize,
        /// What was wrong
        message: String,
    },

    /// A student snapshot file could not be decoded
    #[error("Failed to parse student file: {0}")]
    StudentFile(#[from] toml::de::Error),
}

/// Data-quality findings recorded alongside results instead of failing them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataWarning {
    /// A negative credit value in a table was clamped to zero
    NegativeValueClamped {
        /// Table label
        table: String,
        /// 1-based line number
        line: usize,
        /// Canonical column name
        column: &'static str,
        /// Raw value before clamping
        value: i64,
    },
    /// A table cell could not be read as a number and its default was used
    UnreadableValue {
        /// Table label
        table: String,
        /// 1-based line number
        line: usize,
        /// Canonical column name
        column: &'static str,
        /// Raw cell text
        raw: String,
    },
    /// A table row was skipped
    RowSkipped {
        /// Table label
        table: String,
        /// 1-based line number
        line: usize,
        /// Why the row was dropped
        reason: String,
    },
    /// The student reports more completed semesters than the program has
    SemestersExceedProgram {
        /// Semesters the student reported
        completed: u32,
        /// Program length for the admission type
        total: u32,
    },
    /// No requirement record matched and the built-in default was used
    RequirementDefaulted {
        /// Which table was consulted
        table: &'static str,
        /// Major that was looked up
        major: String,
        /// Program type label
        program: &'static str,
    },
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeValueClamped {
                table,
                line,
                column,
                value,
            } => write!(f, "{table}:{line}: negative {column} ({value}) clamped to 0"),
            Self::UnreadableValue {
                table,
                line,
                column,
                raw,
            } => write!(f, "{table}:{line}: unreadable {column} '{raw}', default used"),
            Self::RowSkipped {
                table,
                line,
                reason,
            } => write!(f, "{table}:{line}: row skipped ({reason})"),
            Self::SemestersExceedProgram { completed, total } => write!(
                f,
                "completed semesters ({completed}) exceed program length ({total}); \
                 no semesters remain"
            ),
            Self::RequirementDefaulted {
                table,
                major,
                program,
            } => write!(
                f,
                "no {table} requirement for {major} ({program}); built-in default used"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_bad_value() {
        let err = AdvisorError::InvalidProgramType("삼중전공".to_string());
        assert!(err.to_string().contains("삼중전공"));

        let err = AdvisorError::Table {
            source_name: "multi.csv".to_string(),
            line: 1,
            message: "missing major column".to_string(),
        };
        assert_eq!(err.to_string(), "multi.csv:1: missing major column");
    }

    #[test]
    fn test_warning_display() {
        let warning = DataWarning::SemestersExceedProgram {
            completed: 9,
            total: 8,
        };
        assert!(warning.to_string().contains("(9)"));
    }
}
