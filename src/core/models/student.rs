//! Student snapshot model

use super::{AdmissionType, ProgramType, StudentKind};
use crate::core::error::AdvisorError;
use serde::{Deserialize, Serialize};

/// Completed credits per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditLedger {
    /// 기초교양(기초문해)
    pub basic_literacy: u32,
    /// 기초교양(기초과학)
    pub basic_science: u32,
    /// 핵심교양
    pub core_liberal: u32,
    /// Home-major 전공필수
    pub major_required: u32,
    /// Home-major 전공선택
    pub major_elective: u32,
    /// Free electives (잔여 학점)
    pub free: u32,
    /// Multi-major 전공필수 (existing participants only)
    pub multi_required: u32,
    /// Multi-major 전공선택 (existing participants only)
    pub multi_elective: u32,
}

/// Everything the core needs to know about one student for one request
///
/// Built fresh per request and never mutated by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSnapshot {
    /// Applicant or existing participant
    #[serde(default)]
    pub kind: StudentKind,
    /// Admission (catalog) year
    pub admission_year: u32,
    /// Home major
    pub primary_major: String,
    /// Admission type
    pub admission_type: AdmissionType,
    /// Semesters completed so far
    pub completed_semesters: u32,
    /// Credits recognized on transfer
    #[serde(default)]
    pub transfer_credits: u32,
    /// Completed credits by category
    #[serde(default)]
    pub credits: CreditLedger,
    /// Desired multi-major (new applicants)
    #[serde(default)]
    pub desired_multi_major: Option<String>,
    /// Program currently enrolled in (existing participants)
    #[serde(default)]
    pub current_program: Option<ProgramType>,
    /// Multi-major currently enrolled in (existing participants)
    #[serde(default)]
    pub current_multi_major: Option<String>,
}

impl StudentSnapshot {
    /// Create a snapshot with no completed credits
    #[must_use]
    pub fn new(
        admission_year: u32,
        primary_major: &str,
        admission_type: AdmissionType,
        completed_semesters: u32,
    ) -> Self {
        Self {
            kind: StudentKind::NewApplicant,
            admission_year,
            primary_major: primary_major.to_string(),
            admission_type,
            completed_semesters,
            transfer_credits: 0,
            credits: CreditLedger::default(),
            desired_multi_major: None,
            current_program: None,
            current_multi_major: None,
        }
    }

    /// Parse a snapshot from TOML
    ///
    /// # Errors
    /// Returns [`AdvisorError::StudentFile`] when the TOML is malformed or a
    /// closed-set field (admission type, program type, student type) holds an
    /// unknown value.
    pub fn from_toml(toml_str: &str) -> Result<Self, AdvisorError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a snapshot file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, AdvisorError> {
        let content = std::fs::read_to_string(path).map_err(|source| AdvisorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Check that the fields needed by the student's kind are present
    ///
    /// # Errors
    /// Returns [`AdvisorError::MissingField`] for an existing participant
    /// without a current program or multi-major, or a new applicant without a
    /// desired multi-major.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        match self.kind {
            StudentKind::NewApplicant => {
                if self.desired_multi_major.as_deref().is_none_or(str::is_empty) {
                    return Err(AdvisorError::MissingField {
                        field: "desired_multi_major",
                        context: "new applicants must name the multi-major they want",
                    });
                }
            }
            StudentKind::CurrentParticipant => {
                if self.current_program.is_none() {
                    return Err(AdvisorError::MissingField {
                        field: "current_program",
                        context: "existing participants must name their program",
                    });
                }
                if self.current_multi_major.as_deref().is_none_or(str::is_empty) {
                    return Err(AdvisorError::MissingField {
                        field: "current_multi_major",
                        context: "existing participants must name their multi-major",
                    });
                }
            }
        }
        Ok(())
    }

    /// Total credits completed so far
    ///
    /// Freshmen count general education; transfers count recognized transfer
    /// credits instead. Multi-major credits count only when
    /// `include_multi_major` is set (existing participants). The sum saturates
    /// at `u32::MAX`.
    #[must_use]
    pub const fn completed_total(&self, include_multi_major: bool) -> u32 {
        let c = &self.credits;
        let mut total = c
            .major_required
            .saturating_add(c.major_elective)
            .saturating_add(c.free);
        if self.admission_type.is_freshman() {
            total = total
                .saturating_add(c.basic_literacy)
                .saturating_add(c.basic_science)
                .saturating_add(c.core_liberal);
        } else {
            total = total.saturating_add(self.transfer_credits);
        }
        if include_multi_major {
            total = total
                .saturating_add(c.multi_required)
                .saturating_add(c.multi_elective);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_reads_korean_labels() {
        let student = StudentSnapshot::from_toml(
            r#"
kind = "기존 참여자"
admission_year = 2022
primary_major = "경영학전공"
admission_type = "신입학"
completed_semesters = 5
current_program = "부전공"
current_multi_major = "통계학전공"

[credits]
major_required = 12
multi_required = 6
"#,
        )
        .unwrap();

        assert_eq!(student.kind, StudentKind::CurrentParticipant);
        assert_eq!(student.current_program, Some(ProgramType::Minor));
        assert_eq!(student.credits.major_required, 12);
        assert_eq!(student.credits.major_elective, 0);
        assert!(student.validate().is_ok());
    }

    #[test]
    fn test_from_toml_rejects_unknown_admission_type() {
        let result = StudentSnapshot::from_toml(
            r#"
admission_year = 2022
primary_major = "경영학전공"
admission_type = "2학년 편입학"
completed_semesters = 2
"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("2학년 편입학"));
    }

    #[test]
    fn test_validate_requires_desired_major() {
        let student = StudentSnapshot::new(2023, "경영학전공", AdmissionType::Freshman, 2);
        assert!(matches!(
            student.validate(),
            Err(AdvisorError::MissingField {
                field: "desired_multi_major",
                ..
            })
        ));
    }

    #[test]
    fn test_completed_total_by_admission_type() {
        let mut student = StudentSnapshot::new(2023, "경영학전공", AdmissionType::Freshman, 4);
        student.transfer_credits = 60;
        student.credits = CreditLedger {
            basic_literacy: 6,
            basic_science: 3,
            core_liberal: 9,
            major_required: 9,
            major_elective: 20,
            free: 10,
            multi_required: 3,
            multi_elective: 3,
        };
        assert_eq!(student.completed_total(false), 57);
        assert_eq!(student.completed_total(true), 63);

        student.admission_type = AdmissionType::TransferOtherField;
        assert_eq!(student.completed_total(false), 99);
    }

    #[test]
    fn test_completed_total_saturates() {
        let mut student = StudentSnapshot::new(2023, "경영학전공", AdmissionType::Freshman, 4);
        student.credits.free = u32::MAX;
        student.credits.major_required = 20;
        student.credits.multi_elective = 9;
        assert_eq!(student.completed_total(false), u32::MAX);
        assert_eq!(student.completed_total(true), u32::MAX);

        student.admission_type = AdmissionType::TransferOtherField;
        student.credits.free = 0;
        student.transfer_credits = u32::MAX;
        assert_eq!(student.completed_total(false), u32::MAX);
    }
}
