//! Closed enumerations shared by the tables, the evaluator and the CLI

use crate::core::error::AdvisorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Multi-major program types offered alongside a home major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProgramType {
    /// 복수전공: a second full major, two degree credentials
    DoubleMajor,
    /// 부전공: reduced-credit secondary specialization
    Minor,
    /// 융합전공: interdisciplinary major spanning departments
    ConvergenceMajor,
    /// 융합부전공: interdisciplinary minor
    ConvergenceMinor,
    /// 연계전공: pathway assembled from existing courses across majors
    LinkedMajor,
    /// 마이크로디그리: smallest-unit specialization certificate
    MicroDegree,
}

impl ProgramType {
    /// Every program type, in ranking-priority order
    pub const ALL: [Self; 6] = [
        Self::DoubleMajor,
        Self::ConvergenceMajor,
        Self::Minor,
        Self::ConvergenceMinor,
        Self::LinkedMajor,
        Self::MicroDegree,
    ];

    /// Label used in requirement tables and student files
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DoubleMajor => "복수전공",
            Self::Minor => "부전공",
            Self::ConvergenceMajor => "융합전공",
            Self::ConvergenceMinor => "융합부전공",
            Self::LinkedMajor => "연계전공",
            Self::MicroDegree => "마이크로디그리",
        }
    }

    /// Tie-break priority used by the ranker (lower is preferred)
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::DoubleMajor => 1,
            Self::ConvergenceMajor => 2,
            Self::Minor => 3,
            Self::ConvergenceMinor => 4,
            Self::LinkedMajor => 5,
            Self::MicroDegree => 6,
        }
    }

    /// Built-in `(required, elective, total)` multi-major requirement used when
    /// the multi-major table has no usable row
    #[must_use]
    pub const fn default_multi_requirement(self) -> (u32, u32, u32) {
        match self {
            Self::Minor | Self::ConvergenceMinor => (6, 15, 21),
            Self::DoubleMajor
            | Self::ConvergenceMajor
            | Self::LinkedMajor
            | Self::MicroDegree => (15, 21, 36),
        }
    }

    /// Whether declaring this program switches the home major onto its
    /// reduced ("changed") requirement columns
    #[must_use]
    pub const fn changes_primary_requirements(self) -> bool {
        !matches!(self, Self::MicroDegree)
    }

    /// One-line benefit statement used in recommendation reasons
    #[must_use]
    pub const fn benefit(self) -> &'static str {
        match self {
            Self::DoubleMajor => "학위 2개 취득 가능",
            Self::Minor => "비교적 적은 학점으로 이수 가능",
            Self::ConvergenceMajor => "융합적 역량 강화",
            Self::ConvergenceMinor => "적은 학점으로 융합 역량 확보",
            Self::LinkedMajor => "다양한 학문 간 연계 학습",
            Self::MicroDegree => "소단위 과정으로 빠르게 역량 인증",
        }
    }
}

impl FromStr for ProgramType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(program) = Self::ALL.into_iter().find(|p| p.label() == trimmed) {
            return Ok(program);
        }
        match trimmed.to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "double-major" | "double" => Ok(Self::DoubleMajor),
            "minor" => Ok(Self::Minor),
            "convergence-major" | "convergence" => Ok(Self::ConvergenceMajor),
            "convergence-minor" => Ok(Self::ConvergenceMinor),
            "linked-major" | "linked" => Ok(Self::LinkedMajor),
            "micro-degree" | "microdegree" | "micro" | "마이크로" => Ok(Self::MicroDegree),
            _ => Err(AdvisorError::InvalidProgramType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ProgramType {
    type Error = AdvisorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProgramType> for String {
    fn from(value: ProgramType) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the student entered the university
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AdmissionType {
    /// 신입학: direct-entry freshman, 8-semester program
    Freshman,
    /// 3학년 편입학(동일계): 3rd-year transfer from the same field
    TransferSameField,
    /// 3학년 편입학(비동일계): 3rd-year transfer from a different field
    TransferOtherField,
}

/// Program length in semesters for direct-entry freshmen
pub const FRESHMAN_TOTAL_SEMESTERS: u32 = 8;

/// Program length in semesters for 3rd-year transfers
pub const TRANSFER_TOTAL_SEMESTERS: u32 = 4;

impl AdmissionType {
    /// Label used on the intake form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Freshman => "신입학",
            Self::TransferSameField => "3학년 편입학(동일계)",
            Self::TransferOtherField => "3학년 편입학(비동일계)",
        }
    }

    /// Whether the student entered as a direct-entry freshman
    #[must_use]
    pub const fn is_freshman(self) -> bool {
        matches!(self, Self::Freshman)
    }

    /// Total semesters the student spends enrolled
    #[must_use]
    pub const fn total_semesters(self) -> u32 {
        if self.is_freshman() {
            FRESHMAN_TOTAL_SEMESTERS
        } else {
            TRANSFER_TOTAL_SEMESTERS
        }
    }

    /// Grade the student is in when their first enrolled semester starts
    #[must_use]
    pub const fn starting_grade(self) -> u32 {
        if self.is_freshman() {
            1
        } else {
            3
        }
    }
}

impl FromStr for AdmissionType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "신입학" | "freshman" => Ok(Self::Freshman),
            "3학년 편입학(동일계)" | "편입학(동일계)" | "transfer-same" => {
                Ok(Self::TransferSameField)
            }
            "3학년 편입학(비동일계)" | "편입학(비동일계)" | "transfer-other" => {
                Ok(Self::TransferOtherField)
            }
            _ => Err(AdvisorError::InvalidAdmissionType(s.to_string())),
        }
    }
}

impl TryFrom<String> for AdmissionType {
    type Error = AdvisorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AdmissionType> for String {
    fn from(value: AdmissionType) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for AdmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the student is shopping for a program or already enrolled in one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StudentKind {
    /// 신규 신청자
    #[default]
    NewApplicant,
    /// 기존 참여자
    CurrentParticipant,
}

impl StudentKind {
    /// Label used on the intake form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewApplicant => "신규 신청자",
            Self::CurrentParticipant => "기존 참여자",
        }
    }
}

impl FromStr for StudentKind {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "신규 신청자" | "신규" | "new" | "new-applicant" => Ok(Self::NewApplicant),
            "기존 참여자" | "기존" | "current" | "current-participant" => {
                Ok(Self::CurrentParticipant)
            }
            _ => Err(AdvisorError::InvalidStudentKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for StudentKind {
    type Error = AdvisorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StudentKind> for String {
    fn from(value: StudentKind) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for StudentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-level feasibility classification, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GraduationStatus {
    /// 가능: completable with slack to spare
    Possible,
    /// 위험: completable only with near-maximal loads every semester
    AtRisk,
    /// 어려움: outstanding credits exceed what the remaining semesters allow
    Infeasible,
}

impl GraduationStatus {
    /// Ordinal used as the first ranking key
    #[must_use]
    pub const fn tier(self) -> u8 {
        match self {
            Self::Possible => 0,
            Self::AtRisk => 1,
            Self::Infeasible => 2,
        }
    }

    /// Whether the student can still graduate on time under this status
    #[must_use]
    pub const fn can_graduate(self) -> bool {
        !matches!(self, Self::Infeasible)
    }

    /// Korean label shown to students
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Possible => "가능",
            Self::AtRisk => "위험",
            Self::Infeasible => "어려움",
        }
    }
}

impl fmt::Display for GraduationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
