//! Integration tests for requirement-table loading and lookup

use multimajor_advisor::core::error::DataWarning;
use multimajor_advisor::core::models::ProgramType;
use multimajor_advisor::core::tables::{self, parse_multi_csv, parse_primary_csv};
use multimajor_advisor::core::{AdvisorError, RequirementRepository, RequirementSource};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn tables_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples").join("tables")
}

fn sample_repository() -> RequirementRepository {
    RequirementRepository::load(
        &tables_dir().join("primary_requirements.csv"),
        &tables_dir().join("multi_requirements.csv"),
    )
    .expect("sample tables load")
}

#[test]
fn test_sample_tables_load() {
    let repo = sample_repository();

    assert_eq!(repo.primary_rows().len(), 10);
    assert_eq!(repo.multi_rows().len(), 8);

    let architecture = repo
        .multi_rows()
        .iter()
        .find(|r| r.major == "건축학전공(5년제)")
        .expect("five-year program row");
    assert_eq!(architecture.max_graduation_credits, Some(164));
    assert!(repo
        .multi_rows()
        .iter()
        .filter(|r| r.major != "건축학전공(5년제)")
        .all(|r| r.max_graduation_credits.is_none()));
}

#[test]
fn test_exact_lookup() {
    let repo = sample_repository();

    let found = repo.lookup_primary("경영학전공", ProgramType::DoubleMajor, 2023);
    assert_eq!(found.source, RequirementSource::Exact);
    assert_eq!(found.record.major_required_changed, 12);
    assert_eq!(found.record.major_elective_changed, 27);
    assert_eq!(found.record.core_liberal, Some(9));
    assert_eq!(found.record.graduation_credits, 120);

    // Surrounding whitespace does not defeat an exact match
    let found = repo.lookup_multi("  통계학전공 ", ProgramType::Minor, 2023);
    assert_eq!(found.source, RequirementSource::Exact);
    assert_eq!(
        (found.record.multi_required, found.record.multi_elective, found.record.total),
        (6, 15, 21)
    );
}

#[test]
fn test_nearest_year_lookup() {
    let repo = sample_repository();

    let found = repo.lookup_primary("경영학전공", ProgramType::DoubleMajor, 2021);
    assert_eq!(found.source, RequirementSource::NearestYear { year: 2020 });
    assert_eq!(found.record.graduation_credits, 130);
    assert_eq!(found.record.basic_literacy, None);

    let found = repo.lookup_primary("경영학전공", ProgramType::DoubleMajor, 2022);
    assert_eq!(found.source, RequirementSource::NearestYear { year: 2023 });

    let found = repo.lookup_multi("통계학전공", ProgramType::LinkedMajor, 2019);
    assert_eq!(found.source, RequirementSource::NearestYear { year: 2023 });
    assert_eq!(found.record.total, 36);
}

#[test]
fn test_normalized_name_lookup() {
    let repo = sample_repository();

    let found = repo.lookup_primary("경영학전공(서울)", ProgramType::Minor, 2023);
    assert_eq!(found.source, RequirementSource::NormalizedName);
    assert_eq!(found.record.major, "경영학전공");

    let found = repo.lookup_multi("통계학", ProgramType::DoubleMajor, 2023);
    assert_eq!(found.source, RequirementSource::NormalizedName);
    assert_eq!(found.record.multi_required, 15);
}

#[test]
fn test_default_lookup() {
    let repo = sample_repository();

    let found = repo.lookup_primary("철학과", ProgramType::DoubleMajor, 2023);
    assert_eq!(found.source, RequirementSource::Default);
    assert_eq!(found.record.major, "철학과");
    assert_eq!(
        found.record.major_requirement_for(ProgramType::DoubleMajor),
        (15, 33)
    );
    assert_eq!(found.record.graduation_credits, 120);

    let found = repo.lookup_multi("철학과", ProgramType::Minor, 2023);
    assert_eq!(found.source, RequirementSource::Default);
    assert_eq!(
        (found.record.multi_required, found.record.multi_elective, found.record.total),
        (6, 15, 21)
    );
    assert!(found.source.is_estimate());
}

#[test]
fn test_sample_catalog() {
    let catalog = tables::load_catalog(&tables_dir().join("majors.csv")).expect("catalog loads");

    assert_eq!(catalog.len(), 6);
    assert!(catalog.is_convergence("빅데이터융합전공"));
    assert!(!catalog.is_convergence("통계학전공"));
    assert!(catalog.is_micro_degree("AI 기초 과정"));
    assert!(!catalog.is_micro_degree("경영학전공"));
    assert_eq!(catalog.canonical_name("통계학"), "통계학전공");
    assert_eq!(catalog.canonical_name(" 철학과 "), "철학과");

    let bigdata = catalog.find("빅데이터융합전공").expect("convergence entry");
    assert_eq!(
        bigdata.programs,
        vec![
            ProgramType::ConvergenceMajor,
            ProgramType::ConvergenceMinor,
            ProgramType::LinkedMajor
        ]
    );
}

#[test]
fn test_dirty_table_records_warnings() {
    let content = "\
major,program_type,admission_year,req_major_required,req_major_elective,graduation_credits
철학과,복수전공,2023,-3,abc,

철학과,이중전공,2023,15,33,120
,복수전공,2023,15,33,120
철학과,부전공,이천이십삼,15,33,120
철학과,부전공,2023.0,\"1,5\",33,120
";

    let parsed = parse_primary_csv(content, "dirty.csv").expect("header is valid");

    assert_eq!(parsed.rows.len(), 2);
    let first = &parsed.rows[0];
    assert_eq!(first.major_required, 0);
    assert_eq!(first.major_elective, 33);
    assert_eq!(first.graduation_credits, 120);
    let second = &parsed.rows[1];
    assert_eq!(second.program_type, ProgramType::Minor);
    assert_eq!(second.admission_year, 2023);
    assert_eq!(second.major_required, 15);

    assert_eq!(parsed.warnings.len(), 5);
    assert_eq!(
        parsed.warnings[0],
        DataWarning::NegativeValueClamped {
            table: "dirty.csv".to_string(),
            line: 2,
            column: "req_major_required",
            value: -3,
        }
    );
    assert!(matches!(
        &parsed.warnings[1],
        DataWarning::UnreadableValue { line: 2, raw, .. } if raw == "abc"
    ));
    let skipped_lines: Vec<usize> = parsed
        .warnings
        .iter()
        .filter_map(|w| match w {
            DataWarning::RowSkipped { line, .. } => Some(*line),
            _ => None,
        })
        .collect();
    assert_eq!(skipped_lines, vec![4, 5, 6]);
}

#[test]
fn test_blank_multi_cells_take_program_defaults() {
    let content = "\
major,program_type,admission_year,req_multi_required,req_multi_elective,total
철학과,부전공,2024,,,
철학과,융합부전공,2024,,9,
철학과,복수전공,2024,,,
철학과,연계전공,2024,18,,40
";

    let parsed = parse_multi_csv(content, "multi.csv").expect("header is valid");
    let triples: Vec<_> = parsed
        .rows
        .iter()
        .map(|r| (r.program_type, r.multi_required, r.multi_elective, r.total))
        .collect();

    assert_eq!(
        triples,
        vec![
            (ProgramType::Minor, 6, 15, 21),
            (ProgramType::ConvergenceMinor, 6, 9, 15),
            (ProgramType::DoubleMajor, 15, 21, 36),
            (ProgramType::LinkedMajor, 18, 21, 40),
        ]
    );
    assert!(parsed.warnings.is_empty());
}

#[test]
fn test_table_files_on_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let primary = temp_dir.path().join("primary.csv");
    let multi = temp_dir.path().join("multi.csv");

    fs::write(
        &primary,
        "전공명,제도유형,기준학번,본전공 전공필수,본전공 전공선택,졸업학점\n\
         철학과,부전공,2024,12,30,125\n",
    )
    .expect("write primary");
    fs::write(
        &multi,
        "major,program_type,admission_year,req_multi_required,req_multi_elective\n\
         철학과,부전공,2024,9,12\n",
    )
    .expect("write multi");

    let repo = RequirementRepository::load(&primary, &multi).expect("tables load");

    let found = repo.lookup_primary("철학과", ProgramType::Minor, 2024);
    assert_eq!(found.source, RequirementSource::Exact);
    assert_eq!(found.record.major_requirement_for(ProgramType::Minor), (12, 30));
    assert_eq!(found.record.graduation_credits, 125);

    // Missing total column falls back to required + elective
    let found = repo.lookup_multi("철학과", ProgramType::Minor, 2024);
    assert_eq!(found.record.total, 21);
}

#[test]
fn test_missing_required_column_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let primary = temp_dir.path().join("primary.csv");
    fs::write(&primary, "major,program_type\n철학과,부전공\n").expect("write primary");

    let err = RequirementRepository::load(&primary, &temp_dir.path().join("multi.csv"))
        .expect_err("header without admission year is rejected");
    assert!(matches!(err, AdvisorError::Table { line: 1, .. }));
    assert!(err.to_string().contains("admission_year"));
    assert!(err.to_string().starts_with("primary.csv:1:"));
}

#[test]
fn test_missing_files_give_empty_repository() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let repo = RequirementRepository::load(
        &temp_dir.path().join("absent_primary.csv"),
        &temp_dir.path().join("absent_multi.csv"),
    )
    .expect("missing files are tolerated");

    assert!(repo.primary_rows().is_empty());
    assert!(repo.multi_rows().is_empty());
}
