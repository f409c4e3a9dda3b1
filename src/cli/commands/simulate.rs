//! Simulate and evaluate command handlers

use super::load_advisor;
use multimajor_advisor::config::Config;
use multimajor_advisor::core::models::{
    CategoryCredits, CreditAnalysis, PlanCategory, ProgramType, SemesterAllocation,
    SimulationResult, StudentSnapshot,
};
use multimajor_advisor::core::Participation;
use multimajor_advisor::{error, info, verbose};
use std::path::Path;

/// Run the full advising flow for a student file
pub fn run(student_file: &Path, config: &Config) {
    if let Err(e) = simulate(student_file, config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Evaluate one program for a student file
pub fn run_single(student_file: &Path, program: ProgramType, target: &str, config: &Config) {
    if let Err(e) = evaluate(student_file, program, target, config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn load_student(student_file: &Path) -> Result<StudentSnapshot, String> {
    let student = StudentSnapshot::from_file(student_file).map_err(|e| {
        error!("Failed to load student {}: {e}", student_file.display());
        format!("✗ Failed to load {}: {e}", student_file.display())
    })?;
    info!("Student loaded: {}", student_file.display());
    Ok(student)
}

fn simulate(student_file: &Path, config: &Config) -> Result<(), String> {
    let student = load_student(student_file)?;
    let advisor = load_advisor(config)?;
    let output = advisor
        .run(&student)
        .map_err(|e| format!("✗ Invalid student file {}: {e}", student_file.display()))?;

    print_student(&student);
    println!("\n=== Current Status (home major only) ===\n");
    print_analysis(&output.current_analysis, false);
    let mark = if output.current_can_graduate { "✓" } else { "✗" };
    println!("{mark} On-time graduation without a multi-major");

    for result in &output.results {
        print_result(result);
    }
    Ok(())
}

fn evaluate(
    student_file: &Path,
    program: ProgramType,
    target: &str,
    config: &Config,
) -> Result<(), String> {
    let student = load_student(student_file)?;
    let advisor = load_advisor(config)?;
    let participation = Participation::from(student.kind);
    let result = advisor.evaluate_with_plan(&student, program, target, participation);

    print_student(&student);
    print_result(&result);
    Ok(())
}

fn print_student(student: &StudentSnapshot) {
    println!("\n=== Student ===\n");
    println!("  Major: {} ({}학번)", student.primary_major, student.admission_year);
    println!(
        "  Admission: {}, {} semesters completed",
        student.admission_type, student.completed_semesters
    );
    println!("  Type: {}", student.kind);
}

fn print_category(label: &str, credits: CategoryCredits) {
    println!(
        "  {label:<12} {:>3} / {:>3}  (deficit {})",
        credits.completed, credits.required, credits.deficit
    );
}

fn print_analysis(analysis: &CreditAnalysis, with_multi: bool) {
    print_category("본전공 필수", analysis.major_required);
    print_category("본전공 선택", analysis.major_elective);
    if with_multi {
        print_category("다전공 필수", analysis.multi_required);
        print_category("다전공 선택", analysis.multi_elective);
    }
    if analysis.general_education_deficit() > 0 || analysis.basic_literacy.required > 0 {
        print_category("기초문해", analysis.basic_literacy);
        print_category("기초과학", analysis.basic_science);
        print_category("핵심교양", analysis.core_liberal);
    }
    print_category("졸업학점", analysis.graduation);
    println!(
        "  {} semesters left, up to {} more credits",
        analysis.remaining_semesters, analysis.max_additional_credits
    );
}

fn print_result(result: &SimulationResult) {
    let marker = if result.recommended { " ★ recommended" } else { "" };
    let heading = if result.rank > 0 {
        format!("#{} {} {}", result.rank, result.multi_major, result.program_type)
    } else {
        format!("{} {}", result.multi_major, result.program_type)
    };
    println!("\n=== {heading}{marker} ===\n");

    let mark = if result.can_graduate { "✓" } else { "✗" };
    println!("{mark} Status: {}", result.status);
    if !result.reason.is_empty() {
        println!("  {}", result.reason);
    }
    print_analysis(&result.analysis, true);

    if result.primary_source.is_estimate() || result.multi_source.is_estimate() {
        println!(
            "  Note: requirements estimated (home major: {}, multi-major: {})",
            result.primary_source, result.multi_source
        );
    }
    for warning in &result.warnings {
        verbose!("  ! {warning}");
    }

    print_plan(&result.semester_plan);
}

fn print_plan(plan: &[SemesterAllocation]) {
    if plan.is_empty() {
        println!("\n  No further semesters to plan.");
        return;
    }
    println!("\n  Semester plan:");
    for semester in plan {
        let parts: Vec<String> = PlanCategory::ALL
            .iter()
            .filter(|&&c| semester.credits.get(c) > 0)
            .map(|&c| format!("{} {}", c.label(), semester.credits.get(c)))
            .collect();
        println!(
            "    {}: {:>2}학점  [{}]",
            semester.label(),
            semester.total,
            parts.join(", ")
        );
    }
}
