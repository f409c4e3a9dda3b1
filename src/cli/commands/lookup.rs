//! Lookup command handler

use super::load_repository;
use multimajor_advisor::config::Config;
use multimajor_advisor::core::models::ProgramType;

/// Print the record a requirement lookup resolves to, and how it was found
pub fn run(major: &str, program: ProgramType, year: u32, multi: bool, config: &Config) {
    let repo = match load_repository(config) {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if multi {
        let found = repo.lookup_multi(major, program, year);
        let r = &found.record;
        println!("\n=== Multi-major requirement ===\n");
        println!("  Source: {}", found.source);
        println!("  Major: {} ({}, {})", r.major, r.program_type, r.admission_year);
        println!("  다전공 필수: {}", r.multi_required);
        println!("  다전공 선택: {}", r.multi_elective);
        println!("  계: {}", r.total);
        if let Some(cap) = r.max_graduation_credits {
            println!("  최대 졸업학점: {cap}");
        }
    } else {
        let found = repo.lookup_primary(major, program, year);
        let r = &found.record;
        let show = |value: Option<u32>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
        println!("\n=== Primary requirement ===\n");
        println!("  Source: {}", found.source);
        println!("  Major: {} ({}, {})", r.major, r.program_type, r.admission_year);
        println!("  전공필수: {} (changed {})", r.major_required, r.major_required_changed);
        println!("  전공선택: {} (changed {})", r.major_elective, r.major_elective_changed);
        println!("  기초문해: {}", show(r.basic_literacy));
        println!("  기초과학: {}", show(r.basic_science));
        println!("  핵심교양: {}", show(r.core_liberal));
        println!("  졸업학점: {}", r.graduation_credits);
    }
}
