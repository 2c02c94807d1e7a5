use crate::infra::read_profile;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use pathway_ai::compliance::{
    CriminalRecord, ExperienceProgram, LegalInput, Location, StatusInput, WorkExperienceInput,
};
use pathway_ai::eligibility::{
    CandidateProfile, ClbScores, EducationLevel, EducationProfile, FieldOfStudy, Jurisdiction,
    LanguageProfile, LanguageTest, MaritalStatus, OfficialLanguage, WorkProfile,
};
use pathway_ai::error::AppError;
use pathway_ai::{AssessmentReport, AssessmentRequest, AssessmentService};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Candidate profile as JSON
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Print the full report as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for the compliance checks (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Print the full report as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct DemoOutput<'a> {
    as_of: NaiveDate,
    profile: &'a CandidateProfile,
    report: &'a AssessmentReport,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { profile, json } = args;

    let profile = read_profile(&profile)?;
    let report = AssessmentService::default().assess(AssessmentRequest::for_profile(profile))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { as_of, json } = args;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    let request = demo_request(as_of);
    let profile = request.profile.clone();
    let report = AssessmentService::default().assess(request)?;

    if json {
        let output = DemoOutput {
            as_of,
            profile: &profile,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Pathway assessment demo (evaluated {as_of})");
    println!(
        "Candidate: age {}, {:?} in {:?}, CLB {} {:?}, {} years in-country, {} abroad",
        profile.age,
        profile.education.level,
        profile.education.field,
        profile.language.primary.scores.floor(),
        profile.language.primary.language,
        profile.work.canadian_years,
        profile.work.foreign_years
    );
    render_report(&report);
    Ok(())
}

fn demo_candidate() -> CandidateProfile {
    CandidateProfile {
        age: 29,
        marital_status: MaritalStatus::Single,
        spouse: None,
        education: EducationProfile {
            level: EducationLevel::Masters,
            field: FieldOfStudy::Stem,
            canadian: None,
            trade_certificate: false,
        },
        language: LanguageProfile {
            primary: LanguageTest {
                language: OfficialLanguage::English,
                scores: ClbScores::uniform(9),
            },
            secondary: None,
        },
        work: WorkProfile {
            canadian_years: 1.0,
            foreign_years: 3.0,
            current_jurisdiction: Jurisdiction::Ontario,
            job_offer: None,
            history: Vec::new(),
        },
        connections: Default::default(),
        intent: Default::default(),
        provincial_nomination: false,
        settlement_funds: 20_000,
    }
}

fn demo_request(as_of: NaiveDate) -> AssessmentRequest {
    AssessmentRequest {
        work_experience: Some(WorkExperienceInput {
            hours_per_week: 37.5,
            weeks_worked: 48,
            is_seasonal: false,
            is_student: false,
            is_self_employed: false,
            is_coop: false,
            program: ExperienceProgram::Cec,
        }),
        status: Some(StatusInput {
            expiry_date: as_of + Duration::days(45),
            has_submitted_extension: false,
            location: Location::InCanada,
            as_of,
        }),
        legal: Some(LegalInput {
            criminal_record: Some(CriminalRecord {
                max_sentence_years: 2,
                sentence_completed: as_of - Duration::days(7 * 365),
            }),
            medical_condition: None,
            prior_refusal: None,
            as_of,
        }),
        ..AssessmentRequest::for_profile(demo_candidate())
    }
}

pub(crate) fn render_report(report: &AssessmentReport) {
    let crs = &report.crs;
    println!("\nComprehensive Ranking System: {}", crs.total);
    println!(
        "- core {} | spouse {} | transferability {} | additional {}",
        crs.breakdown.core_human_capital,
        crs.breakdown.spouse_factors,
        crs.breakdown.skill_transferability,
        crs.breakdown.additional_points
    );

    println!(
        "\nOpportunities ({} of {} eligible)",
        report.eligible_count,
        report.opportunities.len()
    );
    for result in &report.opportunities {
        let score = if result.max_score > 0 {
            format!("{}/{}", result.score, result.max_score)
        } else {
            "pass/fail".to_string()
        };
        let cutoff = match result.cutoff {
            Some(cutoff) => format!(", cutoff {cutoff}"),
            None => String::new(),
        };
        println!(
            "- [{}] {} | {} | {}{}",
            result.draw_probability.label(),
            result.jurisdiction.label(),
            result.stream,
            score,
            cutoff
        );
        for warning in &result.warnings {
            println!("    ! {warning}");
        }
    }

    if let Some(best) = report.best() {
        println!("\nNext steps for {}", best.stream);
        for step in &best.checklist {
            println!("- {step}");
        }
    }

    let compliance = &report.compliance;
    if let Some(work) = &compliance.work_experience {
        println!("\nWork experience: {} credited hours", work.credited_hours);
        for warning in &work.warnings {
            println!("- {warning}");
        }
    }

    if let Some(status) = &compliance.status {
        println!(
            "\nStatus: {} ({} days remaining)",
            status.status_state.label(),
            status.days_remaining
        );
        for step in &status.action_plan {
            match step.deadline {
                Some(deadline) => println!("- {} (by {deadline})", step.summary),
                None => println!("- {}", step.summary),
            }
        }
    }

    if let Some(legal) = &compliance.legal {
        match legal.inadmissibility.ground {
            Some(ground) => println!("\nAdmissibility: inadmissible ({})", ground.label()),
            None => println!("\nAdmissibility: no ground identified"),
        }
        for strategy in &legal.defense_strategy {
            println!("- {}", strategy.title);
            for argument in &strategy.arguments {
                println!("    {argument}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathway_ai::compliance::StatusState;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
    }

    #[test]
    fn demo_request_covers_every_compliance_check() {
        let report = AssessmentService::default()
            .assess(demo_request(as_of()))
            .expect("demo candidate is valid");

        assert_eq!(report.crs.total, 509);
        assert!(report.eligible_count > 0);

        let work = report.compliance.work_experience.expect("work findings");
        assert_eq!(work.credited_hours, 1_440);
        assert!(!work.warnings.is_empty());

        let status = report.compliance.status.expect("status findings");
        assert_eq!(status.status_state, StatusState::Valid);
        assert_eq!(status.days_remaining, 45);

        let legal = report.compliance.legal.expect("legal findings");
        assert!(legal.inadmissibility.is_inadmissible);
        assert_eq!(
            legal.defense_strategy[0].title,
            "Individual rehabilitation application"
        );
    }

    #[test]
    fn demo_output_serializes_the_evaluation_date() {
        let request = demo_request(as_of());
        let profile = request.profile.clone();
        let report = AssessmentService::default()
            .assess(request)
            .expect("demo candidate is valid");
        let output = DemoOutput {
            as_of: as_of(),
            profile: &profile,
            report: &report,
        };

        let value = serde_json::to_value(&output).expect("serialize demo output");
        assert_eq!(value["as_of"], serde_json::json!("2025-06-01"));
        assert_eq!(value["report"]["crs"]["total"], serde_json::json!(509));
    }
}
