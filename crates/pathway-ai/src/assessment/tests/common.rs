use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

pub(super) use crate::eligibility::tests::common::*;

use crate::assessment::{assessment_router, AssessmentService};
use crate::compliance::{
    CriminalRecord, LegalInput, Location, RefusalReason, RefusalRecord, StatusInput,
    WorkExperienceInput,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn part_time_student_work() -> WorkExperienceInput {
    WorkExperienceInput {
        hours_per_week: 28.0,
        weeks_worked: 40,
        is_seasonal: false,
        is_student: true,
        is_self_employed: false,
        is_coop: false,
        program: Default::default(),
    }
}

pub(super) fn lapsed_permit() -> StatusInput {
    StatusInput {
        expiry_date: date(2025, 4, 1),
        has_submitted_extension: false,
        location: Location::InCanada,
        as_of: date(2025, 6, 1),
    }
}

pub(super) fn old_conviction() -> LegalInput {
    LegalInput {
        criminal_record: Some(CriminalRecord {
            max_sentence_years: 2,
            sentence_completed: date(2012, 3, 1),
        }),
        medical_condition: None,
        prior_refusal: Some(RefusalRecord {
            reason: RefusalReason::InsufficientFunds,
            refused_on: date(2023, 9, 15),
        }),
        as_of: date(2025, 6, 1),
    }
}

pub(super) fn router() -> axum::Router {
    assessment_router(Arc::new(AssessmentService::default()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
