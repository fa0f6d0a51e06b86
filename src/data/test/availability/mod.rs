use crate::{
    data::availability::AvailabilityRepository,
    error::schedule::ScheduleError,
    model::{availability::SetAvailabilityParams, interval::Interval},
};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, ModelTrait};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod set;

/// Fixed-date timestamp helper so interval assertions stay deterministic.
fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, hour, min, 0).unwrap()
}

/// Shorthand for the interval params used throughout these tests.
fn interval_params(from: DateTime<Utc>, to: DateTime<Utc>) -> SetAvailabilityParams {
    SetAvailabilityParams {
        available_from: from,
        available_to: to,
        note: None,
    }
}
