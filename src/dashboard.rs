use crate::profile::HealthGoals;
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Week, TimeRange::Month, TimeRange::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Week => "Week",
            TimeRange::Month => "Month",
            TimeRange::Year => "Year",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyMetrics {
    pub date: String,
    pub day: String,
    pub steps: u32,
    pub calories: u32,
    pub sleep_hours: f64,
    pub hydration_liters: f64,
    pub weight_kg: f64,
    pub heart_rate: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub today: DailyMetrics,
    pub steps_change_percent: i64,
    pub step_goal_percent: u32,
    pub avg_heart_rate: u32,
    pub hydration_goal_liters: f64,
    pub hydration_percent: u32,
    pub weight_change_kg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub range: TimeRange,
    pub days: Vec<DailyMetrics>,
    pub summary: DashboardSummary,
}

pub fn build_dashboard(goals: &HealthGoals, range: TimeRange) -> DashboardResponse {
    build_dashboard_at(Local::now().date_naive(), goals, range)
}

/// Builds the seven-day window ending at `today`. Only a week of sample
/// readings exists, so every range is served from the same window.
pub fn build_dashboard_at(today: NaiveDate, goals: &HealthGoals, range: TimeRange) -> DashboardResponse {
    let mut days = Vec::with_capacity(SAMPLE_WEEK.len());
    for (offset, sample) in (0..SAMPLE_WEEK.len()).rev().zip(SAMPLE_WEEK.iter()) {
        let date = today - Duration::days(offset as i64);
        days.push(DailyMetrics {
            date: date.to_string(),
            day: date.format("%a").to_string(),
            steps: sample.steps,
            calories: sample.calories,
            sleep_hours: sample.sleep_hours,
            hydration_liters: sample.hydration_liters,
            weight_kg: sample.weight_kg,
            heart_rate: sample.heart_rate,
        });
    }

    let summary = summarize(&days, goals);
    DashboardResponse {
        range,
        days,
        summary,
    }
}

fn summarize(days: &[DailyMetrics], goals: &HealthGoals) -> DashboardSummary {
    let today = days.last().cloned().unwrap_or_else(empty_day);
    let previous_steps = days
        .len()
        .checked_sub(2)
        .and_then(|index| days.get(index))
        .map_or(0, |day| day.steps);

    let steps_change_percent = if previous_steps == 0 {
        0
    } else {
        ((f64::from(today.steps) - f64::from(previous_steps)) / f64::from(previous_steps) * 100.0)
            .round() as i64
    };

    let avg_heart_rate = if days.is_empty() {
        0
    } else {
        let total: u32 = days.iter().map(|day| day.heart_rate).sum();
        (f64::from(total) / days.len() as f64).round() as u32
    };

    let weight_change_kg = match (days.first(), days.last()) {
        (Some(first), Some(last)) => round_tenths(first.weight_kg - last.weight_kg),
        _ => 0.0,
    };

    DashboardSummary {
        steps_change_percent,
        step_goal_percent: percent_of(f64::from(today.steps), f64::from(goals.goal_steps)),
        avg_heart_rate,
        hydration_goal_liters: goals.goal_water_liters,
        hydration_percent: percent_of(today.hydration_liters, goals.goal_water_liters),
        weight_change_kg,
        today,
    }
}

fn percent_of(value: f64, goal: f64) -> u32 {
    if goal <= 0.0 {
        return 0;
    }
    (value / goal * 100.0).round().max(0.0) as u32
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn empty_day() -> DailyMetrics {
    DailyMetrics {
        date: String::new(),
        day: String::new(),
        steps: 0,
        calories: 0,
        sleep_hours: 0.0,
        hydration_liters: 0.0,
        weight_kg: 0.0,
        heart_rate: 0,
    }
}

struct SampleDay {
    steps: u32,
    calories: u32,
    sleep_hours: f64,
    hydration_liters: f64,
    weight_kg: f64,
    heart_rate: u32,
}

// Oldest day first; the last row is today.
const SAMPLE_WEEK: [SampleDay; 7] = [
    SampleDay { steps: 8245, calories: 2100, sleep_hours: 7.2, hydration_liters: 1.8, weight_kg: 72.5, heart_rate: 68 },
    SampleDay { steps: 10123, calories: 2300, sleep_hours: 6.8, hydration_liters: 2.1, weight_kg: 72.3, heart_rate: 72 },
    SampleDay { steps: 7890, calories: 1950, sleep_hours: 7.5, hydration_liters: 2.5, weight_kg: 72.2, heart_rate: 65 },
    SampleDay { steps: 9245, calories: 2250, sleep_hours: 8.1, hydration_liters: 2.3, weight_kg: 72.0, heart_rate: 67 },
    SampleDay { steps: 11320, calories: 2420, sleep_hours: 6.9, hydration_liters: 1.9, weight_kg: 71.8, heart_rate: 70 },
    SampleDay { steps: 5600, calories: 1850, sleep_hours: 7.8, hydration_liters: 2.0, weight_kg: 71.9, heart_rate: 64 },
    SampleDay { steps: 7230, calories: 2050, sleep_hours: 8.3, hydration_liters: 2.2, weight_kg: 71.7, heart_rate: 66 },
];
