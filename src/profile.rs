//! Profile, health goals and notification preferences for the single
//! local user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::PreferNotToSay,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub height_cm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthGoals {
    pub weight_kg: f64,
    pub goal_weight_kg: f64,
    pub goal_steps: u32,
    pub goal_sleep_hours: f64,
    pub goal_water_liters: f64,
}

/// Closed set of notification channels. Toggling goes through this enum so
/// an unknown channel can never reach the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Email,
    Push,
    Reminders,
    WeeklyReport,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Email,
        NotificationKind::Push,
        NotificationKind::Reminders,
        NotificationKind::WeeklyReport,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Email => "email",
            NotificationKind::Push => "push",
            NotificationKind::Reminders => "reminders",
            NotificationKind::WeeklyReport => "weekly_report",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Email => "Email Notifications",
            NotificationKind::Push => "Push Notifications",
            NotificationKind::Reminders => "Daily Reminders",
            NotificationKind::WeeklyReport => "Weekly Health Report",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NotificationKind::Email => "Receive updates via email",
            NotificationKind::Push => "Get notified on your device",
            NotificationKind::Reminders => "Get reminded about your daily goals",
            NotificationKind::WeeklyReport => "Get a summary of your weekly progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub reminders: bool,
    pub weekly_report: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            reminders: true,
            weekly_report: true,
        }
    }
}

impl NotificationSettings {
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Push => self.push,
            NotificationKind::Reminders => self.reminders,
            NotificationKind::WeeklyReport => self.weekly_report,
        }
    }

    /// Flips one channel and returns its new state.
    pub fn toggle(&mut self, kind: NotificationKind) -> bool {
        let flag = match kind {
            NotificationKind::Email => &mut self.email,
            NotificationKind::Push => &mut self.push,
            NotificationKind::Reminders => &mut self.reminders,
            NotificationKind::WeeklyReport => &mut self.weekly_report,
        };
        *flag = !*flag;
        *flag
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSettings {
    pub personal: PersonalInfo,
    pub goals: HealthGoals,
    pub notifications: NotificationSettings,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            personal: PersonalInfo {
                name: "Alex Johnson".to_string(),
                email: "alex.johnson@example.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap_or_default(),
                gender: Gender::Male,
                height_cm: 175.0,
            },
            goals: HealthGoals {
                weight_kg: 70.0,
                goal_weight_kg: 68.0,
                goal_steps: 10_000,
                goal_sleep_hours: 8.0,
                goal_water_liters: 2.5,
            },
            notifications: NotificationSettings::default(),
        }
    }
}

impl ProfileSettings {
    pub fn update_personal(&mut self, personal: PersonalInfo) {
        info!(gender = personal.gender.as_str(), "personal info updated");
        self.personal = personal;
    }

    pub fn update_goals(&mut self, goals: HealthGoals) {
        info!(
            goal_steps = goals.goal_steps,
            goal_water_liters = goals.goal_water_liters,
            "health goals updated"
        );
        self.goals = goals;
    }

    pub fn toggle_notification(&mut self, kind: NotificationKind) -> bool {
        let enabled = self.notifications.toggle(kind);
        info!(kind = kind.as_str(), enabled, "notification preference toggled");
        enabled
    }
}
