use super::{NavItem, render_layout, render_toast};
use crate::models::{ProfileTab, SavedSection};
use crate::profile::{
    Gender, HealthGoals, NotificationKind, NotificationSettings, PersonalInfo, ProfileSettings,
};
use maud::{Markup, html};

const TABS: [(ProfileTab, &str, &str); 3] = [
    (ProfileTab::Personal, "personal", "Personal Info"),
    (ProfileTab::Goals, "goals", "Health Goals"),
    (ProfileTab::Notifications, "notifications", "Notifications"),
];

pub fn render_profile(
    profile: &ProfileSettings,
    tab: ProfileTab,
    saved: Option<SavedSection>,
    logged_in: bool,
) -> String {
    let body = html! {
        section.page.profile {
            div.page-header {
                div {
                    h1 { "Your Profile" }
                    p.subtitle { "Manage your account information and preferences" }
                }
            }

            @match saved {
                Some(SavedSection::Profile) => {
                    (render_toast("Profile Updated", "Your profile information has been saved."))
                },
                Some(SavedSection::Goals) => {
                    (render_toast("Goals Updated", "Your health goals have been saved."))
                },
                None => {},
            }

            nav.tabs aria-label="Profile sections" {
                @for (value, slug, label) in TABS {
                    a.tab.active[tab == value] href={ "/profile?tab=" (slug) } { (label) }
                }
            }

            @match tab {
                ProfileTab::Personal => {
                    (personal_form(&profile.personal))
                    (security_card())
                },
                ProfileTab::Goals => (goals_form(&profile.goals)),
                ProfileTab::Notifications => (notifications_card(&profile.notifications)),
            }
        }
    };
    render_layout("Profile", Some(NavItem::Profile), logged_in, body, "")
}

fn personal_form(personal: &PersonalInfo) -> Markup {
    html! {
        div.card {
            h2 { "Personal Information" }
            div.profile-header {
                div.avatar { (initials(&personal.name)) }
                div {
                    h3 { (personal.name) }
                    p.hint { "Member since Oct 2022" }
                }
            }
            form.stack method="post" action="/profile/personal" {
                div.grid {
                    div.field {
                        label for="name" { "Full Name" }
                        input id="name" name="name" value=(personal.name);
                    }
                    div.field {
                        label for="email" { "Email" }
                        input id="email" name="email" type="email" value=(personal.email);
                    }
                    div.field {
                        label for="phone" { "Phone" }
                        input id="phone" name="phone" value=(personal.phone);
                    }
                    div.field {
                        label for="date_of_birth" { "Date of Birth" }
                        input id="date_of_birth" name="date_of_birth" type="date"
                            value=(personal.date_of_birth.to_string());
                    }
                    div.field {
                        label for="gender" { "Gender" }
                        select id="gender" name="gender" {
                            @for gender in Gender::ALL {
                                option value=(gender.as_str()) selected[personal.gender == gender] {
                                    (gender.label())
                                }
                            }
                        }
                    }
                    div.field {
                        label for="height_cm" { "Height (cm)" }
                        input id="height_cm" name="height_cm" type="number" step="0.1"
                            value=(personal.height_cm);
                    }
                }
                div.actions {
                    button.btn.btn-primary type="submit" { "Save Changes" }
                }
            }
        }
    }
}

fn security_card() -> Markup {
    html! {
        div.card {
            h2 { "Account Security" }
            div.setting-row {
                div {
                    h3 { "Password" }
                    p.hint { "Last changed 3 months ago" }
                }
                button.btn.btn-outline type="button" disabled { "Change Password" }
            }
            div.setting-row {
                div {
                    h3 { "Two-Factor Authentication" }
                    p.hint { "Add an extra layer of security" }
                }
                button.btn.btn-outline type="button" disabled { "Setup 2FA" }
            }
        }
    }
}

fn goals_form(goals: &HealthGoals) -> Markup {
    html! {
        div.card {
            h2 { "Health Goals" }
            form.stack method="post" action="/profile/goals" {
                div.grid {
                    (number_field("weight_kg", "Current Weight (kg)", "0.1", goals.weight_kg))
                    (number_field("goal_weight_kg", "Goal Weight (kg)", "0.1", goals.goal_weight_kg))
                    (number_field("goal_steps", "Daily Step Goal", "1", f64::from(goals.goal_steps)))
                    (number_field("goal_sleep_hours", "Daily Sleep Goal (hours)", "0.5", goals.goal_sleep_hours))
                    (number_field("goal_water_liters", "Daily Water Intake Goal (liters)", "0.1", goals.goal_water_liters))
                }
                div.actions {
                    button.btn.btn-primary type="submit" { "Save Goals" }
                }
            }
        }
    }
}

fn number_field(name: &str, label: &str, step: &str, value: f64) -> Markup {
    html! {
        div.field {
            label for=(name) { (label) }
            input id=(name) name=(name) type="number" min="0" step=(step) value=(value);
        }
    }
}

fn notifications_card(notifications: &NotificationSettings) -> Markup {
    html! {
        div.card {
            h2 { "Notification Preferences" }
            @for kind in NotificationKind::ALL {
                @let enabled = notifications.get(kind);
                div.setting-row {
                    div {
                        h3 { (kind.label()) }
                        p.hint { (kind.description()) }
                    }
                    form method="post" action={ "/profile/notifications/" (kind.as_str()) } {
                        button.switch.on[enabled] type="submit" role="switch"
                            aria-checked=(if enabled { "true" } else { "false" }) aria-label=(kind.label()) {
                            span.thumb {}
                            span.state { @if enabled { "On" } @else { "Off" } }
                        }
                    }
                }
            }
        }
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_tab_prefills_profile() {
        let profile = ProfileSettings::default();
        let page = render_profile(&profile, ProfileTab::Personal, None, false);
        assert!(page.contains(r#"value="Alex Johnson""#));
        assert!(page.contains("1990-06-15"));
        assert!(page.contains("Account Security"));
        assert!(!page.contains("Profile Updated"));
    }

    #[test]
    fn saved_banner_follows_section() {
        let profile = ProfileSettings::default();
        let page = render_profile(&profile, ProfileTab::Goals, Some(SavedSection::Goals), false);
        assert!(page.contains("Goals Updated"));
        assert!(page.contains("Daily Step Goal"));
    }

    #[test]
    fn notifications_tab_reflects_flags() {
        let mut profile = ProfileSettings::default();
        profile.toggle_notification(NotificationKind::Push);
        let page = render_profile(&profile, ProfileTab::Notifications, None, false);
        assert!(page.contains("/profile/notifications/weekly_report"));
        assert_eq!(page.matches(r#"aria-checked="false""#).count(), 1);
        assert_eq!(page.matches(r#"aria-checked="true""#).count(), 3);
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(initials("Alex Johnson"), "AJ");
        assert_eq!(initials("  "), "");
    }
}
