use serde::{Deserialize, Serialize};

/// In-memory study preferences. Process lifetime only; reset on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySettings {
    pub morning_study: bool,
    pub evening_study: bool,
    pub min_study_minutes: u32,
    pub max_study_minutes: u32,
    pub notifications: bool,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            morning_study: true,
            evening_study: false,
            min_study_minutes: 30,
            max_study_minutes: 120,
            notifications: true,
        }
    }
}

/// The closed set of user-togglable settings.
///
/// Each variant maps bijectively to a callback-data key, so the valid toggle
/// set is statically checkable instead of a string-keyed branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingToggle {
    MorningStudy,
    EveningStudy,
    Notifications,
}

impl SettingToggle {
    pub const ALL: [SettingToggle; 3] = [
        SettingToggle::MorningStudy,
        SettingToggle::EveningStudy,
        SettingToggle::Notifications,
    ];

    /// The callback-data key carried after the `settings:` prefix.
    pub fn key(self) -> &'static str {
        match self {
            SettingToggle::MorningStudy => "morning_study",
            SettingToggle::EveningStudy => "evening_study",
            SettingToggle::Notifications => "notifications",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "morning_study" => Some(SettingToggle::MorningStudy),
            "evening_study" => Some(SettingToggle::EveningStudy),
            "notifications" => Some(SettingToggle::Notifications),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingToggle::MorningStudy => "Morning study",
            SettingToggle::EveningStudy => "Evening study",
            SettingToggle::Notifications => "Notifications",
        }
    }

    /// Flips the corresponding flag and returns its new value.
    pub fn apply(self, settings: &mut StudySettings) -> bool {
        let flag = match self {
            SettingToggle::MorningStudy => &mut settings.morning_study,
            SettingToggle::EveningStudy => &mut settings.evening_study,
            SettingToggle::Notifications => &mut settings.notifications,
        };
        *flag = !*flag;
        *flag
    }

    /// Reads the corresponding flag without mutating.
    pub fn get(self, settings: &StudySettings) -> bool {
        match self {
            SettingToggle::MorningStudy => settings.morning_study,
            SettingToggle::EveningStudy => settings.evening_study,
            SettingToggle::Notifications => settings.notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = StudySettings::default();
        assert!(settings.morning_study);
        assert!(!settings.evening_study);
        assert_eq!(settings.min_study_minutes, 30);
        assert_eq!(settings.max_study_minutes, 120);
        assert!(settings.notifications);
    }

    #[test]
    fn test_toggle_keys_round_trip() {
        for toggle in SettingToggle::ALL {
            assert_eq!(SettingToggle::from_key(toggle.key()), Some(toggle));
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_eq!(SettingToggle::from_key("min_time"), None);
        assert_eq!(SettingToggle::from_key(""), None);
        assert_eq!(SettingToggle::from_key("NOTIFICATIONS"), None);
    }
}
