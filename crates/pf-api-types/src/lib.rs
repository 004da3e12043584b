use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key for the user's theme choice.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Extra reveal delay per project card position.
pub const CARD_STAGGER_MS: u32 = 200;

pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(CARD_STAGGER_MS)
}

/// Theme the user picked. `System` is resolved against the browser's
/// colour-scheme signal every time it is applied and is stored as `"system"`.
///
/// Values read back from storage are not validated: anything that is not one
/// of the three known names is kept verbatim in `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
    Custom(String),
}

impl ThemePreference {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
            Self::Custom(raw) => raw,
        }
    }

    /// The theme a user-initiated toggle switches to.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl From<String> for ThemePreference {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            "system" => Self::System,
            _ => Self::Custom(raw),
        }
    }
}

impl From<&str> for ThemePreference {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<ThemePreference> for String {
    fn from(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Custom(raw) => raw,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual mode actually painted on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Page sections in top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// In-page link target, e.g. `#about`.
    pub fn fragment(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    /// Accepts both `about` and `#about`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let id = raw.strip_prefix('#').unwrap_or(raw);
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == id)
            .ok_or_else(|| UnknownSection(raw.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: String,
    pub percentage: u8,
    /// Gradient utility classes for the progress bar.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactProfile {
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

fn default_typing_speed_ms() -> u32 {
    100
}

fn default_deleting_speed_ms() -> u32 {
    50
}

fn default_pause_duration_ms() -> u32 {
    2000
}

/// Typing animation settings. Missing durations fall back to 100/50/2000 ms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingConfig {
    #[serde(default)]
    pub phrases: Vec<String>,
    #[serde(default = "default_typing_speed_ms")]
    pub typing_speed_ms: u32,
    #[serde(default = "default_deleting_speed_ms")]
    pub deleting_speed_ms: u32,
    #[serde(default = "default_pause_duration_ms")]
    pub pause_duration_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: Vec::new(),
            typing_speed_ms: default_typing_speed_ms(),
            deleting_speed_ms: default_deleting_speed_ms(),
            pause_duration_ms: default_pause_duration_ms(),
        }
    }
}

impl TypingConfig {
    pub fn with_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_strings_map_to_known_variants() {
        assert_eq!(ThemePreference::from("light"), ThemePreference::Light);
        assert_eq!(ThemePreference::from("dark"), ThemePreference::Dark);
        assert_eq!(ThemePreference::from("system"), ThemePreference::System);
        assert_eq!(
            ThemePreference::from("sepia"),
            ThemePreference::Custom("sepia".to_owned())
        );
        assert_eq!(String::from(ThemePreference::Custom("sepia".into())), "sepia");
    }

    #[test]
    fn toggle_only_cycles_light_and_dark() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::System.toggled(), ThemePreference::Light);
    }

    #[test]
    fn section_parses_bare_and_fragment_forms() {
        assert_eq!("about".parse::<SectionId>(), Ok(SectionId::About));
        assert_eq!("#contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert_eq!(
            "#blog".parse::<SectionId>(),
            Err(UnknownSection("#blog".to_owned()))
        );
        assert_eq!(SectionId::Skills.fragment(), "#skills");
    }

    #[test]
    fn typing_config_fills_missing_durations() {
        let cfg: TypingConfig =
            serde_json::from_str(r#"{ "phrases": ["Hi"], "typing_speed_ms": 80 }"#).unwrap();
        assert_eq!(cfg.phrases, vec!["Hi".to_owned()]);
        assert_eq!(cfg.typing_speed_ms, 80);
        assert_eq!(cfg.deleting_speed_ms, 50);
        assert_eq!(cfg.pause_duration_ms, 2000);
    }

    #[test]
    fn project_optional_links_default_to_none() {
        let project: ProjectRecord = serde_json::from_str(
            r#"{ "title": "T", "description": "D", "image": "i.png", "category": "C" }"#,
        )
        .unwrap();
        assert!(project.tags.is_empty());
        assert_eq!(project.github_url, None);
        assert_eq!(project.live_url, None);
    }
}
