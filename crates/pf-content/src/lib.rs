//! Site content and the markup generated from it.
//!
//! Content is plain data handed to [`ContentRenderer`] at construction; the
//! bundled copy ships inside the binary as `content/portfolio.json`.

pub mod contact;
pub mod render;

use anyhow::{Context, Result};
use pf_api_types::{ContactProfile, ProjectRecord, SkillRecord, TypingConfig};
use serde::{Deserialize, Serialize};

pub use contact::ContactAction;
pub use render::{ContentRenderer, render_project_card, render_skill_bar};

const BUNDLED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub contact: ContactProfile,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub programming_skills: Vec<SkillRecord>,
    #[serde(default)]
    pub web_skills: Vec<SkillRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillGroup {
    Programming,
    Web,
}

impl SkillGroup {
    /// Id of the page container the group renders into.
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Programming => "programming-skills",
            Self::Web => "web-skills",
        }
    }
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("invalid site content document")
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CONTENT)
    }

    pub fn skills(&self, group: SkillGroup) -> &[SkillRecord] {
        match group {
            SkillGroup::Programming => &self.programming_skills,
            SkillGroup::Web => &self.web_skills,
        }
    }
}
