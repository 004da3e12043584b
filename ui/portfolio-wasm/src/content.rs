//! Render projects and skills into their containers.

use crate::dom::Elements;
use pf_content::{ContentRenderer, SkillGroup};
use tracing::debug;

pub fn render_content(els: &Elements, renderer: &ContentRenderer) {
    if let Some(container) = &els.projects_container {
        container.set_inner_html(&renderer.render_projects());
        debug!(count = renderer.content().projects.len(), "projects rendered");
    }
    for (container, group) in [
        (&els.programming_skills, SkillGroup::Programming),
        (&els.web_skills, SkillGroup::Web),
    ] {
        if let Some(container) = container {
            container.set_inner_html(&renderer.render_skills(group));
        }
    }
}
