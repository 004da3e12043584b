//! HTML fragments for project cards and skill bars.
//!
//! Reveal metadata is written into the markup (`data-delay` on cards,
//! `data-percentage` on progress bars) so the animator can read it back.

use crate::{SiteContent, SkillGroup};
use pf_api_types::{ProjectRecord, SkillRecord, stagger_delay_ms};
use std::fmt::Write;

const GITHUB_ICON: &str = r#"<svg class="w-4 h-4" fill="currentColor" viewBox="0 0 24 24"><path d="M12 0C5.37 0 0 5.37 0 12c0 5.31 3.435 9.795 8.205 11.385.6.105.825-.255.825-.57 0-.285-.015-1.23-.015-2.235-3.015.555-3.795-.735-4.035-1.41-.135-.345-.72-1.41-1.23-1.695-.42-.225-1.02-.78-.015-.795.945-.015 1.62.87 1.845 1.23 1.08 1.815 2.805 1.305 3.495.99.105-.78.42-1.305.765-1.605-2.67-.3-5.46-1.335-5.46-5.925 0-1.305.465-2.385 1.23-3.225-.12-.3-.54-1.53.12-3.18 0 0 1.005-.315 3.3 1.23.96-.27 1.98-.405 3-.405s2.04.135 3 .405c2.295-1.56 3.3-1.23 3.3-1.23.66 1.65.24 2.88.12 3.18.765.84 1.23 1.905 1.23 3.225 0 4.605-2.805 5.625-5.475 5.925.435.375.81 1.095.81 2.22 0 1.605-.015 2.895-.015 3.3 0 .315.225.69.825.57A12.02 12.02 0 0 0 24 12c0-6.63-5.37-12-12-12z"/></svg>"#;
const EXTERNAL_ICON: &str = r#"<svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"></path></svg>"#;
const LINK_BUTTON_CLASS: &str = "inline-flex items-center justify-center gap-2 rounded-md border border-input bg-background px-3 py-1 text-sm font-medium hover:bg-accent hover:text-accent-foreground";

/// Escape text for use in element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn link_button(out: &mut String, url: &str, icon: &str, label: &str) {
    let _ = write!(
        out,
        r#"<a href="{url}" target="_blank" rel="noopener noreferrer" class="{LINK_BUTTON_CLASS}">{icon}{label}</a>"#,
        url = escape(url),
    );
}

/// One project card. `index` is the card's position in the list and sets
/// its reveal stagger.
pub fn render_project_card(project: &ProjectRecord, index: usize) -> String {
    let title = escape(&project.title);
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<div class="project-card bg-card text-card-foreground rounded-lg border shadow-sm overflow-hidden opacity-0" data-delay="{delay}"><div class="relative"><img src="{image}" alt="{title} project interface" class="w-full h-48 object-cover transition-transform duration-300 hover:scale-105" /><div class="absolute top-4 right-4"><span class="inline-flex items-center rounded-full bg-primary/20 px-2 py-1 text-xs font-medium text-primary">{category}</span></div></div>"#,
        delay = stagger_delay_ms(index),
        image = escape(&project.image),
        category = escape(&project.category),
    );
    let _ = write!(
        out,
        r#"<div class="p-6"><div class="flex items-center justify-between mb-4"><h3 class="text-2xl font-bold text-primary">{title}</h3></div><p class="text-muted-foreground mb-4">{description}</p><div class="flex flex-wrap gap-2 mb-4">"#,
        description = escape(&project.description),
    );
    for tag in &project.tags {
        let _ = write!(
            out,
            r#"<span class="inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold">{}</span>"#,
            escape(tag)
        );
    }
    out.push_str(r#"</div><div class="flex gap-4">"#);
    if let Some(url) = &project.github_url {
        link_button(&mut out, url, GITHUB_ICON, "GitHub");
    }
    if let Some(url) = &project.live_url {
        link_button(&mut out, url, EXTERNAL_ICON, "Live Demo");
    }
    out.push_str("</div></div></div>");
    out
}

/// One skill bar; the progress starts empty and is filled on reveal.
pub fn render_skill_bar(skill: &SkillRecord) -> String {
    format!(
        r#"<div class="skill-bar space-y-2 opacity-0" data-aos="fade-up"><div class="flex justify-between items-center"><span class="text-lg font-medium text-foreground">{name}</span><span class="text-sm text-muted-foreground">{level}</span></div><div class="w-full bg-muted rounded-full h-3"><div class="skill-progress h-3 rounded-full bg-gradient-to-r {color} transition-all duration-1500 ease-out" data-percentage="{percentage}" style="width: 0%"></div></div></div>"#,
        name = escape(&skill.name),
        level = escape(&skill.level),
        color = escape(&skill.color),
        percentage = skill.percentage.min(100),
    )
}

pub struct ContentRenderer {
    content: SiteContent,
}

impl ContentRenderer {
    pub fn new(content: SiteContent) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn render_projects(&self) -> String {
        self.content
            .projects
            .iter()
            .enumerate()
            .map(|(index, project)| render_project_card(project, index))
            .collect()
    }

    pub fn render_skills(&self, group: SkillGroup) -> String {
        self.content
            .skills(group)
            .iter()
            .map(render_skill_bar)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_api_types::{ContactProfile, TypingConfig};

    fn project(title: &str) -> ProjectRecord {
        ProjectRecord {
            title: title.into(),
            description: "desc".into(),
            image: "img.png".into(),
            tags: vec!["Rust".into(), "C++".into()],
            github_url: Some("https://github.com/me/x".into()),
            live_url: None,
            category: "Systems".into(),
        }
    }

    fn skill(name: &str, percentage: u8) -> SkillRecord {
        SkillRecord {
            name: name.into(),
            level: "Advanced".into(),
            percentage,
            color: "from-blue-500 to-purple-600".into(),
        }
    }

    fn renderer() -> ContentRenderer {
        ContentRenderer::new(SiteContent {
            contact: ContactProfile {
                email: String::new(),
                phone: String::new(),
                github: String::new(),
                linkedin: String::new(),
                twitter: String::new(),
            },
            typing: TypingConfig::default(),
            projects: vec![project("One"), project("Two"), project("Three")],
            programming_skills: vec![skill("Rust", 90), skill("Go", 40)],
            web_skills: vec![],
        })
    }

    #[test]
    fn cards_carry_stagger_delay() {
        let html = renderer().render_projects();
        assert_eq!(html.matches("class=\"project-card ").count(), 3);
        assert!(html.contains(r#"data-delay="0""#));
        assert!(html.contains(r#"data-delay="200""#));
        assert!(html.contains(r#"data-delay="400""#));
    }

    #[test]
    fn card_links_only_when_present() {
        let html = render_project_card(&project("X"), 0);
        assert!(html.contains("GitHub"));
        assert!(html.contains(r#"href="https://github.com/me/x" target="_blank""#));
        assert!(!html.contains("Live Demo"));
        assert!(html.contains(">C++</span>"));
    }

    #[test]
    fn skill_bar_starts_empty_with_target() {
        let html = render_skill_bar(&skill("Rust", 90));
        assert!(html.contains(r#"data-percentage="90" style="width: 0%""#));
        assert!(html.contains("bg-gradient-to-r from-blue-500 to-purple-600"));
    }

    #[test]
    fn skill_groups_render_independently() {
        let r = renderer();
        assert_eq!(r.render_skills(SkillGroup::Programming).matches("skill-bar ").count(), 2);
        assert_eq!(r.render_skills(SkillGroup::Web), "");
    }

    #[test]
    fn text_is_escaped() {
        let html = render_project_card(&project("<b>\"x\" & 'y'</b>"), 1);
        assert!(html.contains("&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
