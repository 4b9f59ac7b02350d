//! Prompt composition — turns a profile and a style selection into the page prompt.
//!
//! Pure and deterministic: the same inputs always give byte-identical output.

use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::prompts::{
    EMPTY_LIST, NOT_PROVIDED, REQUIRED_SECTIONS, SITE_PROMPT_TEMPLATE, TEXT_LOGO_INSTRUCTION,
};
use crate::generation::themes::{find_theme, StyleTheme};
use crate::llm_client::prompts::SINGLE_DOCUMENT_INSTRUCTION;
use crate::models::profile::{Profile, SiteMode};

pub const DEFAULT_ACCENT_COLOR: &str = "#3B82F6";

/// The user's visual choices for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSelection {
    pub theme: &'static StyleTheme,
    pub accent_color: String,
    pub mode: SiteMode,
}

/// Request body carrying a style choice by name.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleRequest {
    pub theme: String,
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub mode: SiteMode,
}

impl StyleRequest {
    /// Resolves the theme name and checks the accent colour.
    pub fn resolve(&self) -> Result<StyleSelection, AppError> {
        let theme = find_theme(&self.theme)
            .ok_or_else(|| AppError::Validation(format!("Unknown theme '{}'", self.theme)))?;

        let accent_color = match self.accent_color.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_ACCENT_COLOR.to_string(),
            Some(color) if is_hex_color(color) => color.to_string(),
            Some(color) => {
                return Err(AppError::Validation(format!(
                    "accent_color must be a hex colour like #3B82F6, got '{color}'"
                )))
            }
        };

        Ok(StyleSelection {
            theme,
            accent_color,
            mode: self.mode,
        })
    }
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Builds the site generation prompt.
pub fn compose_prompt(profile: &Profile, style: &StyleSelection) -> String {
    let basics = &profile.basics;

    let experience = bullet_list(profile.experience.iter().map(|e| {
        format!("{} at {} ({})", e.role, e.organization, e.duration)
    }));
    let education = bullet_list(
        profile
            .education
            .iter()
            .map(|e| format!("{} from {}", e.degree, e.institution)),
    );
    let projects = bullet_list(profile.projects.iter().map(|p| {
        match p.technology.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(tech) => format!("{}: {} [{}]", p.title, p.description, tech),
            None => format!("{}: {}", p.title, p.description),
        }
    }));

    let skills = profile.skill_list();
    let skills = if skills.is_empty() {
        EMPTY_LIST.to_string()
    } else {
        skills.join(", ")
    };

    let logo = match profile.logo() {
        Some(url) => format!("{url} (use this image as the logo)"),
        None => TEXT_LOGO_INSTRUCTION.to_string(),
    };

    let sections = REQUIRED_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n");

    fill_template(
        SITE_PROMPT_TEMPLATE,
        &[
            ("mode", style.mode.label()),
            ("name", or_not_provided(&basics.name)),
            ("tagline", or_not_provided(&basics.tagline)),
            ("bio", or_not_provided(&basics.bio)),
            ("email", or_not_provided(&basics.email)),
            ("socials", or_not_provided(&basics.socials)),
            ("logo", &logo),
            ("achievements", or_not_provided(&basics.achievements)),
            ("skills", &skills),
            ("experience", &experience),
            ("education", &education),
            ("projects", &projects),
            ("theme_name", style.theme.name),
            ("theme_description", style.theme.description),
            ("accent_color", &style.accent_color),
            ("sections", &sections),
            ("output_instruction", SINGLE_DOCUMENT_INSTRUCTION),
        ],
    )
}

fn or_not_provided(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        NOT_PROVIDED
    } else {
        value
    }
}

fn bullet_list<I>(items: I) -> String
where
    I: Iterator<Item = String>,
{
    let lines: Vec<String> = items.map(|item| format!("- {item}")).collect();
    if lines.is_empty() {
        format!("- {EMPTY_LIST}")
    } else {
        lines.join("\n")
    }
}

/// Replaces `{key}` placeholders in one pass, so substituted values are never
/// themselves scanned for placeholders. Unknown `{...}` runs are kept verbatim.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let replacement = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, end))
        });

        match replacement {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
