// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Shown in place of a list that has no entries.
pub const EMPTY_LIST: &str = "(none provided)";

/// Shown in place of an optional single-value field left blank.
pub const NOT_PROVIDED: &str = "(not provided)";

/// Required page sections, in page order.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "Navigation bar",
    "Hero",
    "About",
    "Skills",
    "Experience and education timeline",
    "Project grid",
    "Contact footer",
];

/// Site generation prompt template.
/// Placeholders: {mode}, {name}, {tagline}, {bio}, {email}, {socials}, {logo},
/// {achievements}, {skills}, {experience}, {education}, {projects},
/// {theme_name}, {theme_description}, {accent_color}, {sections}, {output_instruction}
pub const SITE_PROMPT_TEMPLATE: &str = r#"Act as a Senior Web Developer. Create a SINGLE HTML file with internal CSS for a {mode}.

### CONTENT
- Name: {name}
- Headline / Tagline: {tagline}
- Bio / About: {bio}
- Contact Email: {email}
- Social Links: {socials}
- Logo: {logo}
- Key Achievements: {achievements}
- Skills / Services: {skills}

Experience:
{experience}

Education:
{education}

Projects:
{projects}

### DESIGN INSTRUCTIONS (Strictly Follow)
- Style Theme: {theme_name}
- CSS Rules: {theme_description}
- Accent Color: {accent_color}
- Layout: Responsive, Single Page, Smooth Scroll.
- Icons: Use the FontAwesome CDN for icons.

### REQUIRED SECTIONS (in this order)
{sections}

### OUTPUT
{output_instruction}"#;

/// Logo instruction used when the profile has no logo URL.
pub const TEXT_LOGO_INSTRUCTION: &str = "No image logo. Use the name as a text logo.";
