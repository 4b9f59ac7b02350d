//! Storage-path derivation for published pages.

use rand::Rng;

pub const PAGE_DIR: &str = "users";
pub const PAGE_EXTENSION: &str = "html";

/// Used when a name has no ASCII alphanumerics at all.
const FALLBACK_BASE: &str = "site";

/// Lowercases `name` and collapses every run of characters outside `[a-z0-9]`
/// into one hyphen, with no hyphen at either end.
pub fn slug_base(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        slug
    }
}

/// `slug_base(name)` plus `-` and a random number in `100..=999`.
pub fn derive_slug<R: Rng + ?Sized>(name: &str, rng: &mut R) -> String {
    let suffix: u16 = rng.gen_range(100..=999);
    format!("{}-{suffix}", slug_base(name))
}

/// Whether `slug` was derived from `name`, i.e. its part before the numeric
/// suffix equals `slug_base(name)`.
pub fn slug_matches(slug: &str, name: &str) -> bool {
    slug.rsplit_once('-')
        .is_some_and(|(base, _)| base == slug_base(name))
}

/// `users/<slug>.html`
pub fn page_path(slug: &str) -> String {
    format!("{PAGE_DIR}/{slug}.{PAGE_EXTENSION}")
}
