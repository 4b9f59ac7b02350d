//! Site build workflow — compose → generate → publish, strictly in that order.
//!
//! Either the page is published and a link comes back, or an error comes back
//! and no link is handed out. Generated markup is not kept after a failed publish.

use tracing::info;

use crate::errors::AppError;
use crate::generation::composer::{compose_prompt, StyleSelection};
use crate::generation::generator::ContentGenerator;
use crate::models::profile::Profile;
use crate::publish::publisher::{PublishResult, Publisher};

#[derive(Clone)]
pub struct SiteBuilder {
    generator: ContentGenerator,
    publisher: Publisher,
}

impl SiteBuilder {
    pub fn new(generator: ContentGenerator, publisher: Publisher) -> Self {
        Self {
            generator,
            publisher,
        }
    }

    /// Runs the full workflow. With `slug` set, the page at that slug is
    /// replaced; otherwise a new slug is derived from the profile name.
    pub async fn build(
        &self,
        profile: &Profile,
        style: &StyleSelection,
        slug: Option<&str>,
    ) -> Result<PublishResult, AppError> {
        let name = profile.basics.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "A name is required before publishing".to_string(),
            ));
        }

        info!(
            "Building {} for '{}' with theme '{}'",
            style.mode.label(),
            name,
            style.theme.name
        );

        let prompt = compose_prompt(profile, style);
        let html = self.generator.generate(&prompt).await?;

        match slug {
            Some(slug) => self.publisher.publish_at(name, slug, html).await,
            None => self.publisher.publish(name, html).await,
        }
    }
}
