use crate::assets::decode::PhotoLoad;
use crate::foundation::error::CardError;
use crate::render::compositor::{Compositor, CompositorOpts, RenderedCard};
use crate::template::catalog::Catalog;
use crate::template::generator::templates_for_occasion;
use crate::template::model::Template;
use crate::template::theme::ThemeBook;

/// Why a batch produced no cards.
#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    /// The batch was asked to render zero templates.
    #[error("no templates requested")]
    NothingRequested,

    /// A systemic failure aborted the batch at template `index`.
    #[error("card {index} failed: {source}")]
    Render {
        index: usize,
        #[source]
        source: CardError,
    },
}

/// Compositor plus the immutable theme and catalog tables it renders from.
#[derive(Clone, Debug)]
pub struct CardSession {
    compositor: Compositor,
    themes: ThemeBook,
    catalog: Catalog,
}

impl CardSession {
    pub fn new(compositor: Compositor, themes: ThemeBook, catalog: Catalog) -> Self {
        Self {
            compositor,
            themes,
            catalog,
        }
    }

    /// Session over the built-in theme and catalog tables.
    pub fn builtin(opts: CompositorOpts) -> Self {
        Self::new(Compositor::new(opts), ThemeBook::builtin(), Catalog::builtin())
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub fn themes(&self) -> &ThemeBook {
        &self.themes
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The templates an occasion renders with.
    pub fn templates(&self, occasion_id: &str) -> Vec<Template> {
        templates_for_occasion(&self.catalog, &self.themes, occasion_id)
    }

    /// Generate the occasion's templates and render each one, in order.
    #[tracing::instrument(skip(self, photo))]
    pub fn render_occasion(
        &self,
        occasion_id: &str,
        photo: &PhotoLoad,
        name: &str,
    ) -> Result<Vec<RenderedCard>, BatchError> {
        let templates = self.templates(occasion_id);
        self.render_templates(&templates, photo, name)
    }

    /// Render `templates` strictly sequentially. The first failure aborts the batch.
    pub fn render_templates(
        &self,
        templates: &[Template],
        photo: &PhotoLoad,
        name: &str,
    ) -> Result<Vec<RenderedCard>, BatchError> {
        if templates.is_empty() {
            return Err(BatchError::NothingRequested);
        }
        if photo.is_failed() {
            tracing::warn!("photo unavailable; every card uses the placeholder frame");
        }

        let mut cards = Vec::with_capacity(templates.len());
        for (index, template) in templates.iter().enumerate() {
            let card = self
                .compositor
                .render(template, photo, name)
                .map_err(|source| BatchError::Render { index, source })?;
            cards.push(card);
        }
        tracing::info!(cards = cards.len(), "batch rendered");
        Ok(cards)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/batch.rs"]
mod tests;
