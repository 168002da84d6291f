//! Entry point tying resolution and CSS generation together

use crate::cache::{StyleCache, StyleKey};
use crate::config::StyleConfig;
use crate::defaults::DefaultTokens;
use crate::generator::CssGenerator;
use crate::record::{PageRecord, ThemeRecord};
use crate::resolver::{ResolvedStyle, TokenResolver};
use crate::tokens::TokenGroupKind;
use crate::values::StyleValues;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Resolves pages and renders their CSS
///
/// Holds no per-request state and can be shared across threads.
#[derive(Clone, Debug)]
pub struct ThemeEngine {
    resolver: TokenResolver,
    generator: CssGenerator,
    fingerprint: u64,
}

impl ThemeEngine {
    pub fn new(defaults: DefaultTokens, config: StyleConfig) -> Self {
        let mut hasher = FxHasher::default();
        config.hash(&mut hasher);
        for kind in TokenGroupKind::all() {
            defaults.group(*kind).to_json().hash(&mut hasher);
        }

        Self {
            resolver: TokenResolver::new(defaults),
            generator: CssGenerator::new(config),
            fingerprint: hasher.finish(),
        }
    }

    pub fn with_config(config: StyleConfig) -> Self {
        Self::new(DefaultTokens::default(), config)
    }

    pub fn resolver(&self) -> &TokenResolver {
        &self.resolver
    }

    pub fn generator(&self) -> &CssGenerator {
        &self.generator
    }

    /// Hash of the defaults and config every render of this engine uses.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub fn resolve(&self, page: &PageRecord, theme: Option<&ThemeRecord>) -> ResolvedStyle {
        self.resolver.resolve(page, theme)
    }

    pub fn values(&self, page: &PageRecord, theme: Option<&ThemeRecord>) -> StyleValues {
        self.resolve(page, theme).values()
    }

    /// Custom property declarations only.
    pub fn css_variables(&self, page: &PageRecord, theme: Option<&ThemeRecord>) -> String {
        self.generator
            .generate_css_variables(&self.values(page, theme))
    }

    /// Complete style block for the page's `<style>` element.
    pub fn style_block(&self, page: &PageRecord, theme: Option<&ThemeRecord>) -> String {
        let values = self.values(page, theme);
        tracing::debug!(
            page_id = page.id,
            username = %page.username,
            theme_id = ?theme.map(|t| t.id),
            border_effect = %values.border_effect,
            "rendering page style"
        );
        self.generator.generate_complete_style_block(&values)
    }

    /// [`Self::style_block`] through a cache keyed by the render inputs.
    pub fn style_block_cached(
        &self,
        cache: &mut StyleCache,
        page: &PageRecord,
        theme: Option<&ThemeRecord>,
    ) -> Arc<str> {
        let key = StyleKey::new(page, theme).for_engine(self.fingerprint);
        cache.get_or_insert_with(key, || self.style_block(page, theme))
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new(DefaultTokens::default(), StyleConfig::default())
    }
}
