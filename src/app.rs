//! Blok service
//!
//! Bundles what the host application injects into its components: the
//! configuration (readable by dot path), a configured translator, route
//! helpers bound to the API base URL, and a debug trace gated by config.

use crate::config::Config;
use crate::dot::DotObject;
use crate::error::AppResult;
use crate::i18n::{LocaleMessages, Replacements, TranslationContext, Translator};
use crate::route;
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Installed Blok service
#[derive(Debug, Clone)]
pub struct Blok {
    config: Config,
    settings: DotObject,
    translator: Translator,
}

impl Blok {
    /// Build the service from configuration.
    ///
    /// The translator starts empty in the configured language, then
    /// `config.translations` is merged into that language.
    pub fn install(config: Config) -> AppResult<Self> {
        config.validate()?;
        let translator = Translator::with_options(
            LocaleMessages::new(),
            &config.i18n.language,
            config.i18n.translator_options(),
        );
        Self::finish(config, translator)
    }

    /// Build the service around an existing shared context
    pub fn install_with_context(
        config: Config,
        context: Arc<TranslationContext>,
    ) -> AppResult<Self> {
        config.validate()?;
        let translator = Translator::with_context(
            LocaleMessages::new(),
            &config.i18n.language,
            config.i18n.translator_options(),
            context,
        );
        Self::finish(config, translator)
    }

    fn finish(config: Config, mut translator: Translator) -> AppResult<Self> {
        translator.add(config.translations.clone(), Some(&config.i18n.language));
        let settings = DotObject::new(config.to_value()?);

        log::info!(
            "Installed Blok (language '{}', {} message(s))",
            config.i18n.language,
            config.translations.len()
        );

        Ok(Self {
            config,
            settings,
            translator,
        })
    }

    /// Typed configuration
    pub fn settings(&self) -> &Config {
        &self.config
    }

    /// Configuration addressed by dot path
    pub fn config(&self) -> &DotObject {
        &self.settings
    }

    /// Configuration value at `path`, or `default`
    pub fn config_value(&self, path: &str, default: Value) -> Value {
        self.settings.get_or(path, default)
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn translator_mut(&mut self) -> &mut Translator {
        &mut self.translator
    }

    /// Add every locale of a JSON catalog file to the translator
    pub fn load_catalog(&mut self, path: &Path) -> AppResult<()> {
        self.translator.load_file(path)?;
        Ok(())
    }

    /// Publish messages for the configured language.
    ///
    /// The messages are merged into this translator and into the seed of the
    /// shared context, so translators created on that context later start
    /// with them. Without a context only this translator is updated.
    pub fn share_translations(&mut self, messages: LocaleMessages) {
        if let Some(context) = self.translator.context() {
            context.extend_seed(messages.clone());
        }
        self.translator.add(messages, Some(&self.config.i18n.language));
    }

    /// Translate a key
    pub fn trans(&self, key: &str, data: Option<&Replacements>, locale: Option<&str>) -> String {
        self.translator.get(key, data, locale)
    }

    /// Translate a choice key for `count`
    pub fn choice(
        &self,
        key: &str,
        count: i64,
        data: Option<&Replacements>,
        locale: Option<&str>,
    ) -> String {
        self.translator.choice(key, count, data, locale)
    }

    /// Substitute `:name` placeholders in an endpoint
    pub fn url_route(&self, endpoint: &str, params: Option<&Replacements>) -> String {
        route::url_route(endpoint, params)
    }

    /// Endpoint prefixed with the configured API base URL
    pub fn api_route(&self, endpoint: &str, params: Option<&Replacements>) -> String {
        route::api_route(&self.config.api.url, endpoint, params)
    }

    /// Log a debug line when `debug` is enabled. Returns whether it was logged.
    pub fn trace(&self, message: impl fmt::Display) -> bool {
        if !self.config.debug {
            return false;
        }
        log::debug!("[Debug] {}", message);
        true
    }
}
