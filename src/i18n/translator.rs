//! Translation store
//!
//! Messages are kept per locale and addressed by dot paths. A lookup never
//! fails: a miss yields the key itself (recorded in the shared context) or
//! an empty string, depending on [`TranslatorOptions::force_display_keys`].

use super::catalog::{self, LocaleMessages};
use super::choice::select_choice;
use super::context::{TranslationContext, DEFAULT_CONTEXT_NAME};
use super::html::decode_html;
use super::replacements::{replace_string, Replacements};
use crate::dot::resolve_path;
use crate::error::CatalogResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Default active locale
pub const DEFAULT_LOCALE: &str = "en";

/// Lookup behavior of a [`Translator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorOptions {
    /// Name of the shared context; `None` disables seeding and miss recording
    pub global_name: Option<String>,

    /// Return the key itself when a lookup misses
    pub force_display_keys: bool,

    /// Record misses in the shared context
    pub store_not_founds: bool,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            global_name: Some(DEFAULT_CONTEXT_NAME.to_string()),
            force_display_keys: true,
            store_not_founds: true,
        }
    }
}

/// Per-locale message store with interpolation and pluralization
///
/// ```
/// use blok::i18n::{Replacements, Translator};
/// use serde_json::json;
///
/// let messages = json!({"baz": "Hello :word!"}).as_object().cloned().unwrap();
/// let mut i18n = Translator::new(messages, "en");
/// i18n.add(json!({"apples": "{0}none|{1}one|[2,*]:count apples"}).as_object().cloned().unwrap(), None);
///
/// let data = Replacements::new().with("word", "world");
/// assert_eq!(i18n.get("baz", Some(&data), None), "Hello world!");
/// assert_eq!(i18n.choice("apples", 3, None, None), "3 apples");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
    translations: HashMap<String, Value>,
    options: TranslatorOptions,
    context: Option<Arc<TranslationContext>>,
}

impl Translator {
    /// Create a translator with default options and its own context
    pub fn new(translations: LocaleMessages, default_locale: impl Into<String>) -> Self {
        Self::with_options(translations, default_locale, TranslatorOptions::default())
    }

    /// Create a translator; a fresh context is created when
    /// `options.global_name` is set
    pub fn with_options(
        translations: LocaleMessages,
        default_locale: impl Into<String>,
        options: TranslatorOptions,
    ) -> Self {
        let context = options
            .global_name
            .as_deref()
            .map(|name| Arc::new(TranslationContext::new(name)));
        Self::build(translations, default_locale.into(), options, context)
    }

    /// Create a translator attached to an existing context.
    ///
    /// The context seed is merged under `translations` for the default
    /// locale, and the not-found log is reset when misses are recorded.
    pub fn with_context(
        translations: LocaleMessages,
        default_locale: impl Into<String>,
        options: TranslatorOptions,
        context: Arc<TranslationContext>,
    ) -> Self {
        Self::build(translations, default_locale.into(), options, Some(context))
    }

    fn build(
        translations: LocaleMessages,
        locale: String,
        options: TranslatorOptions,
        context: Option<Arc<TranslationContext>>,
    ) -> Self {
        let messages = match &context {
            Some(ctx) => {
                let mut merged = ctx.seed();
                merged.extend(translations);
                if options.store_not_founds {
                    ctx.reset_not_founds();
                }
                merged
            }
            None => translations,
        };

        let mut translator = Self {
            locale,
            translations: HashMap::new(),
            options,
            context,
        };
        translator.set(messages, None);
        translator
    }

    /// Active locale
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switch the active locale. The locale does not need to be loaded.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    pub fn context(&self) -> Option<&Arc<TranslationContext>> {
        self.context.as_ref()
    }

    /// Loaded locales, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Replace all messages of `locale` (default: active locale)
    pub fn set(&mut self, translations: LocaleMessages, locale: Option<&str>) {
        let locale = locale.unwrap_or(&self.locale).to_string();
        log::debug!("Setting {} message(s) for locale '{}'", translations.len(), locale);
        self.translations.insert(locale, Value::Object(translations));
    }

    /// Merge messages into `locale` (default: active locale); incoming keys
    /// win, other keys are kept
    pub fn add(&mut self, translations: LocaleMessages, locale: Option<&str>) {
        let locale = locale.unwrap_or(&self.locale).to_string();
        log::debug!("Adding {} message(s) to locale '{}'", translations.len(), locale);
        match self.translations.get_mut(&locale) {
            Some(Value::Object(existing)) => existing.extend(translations),
            _ => {
                self.translations.insert(locale, Value::Object(translations));
            }
        }
    }

    /// Add every locale of a catalog file
    pub fn load_file(&mut self, path: &Path) -> CatalogResult<()> {
        for (locale, messages) in catalog::load_catalog(path)? {
            self.add(messages, Some(&locale));
        }
        Ok(())
    }

    /// Resolve a fully qualified key (`"<locale>.<path>"`)
    pub fn fetch(&self, key: &str) -> Option<&Value> {
        let (locale, path) = match key.split_once('.') {
            Some((locale, path)) => (locale, Some(path)),
            None => (key, None),
        };

        let root = self.translations.get(locale)?;
        match path {
            Some(path) => resolve_path(root, path),
            None => Some(root),
        }
    }

    /// Whether `key` resolves in `locale` (default: active locale)
    pub fn has(&self, key: &str, locale: Option<&str>) -> bool {
        self.fetch(&self.qualify(key, locale)).is_some()
    }

    /// Translate `key`, interpolating `data` and decoding HTML entities
    pub fn get(&self, key: &str, data: Option<&Replacements>, locale: Option<&str>) -> String {
        let content = self.fetch(&self.qualify(key, locale)).and_then(Value::as_str);
        self.render(key, content, data)
    }

    /// Translate a choice template for `count`.
    ///
    /// `:count` is available to the selected fragment unless `data`
    /// overrides it.
    pub fn choice(
        &self,
        key: &str,
        count: i64,
        data: Option<&Replacements>,
        locale: Option<&str>,
    ) -> String {
        let template = match self.fetch(&self.qualify(key, locale)) {
            Some(Value::String(template)) if !template.is_empty() => template,
            _ => {
                if !self.options.force_display_keys {
                    return String::new();
                }
                self.record_missing(key);
                return match data {
                    Some(data) => replace_string(key, data),
                    None => key.to_string(),
                };
            }
        };

        let mut replacements = Replacements::new().with("count", count);
        if let Some(data) = data {
            replacements.extend_from(data);
        }

        self.render(key, select_choice(template, count), Some(&replacements))
    }

    /// Keys recorded as missing in the shared context
    pub fn missing_keys(&self) -> Vec<String> {
        self.context
            .as_ref()
            .map(|ctx| ctx.not_founds())
            .unwrap_or_default()
    }

    fn qualify(&self, key: &str, locale: Option<&str>) -> String {
        format!("{}.{}", locale.unwrap_or(&self.locale), key)
    }

    fn render(&self, key: &str, content: Option<&str>, data: Option<&Replacements>) -> String {
        let content = match content {
            Some(content) => content,
            None if self.options.force_display_keys => {
                self.record_missing(key);
                key
            }
            None => return String::new(),
        };

        match data {
            Some(data) => decode_html(&replace_string(content, data)),
            None => decode_html(content),
        }
    }

    fn record_missing(&self, key: &str) {
        log::debug!("Missing translation '{}' in locale '{}'", key, self.locale);
        if !self.options.store_not_founds {
            return;
        }
        if let Some(ctx) = &self.context {
            ctx.record_not_found(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(value: Value) -> LocaleMessages {
        value.as_object().cloned().unwrap()
    }

    fn sample() -> Translator {
        Translator::new(
            messages(json!({
                "hello": "Hello :name",
                "apples": "{0}no apples|{1}one apple|[2,*]:count apples",
                "fruit": "apple|apples",
                "escaped": "Tom &amp; Jerry",
                "city": "K&ouml;ln &hearts; :name",
                "menu": {"file": {"open": "Open"}},
                "count": 3,
            })),
            "en",
        )
    }

    #[test]
    fn test_get_plain_and_nested() {
        let i18n = sample();
        assert_eq!(i18n.get("menu.file.open", None, None), "Open");
        assert_eq!(i18n.get("escaped", None, None), "Tom & Jerry");
    }

    #[test]
    fn test_get_decodes_accented_entities() {
        let i18n = sample();
        let data = Replacements::new().with("name", "Dom");
        assert_eq!(i18n.get("city", Some(&data), None), "Köln \u{2665} Dom");
    }

    #[test]
    fn test_get_with_data() {
        let i18n = sample();
        let data = Replacements::new().with("name", "world");
        assert_eq!(i18n.get("hello", Some(&data), None), "Hello world");
    }

    #[test]
    fn test_missing_key_on_empty_catalog() {
        let i18n = Translator::new(LocaleMessages::new(), "en");
        assert_eq!(i18n.get("key", None, None), "key");
        assert_eq!(i18n.missing_keys(), vec!["key"]);
        assert_eq!(i18n.get("key", None, None), "key");
        assert_eq!(i18n.missing_keys(), vec!["key", "key"]);
    }

    #[test]
    fn test_non_string_value_is_missing() {
        let i18n = sample();
        assert_eq!(i18n.get("menu", None, None), "menu");
        assert_eq!(i18n.get("count", None, None), "count");
        assert_eq!(i18n.missing_keys(), vec!["menu", "count"]);
    }

    #[test]
    fn test_missing_without_force_display() {
        let options = TranslatorOptions {
            force_display_keys: false,
            ..Default::default()
        };
        let i18n = Translator::with_options(LocaleMessages::new(), "en", options);
        assert_eq!(i18n.get("nope", None, None), "");
        assert_eq!(i18n.choice("nope", 2, None, None), "");
        assert!(i18n.missing_keys().is_empty());
    }

    #[test]
    fn test_missing_without_context() {
        let options = TranslatorOptions {
            global_name: None,
            ..Default::default()
        };
        let i18n = Translator::with_options(LocaleMessages::new(), "en", options);
        assert!(i18n.context().is_none());
        assert_eq!(i18n.get("nope", None, None), "nope");
        assert!(i18n.missing_keys().is_empty());
    }

    #[test]
    fn test_has_and_fetch() {
        let i18n = sample();
        assert!(i18n.has("menu.file", None));
        assert!(!i18n.has("menu.edit", None));
        assert!(!i18n.has("hello", Some("fr")));
        assert_eq!(i18n.fetch("en.hello"), Some(&json!("Hello :name")));
        assert!(i18n.fetch("en").is_some());
        assert_eq!(i18n.fetch("de.hello"), None);
    }

    #[test]
    fn test_add_merges_and_set_replaces() {
        let mut i18n = sample();
        i18n.add(messages(json!({"hello": "Hi", "bye": "Bye"})), None);
        assert_eq!(i18n.get("hello", None, None), "Hi");
        assert_eq!(i18n.get("bye", None, None), "Bye");
        assert_eq!(i18n.get("fruit", None, None), "apple|apples");

        i18n.set(messages(json!({"only": "this"})), None);
        assert!(!i18n.has("hello", None));
        assert!(i18n.has("only", None));
    }

    #[test]
    fn test_locales() {
        let mut i18n = sample();
        i18n.add(messages(json!({"hello": "Bonjour :name"})), Some("fr"));
        assert_eq!(i18n.locales(), vec!["en", "fr"]);

        let data = Replacements::new().with("name", "monde");
        assert_eq!(i18n.get("hello", Some(&data), Some("fr")), "Bonjour monde");

        i18n.set_locale("fr");
        assert_eq!(i18n.locale(), "fr");
        assert_eq!(i18n.get("hello", Some(&data), None), "Bonjour monde");
    }

    #[test]
    fn test_choice_rules() {
        let i18n = sample();
        assert_eq!(i18n.choice("apples", 0, None, None), "no apples");
        assert_eq!(i18n.choice("apples", 1, None, None), "one apple");
        assert_eq!(i18n.choice("apples", 7, None, None), "7 apples");
    }

    #[test]
    fn test_choice_singular_plural() {
        let i18n = sample();
        assert_eq!(i18n.choice("fruit", 1, None, None), "apple");
        assert_eq!(i18n.choice("fruit", 2, None, None), "apples");
    }

    #[test]
    fn test_choice_count_can_be_overridden() {
        let i18n = sample();
        let data = Replacements::new().with("count", "many");
        assert_eq!(i18n.choice("apples", 7, Some(&data), None), "many apples");
    }

    #[test]
    fn test_choice_missing_records_key() {
        let i18n = sample();
        let data = Replacements::new().with("n", 2);
        assert_eq!(i18n.choice("nope", 1, None, None), "nope");
        assert_eq!(i18n.choice("nope :n", 1, Some(&data), None), "nope 2");
        assert_eq!(i18n.missing_keys(), vec!["nope", "nope :n"]);
    }

    #[test]
    fn test_choice_no_matching_rule() {
        let i18n = Translator::new(messages(json!({"items": "{1}one|[2,*]many"})), "en");
        assert_eq!(i18n.choice("items", 0, None, None), "items");
        assert_eq!(i18n.missing_keys(), vec!["items"]);
    }

    #[test]
    fn test_context_seed_and_reset() {
        let seed = messages(json!({"seeded": "from seed", "hello": "seed hello"}));
        let ctx = Arc::new(TranslationContext::with_seed("translations", seed));
        ctx.record_not_found("stale");

        let i18n = Translator::with_context(
            messages(json!({"hello": "caller hello"})),
            "en",
            TranslatorOptions::default(),
            Arc::clone(&ctx),
        );
        assert!(ctx.not_founds().is_empty());
        assert_eq!(i18n.get("seeded", None, None), "from seed");
        assert_eq!(i18n.get("hello", None, None), "caller hello");

        i18n.get("absent", None, None);
        assert_eq!(ctx.not_founds(), vec!["absent"]);
    }

    #[test]
    fn test_load_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"de": {{"hello": "Hallo :name"}}}}"#).unwrap();

        let mut i18n = sample();
        i18n.load_file(file.path()).unwrap();
        let data = Replacements::new().with("name", "Welt");
        assert_eq!(i18n.get("hello", Some(&data), Some("de")), "Hallo Welt");
        assert_eq!(i18n.get("hello", Some(&data), None), "Hello Welt");
    }
}
