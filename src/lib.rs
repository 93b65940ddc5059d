//! Blok - translation store and dot-path accessor
//!
//! - [`i18n`]: per-locale messages, `:name` interpolation, `{n}`/`[a,b]`
//!   choice rules, missing-key tracking through a shared context
//! - [`dot`]: nested value access and `where` filters by dot path
//! - [`route`]: `:name` substitution in URL templates
//! - [`app`]: the [`Blok`] service tying configuration, translator and
//!   routes together

pub mod app;
pub mod config;
pub mod dot;
pub mod error;
pub mod i18n;
pub mod route;

// Re-export commonly used types
pub use app::Blok;
pub use config::{ApiConfig, Config, I18nConfig};
pub use dot::{DotObject, Operator};
pub use error::{AppError, AppResult, CatalogError, ConfigError, DotPathError};
pub use i18n::{Replacements, TranslationContext, Translator, TranslatorOptions};
