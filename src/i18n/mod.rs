//! Internationalization (i18n) module for Blok
//!
//! Provides a per-locale message store with:
//! - Dot-path keys (`"menu.file.open"`)
//! - `:name` / `:Name` / `:NAME` placeholder interpolation
//! - Pipe-separated choice templates with `{n}` and `[from,to]` rules
//! - HTML entity decoding of rendered messages
//! - A shared context for seed messages and missing-key tracking

mod catalog;
mod choice;
mod context;
mod html;
mod replacements;
mod translator;

pub use catalog::{load_catalog, split_locales, LocaleMessages};
pub use choice::{match_choice_count, select_choice, ChoiceMatch};
pub use context::{TranslationContext, DEFAULT_CONTEXT_NAME};
pub use html::decode_html;
pub use replacements::{replace_string, Replacements};
pub use translator::{Translator, TranslatorOptions, DEFAULT_LOCALE};
