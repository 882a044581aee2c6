mod backend;
mod client;
mod language;
mod selector;

pub use backend::{Backend, ClientConfig, DEFAULT_ENGINE, DEFAULT_MIRRORS, Endpoint};
pub use client::{
    DEFAULT_TIMEOUT, TranslationClient, TranslationClientBuilder, TranslationRequest,
};
pub use language::{
    AUTO_DETECT, LanguageEntry, format_languages, languages_by_name, print_languages,
};
pub use selector::{MirrorSelector, RandomSelector, RoundRobinSelector, Selection};
