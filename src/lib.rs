pub mod article;
pub mod config;
pub mod errors;
pub mod link_injector;
pub mod utils;

pub use article::{ArticleReference, load_article_references, parse_article_references};
pub use config::InterlinkConfig;
pub use errors::{InterlinkError, InterlinkResult};
pub use link_injector::{InjectionReport, InternalLinkInjector, inject_internal_links};
