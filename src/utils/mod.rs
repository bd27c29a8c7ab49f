pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{article_url, is_english_locale, is_portuguese_locale};
