pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{is_valid_url, join_endpoint, normalize_base_url};
