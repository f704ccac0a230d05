//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Strips scheme and `www.` from a URL for compact display.
///
/// Usage in templates: `{{ brand.url|display_url }}`
#[askama::filter_fn]
pub fn display_url(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(strip_display_url(&value.to_string()))
}

fn strip_display_url(url: &str) -> String {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_url_strips_scheme_and_www() {
        assert_eq!(strip_display_url("https://www.esab.com.br/"), "esab.com.br");
        assert_eq!(strip_display_url("http://starmig.com"), "starmig.com");
    }
}
