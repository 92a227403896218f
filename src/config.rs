use std::env;

pub const DEFAULT_BASE_URL: &str =
    "https://timetrackerapi-9b37bc53e807.herokuapp.com/api/TimeTracker";
pub const BASE_URL_ENV: &str = "FOREST_API_URL";

pub fn resolve_base_url() -> String {
    base_url_from(env::var(BASE_URL_ENV).ok())
}

pub fn base_url_from(value: Option<String>) -> String {
    match value {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_blank_uses_default() {
        assert_eq!(base_url_from(None), DEFAULT_BASE_URL);
        assert_eq!(base_url_from(Some("   ".into())), DEFAULT_BASE_URL);
    }

    #[test]
    fn override_is_trimmed() {
        assert_eq!(
            base_url_from(Some(" http://127.0.0.1:8080/api/TimeTracker/ ".into())),
            "http://127.0.0.1:8080/api/TimeTracker"
        );
    }
}
