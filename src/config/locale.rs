use super::Config;

/// Locales shipped under `locales/`.
pub static SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-TW"];

fn detect_system_locale() -> Option<String> {
    std::env::var("LC_MESSAGES")
        .or_else(|_| std::env::var("LANG"))
        .ok()
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
}

/// Resolve config value -> system `LANG` -> `"en"` against the shipped locales.
fn detect_locale(config_locale: &str) -> &'static str {
    if let Some(locale) = normalise_locale(config_locale) {
        return locale;
    }

    detect_system_locale()
        .as_deref()
        .and_then(normalise_locale)
        .unwrap_or("en")
}

/// `"zh_TW.UTF-8"` -> `"zh-TW"`, `"en_US"` -> `"en"`, `"ja"` -> `None`.
fn normalise_locale(raw: &str) -> Option<&'static str> {
    let base = raw.split('.').next().unwrap_or(raw).replace('_', "-");
    if base.is_empty() {
        return None;
    }

    let exact = SUPPORTED_LOCALES
        .iter()
        .find(|locale| locale.eq_ignore_ascii_case(&base));
    if let Some(&locale) = exact {
        return Some(locale);
    }

    let lang = base.split('-').next().unwrap_or(&base);
    SUPPORTED_LOCALES
        .iter()
        .find(|locale| locale.split('-').next() == Some(lang))
        .copied()
}

impl Config {
    /// Resolve the UI locale, then set `rust_i18n::set_locale`.
    pub fn apply_locale(&self) -> &'static str {
        let locale = detect_locale(&self.locale);
        rust_i18n::set_locale(locale);
        locale
    }
}
