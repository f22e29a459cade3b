use super::Config;

/// Checked in order; the first non-empty value wins.
const API_KEY_VARS: [&str; 3] = ["MINDSHIFT_API_KEY", "GEMINI_API_KEY", "API_KEY"];

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = API_KEY_VARS
            .into_iter()
            .find_map(|var| std::env::var(var).ok().filter(|key| !key.is_empty()))
        {
            self.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("MINDSHIFT_MODEL")
            && !model.is_empty()
        {
            self.gemini.model = model;
        }

        if let Ok(api_base) = std::env::var("MINDSHIFT_API_BASE")
            && !api_base.is_empty()
        {
            self.gemini.api_base = api_base;
        }

        if let Ok(level) = std::env::var("MINDSHIFT_LOG")
            && !level.is_empty()
        {
            self.logging.level = level;
        }

        if let Ok(locale) = std::env::var("MINDSHIFT_LOCALE")
            && !locale.is_empty()
        {
            self.locale = locale;
        }

        if let Ok(temp_str) = std::env::var("MINDSHIFT_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.gemini.temperature = Some(temp);
        }
    }
}
