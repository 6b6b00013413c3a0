use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Book an Appointment".to_string()
}

/// Settings for the booking page, read from the `[booking]` table of
/// `config.toml`. Every field has a default so a missing or partial file
/// still yields a working form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfig {
    /// Heading shown above the form.
    #[serde(default = "default_title")]
    pub title: String,
    /// Extra class appended to the form element.
    #[serde(default)]
    pub form_class: String,
    /// Make the demo handler fail every submission.
    #[serde(default)]
    pub reject_submissions: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            form_class: String::new(),
            reject_submissions: false,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub booking: BookingConfig,
}
