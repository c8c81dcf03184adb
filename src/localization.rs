use anyhow::{anyhow, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::sync::LazyLock;
use unic_langid::LanguageIdentifier;

/// English message catalog, compiled into the binary
const EN_MESSAGES: &str = include_str!("../locales/en/main.ftl");

/// Localization manager for the Course Info Bot
pub struct LocalizationManager {
    bundle: FluentBundle<FluentResource>,
}

impl LocalizationManager {
    /// Create a new localization manager from the embedded English catalog
    pub fn new() -> Result<Self> {
        Self::from_source(EN_MESSAGES)
    }

    /// Create a localization manager from Fluent source text
    pub fn from_source(source: &str) -> Result<Self> {
        let en_locale: LanguageIdentifier = "en".parse()?;
        let mut bundle = FluentBundle::new_concurrent(vec![en_locale]);
        // Isolation marks would end up inside Telegram messages
        bundle.set_use_isolating(false);

        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| anyhow!("Invalid message catalog: {errors:?}"))?;
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow!("Duplicate messages in catalog: {errors:?}"))?;

        Ok(Self { bundle })
    }

    /// Get a localized message
    pub fn get_message(&self, key: &str) -> String {
        let msg = match self.bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let mut errors = vec![];
        self.bundle
            .format_pattern(pattern, None, &mut errors)
            .into_owned()
    }
}

/// Global localization instance
static LOCALIZATION_MANAGER: LazyLock<LocalizationManager> = LazyLock::new(|| {
    LocalizationManager::new().unwrap_or_else(|e| panic!("Embedded message catalog is broken: {e}"))
});

/// Force loading of the message catalog so a broken catalog fails at startup
pub fn init_localization() {
    LazyLock::force(&LOCALIZATION_MANAGER);
}

/// Convenience function to get a localized message
pub fn t(key: &str) -> String {
    LOCALIZATION_MANAGER.get_message(key)
}
