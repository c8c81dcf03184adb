//! # Localization Tests
//!
//! This module contains unit tests for the localization functionality,
//! testing message retrieval and formatting with various edge cases.

use course_info_bot::localization::{init_localization, t, LocalizationManager};

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_localization() -> LocalizationManager {
        // Create a new localization manager for each test
        LocalizationManager::new().expect("Failed to create localization manager")
    }

    #[test]
    fn test_get_message_existing_key() {
        let manager = setup_localization();

        let message = manager.get_message("choose-department");
        assert_eq!(message, "Please choose your department:");
    }

    #[test]
    fn test_get_message_nonexistent_key() {
        let manager = setup_localization();

        let message = manager.get_message("nonexistent-key");
        assert!(message.starts_with("Missing translation:"));
    }

    #[test]
    fn test_intro_message_is_multiline() {
        let manager = setup_localization();

        let message = manager.get_message("intro-message");
        assert!(message.starts_with("Welcome to 5k AAiT Jem'a Course Info Bot!"));
        assert!(message.contains("\n\nThis bot helps you"));
        assert!(message.ends_with("by sending /stop."));
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        assert!(LocalizationManager::from_source("broken = { $").is_err());
    }

    #[test]
    fn test_convenience_functions() {
        init_localization();

        assert_eq!(t("back-button"), "Back");
        assert_eq!(t("link-label"), "Go to Channel");
        assert_eq!(
            t("conversation-stopped"),
            "The conversation has been stopped. To start again, type /start."
        );
    }
}
