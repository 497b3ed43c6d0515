use log::{error, info};
use serde::Deserialize;
use thiserror::Error;

use crate::contact::ContactForm;
use crate::hotkey::Hotkey;
use crate::panels::ServiceEntry;

const SITE_CONTENT: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("hotkey must be a single character, got {0:?}")]
    Hotkey(String),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub brand: String,
    pub recipient: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default = "default_hotkey")]
    pub hotkey: String,
    // no list means the form has no service selector
    #[serde(default)]
    pub service_options: Option<Vec<String>>,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

fn default_hotkey() -> String {
    "b".to_string()
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate_hotkey()?;
        Ok(config)
    }

    /// Brand and address only: nothing to expand, no service selector.
    pub fn fallback() -> Self {
        Self {
            brand: "Zyberworks".to_string(),
            recipient: "enquiry@zyberworks.com.au".to_string(),
            logo: None,
            headline: "IT Services & Security Consulting".to_string(),
            tagline: String::new(),
            badges: Vec::new(),
            hotkey: default_hotkey(),
            service_options: None,
            services: Vec::new(),
        }
    }

    fn validate_hotkey(&self) -> Result<char, ConfigError> {
        let mut chars = self.hotkey.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConfigError::Hotkey(self.hotkey.clone())),
        }
    }

    pub fn hotkey(&self) -> Hotkey {
        Hotkey::new(self.validate_hotkey().unwrap_or('b'))
    }

    pub fn contact_form(&self) -> ContactForm {
        ContactForm::new(
            self.recipient.clone(),
            self.brand.clone(),
            self.service_options.clone(),
        )
    }
}

pub fn site_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_CONTENT) {
        Ok(config) => {
            info!("Loaded site content with {} services", config.services.len());
            config
        }
        Err(e) => {
            error!("Falling back to minimal site content: {}", e);
            SiteConfig::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::FormField;
    use crate::hotkey::{FocusContext, KeyPress};

    #[test]
    fn embedded_content_parses() {
        let config = SiteConfig::from_json(SITE_CONTENT).unwrap();
        assert_eq!(config.brand, "Zyberworks");
        assert_eq!(config.recipient, "enquiry@zyberworks.com.au");
        assert_eq!(config.services.len(), 9);
        assert!(config.services.iter().all(|s| !s.cards.is_empty()));
        assert_eq!(config.badges.len(), 4);

        let options = config.service_options.as_ref().unwrap();
        assert_eq!(options.first().map(String::as_str), Some("Penetration Testing"));
        assert_eq!(options.last().map(String::as_str), Some("Other"));
    }

    #[test]
    fn service_titles_are_unique() {
        let config = site_config();
        let mut titles: Vec<_> = config.services.iter().map(|s| s.title.clone()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), config.services.len());
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let config =
            SiteConfig::from_json(r#"{"brand": "Acme", "recipient": "hi@acme.test"}"#).unwrap();
        assert!(config.services.is_empty());
        assert!(config.service_options.is_none());
        assert!(config.hotkey().matches(&KeyPress::plain("B"), FocusContext::Idle));

        let form = config.contact_form();
        assert!(!form.has_service_field());
        assert_eq!(form.required_fields(), vec![FormField::Name, FormField::Email]);
    }

    #[test]
    fn entries_without_cards_are_accepted() {
        let config = SiteConfig::from_json(
            r#"{"brand": "Acme", "recipient": "hi@acme.test",
                "services": [{"kicker": "k", "title": "t", "body": "b"}]}"#,
        )
        .unwrap();
        assert!(config.services[0].cards.is_empty());
        assert_eq!(config.services[0].tint, None);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            SiteConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"brand": "Acme"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"brand": "A", "recipient": "r", "hotkey": "ctrl"}"#),
            Err(ConfigError::Hotkey(_))
        ));
    }

    #[test]
    fn fallback_has_nothing_to_render() {
        let config = SiteConfig::fallback();
        assert!(config.services.is_empty());
        assert!(config.badges.is_empty());
        assert!(!config.contact_form().has_service_field());
    }

    #[test]
    fn configured_form_requires_service() {
        let form = site_config().contact_form();
        assert!(form.has_service_field());
        assert_eq!(
            form.required_fields(),
            vec![FormField::Name, FormField::Email, FormField::Service]
        );
    }
}
