//! Share link and message service.
//!
//! Builds the canonical share URL (the state mirrored into query
//! parameters), the three message templates, and the `sms:` compose URL,
//! and hands finished text to the platform ports. Encoding happens here at
//! the transport boundary; the derivation engine only ever sees the
//! finished link as an opaque string.

use anyhow::Result;
use log::{info, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::sync::Arc;
use thiserror::Error;
use url::Url;

use shared::{
    build_messages, display_name, share_headline, MessageContext, MessageStyle, MessageTemplates,
};

use crate::backend::domain::commands::check_in::ImportCommand;
use crate::backend::domain::models::check_in::CheckIn;
use crate::backend::platform::{Clipboard, CopyOutcome, ShareOutcome, ShareSheet};
use crate::backend::storage::yaml::{ConfigRepository, ConfigStorage, YamlConnection};

/// Query parameters mirrored into share links.
const PARAM_LEVEL: &str = "level";
const PARAM_CUPS: &str = "cups";
const PARAM_NAME: &str = "name";
const PARAM_VERSION: &str = "v";

/// Characters kept verbatim in `sms:` URLs; everything else is
/// percent-encoded.
const SMS_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Error for share links that cannot be read at all.
#[derive(Debug, Error)]
pub enum ShareLinkError {
    #[error("share link is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// What actually happened when the user asked to share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareDelivery {
    /// The native share surface took it
    Shared,
    /// The user backed out of the share surface
    Cancelled,
    /// No share surface; the link went to the clipboard instead
    Copied,
    /// Neither share surface nor clipboard was available
    Unavailable,
}

/// Service for share links, message templates, and SMS composition.
#[derive(Clone)]
pub struct ShareService {
    config_repository: ConfigRepository,
}

impl ShareService {
    /// Create a new ShareService.
    pub fn new(connection: Arc<YamlConnection>) -> Self {
        let config_repository = ConfigRepository::new(connection);
        Self { config_repository }
    }

    /// Canonical share URL for a check-in: the configured base with level,
    /// cups, and name query parameters, plus the app version when one is
    /// configured.
    pub fn share_url(&self, check_in: &CheckIn) -> Result<String> {
        let config = self.config_repository.get_config()?;
        let mut url = Url::parse(&config.base_url)?;
        url.query_pairs_mut()
            .clear()
            .append_pair(PARAM_LEVEL, &check_in.level.to_string())
            .append_pair(PARAM_CUPS, &check_in.cups.to_string())
            .append_pair(PARAM_NAME, display_name(&check_in.name));
        if let Some(version) = &config.app_version {
            url.query_pairs_mut().append_pair(PARAM_VERSION, version);
        }
        Ok(url.to_string())
    }

    /// All three message templates for a check-in.
    pub fn messages(&self, check_in: &CheckIn) -> Result<MessageTemplates> {
        let url = self.share_url(check_in)?;
        Ok(build_messages(&MessageContext {
            level: check_in.level,
            cups: check_in.cups,
            name: check_in.name.clone(),
            url,
        }))
    }

    /// The template the app sends by default for the current level.
    pub fn auto_message(&self, check_in: &CheckIn) -> Result<(MessageStyle, String)> {
        let style = MessageStyle::for_level(check_in.level);
        let templates = self.messages(check_in)?;
        Ok((style, templates.get(style).to_string()))
    }

    /// `sms:` compose URL carrying the auto-selected template. The recipient
    /// comes from config when preconfigured; an empty recipient lets the
    /// messaging app ask for a contact.
    pub fn sms_url(&self, check_in: &CheckIn) -> Result<String> {
        let config = self.config_repository.get_config()?;
        let (style, body) = self.auto_message(check_in)?;

        let recipient = config.sms_recipient.as_deref().unwrap_or("");
        let encoded_recipient = utf8_percent_encode(recipient, SMS_SET).to_string();
        let encoded_body = utf8_percent_encode(&body, SMS_SET).to_string();

        info!("Composed {} SMS for level {}", style, check_in.level);
        Ok(format!("sms:{}?body={}", encoded_recipient, encoded_body))
    }

    /// Pull check-in values out of a share link. Malformed numeric values
    /// are dropped with a warning rather than failing the whole import.
    pub fn parse_link(&self, raw: &str) -> Result<ImportCommand, ShareLinkError> {
        let url = Url::parse(raw)?;
        let mut command = ImportCommand::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                PARAM_LEVEL => match value.parse::<i32>() {
                    Ok(level) => command.level = Some(level),
                    Err(_) => warn!("Ignoring unparseable level '{}' in share link", value),
                },
                PARAM_CUPS => match value.parse::<u32>() {
                    Ok(cups) => command.cups = Some(cups),
                    Err(_) => warn!("Ignoring unparseable cups '{}' in share link", value),
                },
                PARAM_NAME => command.name = Some(value.to_string()),
                _ => {}
            }
        }

        info!(
            "Parsed share link: level={:?}, cups={:?}, name={:?}",
            command.level, command.cups, command.name
        );
        Ok(command)
    }

    /// Share through the native sheet when available, falling back to
    /// copying the link, the same way the web host does.
    pub fn share(
        &self,
        share_sheet: &dyn ShareSheet,
        clipboard: &dyn Clipboard,
        check_in: &CheckIn,
    ) -> Result<ShareDelivery> {
        let url = self.share_url(check_in)?;
        let headline = share_headline(&check_in.name, &url);

        match share_sheet.share(&headline, &url) {
            ShareOutcome::Shared => Ok(ShareDelivery::Shared),
            ShareOutcome::Cancelled => Ok(ShareDelivery::Cancelled),
            ShareOutcome::Unavailable => match clipboard.copy_text(&url) {
                CopyOutcome::Copied => Ok(ShareDelivery::Copied),
                CopyOutcome::Unavailable => Ok(ShareDelivery::Unavailable),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn setup_test_service() -> (ShareService, ConfigRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection =
            Arc::new(YamlConnection::new(temp_dir.path()).expect("Failed to create connection"));
        let config_repository = ConfigRepository::new(connection.clone());
        (ShareService::new(connection), config_repository, temp_dir)
    }

    struct RecordingClipboard {
        copied: Mutex<Vec<String>>,
    }

    impl RecordingClipboard {
        fn new() -> Self {
            Self {
                copied: Mutex::new(Vec::new()),
            }
        }
    }

    impl Clipboard for RecordingClipboard {
        fn copy_text(&self, text: &str) -> CopyOutcome {
            self.copied.lock().unwrap().push(text.to_string());
            CopyOutcome::Copied
        }
    }

    struct FixedShareSheet(ShareOutcome);

    impl ShareSheet for FixedShareSheet {
        fn share(&self, _text: &str, _url: &str) -> ShareOutcome {
            self.0
        }
    }

    #[test]
    fn test_share_url_mirrors_state() {
        let (service, _config_repo, _temp_dir) = setup_test_service();

        let check_in = CheckIn {
            level: 72,
            cups: 3,
            name: "Marcus".to_string(),
            ..CheckIn::default()
        };
        let url = service.share_url(&check_in).unwrap();
        assert_eq!(
            url,
            "https://grump-factor.app/?level=72&cups=3&name=Marcus"
        );
    }

    #[test]
    fn test_share_url_falls_back_to_dad() {
        let (service, _config_repo, _temp_dir) = setup_test_service();

        let check_in = CheckIn {
            name: "   ".to_string(),
            ..CheckIn::default()
        };
        let url = service.share_url(&check_in).unwrap();
        assert!(url.contains("name=Dad"), "{}", url);
    }

    #[test]
    fn test_share_url_carries_configured_version() {
        let (service, config_repo, _temp_dir) = setup_test_service();

        let mut config = config_repo.get_config().unwrap();
        config.app_version = Some("1.4.0".to_string());
        config_repo.update_config(&config).unwrap();

        let url = service.share_url(&CheckIn::default()).unwrap();
        assert!(url.ends_with("&v=1.4.0"), "{}", url);
    }

    #[test]
    fn test_messages_interpolate_share_url() {
        let (service, _config_repo, _temp_dir) = setup_test_service();

        let templates = service.messages(&CheckIn::default()).unwrap();
        assert!(templates
            .playful
            .contains("https://grump-factor.app/?level=35&cups=1&name=Dad"));
        assert!(templates.playful.starts_with("Morning Dad!"));
    }

    #[test]
    fn test_auto_message_follows_level() {
        let (service, _config_repo, _temp_dir) = setup_test_service();

        let mut check_in = CheckIn::default();
        check_in.level = 30;
        let (style, _) = service.auto_message(&check_in).unwrap();
        assert_eq!(style, MessageStyle::Playful);

        check_in.level = 60;
        let (style, _) = service.auto_message(&check_in).unwrap();
        assert_eq!(style, MessageStyle::Straight);

        check_in.level = 90;
        let (style, body) = service.auto_message(&check_in).unwrap();
        assert_eq!(style, MessageStyle::Emoji);
        assert!(body.starts_with("Grump factor today?"));
    }

    #[test]
    fn test_sms_url_is_percent_encoded() {
        let (service, _config_repo, _temp_dir) = setup_test_service();

        let sms = service.sms_url(&CheckIn::default()).unwrap();
        assert!(sms.starts_with("sms:?body=Morning%20Dad%21"), "{}", sms);
        assert!(!sms.contains(' '), "{}", sms);
    }

    #[test]
    fn test_sms_url_uses_configured_recipient() {
        let (service, config_repo, _temp_dir) = setup_test_service();

        let mut config = config_repo.get_config().unwrap();
        config.sms_recipient = Some("+15551234567".to_string());
        config_repo.update_config(&config).unwrap();

        let sms = service.sms_url(&CheckIn::default()).unwrap();
        assert!(sms.starts_with("sms:%2B15551234567?body="), "{}", sms);
    }

    #[test]
    fn test_parse_link_roundtrip() {
        let (service, _config_repo, _temp_dir) = setup_test_service();

        let check_in = CheckIn {
            level: 61,
            cups: 2,
            name: "Marcus".to_string(),
            ..CheckIn::default()
        };
        let url = service.share_url(&check_in).unwrap();
        let command = service.parse_link(&url).unwrap();
        assert_eq!(command.level, Some(61));
        assert_eq!(command.cups, Some(2));
        assert_eq!(command.name.as_deref(), Some("Marcus"));
    }

    #[test]
    fn test_parse_link_drops_malformed_values() {
        let (service, _config_repo, _temp_dir) = setup_test_service();

        let command = service
            .parse_link("https://grump-factor.app/?level=loud&cups=2&name=Mo")
            .unwrap();
        assert_eq!(command.level, None);
        assert_eq!(command.cups, Some(2));
        assert_eq!(command.name.as_deref(), Some("Mo"));
    }

    #[test]
    fn test_parse_link_rejects_garbage() {
        let (service, _config_repo, _temp_dir) = setup_test_service();

        assert!(service.parse_link("not a url at all").is_err());
    }

    #[test]
    fn test_share_falls_back_to_clipboard() {
        let (service, _config_repo, _temp_dir) = setup_test_service();

        let clipboard = RecordingClipboard::new();
        let delivery = service
            .share(
                &FixedShareSheet(ShareOutcome::Unavailable),
                &clipboard,
                &CheckIn::default(),
            )
            .unwrap();
        assert_eq!(delivery, ShareDelivery::Copied);

        let copied = clipboard.copied.lock().unwrap();
        assert_eq!(copied.len(), 1);
        assert!(copied[0].starts_with("https://grump-factor.app/?level=35"));
    }

    #[test]
    fn test_share_reports_cancellation_without_copying() {
        let (service, _config_repo, _temp_dir) = setup_test_service();

        let clipboard = RecordingClipboard::new();
        let delivery = service
            .share(
                &FixedShareSheet(ShareOutcome::Cancelled),
                &clipboard,
                &CheckIn::default(),
            )
            .unwrap();
        assert_eq!(delivery, ShareDelivery::Cancelled);
        assert!(clipboard.copied.lock().unwrap().is_empty());
    }
}
