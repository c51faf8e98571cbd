//! Inbox list previews (how the message appears before it is opened).

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::config::{
    AnalysisSettings, DEFAULT_INBOX_PREHEADER, DEFAULT_INBOX_SENDER, DEFAULT_INBOX_SUBJECT,
};

/// Mail clients with an inbox preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum InboxClient {
    #[strum(serialize = "Gmail")]
    Gmail,
    #[strum(serialize = "Apple Mail")]
    AppleMail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxPreview {
    pub client: InboxClient,
    pub sender: String,
    pub subject: String,
    pub preheader: String,
    /// Uppercased first letter of the sender, shown as the avatar
    pub avatar_initial: char,
}

/// One preview per supported client, with defaults for missing settings.
pub fn inbox_previews(settings: &AnalysisSettings) -> Vec<InboxPreview> {
    let settings = settings.normalized();
    let sender = settings
        .sender
        .unwrap_or_else(|| DEFAULT_INBOX_SENDER.to_string());
    let subject = settings
        .subject
        .unwrap_or_else(|| DEFAULT_INBOX_SUBJECT.to_string());
    let preheader = settings
        .preheader
        .unwrap_or_else(|| DEFAULT_INBOX_PREHEADER.to_string());
    let avatar_initial = sender
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('S');

    InboxClient::iter()
        .map(|client| InboxPreview {
            client,
            sender: sender.clone(),
            subject: subject.clone(),
            preheader: preheader.clone(),
            avatar_initial,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let previews = inbox_previews(&AnalysisSettings::default());
        assert_eq!(previews.len(), 2);
        assert_eq!(previews[0].client, InboxClient::Gmail);
        assert_eq!(previews[1].client.to_string(), "Apple Mail");
        assert_eq!(previews[0].subject, "Newsletter subject");
        assert_eq!(previews[0].preheader, "Preview text...");
        assert_eq!(previews[0].sender, "sender@example.com");
        assert_eq!(previews[0].avatar_initial, 'S');
    }

    #[test]
    fn test_settings_override_defaults() {
        let settings = AnalysisSettings {
            sender: Some("news@shop.example".to_string()),
            subject: Some("Spring sale".to_string()),
            preheader: Some("  ".to_string()),
            ai_api_key: None,
        };
        let previews = inbox_previews(&settings);
        assert_eq!(previews[1].sender, "news@shop.example");
        assert_eq!(previews[1].avatar_initial, 'N');
        assert_eq!(previews[1].subject, "Spring sale");
        assert_eq!(previews[1].preheader, "Preview text...");
    }
}
