use std::sync::Arc;

use crate::application::ports::RunNotifier;
use crate::presentation::config::NotificationSettings;

use super::{DisabledNotifier, WebhookNotifier};

pub struct NotifierFactory;

impl NotifierFactory {
    pub fn create(settings: &NotificationSettings) -> Arc<dyn RunNotifier> {
        match settings.webhook_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Arc::new(WebhookNotifier::new(url)),
            _ => {
                tracing::debug!("No webhook configured, run notifications disabled");
                Arc::new(DisabledNotifier)
            }
        }
    }
}
