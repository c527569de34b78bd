mod notifier_factory;
mod webhook_notifier;

pub use notifier_factory::NotifierFactory;
pub use webhook_notifier::{DisabledNotifier, WebhookNotifier};
