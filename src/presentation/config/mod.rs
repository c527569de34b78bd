mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    BatchSettings, DatabaseSettings, NormalizationStrategy, NormalizerSettings,
    NotificationSettings, Settings,
};
