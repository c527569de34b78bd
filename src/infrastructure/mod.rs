pub mod morphology;
pub mod notification;
pub mod observability;
pub mod persistence;
