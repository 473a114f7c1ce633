// Service module exports

pub mod analytics;
pub mod fixtures;
pub mod settings;
