//! Configuration module for callsight

mod settings;

pub use settings::{GeneralSettings, LlmSettings, RenderSettings, Settings};
