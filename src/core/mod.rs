//! Engine settings and their persistence
//!
//! - `settings` - [`EngineSettings`], the user-tunable knobs
//! - `settings_persistence` - JSON load/save in the user's config directory
//! - `error` - [`CoreError`]

pub mod error;
pub mod settings;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use settings::EngineSettings;
pub use settings_persistence::{load_settings, load_settings_from, save_settings, settings_path};
