pub mod assets;
pub mod format;
pub mod logging;
pub mod settings;
pub mod version;
