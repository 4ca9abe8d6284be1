//! Built-in startup checks

pub mod assets;
pub mod build_info;
pub mod catalog;
pub mod config;
pub mod render;

pub use assets::AssetCheck;
pub use build_info::BuildInfoCheck;
pub use catalog::CatalogCheck;
pub use config::ConfigCheck;
pub use render::MenuRenderCheck;
