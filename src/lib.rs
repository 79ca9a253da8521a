//! # tracker-overlay
//!
//! Core library behind a desktop overlay that layers a web-based game tracker
//! over the running game. The window chrome, web view host and OS hotkey
//! registration live in the platform shell; this crate provides everything
//! underneath them that can be expressed without a UI toolkit.
//!
//! ## Features
//!
//! - **Game Data Catalog**: Typed records for items, quests, projects and
//!   hideout modules decoded from the synced JSON documents, with unknown
//!   fields preserved for forward compatibility.
//! - **Image Resolution**: Maps an image filename or CDN URL to a decoded image
//!   from the local data folders, degrading quietly to "no image".
//! - **Display Converters**: Rarity colors, localized text fallback and compact
//!   record summaries.
//! - **Overlay Preferences**: Window geometry, opacity and hotkey bindings
//!   persisted as JSON with atomic writes.
//! - **Hotkey Parsing**: Canonical parsing of chords like `Ctrl+Shift+O`.
//! - **Stylesheet Injection**: Script generation for restyling the tracker page.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tracker_overlay::config::Config;
//! use tracker_overlay::data::Catalog;
//! use tracker_overlay::images::ImageResolver;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml")?;
//!     let catalog = Catalog::load(&config.data)?;
//!     let resolver = ImageResolver::new(&config.data.data_root);
//!
//!     if let Some(item) = catalog.item("metal_parts") {
//!         let image = resolver.resolve_opt(item.image_filename.as_deref());
//!         println!("metal_parts has image: {}", image.is_some());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Static configuration loaded from `config.toml`
//! - [`data`] - Entity records, document loaders and the in-memory catalog
//! - [`images`] - Candidate-path image lookup
//! - [`display`] - Presentation converters and summaries
//! - [`settings`] - Persisted per-user overlay preferences
//! - [`hotkey`] - Hotkey chord parsing
//! - [`overlay`] - Stylesheet injection script

pub mod config;
pub mod data;
pub mod display;
pub mod hotkey;
pub mod images;
pub mod overlay;
pub mod settings;
