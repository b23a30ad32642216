//! Playback bridge - reports local media playback to remote media servers.
//!
//! The bridge sits inside a media-center plugin. It listens to the local
//! player's lifecycle events, works out which item imported from a remote
//! server is playing, and keeps that server's "now playing" timeline up to
//! date:
//!
//! - Matching of the playing video against provider import catalogs
//! - Debounced state and position reports to the matched remote item
//! - A periodic background report while an item plays
//! - TOML configuration and structured logging
//!
//! # Quick Start
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use playback_bridge::services::playback::{ImportCatalog, ItemResolver, PlayerSource};
//! # async fn run(
//! #     player: Arc<dyn PlayerSource>,
//! #     catalog: Arc<dyn ImportCatalog>,
//! #     resolver: Arc<dyn ItemResolver>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! use playback_bridge::config::Config;
//! use playback_bridge::services::{AbortSignal, PlaybackReporter, PlayerEvent, Provider, ReporterHandle};
//!
//! let config = Config::load()?;
//! let reporter = PlaybackReporter::new(player, catalog, resolver, config.reporting, AbortSignal::new());
//! reporter.add_provider(Provider::new("plex1", "Living Room")).await?;
//!
//! let handle = ReporterHandle::spawn(reporter);
//! handle.notify(PlayerEvent::PlaybackStarted)?;
//! handle.notify(PlayerEvent::AvStarted)?;
//! # Ok(())
//! # }
//! ```

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Playback reporting services.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{BridgeError, Result};
