//! Wayfare Core - Headless Data Orchestration for the Travel Dashboard
//!
//! This crate provides the data-orchestration and rendering pipeline for
//! the wayfare travel dashboard, completely independent of any display
//! framework. It can drive a terminal surface, a web surface, or run
//! headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Mount Surfaces                       │
//! │   ┌──────────┐   ┌───────────┐   ┌────────────────────┐  │
//! │   │ Terminal │   │  Web page │   │ InMemory (tests)   │  │
//! │   └─────┬────┘   └─────┬─────┘   └─────────┬──────────┘  │
//! │         └──────────────┴──────────────────┘              │
//! │                        │                                  │
//! │                 AppEvent (up)                             │
//! │              SectionUpdate (down)                         │
//! │                        │                                  │
//! └────────────────────────┼──────────────────────────────────┘
//!                          │
//! ┌────────────────────────┼──────────────────────────────────┐
//! │                     WAYFARE CORE                          │
//! │  ┌─────────────────────┴─────────────────────────────────┐│
//! │  │                       App                              ││
//! │  │  ┌──────────┐  ┌──────────┐  ┌─────────────────────┐  ││
//! │  │  │ Renderer │  │  search  │  │   ResourceGateway   │  ││
//! │  │  │ (view)   │  │ (merge/  │  │   (HTTP store)      │  ││
//! │  │  │          │  │  filter) │  │                     │  ││
//! │  │  └──────────┘  └──────────┘  └─────────────────────┘  ││
//! │  └────────────────────────────────────────────────────────┘│
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`App`]: the orchestrator — sequential startup loads with per-section
//!   failure isolation, then channel-driven interaction handling
//! - [`ResourceGateway`]: retrieval of the named resource collections
//! - [`Renderer`]: collection/record to [`SectionUpdate`] mapping with
//!   placeholder and degraded fallback states
//! - [`MountSurface`]: full-replace render-target abstraction, resolved
//!   lazily by [`Section`] id
//! - [`GatewayError`]: the two failure kinds a fetch can surface
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use tokio::sync::mpsc;
//! use wayfare_core::{App, AppConfig, AppEvent, HttpGateway, InMemorySurface};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::from_env();
//!     let gateway = Arc::new(HttpGateway::from_config(&config));
//!     let surface = Arc::new(InMemorySurface::new());
//!
//!     let app = App::new(gateway, config.renderer(), surface, &config);
//!
//!     let (tx, rx) = mpsc::channel(16);
//!     tokio::spawn(app.run(rx));
//!
//!     tx.send(AppEvent::SearchSubmitted { query: "bali".into() })
//!         .await
//!         .unwrap();
//!     // Dropping tx tears interaction handling down.
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`model`]: the four externally sourced resource shapes
//! - [`error`]: gateway failure taxonomy
//! - [`gateway`]: resource retrieval over HTTP, plus the trait seam
//! - [`search`]: pure merge-and-filter across the two place collections
//! - [`view`]: section render state, icon and avatar resolution
//! - [`surface`]: mount-surface abstraction and the in-memory surface
//! - [`app`]: startup sequencing, failure boundaries, interaction routing
//! - [`config`]: TOML + environment configuration
//!
//! # No Display Dependencies
//!
//! This crate has **zero** dependencies on any display framework. It is
//! pure orchestration logic that any surface can mount.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod search;
pub mod surface;
pub mod view;

// Re-exports for convenience
pub use app::{App, AppEvent, NavState};
pub use config::{default_config_path, load_config, load_config_from_path, AppConfig, ConfigError};
pub use error::GatewayError;
pub use gateway::{HttpGateway, ResourceGateway};
pub use model::{Category, Place, Profile};
pub use surface::{InMemorySurface, MountSurface};
pub use view::{
    AvatarPolicy, Entry, IconTable, NavItem, Renderer, Section, SectionBody, SectionUpdate,
};
