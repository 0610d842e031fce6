//! App Orchestration
//!
//! The orchestrator drives the page in two phases. At startup it performs
//! the four resource loads in strict sequence (categories, destinations,
//! recommended, profile), each inside its own failure boundary: a failed
//! load is logged and rendered as a degraded section, and never prevents
//! the remaining loads from running. After startup it processes
//! interaction events — search submissions and nav selections — from a
//! channel until the sender side is dropped.
//!
//! # Design Philosophy
//!
//! The orchestrator is display-agnostic. It is constructed with an
//! explicit gateway, renderer, and surface (no process-wide singletons),
//! so tests substitute a mock gateway and an in-memory surface.
//!
//! # Search sequencing
//!
//! Searches re-fetch both collections on every submission and run as
//! spawned tasks, so responses can complete out of issuance order. Each
//! search is tagged with a monotonically increasing sequence number and a
//! completed search discards its result if a newer search has been issued
//! since, so a stale response can never overwrite a fresher one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::gateway::ResourceGateway;
use crate::surface::MountSurface;
use crate::view::{NavItem, Renderer, Section};

/// Interaction events routed to the orchestrator.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// Search submitted from the search field.
    ///
    /// The query is trimmed before use; an empty or whitespace-only query
    /// performs no action at all.
    SearchSubmitted {
        /// Raw query text as entered
        query: String,
    },

    /// Bottom-navigation item selected by position.
    NavSelected {
        /// Zero-based item index
        index: usize,
    },
}

/// Mutually exclusive active flag across the bottom-navigation items.
#[derive(Clone, Debug)]
pub struct NavState {
    labels: Vec<String>,
    active: usize,
}

impl NavState {
    /// Create a nav state with the first item active.
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels, active: 0 }
    }

    /// Activate one item, deactivating all others.
    ///
    /// Returns `false` and changes nothing for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.labels.len() {
            return false;
        }
        self.active = index;
        true
    }

    /// Index of the currently active item.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Snapshot of the items with their active flags.
    #[must_use]
    pub fn items(&self) -> Vec<NavItem> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| NavItem {
                label: label.clone(),
                active: index == self.active,
            })
            .collect()
    }
}

/// The page orchestrator.
pub struct App<G: ResourceGateway> {
    /// Resource gateway
    gateway: Arc<G>,
    /// Section renderer
    renderer: Renderer,
    /// Render target collection
    surface: Arc<dyn MountSurface>,
    /// Bottom-navigation state
    nav: NavState,
    /// Sequence number of the most recently issued search
    search_seq: Arc<AtomicU64>,
}

impl<G: ResourceGateway + 'static> App<G> {
    /// Create an orchestrator with explicit collaborators.
    #[must_use]
    pub fn new(
        gateway: Arc<G>,
        renderer: Renderer,
        surface: Arc<dyn MountSurface>,
        config: &AppConfig,
    ) -> Self {
        Self {
            gateway,
            renderer,
            surface,
            nav: NavState::new(config.nav_items.clone()),
            search_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Phase 1: sequential startup loads.
    ///
    /// The four loads run in strict order, each in its own failure
    /// boundary. Rendering happens as each load completes, so section
    /// render order is deterministic. No failure is fatal.
    pub async fn start(&self) {
        info!("loading initial page data");
        self.surface.replace_nav(self.nav.items());

        self.load_categories().await;
        self.load_destinations().await;
        self.load_recommended().await;
        self.load_profile().await;
    }

    /// Phase 2: process interaction events until the channel closes.
    ///
    /// Dropping the sender is the teardown contract: the loop drains the
    /// channel and returns, ending interaction handling cleanly.
    pub async fn run(mut self, mut events: mpsc::Receiver<AppEvent>) {
        self.start().await;

        while let Some(event) = events.recv().await {
            self.handle_event(event);
        }
        info!("event channel closed, interaction handling stopped");
    }

    /// Route one interaction event.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SearchSubmitted { query } => {
                self.submit_search(&query);
            }
            AppEvent::NavSelected { index } => self.select_nav(index),
        }
    }

    /// Submit a search, spawning its fetch task.
    ///
    /// Returns the task handle, or `None` when the trimmed query is empty
    /// and no action was taken. A search failure is logged and leaves the
    /// section's current content unchanged.
    pub fn submit_search(&self, query: &str) -> Option<JoinHandle<()>> {
        let query = query.trim();
        if query.is_empty() {
            debug!("ignoring empty search submission");
            return None;
        }

        let seq = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.search_seq);
        let gateway = Arc::clone(&self.gateway);
        let renderer = self.renderer.clone();
        let surface = Arc::clone(&self.surface);
        let query = query.to_string();

        Some(tokio::spawn(async move {
            debug!(%query, seq, "search started");
            match gateway.search_places(&query).await {
                Ok(results) => {
                    if latest.load(Ordering::SeqCst) != seq {
                        debug!(%query, seq, "discarding superseded search response");
                        return;
                    }
                    debug!(%query, count = results.len(), "search completed");
                    surface.replace_section(renderer.render_search_results(&results));
                }
                Err(err) => warn!(error = %err, %query, "search failed"),
            }
        }))
    }

    /// Activate one nav item, deactivating all others.
    pub fn select_nav(&mut self, index: usize) {
        if self.nav.select(index) {
            self.surface.replace_nav(self.nav.items());
        } else {
            warn!(index, "nav selection out of range");
        }
    }

    async fn load_categories(&self) {
        match self.gateway.get_categories().await {
            Ok(categories) => {
                debug!(count = categories.len(), "loaded categories");
                self.surface
                    .replace_section(self.renderer.render_categories(&categories));
            }
            Err(err) => {
                warn!(error = %err, "failed to load categories");
                self.surface
                    .replace_section(self.renderer.render_load_error(Section::Categories));
            }
        }
    }

    async fn load_destinations(&self) {
        match self.gateway.get_destinations().await {
            Ok(destinations) => {
                debug!(count = destinations.len(), "loaded destinations");
                self.surface
                    .replace_section(self.renderer.render_destinations(&destinations));
            }
            Err(err) => {
                warn!(error = %err, "failed to load destinations");
                self.surface
                    .replace_section(self.renderer.render_load_error(Section::Destinations));
            }
        }
    }

    async fn load_recommended(&self) {
        match self.gateway.get_recommended().await {
            Ok(recommended) => {
                debug!(count = recommended.len(), "loaded recommended places");
                self.surface
                    .replace_section(self.renderer.render_recommended(&recommended));
            }
            Err(err) => {
                warn!(error = %err, "failed to load recommendations");
                self.surface
                    .replace_section(self.renderer.render_load_error(Section::Recommended));
            }
        }
    }

    async fn load_profile(&self) {
        match self.gateway.get_profile().await {
            Ok(profile) => {
                debug!(name = %profile.name, "loaded profile");
                self.surface
                    .replace_section(self.renderer.render_profile(&profile));
            }
            Err(err) => {
                // The profile section degrades silently to a guest header;
                // the failure is only visible on the diagnostic channel.
                warn!(error = %err, "failed to load profile");
                self.surface.replace_section(self.renderer.guest_profile());
            }
        }
    }
}
