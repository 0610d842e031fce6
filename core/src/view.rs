//! View Rendering
//!
//! Stateless mapping from a fetched collection or record to a full-replace
//! render instruction for one page section. The renderer never touches a
//! display directly: it produces [`SectionUpdate`] values that a
//! [`MountSurface`](crate::surface::MountSurface) applies by clearing the
//! section's prior content and mounting the new entries.
//!
//! # Fallback states
//!
//! Every list section has three shapes: entries (one per item, input order
//! preserved), a "no data" placeholder for an empty collection, and an
//! inline load-error notice substituted by the orchestrator when a fetch
//! fails. The profile section degrades to a guest label instead of showing
//! an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Category, Place, Profile};

/// Trailing entry appended after every non-empty category list.
pub const SEE_ALL_LABEL: &str = "See all";
/// Icon identifier for the trailing "see all" entry.
pub const SEE_ALL_ICON: &str = "grid_view";
/// Heading used when search results replace the recommended section.
pub const SEARCH_RESULTS_TITLE: &str = "Search Results";
/// Display name substituted when the profile load fails.
pub const GUEST_NAME: &str = "Guest User";

/// Identifier for a render target on the page.
///
/// Surfaces resolve the actual mount point for a section lazily from this
/// id (an in-memory slot, a terminal region, a DOM node), so the renderer
/// stays independent of any concrete display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Lodging categories strip
    Categories,
    /// Popular destinations row
    Destinations,
    /// Recommended places list; also hosts search results
    Recommended,
    /// Profile header
    Profile,
}

impl Section {
    /// The section's default heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Categories => "Categories",
            Self::Destinations => "Popular Destinations",
            Self::Recommended => "Recommended",
            Self::Profile => "Profile",
        }
    }
}

/// One renderable item inside a section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    /// Category tile: display name plus resolved icon identifier
    Category {
        /// Category display name
        name: String,
        /// Icon identifier resolved through the lookup table
        icon: String,
    },
    /// Destination or recommended-place card
    Card {
        /// Place display name
        name: String,
        /// Card image URL or path
        image: String,
        /// Numeric rating shown alongside the name
        rating: f64,
    },
    /// Profile header: display name plus resolved avatar source
    Profile {
        /// Display name, verbatim from the record
        name: String,
        /// Resolved avatar URL or local path
        avatar: String,
    },
}

impl Entry {
    /// The entry's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Category { name, .. } | Self::Card { name, .. } | Self::Profile { name, .. } => {
                name
            }
        }
    }
}

/// The content half of a render instruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SectionBody {
    /// One entry per item, in input order
    Entries(Vec<Entry>),
    /// "No data" placeholder; the prior content is still fully cleared
    Placeholder(String),
    /// Inline load-failure notice
    LoadError(String),
}

impl SectionBody {
    /// Number of entries, counting a placeholder or error notice as one.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Entries(entries) => entries.len(),
            Self::Placeholder(_) | Self::LoadError(_) => 1,
        }
    }

    /// Whether the body renders nothing at all (never produced by the
    /// renderer; kept for surface implementations).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Entries(entries) if entries.is_empty())
    }
}

/// A full-replace render instruction for one section.
///
/// Applying an update always replaces the section's entire content; there
/// is no incremental patching, so re-applying the same update is idempotent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionUpdate {
    /// Target section
    pub section: Section,
    /// Heading override; `None` keeps the section's default title
    pub title: Option<String>,
    /// Replacement content
    pub body: SectionBody,
}

/// One bottom-navigation item with its mutually exclusive active flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Item label
    pub label: String,
    /// Whether this item is the active one
    pub active: bool,
}

/// Category-name to icon-identifier lookup with a default fallback.
///
/// The table contents are configuration, not logic: any complete table
/// satisfies the rendering contract as long as unmapped names resolve to
/// the default identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconTable {
    /// Name to icon-identifier mapping
    pub icons: HashMap<String, String>,
    /// Identifier used for names absent from the table
    pub default_icon: String,
}

impl Default for IconTable {
    fn default() -> Self {
        let icons = [
            ("Resort", "beach_access"),
            ("Homestay", "home"),
            ("Hotel", "hotel"),
            ("Lodge", "cabin"),
            ("Villa", "house"),
            ("Apartment", "apartment"),
            ("Hostel", "bunk_bed"),
        ]
        .into_iter()
        .map(|(name, icon)| (name.to_string(), icon.to_string()))
        .collect();

        Self {
            icons,
            default_icon: "place".to_string(),
        }
    }
}

impl IconTable {
    /// Resolve a category name to an icon identifier, falling back to the
    /// default for unmapped names.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &str {
        self.icons.get(name).unwrap_or(&self.default_icon)
    }
}

/// Avatar resolution policy.
///
/// Resolution is a pure function of `(avatar, name)`: a custom filename
/// becomes a local asset path, anything else becomes a generated
/// placeholder-avatar URL embedding the URL-encoded profile name. No
/// network call happens here beyond constructing the URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarPolicy {
    /// Filename treated as "no custom avatar supplied"
    pub sentinel: String,
    /// Prefix for locally served avatar files
    pub local_prefix: String,
    /// Placeholder-avatar generation service endpoint
    pub service_url: String,
    /// Background color passed to the generation service
    pub background: String,
    /// Foreground color passed to the generation service
    pub foreground: String,
}

impl Default for AvatarPolicy {
    fn default() -> Self {
        Self {
            sentinel: "avatar.png".to_string(),
            local_prefix: "images/".to_string(),
            service_url: "https://ui-avatars.com/api/".to_string(),
            background: "5e60ce".to_string(),
            foreground: "fff".to_string(),
        }
    }
}

impl AvatarPolicy {
    /// Resolve an avatar source from the record's avatar field and name.
    #[must_use]
    pub fn resolve(&self, avatar: Option<&str>, name: &str) -> String {
        match avatar {
            Some(file) if !file.is_empty() && file != self.sentinel => {
                format!("{}{}", self.local_prefix, file)
            }
            _ => format!(
                "{}?name={}&background={}&color={}",
                self.service_url,
                urlencoding::encode(name),
                self.background,
                self.foreground
            ),
        }
    }
}

/// Stateless section renderer.
///
/// Holds only configuration (icon table, avatar policy); every render
/// method is a pure mapping from input data to a [`SectionUpdate`].
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    icons: IconTable,
    avatar: AvatarPolicy,
}

impl Renderer {
    /// Create a renderer with explicit icon and avatar configuration.
    #[must_use]
    pub fn new(icons: IconTable, avatar: AvatarPolicy) -> Self {
        Self { icons, avatar }
    }

    /// Render the categories strip.
    ///
    /// An empty collection yields a single "no data" placeholder. A
    /// non-empty collection yields one entry per category in input order,
    /// followed by the static trailing "see all" entry, so N categories
    /// always render as N+1 entries.
    #[must_use]
    pub fn render_categories(&self, categories: &[Category]) -> SectionUpdate {
        if categories.is_empty() {
            return SectionUpdate {
                section: Section::Categories,
                title: None,
                body: SectionBody::Placeholder("No categories found".to_string()),
            };
        }

        let mut entries: Vec<Entry> = categories
            .iter()
            .map(|category| Entry::Category {
                name: category.name.clone(),
                icon: self.icons.resolve(&category.name).to_string(),
            })
            .collect();
        entries.push(Entry::Category {
            name: SEE_ALL_LABEL.to_string(),
            icon: SEE_ALL_ICON.to_string(),
        });

        SectionUpdate {
            section: Section::Categories,
            title: None,
            body: SectionBody::Entries(entries),
        }
    }

    /// Render the popular-destinations row.
    #[must_use]
    pub fn render_destinations(&self, places: &[Place]) -> SectionUpdate {
        Self::render_cards(Section::Destinations, None, places, "No destinations found")
    }

    /// Render the recommended-places list.
    #[must_use]
    pub fn render_recommended(&self, places: &[Place]) -> SectionUpdate {
        Self::render_cards(Section::Recommended, None, places, "No recommendations found")
    }

    /// Render search results into the recommended section under a
    /// retitled heading. An empty result set shows the "no data"
    /// placeholder under the same heading.
    #[must_use]
    pub fn render_search_results(&self, results: &[Place]) -> SectionUpdate {
        Self::render_cards(
            Section::Recommended,
            Some(SEARCH_RESULTS_TITLE.to_string()),
            results,
            "No results found",
        )
    }

    /// Render the profile header: name verbatim, avatar resolved through
    /// the avatar policy.
    #[must_use]
    pub fn render_profile(&self, profile: &Profile) -> SectionUpdate {
        SectionUpdate {
            section: Section::Profile,
            title: None,
            body: SectionBody::Entries(vec![Entry::Profile {
                name: profile.name.clone(),
                avatar: self.avatar.resolve(profile.avatar.as_deref(), &profile.name),
            }]),
        }
    }

    /// Degraded render for a failed load.
    ///
    /// List sections get an inline "failed to load" notice. The profile
    /// section silently falls back to the guest header instead; it never
    /// shows an error message.
    #[must_use]
    pub fn render_load_error(&self, section: Section) -> SectionUpdate {
        let label = match section {
            Section::Categories => "Failed to load categories",
            Section::Destinations => "Failed to load destinations",
            Section::Recommended => "Failed to load recommendations",
            Section::Profile => return self.guest_profile(),
        };

        SectionUpdate {
            section,
            title: None,
            body: SectionBody::LoadError(label.to_string()),
        }
    }

    /// Guest fallback for the profile section: "Guest User" with a
    /// generated placeholder avatar and no error text.
    #[must_use]
    pub fn guest_profile(&self) -> SectionUpdate {
        self.render_profile(&Profile {
            name: GUEST_NAME.to_string(),
            avatar: None,
        })
    }

    fn render_cards(
        section: Section,
        title: Option<String>,
        places: &[Place],
        no_data_label: &str,
    ) -> SectionUpdate {
        let body = if places.is_empty() {
            SectionBody::Placeholder(no_data_label.to_string())
        } else {
            SectionBody::Entries(
                places
                    .iter()
                    .map(|place| Entry::Card {
                        name: place.name.clone(),
                        image: place.image.clone(),
                        rating: place.rating,
                    })
                    .collect(),
            )
        };

        SectionUpdate {
            section,
            title,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry_names(update: &SectionUpdate) -> Vec<String> {
        match &update.body {
            SectionBody::Entries(entries) => {
                entries.iter().map(|e| e.name().to_string()).collect()
            }
            other => panic!("expected entries, got {other:?}"),
        }
    }

    #[test]
    fn test_categories_render_n_plus_one_entries() {
        let renderer = Renderer::default();
        let categories = vec![
            Category::new("Resort"),
            Category::new("Hotel"),
            Category::new("Treehouse"),
        ];

        let update = renderer.render_categories(&categories);
        assert_eq!(update.section, Section::Categories);
        assert_eq!(
            entry_names(&update),
            ["Resort", "Hotel", "Treehouse", SEE_ALL_LABEL]
        );
    }

    #[test]
    fn test_empty_categories_render_single_placeholder() {
        let renderer = Renderer::default();
        let update = renderer.render_categories(&[]);
        assert_eq!(
            update.body,
            SectionBody::Placeholder("No categories found".to_string())
        );
        assert_eq!(update.body.len(), 1);
    }

    #[test]
    fn test_icon_resolution_hits_table_and_falls_back() {
        let renderer = Renderer::default();
        let update =
            renderer.render_categories(&[Category::new("Resort"), Category::new("Treehouse")]);
        let SectionBody::Entries(entries) = &update.body else {
            panic!("expected entries");
        };

        assert_eq!(
            entries[0],
            Entry::Category {
                name: "Resort".to_string(),
                icon: "beach_access".to_string(),
            }
        );
        // Unmapped name falls back to the default identifier.
        assert_eq!(
            entries[1],
            Entry::Category {
                name: "Treehouse".to_string(),
                icon: "place".to_string(),
            }
        );
        // Trailing entry keeps its own fixed icon.
        assert_eq!(
            entries[2],
            Entry::Category {
                name: SEE_ALL_LABEL.to_string(),
                icon: SEE_ALL_ICON.to_string(),
            }
        );
    }

    #[test]
    fn test_cards_preserve_input_order() {
        let renderer = Renderer::default();
        let places = vec![
            Place::new("Bali", "images/bali.jpg", 4.8),
            Place::new("Paris", "images/paris.jpg", 4.6),
        ];

        let update = renderer.render_destinations(&places);
        assert_eq!(update.section, Section::Destinations);
        assert_eq!(entry_names(&update), ["Bali", "Paris"]);
    }

    #[test]
    fn test_search_results_retitle_recommended_section() {
        let renderer = Renderer::default();

        let update = renderer.render_search_results(&[Place::new("Bali", "b.jpg", 4.8)]);
        assert_eq!(update.section, Section::Recommended);
        assert_eq!(update.title.as_deref(), Some(SEARCH_RESULTS_TITLE));

        // Empty result set keeps the retitled heading over the placeholder.
        let empty = renderer.render_search_results(&[]);
        assert_eq!(empty.title.as_deref(), Some(SEARCH_RESULTS_TITLE));
        assert_eq!(
            empty.body,
            SectionBody::Placeholder("No results found".to_string())
        );
    }

    #[test]
    fn test_custom_avatar_resolves_to_local_path() {
        let policy = AvatarPolicy::default();
        assert_eq!(policy.resolve(Some("jane.png"), "Jane Doe"), "images/jane.png");
    }

    #[test]
    fn test_sentinel_or_missing_avatar_generates_placeholder_url() {
        let policy = AvatarPolicy::default();
        let expected =
            "https://ui-avatars.com/api/?name=Jane%20Doe&background=5e60ce&color=fff";

        assert_eq!(policy.resolve(None, "Jane Doe"), expected);
        assert_eq!(policy.resolve(Some("avatar.png"), "Jane Doe"), expected);
        assert_eq!(policy.resolve(Some(""), "Jane Doe"), expected);
    }

    #[test]
    fn test_profile_renders_name_verbatim() {
        let renderer = Renderer::default();
        let update = renderer.render_profile(&Profile {
            name: "Jane Doe".to_string(),
            avatar: Some("jane.png".to_string()),
        });

        assert_eq!(
            update.body,
            SectionBody::Entries(vec![Entry::Profile {
                name: "Jane Doe".to_string(),
                avatar: "images/jane.png".to_string(),
            }])
        );
    }

    #[test]
    fn test_guest_profile_has_no_error_text() {
        let renderer = Renderer::default();
        let update = renderer.guest_profile();
        let SectionBody::Entries(entries) = &update.body else {
            panic!("expected entries");
        };

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), GUEST_NAME);
        let Entry::Profile { avatar, .. } = &entries[0] else {
            panic!("expected profile entry");
        };
        assert!(avatar.contains("Guest%20User"));
    }

    #[test]
    fn test_load_error_labels_per_list_section() {
        let renderer = Renderer::default();
        assert_eq!(
            renderer.render_load_error(Section::Categories).body,
            SectionBody::LoadError("Failed to load categories".to_string())
        );
        assert_eq!(
            renderer.render_load_error(Section::Destinations).body,
            SectionBody::LoadError("Failed to load destinations".to_string())
        );
        assert_eq!(
            renderer.render_load_error(Section::Recommended).body,
            SectionBody::LoadError("Failed to load recommendations".to_string())
        );
        // Profile degrades to the guest header instead of an error notice.
        let profile = renderer.render_load_error(Section::Profile);
        assert!(matches!(profile.body, SectionBody::Entries(_)));
    }
}
