//! Portfolio catalog: items, the category table, and the built-in sample data.
//!
//! The catalog is immutable shared data. Nothing in this crate creates,
//! mutates, or deletes entries after construction; components borrow it.

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::locale::{Locale, Localized};
use crate::media::{MediaType, resolve_media_type};

/// A single work sample.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    /// Unique stable identifier.
    pub id: String,
    /// Display title per locale.
    pub title: Localized,
    #[cfg_attr(feature = "serde", serde(default))]
    /// Longer text for the modal's details panel.
    pub description: Localized,
    /// Explicit media type. `None` means "sniff the locator".
    #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
    pub media_type: Option<MediaType>,
    /// One of the [`CATEGORIES`] ids (unknown ids are kept as-is).
    pub category: String,
    /// Free-text search terms.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Preview asset locator.
    pub thumbnail: String,
    /// Full asset locator.
    pub src: String,
}

impl MediaItem {
    /// Create an item with no description, tags, or explicit type.
    pub fn new(
        id: impl Into<String>,
        title: Localized,
        category: impl Into<String>,
        thumbnail: impl Into<String>,
        src: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title,
            description: Localized::default(),
            media_type: None,
            category: category.into(),
            tags: Vec::new(),
            thumbnail: thumbnail.into(),
            src: src.into(),
        }
    }

    /// Set the explicit media type.
    pub fn media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    /// Set the description.
    pub fn description(mut self, description: Localized) -> Self {
        self.description = description;
        self
    }

    /// Set the search tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Media type after sniffing the full asset locator when none is set.
    pub fn resolved_type(&self) -> MediaType {
        resolve_media_type(self.media_type, &self.src)
    }

    /// Title in `locale`, falling back to English.
    pub fn title_in(&self, locale: Locale) -> &str {
        self.title.get(locale)
    }

    /// Description in `locale`, falling back to English.
    pub fn description_in(&self, locale: Locale) -> &str {
        self.description.get(locale)
    }
}

/// Entry in the fixed category table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Category {
    /// Stable id stored on items and in filter selections.
    pub id: &'static str,
    /// English label.
    pub en: &'static str,
    /// French label.
    pub fr: &'static str,
}

impl Category {
    /// Filter chip label.
    pub const fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Fr => self.fr,
        }
    }
}

/// The enumerated category catalog, in filter-bar order.
pub const CATEGORIES: &[Category] = &[
    Category {
        id: "branding",
        en: "Branding",
        fr: "Image de Marque",
    },
    Category {
        id: "web-design",
        en: "Web Design",
        fr: "Design Web",
    },
    Category {
        id: "motion",
        en: "Motion Graphics",
        fr: "Motion Graphics",
    },
    Category {
        id: "ui-ux",
        en: "UI/UX",
        fr: "UI/UX",
    },
    Category {
        id: "mobile",
        en: "Mobile",
        fr: "Mobile",
    },
    Category {
        id: "corporate",
        en: "Corporate",
        fr: "Corporate",
    },
];

/// Look up a category by id.
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Display label for a category id, `None` for ids outside the table.
pub fn category_label(id: &str, locale: Locale) -> Option<&'static str> {
    category(id).map(|c| c.label(locale))
}

/// Find an item by id.
pub fn find<'a>(catalog: &'a [MediaItem], id: &str) -> Option<&'a MediaItem> {
    catalog.iter().find(|item| item.id == id)
}

/// Catalog integrity error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two items share an id.
    #[error("duplicate item id `{0}`")]
    DuplicateId(String),
    /// An item has an empty id.
    #[error("item at position {0} has an empty id")]
    EmptyId(usize),
}

/// Check id uniqueness. Returns the first problem found.
pub fn validate_catalog(catalog: &[MediaItem]) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for (pos, item) in catalog.iter().enumerate() {
        if item.id.is_empty() {
            return Err(CatalogError::EmptyId(pos));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.to_string()));
        }
    }
    Ok(())
}

const PEXELS: &str = "https://images.pexels.com/photos/";
const SAMPLE_VIDEOS: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/";

/// `photo` is `"<id>/<name>"` as it appears in the Pexels URL.
fn pexels(photo: &str, width: u32) -> String {
    alloc::format!("{PEXELS}{photo}.jpeg?auto=compress&cs=tinysrgb&w={width}")
}

fn pexels_item(id: &str, title: Localized, category: &str, photo: &str) -> MediaItem {
    MediaItem::new(id, title, category, pexels(photo, 800), pexels(photo, 1200))
}

fn video_item(id: &str, title: Localized, category: &str, photo: &str, file: &str) -> MediaItem {
    MediaItem::new(
        id,
        title,
        category,
        pexels(photo, 800),
        alloc::format!("{SAMPLE_VIDEOS}{file}"),
    )
    .media_type(MediaType::Video)
}

/// The built-in portfolio: twelve work samples across every category and
/// media type.
pub fn portfolio() -> Vec<MediaItem> {
    alloc::vec![
        pexels_item(
            "1",
            Localized::new("Brand Identity Design", "Design d'Identité de Marque"),
            "branding",
            "196644/pexels-photo-196644",
        )
        .media_type(MediaType::Image)
        .description(Localized::new(
            "Modern brand identity design with clean typography",
            "Design d'identité de marque moderne avec une typographie épurée",
        ))
        .tags(["logo", "identity", "typography", "modern"]),
        video_item(
            "2",
            Localized::new("Motion Graphics Reel", "Bobine de Motion Graphics"),
            "motion",
            "3945313/pexels-photo-3945313",
            "BigBuckBunny.mp4",
        )
        .description(Localized::new(
            "Dynamic motion graphics showcase",
            "Vitrine de motion graphics dynamique",
        ))
        .tags(["animation", "motion", "video", "dynamic"]),
        pexels_item(
            "3",
            Localized::new("UI Animation", "Animation UI"),
            "ui-ux",
            "160107/pexels-photo-160107",
        )
        .media_type(MediaType::Gif)
        .description(Localized::new(
            "Interactive UI animation concept",
            "Concept d'animation UI interactive",
        ))
        .tags(["ui", "animation", "interactive", "concept"]),
        pexels_item(
            "4",
            Localized::new("Web Design Layout", "Mise en Page Web"),
            "web-design",
            "326424/pexels-photo-326424",
        )
        .media_type(MediaType::Image)
        .description(Localized::new(
            "Responsive web design layout",
            "Mise en page web responsive",
        ))
        .tags(["web", "responsive", "layout", "design"]),
        video_item(
            "5",
            Localized::new("Product Showcase", "Vitrine Produit"),
            "corporate",
            "3862612/pexels-photo-3862612",
            "ElephantsDream.mp4",
        )
        .description(Localized::new(
            "3D product visualization",
            "Visualisation de produit 3D",
        ))
        .tags(["product", "3d", "visualization", "showcase"]),
        pexels_item(
            "6",
            Localized::new("Logo Animation", "Animation de Logo"),
            "branding",
            "3945313/pexels-photo-3945313",
        )
        .media_type(MediaType::Gif)
        .description(Localized::new(
            "Animated logo reveal",
            "Révélation de logo animé",
        ))
        .tags(["logo", "animation", "reveal", "branding"]),
        pexels_item(
            "7",
            Localized::new("Mobile App Design", "Design d'Application Mobile"),
            "mobile",
            "607812/pexels-photo-607812",
        )
        .media_type(MediaType::Image)
        .description(Localized::new(
            "Modern mobile application interface",
            "Interface d'application mobile moderne",
        ))
        .tags(["mobile", "app", "interface", "modern"]),
        video_item(
            "8",
            Localized::new("Corporate Video", "Vidéo Corporate"),
            "corporate",
            "3153198/pexels-photo-3153198",
            "ForBiggerBlazes.mp4",
        )
        .description(Localized::new(
            "Professional corporate presentation",
            "Présentation corporate professionnelle",
        ))
        .tags(["corporate", "video", "professional", "presentation"]),
        pexels_item(
            "9",
            Localized::new("Interactive Prototype", "Prototype Interactif"),
            "ui-ux",
            "574071/pexels-photo-574071",
        )
        .media_type(MediaType::Gif)
        .description(Localized::new(
            "Interactive user experience prototype",
            "Prototype d'expérience utilisateur interactive",
        ))
        .tags(["prototype", "interactive", "ux", "user experience"]),
        pexels_item(
            "10",
            Localized::new("E-commerce Design", "Design E-commerce"),
            "web-design",
            "230544/pexels-photo-230544",
        )
        .media_type(MediaType::Image)
        .description(Localized::new(
            "Modern e-commerce website design",
            "Design de site e-commerce moderne",
        ))
        .tags(["ecommerce", "website", "shopping", "modern"]),
        video_item(
            "11",
            Localized::new("Social Media Campaign", "Campagne Réseaux Sociaux"),
            "motion",
            "1181467/pexels-photo-1181467",
            "SubaruOutbackOnStreetAndDirt.mp4",
        )
        .description(Localized::new(
            "Creative social media campaign video",
            "Vidéo créative pour campagne réseaux sociaux",
        ))
        .tags(["social media", "campaign", "creative", "marketing"]),
        pexels_item(
            "12",
            Localized::new("App Icon Design", "Design d'Icône d'App"),
            "mobile",
            "147413/twitter-facebook-together-exchange-of-information-147413",
        )
        .media_type(MediaType::Image)
        .description(Localized::new(
            "Modern mobile app icon collection",
            "Collection d'icônes d'applications mobiles modernes",
        ))
        .tags(["icons", "mobile", "app", "collection"]),
    ]
}
