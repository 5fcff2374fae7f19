//! Appearance and language settings, and sidebar navigation.
//!
//! Settings are plain values handed to each component that needs them; no
//! component looks them up globally.

use crate::locale::Locale;

/// Color scheme.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    /// Light background. The initial theme.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// The other theme.
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// User-selected presentation settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Display language.
    pub locale: Locale,
    /// Color scheme.
    pub theme: Theme,
}

impl Settings {
    pub fn new(locale: Locale, theme: Theme) -> Self {
        Self { locale, theme }
    }

    /// Sidebar language button.
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggle();
    }

    /// Sidebar theme button.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }
}

/// Sidebar destinations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page.
    Home,
    /// Portfolio grid.
    Work,
    /// Contact form.
    Contact,
}

impl Route {
    /// Sidebar order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Work, Self::Contact];

    /// Link target.
    pub const fn href(self) -> &'static str {
        match self {
            Self::Home => "/home",
            Self::Work => "/work",
            Self::Contact => "/contact",
        }
    }

    /// Tooltip label.
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Home, Locale::En) => "Home",
            (Self::Home, Locale::Fr) => "Accueil",
            (Self::Work, Locale::En) => "Works",
            (Self::Work, Locale::Fr) => "Travaux",
            (Self::Contact, _) => "Contact",
        }
    }

    /// Route for an exact path. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|r| r.href() == path)
    }
}

/// Stacking of the sidebar relative to page content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SidebarLayer {
    /// Above page content.
    Front,
    /// Behind an expanded media view.
    Behind,
}

impl SidebarLayer {
    /// Layer for the current media-expanded flag.
    pub const fn for_media_expanded(expanded: bool) -> Self {
        if expanded { Self::Behind } else { Self::Front }
    }
}

/// One sidebar entry, ready to render.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub href: &'static str,
    /// Current page, highlighted.
    pub active: bool,
}

/// Highlighted sidebar route for `path`. Nested paths highlight their
/// section (`/work/12` is Work).
pub fn active_route(path: &str) -> Option<Route> {
    Route::from_path(path).or_else(|| {
        Route::ALL
            .into_iter()
            .find(|r| path.strip_prefix(r.href()).is_some_and(|rest| rest.starts_with('/')))
    })
}

/// Sidebar entries for the current path.
pub fn navigation(path: &str, locale: Locale) -> [NavItem; 3] {
    let active = active_route(path);
    Route::ALL.map(|route| NavItem {
        route,
        label: route.label(locale),
        href: route.href(),
        active: active == Some(route),
    })
}
