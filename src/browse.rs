//! Portfolio grid controller: filter bar, paging, and the media modal.

use alloc::string::String;
use alloc::vec::Vec;

use crate::catalog::{self, MediaItem};
use crate::filter::{self, FilterState};
use crate::locale::Locale;
use crate::media::MediaType;
use crate::modal::ModalState;
use crate::pager::Pager;
use crate::settings::Settings;

/// Browsing state over a borrowed catalog.
///
/// Any change to the query or selections resets paging to the first page.
#[derive(Clone, Debug)]
pub struct Browser<'a> {
    catalog: &'a [MediaItem],
    settings: Settings,
    filter: FilterState,
    pager: Pager,
    modal: ModalState,
}

impl<'a> Browser<'a> {
    /// Unfiltered first page of `catalog`, modal closed.
    pub fn new(catalog: &'a [MediaItem], settings: Settings) -> Self {
        Self {
            catalog,
            settings,
            filter: FilterState::default(),
            pager: Pager::default(),
            modal: ModalState::Closed,
        }
    }

    /// Use a custom page size.
    pub fn with_pager(mut self, pager: Pager) -> Self {
        self.pager = pager;
        self
    }

    /// Start from a restored filter (e.g. parsed from a URL).
    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self.pager.reset();
        self
    }

    /// Language and theme the labels are rendered with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Settings changed elsewhere (language or theme toggle).
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    fn locale(&self) -> Locale {
        self.settings.locale
    }

    /// Current query and selections, e.g. for [`query::to_query`](crate::query).
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Search box changed. Back to the first page.
    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
        self.pager.reset();
    }

    /// Category chip clicked. Returns whether it is now selected.
    pub fn toggle_category(&mut self, id: &str) -> bool {
        let on = self.filter.toggle_category(id);
        self.pager.reset();
        on
    }

    /// Media type chip clicked. Returns whether it is now selected.
    pub fn toggle_type(&mut self, media_type: MediaType) -> bool {
        let on = self.filter.toggle_type(media_type);
        self.pager.reset();
        on
    }

    /// Replace both selections at once.
    pub fn set_selections<C, T>(&mut self, categories: C, types: T)
    where
        C: IntoIterator<Item = String>,
        T: IntoIterator<Item = String>,
    {
        self.filter.categories = categories.into_iter().collect();
        self.filter.types = types.into_iter().collect();
        self.pager.reset();
    }

    /// "Clear All".
    pub fn clear_all(&mut self) {
        self.filter.clear();
        self.pager.reset();
    }

    /// Every matching item.
    pub fn results(&self) -> Vec<&'a MediaItem> {
        filter::filter(self.catalog, &self.filter, self.locale())
    }

    /// The matching items currently revealed.
    pub fn visible(&self) -> Vec<&'a MediaItem> {
        let mut results = self.results();
        results.truncate(self.pager.visible());
        results
    }

    /// "Load More" clicked.
    pub fn load_more(&mut self) {
        let total = self.results().len();
        self.pager.load_more(total);
    }

    /// Whether the "Load More" button is shown.
    pub fn has_more(&self) -> bool {
        self.pager.has_more(self.results().len())
    }

    /// "Showing 6 of 12 projects".
    pub fn summary(&self) -> String {
        let (shown, total) = self.pager.showing(self.results().len());
        match self.locale() {
            Locale::En => alloc::format!("Showing {shown} of {total} projects"),
            Locale::Fr => alloc::format!("Affichage de {shown} sur {total} projets"),
        }
    }

    /// Result-count badge in the filter bar.
    pub fn result_count_label(&self) -> String {
        let n = self.results().len();
        match self.locale() {
            Locale::En => alloc::format!("{n} results"),
            Locale::Fr => alloc::format!("{n} résultats"),
        }
    }

    /// Heading and hint for an empty result, `None` when there are results.
    pub fn empty_message(&self) -> Option<(&'static str, &'static str)> {
        if !self.results().is_empty() {
            return None;
        }
        Some(match self.locale() {
            Locale::En => (
                "No projects found matching your criteria",
                "Try adjusting your search or filters",
            ),
            Locale::Fr => (
                "Aucun projet trouvé correspondant à vos critères",
                "Essayez d'ajuster votre recherche ou vos filtres",
            ),
        })
    }

    /// Open the modal on catalog item `id`. Returns false for unknown ids.
    pub fn open(&mut self, id: &str) -> bool {
        match catalog::find(self.catalog, id) {
            Some(item) => {
                self.modal.open(item);
                true
            }
            None => false,
        }
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalState {
        &mut self.modal
    }

    /// The item the modal is showing.
    pub fn open_item(&self) -> Option<&'a MediaItem> {
        let id = &self.modal.current()?.item_id;
        catalog::find(self.catalog, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::portfolio;

    fn ids(items: &[&MediaItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn first_page_and_load_more() {
        let items = portfolio();
        let mut b = Browser::new(&items, Settings::default());
        assert_eq!(b.visible().len(), 6);
        assert!(b.has_more());
        assert_eq!(b.summary(), "Showing 6 of 12 projects");
        b.load_more();
        assert_eq!(b.visible().len(), 12);
        assert!(!b.has_more());
        assert_eq!(b.summary(), "Showing 12 of 12 projects");
    }

    #[test]
    fn filter_change_resets_paging() {
        let items = portfolio();
        let mut b = Browser::new(&items, Settings::default()).with_pager(Pager::with_page_size(2));
        b.load_more();
        assert_eq!(b.pager().visible(), 4);
        b.toggle_type(MediaType::Video);
        assert_eq!(b.pager().visible(), 2);
        assert_eq!(ids(&b.visible()), ["2", "5"]);

        b.load_more();
        b.set_query("corporate");
        assert_eq!(b.pager().visible(), 2);
        assert_eq!(ids(&b.visible()), ["8"]);

        b.load_more();
        b.clear_all();
        assert_eq!(b.pager().visible(), 2);
    }

    #[test]
    fn set_selections_replaces() {
        let items = portfolio();
        let mut b = Browser::new(&items, Settings::default());
        b.toggle_category("motion");
        b.set_selections([String::from("mobile")], [String::from("image")]);
        assert_eq!(ids(&b.results()), ["7", "12"]);
    }

    #[test]
    fn french_labels() {
        let items = portfolio();
        let mut settings = Settings::default();
        settings.toggle_locale();
        let mut b = Browser::new(&items, settings);
        assert_eq!(b.summary(), "Affichage de 6 sur 12 projets");
        assert_eq!(b.result_count_label(), "12 résultats");
        b.set_query("zzz");
        assert_eq!(
            b.empty_message().map(|m| m.0),
            Some("Aucun projet trouvé correspondant à vos critères")
        );
    }

    #[test]
    fn empty_message_only_when_empty() {
        let items = portfolio();
        let b = Browser::new(&items, Settings::default());
        assert!(b.empty_message().is_none());
    }

    #[test]
    fn open_and_lookup() {
        let items = portfolio();
        let mut b = Browser::new(&items, Settings::default());
        assert!(!b.open("99"));
        assert!(b.open("3"));
        assert_eq!(b.open_item().map(|i| i.id.as_str()), Some("3"));
        b.modal_mut().escape();
        assert!(b.open_item().is_none());
    }
}
