//! Gallery view state: current page, totals, loaded items, and selection.
//!
//! [`GalleryState`] is a plain state machine. Transitions that need a fetch
//! hand back a [`PageRequest`] ticket; the caller performs the fetch and
//! feeds the outcome back through [`GalleryState::apply`]. Tickets carry a
//! generation number, so an outcome for a request that has since been
//! superseded is dropped instead of overwriting newer state.
//!
//! [`Gallery`] pairs the state with a [`CollectionFetcher`] for callers that
//! drive it one step at a time.

use pokeapi::types::Pokemon;
use serde::Serialize;

use crate::error::CatalogError;
use crate::fetcher::{CollectionFetcher, FetchedPage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Errored,
}

/// A page fetch the caller must perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
    generation: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct GalleryState {
    current_page: u32,
    total_pages: u32,
    page_size: u32,
    items: Vec<Pokemon>,
    error_message: Option<String>,
    selected_item_name: Option<String>,
    phase: Phase,
    /// Set once any page has loaded; until then `total_pages` is unknown and
    /// page requests are not bounds-checked.
    #[serde(skip)]
    totals_known: bool,
    #[serde(skip)]
    generation: u64,
}

impl GalleryState {
    /// A fresh, idle gallery on page 1.
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            page_size,
            items: Vec::new(),
            error_message: None,
            selected_item_name: None,
            phase: Phase::Idle,
            totals_known: false,
            generation: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn items(&self) -> &[Pokemon] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn selected_item_name(&self) -> Option<&str> {
        self.selected_item_name.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Starts loading page 1. Only valid from `Idle`.
    pub fn mount(&mut self) -> Option<PageRequest> {
        if self.phase != Phase::Idle {
            return None;
        }
        Some(self.begin(1))
    }

    /// Requests `page`. Ignored when `page` falls outside `[1, total_pages]`
    /// once the totals are known. Page 1 is always in range.
    pub fn request_page(&mut self, page: u32) -> Option<PageRequest> {
        if !self.in_bounds(page) {
            tracing::debug!(
                "Ignoring request for page {} (total pages {})",
                page,
                self.total_pages
            );
            return None;
        }
        Some(self.begin(page))
    }

    pub fn next_page(&mut self) -> Option<PageRequest> {
        self.request_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> Option<PageRequest> {
        self.request_page(self.current_page.saturating_sub(1))
    }

    /// Re-requests the current page.
    pub fn reload(&mut self) -> Option<PageRequest> {
        self.request_page(self.current_page)
    }

    pub fn has_next(&self) -> bool {
        self.in_bounds(self.current_page.saturating_add(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    fn in_bounds(&self, page: u32) -> bool {
        page >= 1 && (!self.totals_known || page <= self.total_pages.max(1))
    }

    fn begin(&mut self, page: u32) -> PageRequest {
        self.generation += 1;
        self.current_page = page;
        self.phase = Phase::Loading;
        self.error_message = None;
        self.items.clear();
        PageRequest {
            page,
            page_size: self.page_size,
            generation: self.generation,
        }
    }

    /// Applies the outcome of `request`. Returns `false` when the request
    /// was superseded and the outcome was discarded.
    pub fn apply(
        &mut self,
        request: PageRequest,
        outcome: Result<FetchedPage, CatalogError>,
    ) -> bool {
        if request.generation != self.generation || self.phase != Phase::Loading {
            tracing::debug!(
                "Discarding stale result for page {} (current page {})",
                request.page,
                self.current_page
            );
            return false;
        }

        match outcome {
            Ok(fetched) => {
                self.total_pages = fetched.total_pages;
                self.totals_known = true;
                let last_page = fetched.total_pages.max(1);
                if request.page > last_page {
                    // Requested before the totals were known; park on the
                    // last page so navigation stays in range.
                    tracing::warn!(
                        "Page {} is past the last page {}",
                        request.page,
                        last_page
                    );
                    self.current_page = last_page;
                    self.items.clear();
                    self.error_message = Some(format!(
                        "Page {} is out of range (1-{})",
                        request.page, last_page
                    ));
                    self.phase = Phase::Errored;
                } else {
                    self.items = fetched.items;
                    self.phase = Phase::Ready;
                }
            }
            Err(e) => {
                tracing::warn!("Page {} failed: {}", request.page, e);
                self.items.clear();
                self.error_message = Some(e.to_string());
                self.phase = Phase::Errored;
            }
        }
        true
    }

    /// Toggles the selection: selecting the selected item clears it,
    /// selecting anything else replaces it.
    pub fn select(&mut self, name: &str) {
        if self.selected_item_name.as_deref() == Some(name) {
            self.selected_item_name = None;
        } else {
            self.selected_item_name = Some(name.to_string());
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_item_name.as_deref() == Some(name)
    }

    /// The image to show for `pokemon`: the alternate sprite when selected.
    pub fn image_for<'a>(&self, pokemon: &'a Pokemon) -> Option<&'a str> {
        if self.is_selected(&pokemon.name) {
            pokemon.alternate_image()
        } else {
            pokemon.primary_image()
        }
    }
}

/// Gallery state driven by a fetcher, one transition at a time.
pub struct Gallery {
    fetcher: CollectionFetcher,
    state: GalleryState,
}

impl Gallery {
    pub fn new(fetcher: CollectionFetcher, page_size: u32) -> Self {
        Self {
            fetcher,
            state: GalleryState::new(page_size),
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Loads page 1. Returns whether a fetch was issued.
    pub async fn mount(&mut self) -> bool {
        let request = self.state.mount();
        self.fulfil(request).await
    }

    pub async fn next_page(&mut self) -> bool {
        let request = self.state.next_page();
        self.fulfil(request).await
    }

    pub async fn previous_page(&mut self) -> bool {
        let request = self.state.previous_page();
        self.fulfil(request).await
    }

    pub async fn go_to(&mut self, page: u32) -> bool {
        let request = self.state.request_page(page);
        self.fulfil(request).await
    }

    pub async fn reload(&mut self) -> bool {
        let request = self.state.reload();
        self.fulfil(request).await
    }

    pub fn select(&mut self, name: &str) {
        self.state.select(name);
    }

    async fn fulfil(&mut self, request: Option<PageRequest>) -> bool {
        let Some(request) = request else {
            return false;
        };
        let outcome = self
            .fetcher
            .fetch_page(request.page, request.page_size)
            .await;
        self.state.apply(request, outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokeapi::types::Sprites;

    fn pokemon(name: &str) -> Pokemon {
        Pokemon {
            id: 0,
            name: name.to_string(),
            sprites: Sprites {
                front_default: Some(format!("front/{}.png", name)),
                back_default: Some(format!("back/{}.png", name)),
            },
            types: Vec::new(),
            stats: Vec::new(),
            height: 0,
            weight: 0,
        }
    }

    fn fetched(page: u32, total_count: u32, names: &[&str]) -> FetchedPage {
        FetchedPage {
            page,
            page_size: 12,
            total_count,
            total_pages: pokeapi::types::total_pages(total_count, 12),
            items: names.iter().map(|n| pokemon(n)).collect(),
        }
    }

    fn failure() -> CatalogError {
        CatalogError::DetailFetch {
            name: "ivysaur".to_string(),
            source: pokeapi::Error::HttpStatus {
                status: 500,
                body: String::new(),
            },
        }
    }

    fn ready_on_page_one(total_count: u32) -> GalleryState {
        let mut state = GalleryState::new(12);
        let req = state.mount().unwrap();
        assert!(state.apply(req, Ok(fetched(1, total_count, &["a", "b", "c"]))));
        state
    }

    #[test]
    fn new_state_is_idle_on_page_one() {
        let state = GalleryState::new(12);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 0);
        assert!(state.items().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn mount_starts_loading_page_one() {
        let mut state = GalleryState::new(12);
        let req = state.mount().unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 12);
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.is_loading());
        assert!(state.mount().is_none());
    }

    #[test]
    fn success_moves_to_ready() {
        let state = ready_on_page_one(3);
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.items().len(), 3);
        assert!(!state.is_loading());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn failure_moves_to_errored_with_no_items() {
        let mut state = GalleryState::new(12);
        let req = state.mount().unwrap();
        assert!(state.apply(req, Err(failure())));
        assert_eq!(state.phase(), Phase::Errored);
        assert!(state.items().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.error_message(), Some("Failed to fetch ivysaur"));
    }

    #[test]
    fn page_change_clears_items_and_error() {
        let mut state = ready_on_page_one(1302);
        let req = state.next_page().unwrap();
        assert_eq!(req.page, 2);
        assert!(state.items().is_empty());
        assert!(state.is_loading());
        assert!(state.apply(req, Err(failure())));

        let req = state.previous_page().unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(state.error_message(), None);
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn previous_on_first_page_is_noop() {
        let mut state = ready_on_page_one(1302);
        assert!(!state.has_previous());
        assert!(state.previous_page().is_none());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.items().len(), 3);
    }

    #[test]
    fn next_on_last_page_is_noop() {
        let mut state = ready_on_page_one(1302);
        let req = state.request_page(109).unwrap();
        assert!(state.apply(req, Ok(fetched(109, 1302, &["x"]))));
        assert!(!state.has_next());
        assert!(state.next_page().is_none());
        assert_eq!(state.current_page(), 109);
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn out_of_bounds_requests_ignored() {
        let mut state = ready_on_page_one(1302);
        assert!(state.request_page(0).is_none());
        assert!(state.request_page(110).is_none());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn empty_collection_has_no_next_page() {
        let mut state = GalleryState::new(12);
        let req = state.mount().unwrap();
        assert!(state.apply(req, Ok(fetched(1, 0, &[]))));
        assert_eq!(state.total_pages(), 0);
        assert!(state.next_page().is_none());
    }

    #[test]
    fn bounds_unknown_after_failed_mount() {
        let mut state = GalleryState::new(12);
        let req = state.mount().unwrap();
        state.apply(req, Err(failure()));
        assert_eq!(state.next_page().map(|r| r.page), Some(2));
    }

    #[test]
    fn page_past_the_end_parks_on_last_page() {
        let mut state = GalleryState::new(12);
        let req = state.request_page(200).unwrap();
        assert!(state.apply(req, Ok(fetched(200, 1302, &[]))));
        assert_eq!(state.phase(), Phase::Errored);
        assert_eq!(state.current_page(), 109);
        assert_eq!(state.total_pages(), 109);
        assert!(state.items().is_empty());
        assert_eq!(
            state.error_message(),
            Some("Page 200 is out of range (1-109)")
        );

        assert_eq!(state.previous_page().map(|r| r.page), Some(108));
    }

    #[test]
    fn page_past_the_end_of_empty_collection_parks_on_page_one() {
        let mut state = GalleryState::new(12);
        let req = state.request_page(5).unwrap();
        assert!(state.apply(req, Ok(fetched(5, 0, &[]))));
        assert_eq!(state.phase(), Phase::Errored);
        assert_eq!(state.current_page(), 1);
        assert!(state.reload().is_some());
    }

    #[test]
    fn stale_outcome_is_discarded() {
        let mut state = ready_on_page_one(1302);
        let slow = state.next_page().unwrap();
        let fast = state.next_page();
        // Totals are known, so page 3 is in range even while page 2 loads.
        let fast = fast.unwrap();
        assert_eq!(fast.page, 3);

        assert!(state.apply(fast, Ok(fetched(3, 1302, &["p3"]))));
        assert!(!state.apply(slow, Ok(fetched(2, 1302, &["p2"]))));
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.items()[0].name, "p3");
    }

    #[test]
    fn outcome_applied_once() {
        let mut state = GalleryState::new(12);
        let req = state.mount().unwrap();
        assert!(state.apply(req, Ok(fetched(1, 3, &["a"]))));
        assert!(!state.apply(req, Err(failure())));
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn reload_requests_same_page() {
        let mut state = ready_on_page_one(1302);
        let req = state.reload().unwrap();
        assert_eq!(req.page, 1);
    }

    #[test]
    fn select_toggles() {
        let mut state = GalleryState::new(12);
        state.select("pikachu");
        assert_eq!(state.selected_item_name(), Some("pikachu"));
        state.select("eevee");
        assert_eq!(state.selected_item_name(), Some("eevee"));
        state.select("eevee");
        assert_eq!(state.selected_item_name(), None);
    }

    #[test]
    fn selected_item_shows_alternate_image() {
        let mut state = GalleryState::new(12);
        let a = pokemon("a");
        let b = pokemon("b");
        state.select("a");
        assert_eq!(state.image_for(&a), Some("back/a.png"));
        assert_eq!(state.image_for(&b), Some("front/b.png"));
    }
}
