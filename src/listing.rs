//! List view model: search, type filter, sort, and pagination
//!
//! Pure functions over the hydrated in-memory catalog, plus a small
//! stateful browser mirroring the page controls.

use crate::models::Pokemon;

/// Entities shown per page
pub const PAGE_SIZE: usize = 8;
/// Viewports narrower than this get the compact page-number window
pub const NARROW_VIEWPORT_WIDTH: u32 = 640;

const WIDE_PAGE_RANGE: usize = 3;
const NARROW_PAGE_RANGE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending by id
    #[default]
    ById,
    /// A-Z by name
    NameAsc,
    /// Z-A by name
    NameDesc,
}

/// Current search, filter, and sort selection
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Case-insensitive name substring, or an exact id as decimal text
    pub search: String,
    /// Keep only entities carrying this type, when set
    pub type_filter: Option<String>,
    pub sort: SortOrder,
}

/// One rendered page of the filtered catalog
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub entries: Vec<Pokemon>,
    /// Clamped to the valid range for the match count
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

fn matches_search(pokemon: &Pokemon, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    pokemon.name.to_lowercase().contains(term) || pokemon.id.to_string() == term
}

fn matches_type(pokemon: &Pokemon, type_filter: Option<&str>) -> bool {
    match type_filter {
        Some(name) => pokemon.types.iter().any(|slot| slot.kind.name == name),
        None => true,
    }
}

/// Apply a query to the catalog and slice out one page
pub fn build_page(catalog: &[Pokemon], query: &ListingQuery, requested_page: usize) -> ListingPage {
    let term = query.search.trim().to_lowercase();
    let type_filter = query.type_filter.as_deref();

    let mut matches: Vec<&Pokemon> = catalog
        .iter()
        .filter(|p| matches_search(p, &term))
        .filter(|p| matches_type(p, type_filter))
        .collect();

    // Catalog names are lowercase ASCII, so byte order is locale order
    match query.sort {
        SortOrder::ById => matches.sort_by_key(|p| p.id),
        SortOrder::NameAsc => matches.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::NameDesc => matches.sort_by(|a, b| b.name.cmp(&a.name)),
    }

    let total_matches = matches.len();
    let total_pages = total_matches.div_ceil(PAGE_SIZE);
    let page = requested_page.clamp(1, total_pages.max(1));
    let entries = matches
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    ListingPage {
        entries,
        page,
        total_pages,
        total_matches,
    }
}

/// Page numbers to offer around the current page
///
/// Wide viewports show 3 pages either side of the current one, narrow
/// viewports 1, clamped to the valid page range.
pub fn page_window(current: usize, total_pages: usize, viewport_width: u32) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let range = if viewport_width < NARROW_VIEWPORT_WIDTH {
        NARROW_PAGE_RANGE
    } else {
        WIDE_PAGE_RANGE
    };
    let start = current.saturating_sub(range).max(1);
    let end = (current + range).min(total_pages);
    (start..=end).collect()
}

/// Stateful browsing session over a hydrated catalog
///
/// Mirrors the page controls: changing the search text, type filter, or
/// sort order resets to the first page.
#[derive(Debug)]
pub struct CatalogBrowser {
    query: ListingQuery,
    page: usize,
    viewport_width: u32,
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self {
            query: ListingQuery::default(),
            page: 1,
            viewport_width: 1280,
        }
    }
}

impl CatalogBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.page = 1;
    }

    pub fn set_type_filter(&mut self, type_filter: Option<String>) {
        self.query.type_filter = type_filter;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.query.sort = sort;
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Render the current page, re-clamping the stored page number
    /// against the current match count
    pub fn current_page(&mut self, catalog: &[Pokemon]) -> ListingPage {
        let rendered = build_page(catalog, &self.query, self.page);
        self.page = rendered.page;
        rendered
    }

    /// Page-number buttons for the current state
    pub fn window(&self, total_pages: usize) -> Vec<usize> {
        page_window(self.page, total_pages, self.viewport_width)
    }
}
