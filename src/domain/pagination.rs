//! Fixed-size pagination over an already ordered result set.

/// Number of questions on one page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(usize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Returns `None` for page 0.
    pub fn new(page: usize) -> Option<Self> {
        (page >= 1).then_some(PageNumber(page))
    }

    /// Parse a raw `page` query value. Absent, non-numeric, zero and
    /// negative values all fall back to the first page.
    pub fn parse_or_first(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<usize>().ok())
            .and_then(PageNumber::new)
            .unwrap_or(PageNumber::FIRST)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.0 - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        PageNumber::FIRST
    }
}

/// One page of items plus the size of the full input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice `[(page-1)*10, page*10)` out of `items`.
///
/// A page past the end yields an empty `items`; `total` always counts the
/// whole input.
pub fn paginate<T>(page: PageNumber, items: Vec<T>) -> Page<T> {
    let total = items.len();
    let items = items
        .into_iter()
        .skip(page.offset())
        .take(QUESTIONS_PER_PAGE)
        .collect();
    Page { items, total }
}
