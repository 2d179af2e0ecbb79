//! Page slicing over an already filtered list.

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Requested page of a list. Both fields are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page_size: usize,
    current_page: usize,
}

impl PageState {
    pub fn new(page_size: usize, current_page: usize) -> Result<Self, TypeConstraintError> {
        if page_size == 0 {
            return Err(TypeConstraintError::NonPositive("page size"));
        }
        if current_page == 0 {
            return Err(TypeConstraintError::NonPositive("page number"));
        }
        Ok(Self {
            page_size,
            current_page,
        })
    }

    /// Page 1 with the given size; a zero size falls back to the default.
    pub fn first(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            current_page: 1,
        }
    }

    /// Same size, another page. Page 0 is read as page 1.
    #[must_use]
    pub fn with_page(self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    /// Pulls the current page back into `1..=total_pages`.
    #[must_use]
    pub fn clamp_to(self, total_pages: usize) -> Self {
        self.with_page(self.current_page.min(total_pages.max(1)))
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Visible slice of a list plus the metadata of its page.
#[derive(Debug, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub visible_items: &'a [T],
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    /// 1-based position of the first visible item, 0 when nothing is visible.
    pub start_index: usize,
    /// 1-based position of the last visible item, 0 when nothing is visible.
    pub end_index: usize,
}

/// Number of pages for `total_items`; an empty list still has one page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}

/// Slices `items` for the requested page without clamping. Pages past the
/// end yield an empty slice.
pub fn paginate<T>(items: &[T], state: PageState) -> PageSlice<'_, T> {
    let total_items = items.len();
    let size = state.page_size();
    let page = state.current_page();

    let start = (page - 1).saturating_mul(size).min(total_items);
    let end = page.saturating_mul(size).min(total_items);
    let visible_items = &items[start..end];

    let (start_index, end_index) = if visible_items.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    PageSlice {
        visible_items,
        total_items,
        total_pages: total_pages(total_items, size),
        current_page: page,
        start_index,
        end_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size_and_page() {
        assert!(PageState::new(0, 1).is_err());
        assert!(PageState::new(10, 0).is_err());
    }

    #[test]
    fn fifteen_items_make_two_pages() {
        let items: Vec<u32> = (1..=15).collect();

        let first = paginate(&items, PageState::new(10, 1).unwrap());
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.visible_items, &items[..10]);
        assert_eq!((first.start_index, first.end_index), (1, 10));

        let second = paginate(&items, PageState::new(10, 2).unwrap());
        assert_eq!(second.visible_items, &items[10..]);
        assert_eq!((second.start_index, second.end_index), (11, 15));
    }

    #[test]
    fn empty_list_reports_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let slice = paginate(&items, PageState::default());
        assert_eq!(slice.total_pages, 1);
        assert!(slice.visible_items.is_empty());
        assert_eq!((slice.start_index, slice.end_index), (0, 0));
    }

    #[test]
    fn out_of_range_page_is_empty_and_not_clamped() {
        let items: Vec<u32> = (1..=15).collect();
        let slice = paginate(&items, PageState::new(10, 3).unwrap());
        assert!(slice.visible_items.is_empty());
        assert_eq!(slice.current_page, 3);
        assert_eq!(slice.total_pages, 2);
    }

    #[test]
    fn clamp_brings_page_back_into_range() {
        let state = PageState::new(10, 5).unwrap();
        assert_eq!(state.clamp_to(2).current_page(), 2);
        assert_eq!(state.clamp_to(0).current_page(), 1);
        assert_eq!(state.clamp_to(9).current_page(), 5);
    }

    #[test]
    fn pages_cover_the_list_exactly_once() {
        let items: Vec<u32> = (1..=23).collect();
        let size = 4;
        let pages = total_pages(items.len(), size);
        let mut seen = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&items, PageState::new(size, page).unwrap());
            seen.extend_from_slice(slice.visible_items);
        }
        assert_eq!(seen, items);
    }
}
