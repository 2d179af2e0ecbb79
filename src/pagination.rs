use serde::Serialize;

use crate::roster::pager::PageSlice;
use crate::roster::{RosterRow, RosterView};

/// Most page numbers shown before the strip collapses into ellipses.
const MAX_VISIBLE_PAGES: usize = 5;

/// Page-number strip for the pagination control; `None` is an ellipsis.
fn get_pages(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(Some).collect();
    }

    let last_page = total_pages;
    let mut pages = Vec::with_capacity(MAX_VISIBLE_PAGES + 2);

    if current_page <= 3 {
        pages.extend((1..=4).map(Some));
        pages.push(None);
        pages.push(Some(last_page));
    } else if current_page >= last_page - 2 {
        pages.push(Some(1));
        pages.push(None);
        pages.extend((last_page - 3..=last_page).map(Some));
    } else {
        pages.push(Some(1));
        pages.push(None);
        pages.extend((current_page - 1..=current_page + 1).map(Some));
        pages.push(None);
        pages.push(Some(last_page));
    }

    pages
}

/// A page of items ready to serialize, with "showing X–Y of Z" bounds.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl<T> Paginated<T> {
    pub fn new(
        items: Vec<T>,
        current_page: usize,
        total_pages: usize,
        total_items: usize,
        bounds: (usize, usize),
    ) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            total_items,
            start_index: bounds.0,
            end_index: bounds.1,
        }
    }
}

impl From<RosterView> for Paginated<RosterRow> {
    fn from(view: RosterView) -> Self {
        Paginated::new(
            view.rows,
            view.current_page,
            view.total_pages,
            view.total_items,
            (view.start_index, view.end_index),
        )
    }
}

impl<T: Clone> From<PageSlice<'_, T>> for Paginated<T> {
    fn from(slice: PageSlice<'_, T>) -> Self {
        Paginated::new(
            slice.visible_items.to_vec(),
            slice.current_page,
            slice.total_pages,
            slice.total_items,
            (slice.start_index, slice.end_index),
        )
    }
}
