/// One page of a larger result list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page actually shown, after clamping
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Slice `items` to the requested page.
///
/// The page is clamped to `1..=max(total_pages, 1)`, so shrinking the list
/// while on a later page lands on its last page instead of an empty one.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * page_size).min(items.len());
    let end = (page * page_size).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        page,
        total_pages,
    }
}
