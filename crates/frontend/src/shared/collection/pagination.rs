//! Client-side pagination over an already fetched list

/// 1-based page index and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page_index: usize,
    page_size: usize,
}

impl PageWindow {
    /// Zero page index or size is normalised to 1
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index: page_index.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Offset of the first element of the page
    pub fn offset(&self) -> usize {
        (self.page_index - 1).saturating_mul(self.page_size)
    }

    pub fn with_page(self, page_index: usize) -> Self {
        Self::new(page_index, self.page_size)
    }

    pub fn with_page_size(self, page_size: usize) -> Self {
        Self::new(self.page_index, page_size)
    }

    /// Pull the page index back into `1..=total_pages(len)`
    pub fn clamped(self, len: usize) -> Self {
        let last = total_pages(len, self.page_size);
        Self::new(self.page_index.min(last), self.page_size)
    }
}

/// Number of pages for `len` elements; at least 1 so an empty list still has a page
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Elements `(k-1)*p .. k*p` of `list`, clamped to its bounds
///
/// A window past the end yields an empty slice; callers that want a
/// non-empty view clamp the window first.
pub fn paginate<T>(list: &[T], window: PageWindow) -> &[T] {
    let start = window.offset().min(list.len());
    let end = start.saturating_add(window.page_size()).min(list.len());
    &list[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_length_matches_formula() {
        for n in 0..12usize {
            for p in 1..5usize {
                for k in 1..6usize {
                    let list: Vec<usize> = (0..n).collect();
                    let page = paginate(&list, PageWindow::new(k, p));
                    let expected = p.min(n.saturating_sub((k - 1) * p));
                    assert_eq!(page.len(), expected, "n={n} p={p} k={k}");
                    if let Some(first) = page.first() {
                        assert_eq!(*first, (k - 1) * p);
                    }
                }
            }
        }
    }

    #[test]
    fn test_last_partial_page() {
        let list = ["a", "b", "c", "d", "e"];
        assert_eq!(paginate(&list, PageWindow::new(2, 3)), &["d", "e"]);
        assert!(paginate(&list, PageWindow::new(3, 3)).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_zero_values_are_normalised() {
        let w = PageWindow::new(0, 0);
        assert_eq!(w.page_index(), 1);
        assert_eq!(w.page_size(), 1);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(PageWindow::new(5, 2).clamped(5).page_index(), 3);
        assert_eq!(PageWindow::new(5, 2).clamped(0).page_index(), 1);
        assert_eq!(PageWindow::new(2, 2).clamped(9).page_index(), 2);
    }
}
