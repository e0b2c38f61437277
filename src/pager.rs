use crate::pagination::{page_slice, total_pages, PageRequest};
use crate::FolioResult;

/// A borrowed view over a record collection that tracks which page is
/// currently being looked at.
///
/// This is the state behind a paged browsing surface. Stepping clamps at
/// the first and last page, and `page_numbers` lists what a caller would
/// render as numbered controls.
#[derive(Debug, Clone)]
pub struct Pager<'a, T> {
    records: &'a [T],
    request: PageRequest,
}

impl<'a, T> Pager<'a, T> {
    /// Creates a pager positioned on page 1.
    pub fn new(records: &'a [T], page_size: u64) -> FolioResult<Pager<'a, T>> {
        let request = PageRequest::new(1, page_size)?;
        Ok(Pager { records, request })
    }

    pub fn current_page(&self) -> u64 {
        self.request.page()
    }

    pub fn page_size(&self) -> u64 {
        self.request.page_size()
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.records.len(), self.request.page_size())
    }

    /// The records on the current page. Empty once the current page is
    /// past the end of the collection.
    pub fn current_items(&self) -> &'a [T] {
        page_slice(self.records, &self.request)
    }

    /// Advances one page. Reports false, without moving, when already on
    /// the last page (or when the collection has no pages at all).
    pub fn next(&mut self) -> bool {
        if self.current_page() >= self.total_pages() {
            return false;
        }

        self.request = self.request.at_page(self.current_page() + 1);
        true
    }

    /// Steps back one page. Reports false, without moving, when already
    /// on page 1.
    pub fn prev(&mut self) -> bool {
        if self.current_page() <= 1 {
            return false;
        }

        self.request = self.request.at_page(self.current_page() - 1);
        true
    }

    /// Jumps straight to `page`. Pages past the end are legal; the
    /// current items are then simply empty.
    pub fn goto(&mut self, page: u64) -> FolioResult<()> {
        self.request = PageRequest::new(page, self.page_size())?;
        Ok(())
    }

    /// Page numbers for rendering numbered controls, 1 through the last
    /// page. Empty for an empty collection.
    pub fn page_numbers(&self) -> impl Iterator<Item = u64> {
        1..=self.total_pages()
    }

    /// All pages of the collection, in order.
    pub fn pages(&self) -> std::slice::Chunks<'a, T> {
        let size = usize::try_from(self.page_size()).unwrap_or(usize::MAX);
        self.records.chunks(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FolioError;

    fn records(count: usize) -> Vec<u32> {
        (0..count as u32).collect()
    }

    fn pager(records: &[u32], page_size: u64) -> Pager<'_, u32> {
        Pager::new(records, page_size).expect("test pager should build")
    }

    #[test]
    fn rejects_zero_page_size() {
        let records = records(10);
        assert!(matches!(
            Pager::new(&records, 0),
            Err(FolioError::InvalidPageRequest(_)),
        ));
    }

    #[test]
    fn starts_on_the_first_page() {
        let records = records(10);
        let pager = pager(&records, 5);

        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.current_items(), &records[..5]);
    }

    #[test]
    fn next_walks_forward_and_clamps_at_the_last_page() {
        let records = records(12);
        let mut pager = pager(&records, 5);

        assert!(pager.next());
        assert_eq!(pager.current_items(), &records[5..10]);

        assert!(pager.next());
        assert_eq!(pager.current_items(), &records[10..]);

        assert!(!pager.next(), "there is no page 4 to advance to");
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn prev_walks_back_and_clamps_at_page_one() {
        let records = records(12);
        let mut pager = pager(&records, 5);

        assert!(!pager.prev(), "page 1 has nothing before it");

        pager.goto(3).expect("page 3 exists");
        assert!(pager.prev());
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn next_does_not_move_on_an_empty_collection() {
        let records: Vec<u32> = Vec::new();
        let mut pager = pager(&records, 5);

        assert!(!pager.next());
        assert_eq!(pager.current_page(), 1);
        assert!(pager.current_items().is_empty());
    }

    #[test]
    fn goto_accepts_pages_past_the_end() {
        let records = records(10);
        let mut pager = pager(&records, 5);

        pager.goto(99).expect("out-of-range pages are legal");

        assert_eq!(pager.current_page(), 99);
        assert!(pager.current_items().is_empty());
    }

    #[test]
    fn goto_rejects_page_zero() {
        let records = records(10);
        let mut pager = pager(&records, 5);

        assert!(matches!(
            pager.goto(0),
            Err(FolioError::InvalidPageRequest(_)),
        ));
        assert_eq!(pager.current_page(), 1, "a rejected jump should not move the pager");
    }

    #[test]
    fn page_numbers_list_every_page() {
        let records = records(11);
        let pager = pager(&records, 5);

        let numbers: Vec<u64> = pager.page_numbers().collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn pages_concatenate_back_to_the_collection() {
        let records = records(13);
        let pager = pager(&records, 4);

        let covered: Vec<u32> = pager.pages().flatten().copied().collect();
        assert_eq!(covered, records);
    }
}
