/// Number of pages for `count` rows. Never less than one, so an empty
/// leaderboard still renders a single page with both buttons disabled.
pub fn total_pages(count: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = count.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Previous/next state for an offset-paginated leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageControls {
    pub page: u32,
    pub total_pages: u32,
}

impl PageControls {
    pub fn new(page: u32, count: u64, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            total_pages: total_pages(count, page_size),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(120, 50, 3)]
    #[case(100, 50, 2)]
    #[case(1, 50, 1)]
    #[case(0, 50, 1)]
    #[case(51, 50, 2)]
    fn counts_pages(#[case] count: u64, #[case] page_size: u32, #[case] expected: u32) {
        assert_eq!(total_pages(count, page_size), expected);
    }

    #[test]
    fn attendance_buttons_follow_the_page() {
        let first = PageControls::new(1, 120, 50);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let middle = PageControls::new(2, 120, 50);
        assert!(middle.has_previous());
        assert!(middle.has_next());

        let last = PageControls::new(3, 120, 50);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.next(), None);
        assert_eq!(last.previous(), Some(2));
    }
}
