//! Selection and mount state of the users list.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    pub selected: usize,
    pub rows_per_page: usize,
    mounted: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            selected: 0,
            rows_per_page: 10,
            mounted: false,
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the list as mounted. Returns `true` only the first time.
    pub fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.rows_per_page.max(1));
    }

    pub fn page_down(&mut self, len: usize) {
        let next = self.selected.saturating_add(self.rows_per_page.max(1));
        self.selected = next.min(len.saturating_sub(1));
    }

    /// Keep the selection inside a list that may have shrunk after a read.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Index of the first row on the page holding the selection.
    pub fn page_start(&self) -> usize {
        let rpp = self.rows_per_page.max(1);
        (self.selected / rpp) * rpp
    }
}
