//! Responsive page sizing for the room grid.
//!
//! The page size is a request parameter: it is derived from the width of the
//! grid container so that one page fills `target_rows` full rows.

use std::fmt;

use super::error::ValueObjectError;

/// Number of rooms requested per page. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageSize(usize);

impl PageSize {
    pub fn new(value: usize) -> Result<Self, ValueObjectError> {
        if value == 0 {
            return Err(ValueObjectError::PageSizeZero);
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed layout constants of the room grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Minimum width of one room card
    pub item_width: u32,
    /// Gap between two cards
    pub gap: u32,
    /// Horizontal padding of the container
    pub padding: u32,
    /// Width reserved around the scrollbar, given back to the grid
    pub scrollbar_allowance: u32,
    /// Rows one page should fill
    pub target_rows: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            item_width: 250,
            gap: 30,
            padding: 25,
            scrollbar_allowance: 30,
            target_rows: 3,
        }
    }
}

impl GridLayout {
    /// Cards that fit in one row of a container `container_width` pixels wide (at least one).
    pub fn columns(&self, container_width: u32) -> u32 {
        let available = container_width
            .saturating_add(self.scrollbar_allowance)
            .saturating_sub(self.padding);
        let cell = self.item_width.saturating_add(self.gap).max(1);
        (available / cell).max(1)
    }

    /// Page size for a container `container_width` pixels wide.
    pub fn page_size(&self, container_width: u32) -> PageSize {
        let rows = self.target_rows.max(1);
        PageSize(self.columns(container_width).saturating_mul(rows) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_for_1000px() {
        // テスト項目: 幅 1000px では 3 列 x 3 行 = 9 件になる
        // given (前提条件):
        let layout = GridLayout::default();

        // when (操作):
        let limit = layout.page_size(1000);

        // then (期待する結果): floor((1000 - 25 + 30) / 280) = 3
        assert_eq!(limit.get(), 9);
    }

    #[test]
    fn test_page_size_never_below_one_row() {
        // テスト項目: 1 枚も入らない幅でも 1 列分は要求する
        // given (前提条件):
        let layout = GridLayout::default();

        // then (期待する結果):
        assert_eq!(layout.page_size(0).get(), 3);
        assert_eq!(layout.page_size(200).get(), 3);
    }

    #[test]
    fn test_page_size_column_boundaries() {
        // テスト項目: 列数が切り替わる境界の幅で正しく計算される
        // given (前提条件):
        let layout = GridLayout::default();

        // then (期待する結果): available = W + 5
        assert_eq!(layout.columns(554), 1); // 559 / 280
        assert_eq!(layout.columns(555), 2); // 560 / 280
        assert_eq!(layout.page_size(1395).get(), 15); // 1400 / 280 = 5
    }

    #[test]
    fn test_page_size_for_widest_container() {
        // テスト項目: u32 の最大幅でもオーバーフローせずに計算される
        // given (前提条件):
        let layout = GridLayout::default();

        // when (操作):
        let limit = layout.page_size(u32::MAX);

        // then (期待する結果): 加算は飽和し、floor((u32::MAX - 25) / 280) = 15339168 列
        assert_eq!(layout.columns(u32::MAX), 15_339_168);
        assert_eq!(limit.get(), 46_017_504);
    }

    #[test]
    fn test_page_size_zero_rejected() {
        // テスト項目: 0 件のページサイズは作成できない
        // then (期待する結果):
        assert_eq!(PageSize::new(0).unwrap_err(), ValueObjectError::PageSizeZero);
        assert_eq!(PageSize::new(6).unwrap().get(), 6);
    }
}
