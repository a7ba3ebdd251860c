//! Page arithmetic for client-side pagination.
//!
//! Pages are 1-indexed. Asking for a page outside the list yields an empty
//! slice; a zero page size is rejected outright.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    #[error("Page size must be greater than zero")]
    ZeroPageSize,
}

/// Return the items visible on `page` when the list is cut into pages of
/// `page_size`.
pub fn slice<T>(items: &[T], page: usize, page_size: usize) -> Result<&[T], PageError> {
    if page_size == 0 {
        return Err(PageError::ZeroPageSize);
    }
    if page == 0 {
        return Ok(&[]);
    }

    let start = match (page - 1).checked_mul(page_size) {
        Some(start) if start < items.len() => start,
        _ => return Ok(&[]),
    };
    let end = start.saturating_add(page_size).min(items.len());

    Ok(&items[start..end])
}

/// Number of pages needed to show `total` items.
pub fn page_count(total: usize, page_size: usize) -> Result<usize, PageError> {
    if page_size == 0 {
        return Err(PageError::ZeroPageSize);
    }
    Ok(total.div_ceil(page_size))
}

/// Remote `offset` for a 1-indexed page. Page 0 is treated as page 1.
pub fn offset_for(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1).saturating_mul(page_size)
}
