use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, PageInfo};
use crate::error::Result;

/// Lists one page of the book. Pages are numbered from 1.
pub fn run(book: &AddressBook, page_size: usize, page: usize) -> Result<CmdResult> {
    let pages = book.paginate(page_size)?;

    if book.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No contacts found."));
        return Ok(result);
    }

    let records = pages.page(page)?.to_vec();
    Ok(CmdResult::default()
        .with_records(records)
        .with_page(PageInfo {
            number: page,
            count: pages.page_count(),
            size: page_size,
        }))
}
