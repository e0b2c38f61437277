mod error;
mod pager;
mod pagination;
mod quote;
mod store;

pub use error::{FolioError, FolioResult};
pub use pager::Pager;
pub use pagination::{page_slice, paginate, total_pages, Page, PageRequest};
pub use quote::Quote;
pub use store::QuoteStore;
