//! List query shaping: filtering, sorting, field selection and pagination
//! for every list endpoint.

mod columns;
mod list_query;
mod page;

pub use columns::{apply_list_query, FieldKind, QueryField};
pub use list_query::{FieldFilter, FilterOp, ListQuery, QueryError, SortKey};
pub use page::{Page, PageRef, Pagination};
