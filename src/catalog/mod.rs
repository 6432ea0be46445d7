//! Game catalog: search state and the filter/sort derivation.
//!
//! - [`pipeline`]: pure `derive` over raw results
//! - [`query`]: the single in-flight lookup controller

pub mod pipeline;
pub mod query;

pub use pipeline::{derive, SortKey};
pub use query::{LookupKind, LookupOutcome, QueryController, RequestTicket};
