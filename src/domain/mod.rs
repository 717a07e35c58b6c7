//! Domain values shared by the search page, the export and the API proxy.

pub mod market;
pub mod page;
pub mod search;
pub mod vocabulary;
