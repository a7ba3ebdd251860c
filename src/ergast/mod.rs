//! Client for the Ergast F1 REST API
//!
//! - `http`: request wrappers returning [`crate::models::Page`]s
//! - `types`: the `MRData` envelope and its reshaping into local models

pub mod http;
pub mod types;

pub use http::{ErgastClient, ERGAST_BASE_URL, FETCH_ALL_LIMIT};
