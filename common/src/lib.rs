//! Types shared between the supplier admin page and the catalog server.

pub mod model;
pub mod responses;
