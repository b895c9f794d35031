pub mod graphs;
pub mod search;
pub mod service;
pub mod utility;
