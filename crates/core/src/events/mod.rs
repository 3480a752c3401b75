//! Calendar event pipeline: mapping raw shifts and grouping for the list view

pub mod grouping;
pub mod mapper;
