//! Terminal presentation of rankings and trend predictions

pub mod rankings;
pub mod setup;
pub mod trends;
pub mod ui;
