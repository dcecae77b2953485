//! Reusable UI components shared by the pages.

pub mod charts;
pub mod kpi_card;
pub mod protected_route;
