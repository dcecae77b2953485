//! Application pages, one module per route.

pub mod dashboard;
pub mod login;
pub mod ticket_detail;
pub mod ticket_edit;
pub mod ticket_new;
pub mod tickets;
