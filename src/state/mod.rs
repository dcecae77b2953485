//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `guard`, forms, dashboard) so
//! individual pages can depend on small focused models. The reactive
//! wrappers live next to their plain, natively-testable cores.

pub mod dashboard;
pub mod guard;
pub mod session;
pub mod ticket_form;
