//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `links`, `form`, `toast`) so components
//! depend on small focused models. Each holder is a plain struct with
//! transition methods; pages wrap them in `RwSignal`s and provide them via
//! context.

pub mod form;
pub mod links;
pub mod toast;
pub mod ui;
