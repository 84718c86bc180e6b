//! Inventory domain module.
//!
//! This crate contains the item model and the business rules around it
//! (validation, search, low-stock filtering, pagination), implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod filter;
pub mod item;
pub mod page;

pub use filter::{StockThreshold, low_stock, search};
pub use item::{Item, ItemDraft, ItemInput};
pub use page::{Page, PageRequest, paginate};
