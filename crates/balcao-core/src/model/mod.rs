//! Domain models
//!
//! Mirrors the three tracked tables of the relational store. These structs
//! are the wire shape of the snapshot export as well, so their serde field
//! names are part of the external contract.

mod product;
mod sale;
mod user;

pub use product::Product;
pub use sale::SaleRecord;
pub use user::User;
