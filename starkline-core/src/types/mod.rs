//! Domain types for Starkline.
//!
//! - [`Address`]: normalized Starknet address
//! - [`Call`] / [`RequestCall`]: SDK-side and wire-side call shapes
//! - [`ContractClass`] / [`ParsedContractClass`]: declare payloads
//! - [`ChangeEvent`]: wallet change notification

mod address;
mod call;
mod events;
mod transaction;

pub use address::*;
pub use call::*;
pub use events::*;
pub use transaction::*;
