//! Plain data carried through a single inbound event: the submitted order, the customer
//! who sent it, and the conversations replies go to.

pub mod customer;
pub mod destination;
pub mod order;

pub use customer::*;
pub use destination::*;
pub use order::*;
