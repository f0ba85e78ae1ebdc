//! Test doubles for the payment seam.

mod mocks;

pub use mocks::ScriptedPayment;
