#![no_std]

mod admin;
mod allowance;
mod balance;
mod contract;
mod events;
mod lock;
mod metadata;
mod storage_types;

pub use crate::contract::{EsToken, EsTokenClient};
pub use crate::lock::Lock;

#[cfg(test)]
mod tests;
