//! Test doubles shared with downstream crates.

mod memory;

pub use memory::InMemoryProductsRepository;
