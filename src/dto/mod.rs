pub mod audit;
pub mod orders;
pub mod products;
