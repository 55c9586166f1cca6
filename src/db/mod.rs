pub mod audit;
pub mod initialize;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;
pub mod store;
