pub mod chain;

pub use chain::reporting_chain;
