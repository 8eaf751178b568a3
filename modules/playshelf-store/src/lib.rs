pub mod migrate;
pub mod store;

pub use store::ActivityStore;
