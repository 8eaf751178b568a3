pub mod activity;
pub mod config;
pub mod error;
pub mod filter;
pub mod season;
pub mod select;
pub mod session;
pub mod tags;

pub use activity::*;
pub use config::Config;
pub use error::PlayshelfError;
pub use filter::*;
pub use season::season_for_date;
pub use select::{pick_random, pick_with};
pub use session::BrowseSession;
pub use tags::*;
