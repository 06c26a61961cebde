//! CLI command handlers, one file per concern.

mod case;
mod merge;
mod select;
mod trim_user;
mod url;

pub use case::{run_camel, run_snake, CaseArgs};
pub use merge::run_merge;
pub use select::{run_blacklist, run_pick};
pub use trim_user::run_trim_user;
pub use url::{run_location, run_origin};
