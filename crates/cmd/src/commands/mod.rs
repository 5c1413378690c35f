pub mod backends;
pub mod cat;
pub mod create;
pub mod list;
pub mod remove;
pub mod rename;
pub mod run;
pub mod stat;
pub mod tree;
pub mod write;

pub use backends::backends_command;
pub use cat::cat_command;
pub use create::{mkdir_command, touch_command};
pub use list::list_command;
pub use remove::remove_command;
pub use rename::rename_command;
pub use run::{run_script, run_line};
pub use stat::stat_command;
pub use tree::tree_command;
pub use write::write_command;
