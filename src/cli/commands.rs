pub mod initdb;
pub mod report;
pub mod serve;
pub mod settings;

pub use initdb::init_database;
pub use report::show_report;
pub use serve::serve;
pub use settings::{show_settings, update_setting};
