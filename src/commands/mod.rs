mod context;

pub mod config;
pub mod init;
pub mod inventory;
pub mod scan;

pub use config::run_config;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use inventory::run_inventory;
pub use scan::run_scan;
