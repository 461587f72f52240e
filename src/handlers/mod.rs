pub mod admin;
pub mod status_change;

pub const MODULE: &str = module_path!();
