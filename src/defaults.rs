//! Default values for the shell configuration and launch contracts.

pub const CATALOG_DIR: &str = "example_models";
pub const LIBRARY_NAME: &str = "main";
pub const STRICT_SCHEMES: bool = false;
pub const ASSET_ROOT_ENV: &str = "VOXEL_SHELL_ASSET_ROOT";
pub const APP_DIR: &str = "voxel-shell";

pub fn catalog_dir() -> String { CATALOG_DIR.to_string() }
pub fn library_name() -> String { LIBRARY_NAME.to_string() }
pub fn strict_schemes() -> bool { STRICT_SCHEMES }
