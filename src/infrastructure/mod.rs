//! Infrastructure layer for filesystem interactions inside the Zellij
//! sandbox, where the user's home directory is mounted under `/host`.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_user_file};
