pub mod find;

pub use find::{
    find, find_from_cwd, find_from_cwd_or_error, find_or_error, is_workspace, WorkspaceError,
};
