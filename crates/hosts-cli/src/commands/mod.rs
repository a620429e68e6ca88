//! Command implementations for hosts-cli

pub mod apply;
pub mod group;

pub use apply::run_apply;
pub use group::{
    run_activate, run_deactivate, run_edit, run_list, run_new, run_remove, run_show,
};
