// src/export/mod.rs

mod fs_utils;
pub mod template;
pub mod timesheet;

pub use fs_utils::OverwriteMode;
pub(crate) use fs_utils::ensure_writable;
pub use template::{Template, column_index};
pub use timesheet::{DataColumns, WrittenRange, plan_rows, write_timesheet};
