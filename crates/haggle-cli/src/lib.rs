pub mod format;
pub mod policy;
