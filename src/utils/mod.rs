// Browser helpers shared by the copy-page handler

pub mod clipboard;
pub mod timer;
