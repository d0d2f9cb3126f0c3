pub mod copy_page;
pub mod dom;
pub mod icons;
