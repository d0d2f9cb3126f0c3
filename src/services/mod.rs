pub mod page_source;
