pub mod harvest;
pub mod month_day;
pub mod packing;
pub mod timeline;
