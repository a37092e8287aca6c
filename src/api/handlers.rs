pub mod beds;
pub mod plants;
pub mod schedule;
