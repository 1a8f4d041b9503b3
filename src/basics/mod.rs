//! Small synchronous snippets. Each one is independent of the others.

pub mod catalog;
pub mod collections;
pub mod day;
pub mod text;
pub mod value;
pub mod vehicle;

pub use catalog::{filter_by_rating, most_expensive, Book, Product};
pub use collections::concatenate_arrays;
pub use day::{day_type, Day, DayType};
pub use text::{format_string, format_string_default};
pub use value::{process_value, Value};
pub use vehicle::{Car, Vehicle};
