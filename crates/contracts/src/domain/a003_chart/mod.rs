pub mod aggregate;

pub use aggregate::{BackendChart, ChartContainer};
