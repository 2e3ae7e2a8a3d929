pub mod aggregate;

pub use aggregate::Role;
