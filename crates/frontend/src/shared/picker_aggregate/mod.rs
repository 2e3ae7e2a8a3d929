//! Single-choice picker over a list of aggregates.
//!
//! ```ignore
//! impl AggregatePickerResult for MyItem { ... }
//!
//! view! {
//!     <GenericAggregatePicker
//!         items=items_signal
//!         on_confirm=|item| { /* ... */ }
//!         on_cancel=|_| { /* ... */ }
//!     />
//! }
//! ```

pub mod component;
pub mod traits;

pub use component::GenericAggregatePicker;
pub use traits::AggregatePickerResult;
