pub mod binder;
pub mod clipboard;
pub mod exclusivity;
pub mod fields;
pub mod icons;
pub mod page;
pub mod pipeline;
pub mod replay;
pub mod scheduler;
pub mod sink;
