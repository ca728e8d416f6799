pub mod args;
pub mod endpoint_model;
pub mod synth;
