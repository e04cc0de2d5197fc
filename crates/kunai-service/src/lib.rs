pub mod error;
pub mod filter;
pub mod fix;
pub mod pipeline;
pub mod postprocess;
