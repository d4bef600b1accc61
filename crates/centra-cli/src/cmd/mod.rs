pub mod analyze;
pub mod flow;
pub mod info;
pub mod partition;
