//! 외부 협력자 인터페이스(목표값 공급원, 측정값 싱크).

pub mod readings;
pub mod targets;

pub use readings::{JsonlReadingSink, PersistError, Reading, ReadingSink};
pub use targets::{HttpTargetSource, TargetFetchError, TargetRecord, TargetSource};
