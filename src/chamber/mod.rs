//! 재배 챔버 시뮬레이션 모델.

pub mod humid_air;
pub mod model;

pub use model::{ChamberError, ChamberInput, ClimateChamber};
