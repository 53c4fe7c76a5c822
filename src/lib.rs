//! 밀폐형 재배 챔버(소형 온실)의 온도·습도 상태를 시뮬레이션하는 라이브러리.
//! 물리 모델을 라이브러리로 분리하여 구동 루프와 외부 연동을 얇게 유지한다.

pub mod app;
pub mod chamber;
pub mod config;
pub mod i18n;
pub mod io;
