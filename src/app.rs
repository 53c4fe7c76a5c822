use std::thread;
use std::time::{Duration, Instant};

use crate::chamber::{ChamberError, ChamberInput, ClimateChamber};
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::io::readings::HttpReadingSink;
use crate::io::{HttpTargetSource, JsonlReadingSink, Reading, ReadingSink, TargetSource};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 챔버 초기화 오류
    Chamber(ChamberError),
    /// 측정값 싱크가 설정에 하나도 지정되지 않음
    NoReadingSink,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Chamber(e) => write!(f, "챔버 초기화 오류: {e}"),
            AppError::NoReadingSink => {
                write!(f, "측정값 적재 대상이 없습니다 (readings_path 또는 readings_url 필요)")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<ChamberError> for AppError {
    fn from(value: ChamberError) -> Self {
        AppError::Chamber(value)
    }
}

/// 시뮬레이션 구동 루프를 실행한다.
///
/// 설정된 초기 조건으로 챔버를 만들고 상태를 한 번 출력한 뒤, 틱 주기마다
/// 상태를 전진시키면서 더 긴 주기로 측정값 적재와 목표값 재조회를 수행한다.
/// 전체가 단일 스레드이며 협력자 호출은 블로킹이다(호출이 지연되면 틱
/// 주기도 같이 밀린다, 연성 주기). `max_ticks`가 None이면 외부에서 종료될
/// 때까지 실행한다.
///
/// 목표값 조회에 실패한 주기에는 직전 목표값을 그대로 유지하고, 측정값
/// 적재 실패도 루프를 중단시키지 않는다.
pub fn run(cfg: &Config, tr: &Translator, max_ticks: Option<u64>) -> Result<(), AppError> {
    let mut chamber = ClimateChamber::new(ChamberInput {
        volume_m3: cfg.chamber.initial_volume_m3,
        temperature_c: cfg.chamber.initial_temperature_c,
        relative_humidity_pct: cfg.chamber.initial_relative_humidity_pct,
    })?;

    println!("{}", tr.t(keys::STATE_HEADING));
    println!("{}", chamber.state_report());

    let timeout = Duration::from_secs(cfg.sync.http_timeout_secs);
    let source = HttpTargetSource::new(cfg.sync.targets_url.clone(), timeout);
    let mut sink = build_reading_sink(cfg, timeout)?;

    // 원본 구동 순서대로 기동 시 목표값 1회 조회와 측정값 1회 적재를 먼저 한다.
    apply_targets(&mut chamber, &source, tr);
    persist_reading(&chamber, sink.as_mut(), tr);

    let tick_period = Duration::from_secs(cfg.sync.tick_period_secs.max(1));
    let sync_period = Duration::from_secs(cfg.sync.sync_period_secs.max(1));
    let start = Instant::now();
    let mut ticks: u64 = 0;
    let mut last_sync = Instant::now();

    loop {
        if let Some(limit) = max_ticks {
            if ticks >= limit {
                break;
            }
        }
        if start.elapsed() >= tick_period * ticks as u32 {
            chamber.advance_tick();
            ticks += 1;
        } else {
            thread::sleep(Duration::from_millis(1));
        }
        if last_sync.elapsed() >= sync_period {
            persist_reading(&chamber, sink.as_mut(), tr);
            apply_targets(&mut chamber, &source, tr);
            last_sync = Instant::now();
        }
    }

    println!("{}", tr.t(keys::APP_EXIT));
    Ok(())
}

fn build_reading_sink(cfg: &Config, timeout: Duration) -> Result<Box<dyn ReadingSink>, AppError> {
    if let Some(url) = &cfg.sync.readings_url {
        return Ok(Box::new(HttpReadingSink::new(url.clone(), timeout)));
    }
    if let Some(path) = &cfg.sync.readings_path {
        return Ok(Box::new(JsonlReadingSink::new(path.clone())));
    }
    Err(AppError::NoReadingSink)
}

/// 목표값을 조회해 적용한다. 실패 시 직전 목표값을 유지한다.
fn apply_targets(chamber: &mut ClimateChamber, source: &dyn TargetSource, tr: &Translator) {
    match source.fetch_targets() {
        Ok(record) => {
            chamber.set_target(
                record.temperature_celsius,
                record.relative_humidity,
                record.red,
                record.blue,
                record.white,
            );
            println!("{} {record:?}", tr.t(keys::TARGETS_APPLIED));
        }
        Err(e) => eprintln!("{} {e}", tr.t(keys::TARGETS_FETCH_FAILED)),
    }
}

/// 현재 측정값을 싱크에 적재한다. 실패해도 루프는 계속된다.
fn persist_reading(chamber: &ClimateChamber, sink: &mut dyn ReadingSink, tr: &Translator) {
    let reading = Reading {
        temperature_celsius: chamber.temperature_k - 273.15,
        relative_humidity: chamber.relative_humidity_pct,
        red: chamber.red,
        blue: chamber.blue,
        white: chamber.white,
    };
    if let Err(e) = sink.persist(&reading) {
        eprintln!("{} {e}", tr.t(keys::READING_PERSIST_FAILED));
    }
}
