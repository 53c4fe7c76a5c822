use std::path::PathBuf;

use clap::Parser;
use greenhouse_climate_sim::{app, config, i18n};

/// 재배 챔버 열·습도 시뮬레이터 CLI 옵션.
#[derive(Debug, Parser)]
#[command(name = "greenhouse_climate_sim", version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    /// 표시 언어 (auto/ko/en)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 실행할 틱 수 (미지정 시 종료될 때까지 실행)
    #[arg(long)]
    ticks: Option<u64>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 시뮬레이션 루프를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new(&lang);
    app::run(&cfg, &tr, cli.ticks)?;
    Ok(())
}
