use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

/// 측정값 로그에 적재하는 한 행.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    /// 현재 온도 [°C]
    pub temperature_celsius: f64,
    /// 현재 상대습도 [%]
    pub relative_humidity: f64,
    /// 조명 적색 채널 강도
    pub red: f64,
    /// 조명 청색 채널 강도
    pub blue: f64,
    /// 조명 백색 채널 강도
    pub white: f64,
}

/// 측정값 적재 시 발생 가능한 오류.
#[derive(Debug)]
pub enum PersistError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 레코드 직렬화 오류
    Serialize(serde_json::Error),
    /// 전송 계층 오류
    Transport(String),
    /// 서버가 비정상 상태 코드를 반환함
    Status(u16, String),
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::Io(e) => write!(f, "측정값 기록 실패: {e}"),
            PersistError::Serialize(e) => write!(f, "측정값 직렬화 실패: {e}"),
            PersistError::Transport(e) => write!(f, "측정값 전송 실패: {e}"),
            PersistError::Status(code, body) => {
                write!(f, "측정값 서버 오류 {code}: {body}")
            }
        }
    }
}

impl std::error::Error for PersistError {}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        PersistError::Io(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        PersistError::Serialize(value)
    }
}

/// 측정값 적재 대상. 호출은 블로킹이며 반환값은 소비하지 않는다.
pub trait ReadingSink {
    fn persist(&mut self, reading: &Reading) -> Result<(), PersistError>;
}

/// 측정값을 JSON Lines 형식으로 파일에 덧붙이는 싱크.
pub struct JsonlReadingSink {
    path: PathBuf,
}

impl JsonlReadingSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReadingSink for JsonlReadingSink {
    fn persist(&mut self, reading: &Reading) -> Result<(), PersistError> {
        let line = serde_json::to_string(reading)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

/// 측정값을 JSON으로 POST하는 싱크.
pub struct HttpReadingSink {
    agent: ureq::Agent,
    url: String,
}

impl HttpReadingSink {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            url: url.into(),
        }
    }
}

impl ReadingSink for HttpReadingSink {
    fn persist(&mut self, reading: &Reading) -> Result<(), PersistError> {
        let body = serde_json::to_string(reading)?;
        match self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_string(&body)
        {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(code, response)) => Err(PersistError::Status(
                code,
                response.into_string().unwrap_or_default(),
            )),
            Err(ureq::Error::Transport(e)) => Err(PersistError::Transport(e.to_string())),
        }
    }
}
