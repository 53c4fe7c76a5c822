use std::time::Duration;

use serde::Deserialize;

/// 원격 제어 서비스가 내려주는 목표값 레코드.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TargetRecord {
    /// 목표 온도 [°C]
    pub temperature_celsius: f64,
    /// 목표 상대습도 [%]
    pub relative_humidity: f64,
    /// 조명 적색 채널 강도
    pub red: f64,
    /// 조명 청색 채널 강도
    pub blue: f64,
    /// 조명 백색 채널 강도
    pub white: f64,
}

/// 목표값 조회 시 발생 가능한 오류.
#[derive(Debug)]
pub enum TargetFetchError {
    /// 전송 계층 오류(연결 실패 등)
    Transport(String),
    /// 서버가 비정상 상태 코드를 반환함
    Status(u16, String),
    /// 응답 본문을 레코드로 해석하지 못함
    Decode(String),
}

impl std::fmt::Display for TargetFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetFetchError::Transport(e) => write!(f, "목표값 요청 실패: {e}"),
            TargetFetchError::Status(code, body) => {
                write!(f, "목표값 서버 오류 {code}: {body}")
            }
            TargetFetchError::Decode(e) => write!(f, "목표값 응답 해석 실패: {e}"),
        }
    }
}

impl std::error::Error for TargetFetchError {}

/// 목표값 공급원. 호출은 블로킹이며 실패 시 레코드를 반환하지 않는다.
///
/// 조회 실패 시 시뮬레이션은 직전 목표값을 그대로 유지한다(해당 주기에
/// `set_target`을 호출하지 않는 정책).
pub trait TargetSource {
    fn fetch_targets(&self) -> Result<TargetRecord, TargetFetchError>;
}

/// HTTP GET으로 JSON 목표값 레코드를 받아오는 공급원.
pub struct HttpTargetSource {
    agent: ureq::Agent,
    url: String,
}

impl HttpTargetSource {
    /// 조회 URL과 타임아웃으로 공급원을 생성한다.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            url: url.into(),
        }
    }
}

impl TargetSource for HttpTargetSource {
    fn fetch_targets(&self) -> Result<TargetRecord, TargetFetchError> {
        match self.agent.get(&self.url).call() {
            Ok(response) => {
                let body = response
                    .into_string()
                    .map_err(|e| TargetFetchError::Transport(e.to_string()))?;
                serde_json::from_str(&body).map_err(|e| TargetFetchError::Decode(e.to_string()))
            }
            Err(ureq::Error::Status(code, response)) => Err(TargetFetchError::Status(
                code,
                response.into_string().unwrap_or_default(),
            )),
            Err(ureq::Error::Transport(e)) => Err(TargetFetchError::Transport(e.to_string())),
        }
    }
}
