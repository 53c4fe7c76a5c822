use crate::chamber::humid_air;

/// 챔버 내 발라스트(축열체) 질량 [kg]
pub const BALLAST_MASS_KG: f64 = 200.0;
/// 발라스트 비열 [J/(kg·K)]
pub const BALLAST_SPECIFIC_HEAT_J_PER_KGK: f64 = 2500.0;
/// 건공기 정압비열 [J/(kg·K)]
pub const AIR_SPECIFIC_HEAT_J_PER_KGK: f64 = 1005.0;
/// 수증기 정압비열 [J/(kg·K)]
pub const VAPOR_SPECIFIC_HEAT_J_PER_KGK: f64 = 2051.0;
/// 외기 온도 [K]
pub const AMBIENT_TEMPERATURE_K: f64 = 5.0 + 273.15;
/// 벽체 열손실 계수 [W/(m²·K)]
pub const HEAT_LOSS_COEFF_W_PER_M2K: f64 = 0.5;
/// 히터가 한 틱에 투입하는 열량 [J]
pub const HEATER_POWER_J_PER_TICK: f64 = 500.0;
/// 가습기가 한 틱에 주입하는 수증기 질량 [kg]
pub const HUMIDIFIER_MASS_KG_PER_TICK: f64 = 0.0001;
/// 단면 폭 [m]. 챔버 단면은 2 m × 2 m 고정으로 가정한다.
pub const RIB_WIDTH_M: f64 = 2.0;
/// 단면 높이 [m]
pub const RIB_HEIGHT_M: f64 = 2.0;

/// 챔버 초기 조건.
#[derive(Debug, Clone)]
pub struct ChamberInput {
    /// 챔버 체적 [m³]
    pub volume_m3: f64,
    /// 초기 온도 [°C]
    pub temperature_c: f64,
    /// 초기 상대습도 [%]
    pub relative_humidity_pct: f64,
}

/// 챔버 생성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ChamberError {
    /// 체적이 0 이하라 기하 계산이 불가능함
    InvalidVolume(f64),
}

impl std::fmt::Display for ChamberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChamberError::InvalidVolume(v) => {
                write!(f, "체적이 0 이하입니다: {v} m³")
            }
        }
    }
}

impl std::error::Error for ChamberError {}

/// 밀폐형 재배 챔버의 열·습도 상태 모델.
///
/// 단일 혼합 공기 체적과 단일 발라스트 축열체를 가정하는 집중정수 모델이며,
/// 온도와 상대습도는 틱 단위의 열수지/질량수지로 갱신된다. 히터와 가습기는
/// 목표값 아래에서 정격 출력으로 켜지는 뱅뱅 제어를 따른다.
///
/// 상대습도와 조명 채널 값에는 범위 검증이 없다(모델 한계로 문서화).
/// 틱 갱신은 실패하지 않으며, 비정상 상태(NaN 등)는 그대로 전파된다.
#[derive(Debug, Clone)]
pub struct ClimateChamber {
    /// 챔버 체적 [m³] (생성 후 불변)
    pub volume_m3: f64,
    /// 벽체 표면적 [m²] (생성 후 불변)
    pub surface_area_m2: f64,
    /// 현재 온도 [K]
    pub temperature_k: f64,
    /// 현재 상대습도 [%]
    pub relative_humidity_pct: f64,
    /// 건공기 질량 [kg]
    pub dry_air_mass_kg: f64,
    /// 수증기 질량 [kg]
    pub vapor_mass_kg: f64,
    /// 습공기 밀도 [kg/m³]
    pub air_density_kg_m3: f64,
    /// 건공기 열에너지 [J] (0 K 기준)
    pub air_thermal_energy_j: f64,
    /// 수증기 열에너지 [J] (0 K 기준)
    pub vapor_thermal_energy_j: f64,
    /// 계 전체 열에너지 [J]
    pub system_thermal_energy_j: f64,
    /// 목표 온도 [K]
    pub target_temperature_k: f64,
    /// 목표 상대습도 [%]
    pub target_relative_humidity_pct: f64,
    /// 조명 적색 채널 강도 (무차원, 기본 1)
    pub red: f64,
    /// 조명 청색 채널 강도 (무차원, 기본 1)
    pub blue: f64,
    /// 조명 백색 채널 강도 (무차원, 기본 1)
    pub white: f64,
}

impl ClimateChamber {
    /// 초기 체적/온도/습도로 챔버 상태를 생성한다.
    ///
    /// 체적이 0 이하이면 `ChamberError::InvalidVolume`. 그 외 입력은
    /// 검증하지 않는다. 목표값은 초기 측정값과 동일하게 두므로 명시적인
    /// 목표 설정 전까지 제어 동작은 없다.
    pub fn new(input: ChamberInput) -> Result<Self, ChamberError> {
        if input.volume_m3 <= 0.0 {
            return Err(ChamberError::InvalidVolume(input.volume_m3));
        }

        // 체적과 고정 단면으로 길이를 정하고 상자 전개 면적을 구한다.
        // 바닥/지붕 한 면이 한 번 더 더해지는 형태를 그대로 유지한다.
        let length_m = input.volume_m3 / (RIB_WIDTH_M * RIB_HEIGHT_M);
        let surface_area_m2 = 2.0
            * (length_m * RIB_WIDTH_M + length_m * RIB_HEIGHT_M + RIB_WIDTH_M * RIB_HEIGHT_M)
            + length_m * RIB_WIDTH_M;

        let temperature_k = input.temperature_c + 273.15;
        let air_density_kg_m3 =
            humid_air::humid_air_density(temperature_k, input.relative_humidity_pct);
        let (dry_air_mass_kg, vapor_mass_kg) = humid_air::air_and_vapor_mass(
            input.volume_m3,
            input.relative_humidity_pct,
            air_density_kg_m3,
            temperature_k,
        );
        let air_thermal_energy_j =
            thermal_energy_j(dry_air_mass_kg, AIR_SPECIFIC_HEAT_J_PER_KGK, temperature_k);
        let vapor_thermal_energy_j =
            thermal_energy_j(vapor_mass_kg, VAPOR_SPECIFIC_HEAT_J_PER_KGK, temperature_k);

        Ok(Self {
            volume_m3: input.volume_m3,
            surface_area_m2,
            temperature_k,
            relative_humidity_pct: input.relative_humidity_pct,
            dry_air_mass_kg,
            vapor_mass_kg,
            air_density_kg_m3,
            air_thermal_energy_j,
            vapor_thermal_energy_j,
            system_thermal_energy_j: air_thermal_energy_j + vapor_thermal_energy_j,
            target_temperature_k: temperature_k,
            target_relative_humidity_pct: input.relative_humidity_pct,
            red: 1.0,
            blue: 1.0,
            white: 1.0,
        })
    }

    /// 목표 온도/습도와 조명 채널 값을 덮어쓴다.
    ///
    /// 단순 대입이며 범위 검증은 하지 않는다. 온도는 °C로 받아 K로 저장한다.
    pub fn set_target(
        &mut self,
        temperature_c: f64,
        relative_humidity_pct: f64,
        red: f64,
        blue: f64,
        white: f64,
    ) {
        self.target_temperature_k = temperature_c + 273.15;
        self.target_relative_humidity_pct = relative_humidity_pct;
        self.red = red;
        self.blue = blue;
        self.white = white;
    }

    /// 벽체를 통한 열손실을 계산한다 [W].
    ///
    /// 챔버가 외기보다 따뜻하면 양수(손실), 차가우면 음수(유입)가 된다.
    /// 히터가 꺼진 틱에서도 이 값을 무조건 빼므로 부호는 그대로 보존해야 한다.
    pub fn heat_loss_w(&self) -> f64 {
        HEAT_LOSS_COEFF_W_PER_M2K * self.surface_area_m2
            * (self.temperature_k - AMBIENT_TEMPERATURE_K)
    }

    /// 시뮬레이션 상태를 한 틱(시뮬레이션 1초) 전진시킨다.
    ///
    /// 1) 건공기/수증기/발라스트의 질량가중 열용량과 그중 건공기 비중을 구하고,
    /// 2) 온도가 목표 미만이면 히터 열량에서 열손실을 뺀 값을, 아니면 열손실만
    ///    뺀 값을 건공기 비중만큼 공기 열에너지에 반영한다(뱅뱅 제어).
    /// 3) 새 공기 열에너지에서 온도를 역산하고,
    /// 4) 습도가 목표 미만이면 가습기 정량만큼 수증기 질량을 더한 뒤
    ///    새 온도/수증기 질량으로 상대습도를 역산한다. 온도 분기와 독립이라
    ///    같은 틱에 둘 다 작동할 수 있다.
    /// 5) 새 온도/습도로 밀도를 다시 구하고, 밀도×체적의 총질량에 맞춰
    ///    건공기/수증기 질량을 기존 비율대로 재정규화한 뒤 열에너지를
    ///    최종 질량 기준으로 재계산한다.
    pub fn advance_tick(&mut self) {
        let system_heat_capacity = self.dry_air_mass_kg * AIR_SPECIFIC_HEAT_J_PER_KGK
            + self.vapor_mass_kg * VAPOR_SPECIFIC_HEAT_J_PER_KGK
            + BALLAST_MASS_KG * BALLAST_SPECIFIC_HEAT_J_PER_KGK;
        let dry_air_share_pct =
            (100.0 * self.dry_air_mass_kg * AIR_SPECIFIC_HEAT_J_PER_KGK) / system_heat_capacity;

        if self.temperature_k < self.target_temperature_k {
            self.air_thermal_energy_j +=
                (dry_air_share_pct * (HEATER_POWER_J_PER_TICK - self.heat_loss_w())) / 100.0;
        } else {
            self.air_thermal_energy_j += (dry_air_share_pct * (-self.heat_loss_w())) / 100.0;
        }
        self.temperature_k = temperature_from_energy_k(
            self.air_thermal_energy_j,
            self.dry_air_mass_kg,
            AIR_SPECIFIC_HEAT_J_PER_KGK,
        );

        if self.relative_humidity_pct < self.target_relative_humidity_pct {
            self.vapor_mass_kg += HUMIDIFIER_MASS_KG_PER_TICK;
        }
        self.relative_humidity_pct = humid_air::relative_humidity_from_vapor_mass(
            self.temperature_k,
            self.vapor_mass_kg,
            self.volume_m3,
        );

        self.air_density_kg_m3 =
            humid_air::humid_air_density(self.temperature_k, self.relative_humidity_pct);
        let new_total_mass_kg = self.air_density_kg_m3 * self.volume_m3;
        let old_total_mass_kg = self.dry_air_mass_kg + self.vapor_mass_kg;
        let mass_scale = new_total_mass_kg / old_total_mass_kg;
        self.dry_air_mass_kg *= mass_scale;
        self.vapor_mass_kg *= mass_scale;

        self.air_thermal_energy_j = thermal_energy_j(
            self.dry_air_mass_kg,
            AIR_SPECIFIC_HEAT_J_PER_KGK,
            self.temperature_k,
        );
        self.vapor_thermal_energy_j = thermal_energy_j(
            self.vapor_mass_kg,
            VAPOR_SPECIFIC_HEAT_J_PER_KGK,
            self.temperature_k,
        );
        self.system_thermal_energy_j = self.air_thermal_energy_j + self.vapor_thermal_energy_j;
    }

    /// 현재 상태를 사람이 읽을 수 있는 텍스트로 정리한다.
    pub fn state_report(&self) -> String {
        format!(
            "volume = {} m³\n\
             surface_area = {} m²\n\
             temperature = {} °C\n\
             temperature_kelvins = {} K\n\
             relative_humidity = {} %\n\
             air_density = {} kg/m³\n\
             dry_air_mass = {} kg\n\
             vapor_mass = {} kg\n\
             air_thermal_energy = {:.3} kJ\n\
             vapor_thermal_energy = {:.3} kJ\n\
             system_thermal_energy = {:.3} kJ\n",
            self.volume_m3,
            self.surface_area_m2,
            self.temperature_k - 273.15,
            self.temperature_k,
            self.relative_humidity_pct,
            self.air_density_kg_m3,
            self.dry_air_mass_kg,
            self.vapor_mass_kg,
            self.air_thermal_energy_j / 1000.0,
            self.vapor_thermal_energy_j / 1000.0,
            self.system_thermal_energy_j / 1000.0,
        )
    }
}

/// Q = m·C·T (0 K 기준)
fn thermal_energy_j(mass_kg: f64, specific_heat_j_per_kgk: f64, temperature_k: f64) -> f64 {
    mass_kg * specific_heat_j_per_kgk * temperature_k
}

/// T = Q / (m·C)
fn temperature_from_energy_k(
    energy_j: f64,
    mass_kg: f64,
    specific_heat_j_per_kgk: f64,
) -> f64 {
    energy_j / (mass_kg * specific_heat_j_per_kgk)
}
