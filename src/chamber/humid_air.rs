//! 습공기 물성 계산용 폐형식 수식 모음. 모든 함수는 순수 함수다.

/// 건공기 기체상수 [J/(kg·K)]
pub const GAS_CONSTANT_DRY_AIR: f64 = 287.058;
/// 수증기 기체상수 [J/(kg·K)]
pub const GAS_CONSTANT_STEAM: f64 = 461.495;
/// 표준 대기압 [Pa]
pub const STANDARD_ATMOSPHERIC_PRESSURE_PA: f64 = 101_325.0;
/// 보편 기체상수 [J/(mol·K)]
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.314;
/// 물 몰질량 [kg/mol]
pub const WATER_MOLAR_MASS_KG_PER_MOL: f64 = 0.018;

/// 포화 수증기 분압을 계산한다 [Pa].
///
/// Antoine형 경험식 Psat = 1.84e11 * exp(-5330 / T) 를 사용한다.
/// 상온 부근(약 0~40 °C)에서 유효한 근사이며 계수는 고정값으로 취급한다.
pub fn saturated_vapor_pressure_pa(temperature_k: f64) -> f64 {
    1.84e11 * (-5330.0 / temperature_k).exp()
}

/// 수증기 분압을 계산한다 [Pa].
pub fn vapor_partial_pressure_pa(temperature_k: f64, relative_humidity_pct: f64) -> f64 {
    (relative_humidity_pct / 100.0) * saturated_vapor_pressure_pa(temperature_k)
}

/// 습공기 밀도를 계산한다 [kg/m³].
///
/// 건공기 분압과 수증기 분압을 각각 이상기체로 취급해 합산한다.
/// rho = Pd/(R_air·T) + Pv/(R_steam·T)
pub fn humid_air_density(temperature_k: f64, relative_humidity_pct: f64) -> f64 {
    let vapor_pressure = vapor_partial_pressure_pa(temperature_k, relative_humidity_pct);
    let dry_pressure = STANDARD_ATMOSPHERIC_PRESSURE_PA - vapor_pressure;
    dry_pressure / (GAS_CONSTANT_DRY_AIR * temperature_k)
        + vapor_pressure / (GAS_CONSTANT_STEAM * temperature_k)
}

/// 주어진 체적의 습공기를 건공기 질량과 수증기 질량으로 분리한다.
///
/// 전체 질량 = 체적 × 밀도, 수증기 질량 = Pv·V/(R_steam·T),
/// 건공기 질량은 그 차이로 구한다. 반환값은 (건공기 [kg], 수증기 [kg]).
pub fn air_and_vapor_mass(
    volume_m3: f64,
    relative_humidity_pct: f64,
    air_density_kg_m3: f64,
    temperature_k: f64,
) -> (f64, f64) {
    let total_mass_kg = volume_m3 * air_density_kg_m3;
    let vapor_pressure = vapor_partial_pressure_pa(temperature_k, relative_humidity_pct);
    let vapor_mass_kg = vapor_pressure * volume_m3 / (GAS_CONSTANT_STEAM * temperature_k);
    (total_mass_kg - vapor_mass_kg, vapor_mass_kg)
}

/// 수증기 질량으로부터 상대습도를 역산한다 [%].
///
/// 포화 수증기 몰농도 nv = Psat/(R·T) 에 물 몰질량을 곱해 포화 질량밀도를
/// 구한 뒤, 실제 질량밀도와의 비를 백분율로 반환한다. 밀도식과는 다른
/// 상수 경로(R=8.314, M=0.018)를 쓰므로 순방향 계산과 약 0.09 % 차이가
/// 난다. 의도된 모델 특성이므로 보정하지 않는다.
///
/// 반환값은 물리적으로 [0, 100] 범위가 기대되지만 클램프하지 않는다.
pub fn relative_humidity_from_vapor_mass(
    temperature_k: f64,
    vapor_mass_kg: f64,
    volume_m3: f64,
) -> f64 {
    let saturated_pressure = saturated_vapor_pressure_pa(temperature_k);
    let saturated_molar_density = saturated_pressure / (UNIVERSAL_GAS_CONSTANT * temperature_k);
    let saturated_mass_density = saturated_molar_density * WATER_MOLAR_MASS_KG_PER_MOL;
    ((vapor_mass_kg / volume_m3) / saturated_mass_density) * 100.0
}
