//! 챔버 모델 생명주기/성질 테스트 (초기 조건: V=10 m³, T=12.6968 °C, RH=70 %).
use greenhouse_climate_sim::chamber::{ChamberError, ChamberInput, ClimateChamber};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.12} got {actual:.12} (diff {diff:.3e}, tol {rel_tol})"
    );
}

fn reference_chamber() -> ClimateChamber {
    ClimateChamber::new(ChamberInput {
        volume_m3: 10.0,
        temperature_c: 12.6968,
        relative_humidity_pct: 70.0,
    })
    .expect("reference chamber")
}

#[test]
fn construction_reference_point() {
    let chamber = reference_chamber();
    assert_close("temperature_k", chamber.temperature_k, 285.8468, 1e-12);
    assert_close("surface_area", chamber.surface_area_m2, 33.0, 1e-12);
    assert_close("air_density", chamber.air_density_kg_m3, 1.230_113_813_098_547_2, 1e-12);
    assert_close("dry_air_mass", chamber.dry_air_mass_kg, 12.223_225_508_209_29, 1e-12);
    assert_close("vapor_mass", chamber.vapor_mass_kg, 0.077_912_622_776_180_9, 1e-12);
    assert_close(
        "air_thermal_energy",
        chamber.air_thermal_energy_j,
        3_511_439.746_685_999_4,
        1e-12,
    );
}

#[test]
fn thermal_energies_sum_exactly() {
    let chamber = reference_chamber();
    assert_eq!(
        chamber.air_thermal_energy_j + chamber.vapor_thermal_energy_j,
        chamber.system_thermal_energy_j
    );
}

#[test]
fn masses_match_density_times_volume_at_construction() {
    // 생성 직후에는 밀도×체적 총질량과 분리 질량 합이 일치하므로 첫 틱의
    // 재정규화 계수는 1이 된다.
    let chamber = reference_chamber();
    assert_close(
        "total_mass",
        chamber.dry_air_mass_kg + chamber.vapor_mass_kg,
        chamber.air_density_kg_m3 * chamber.volume_m3,
        1e-12,
    );
}

#[test]
fn non_positive_volume_is_rejected() {
    let zero = ClimateChamber::new(ChamberInput {
        volume_m3: 0.0,
        temperature_c: 12.6968,
        relative_humidity_pct: 70.0,
    });
    assert_eq!(zero.unwrap_err(), ChamberError::InvalidVolume(0.0));

    let negative = ClimateChamber::new(ChamberInput {
        volume_m3: -3.0,
        temperature_c: 12.6968,
        relative_humidity_pct: 70.0,
    });
    assert!(matches!(negative, Err(ChamberError::InvalidVolume(_))));
}

#[test]
fn set_target_is_pure_assignment() {
    let mut chamber = reference_chamber();
    chamber.set_target(20.0, 55.0, 0.5, 0.25, 0.75);
    assert_eq!(chamber.target_temperature_k, 20.0 + 273.15);
    assert_eq!(chamber.target_relative_humidity_pct, 55.0);
    assert_eq!(chamber.red, 0.5);
    assert_eq!(chamber.blue, 0.25);
    assert_eq!(chamber.white, 0.75);

    // 이전 상태와 무관한 단순 대입이므로 덮어쓰기도 그대로 반영된다.
    chamber.set_target(18.0, 60.0, 1.0, 1.0, 1.0);
    assert_eq!(chamber.target_temperature_k, 18.0 + 273.15);
    assert_eq!(chamber.target_relative_humidity_pct, 60.0);
}

#[test]
fn heat_loss_sign_follows_ambient_difference() {
    // 외기(5 °C)보다 따뜻하면 손실(양수).
    let warm = reference_chamber();
    assert!(warm.heat_loss_w() > 0.0);
    assert_close("heat_loss_warm", warm.heat_loss_w(), 126.997_199_999_999_94, 1e-9);

    // 외기보다 차가우면 순유입(음수).
    let cold = ClimateChamber::new(ChamberInput {
        volume_m3: 10.0,
        temperature_c: 2.0,
        relative_humidity_pct: 70.0,
    })
    .expect("cold chamber");
    assert!(cold.heat_loss_w() < 0.0);
}

#[test]
fn heating_is_monotonic_toward_target() {
    let mut chamber = reference_chamber();
    chamber.set_target(20.0, 70.0, 1.0, 1.0, 1.0);

    let mut previous = chamber.temperature_k;
    for _ in 0..200 {
        chamber.advance_tick();
        assert!(
            chamber.temperature_k >= previous,
            "temperature dropped: {} -> {}",
            previous,
            chamber.temperature_k
        );
        previous = chamber.temperature_k;
    }
    assert!(chamber.temperature_k > 285.8468);
}

#[test]
fn humidifier_fires_independently_of_heater() {
    // 온도 목표는 이미 달성된 상태에서 습도 목표만 올리면 가습기만 작동한다.
    let mut chamber = reference_chamber();
    chamber.set_target(12.6968, 80.0, 1.0, 1.0, 1.0);

    let initial_rh = chamber.relative_humidity_pct;
    let initial_vapor = chamber.vapor_mass_kg;
    for _ in 0..5 {
        chamber.advance_tick();
    }
    assert!(chamber.relative_humidity_pct > initial_rh);
    assert!(chamber.vapor_mass_kg > initial_vapor);
    assert_close("rh_after_5_ticks", chamber.relative_humidity_pct, 70.502_359_750_288_52, 1e-9);
}

#[test]
fn idle_tick_drifts_toward_ambient() {
    // 목표가 초기 측정값과 같으면 히터는 켜지지 않고 열손실만 반영된다.
    let mut chamber = reference_chamber();
    chamber.advance_tick();
    assert_close("temperature_after_idle_tick", chamber.temperature_k, 285.846_552_173_573_7, 1e-9);
    assert!(chamber.temperature_k < 285.8468);
    // 틱 후에도 에너지 합 불변식은 유지된다.
    assert_eq!(
        chamber.air_thermal_energy_j + chamber.vapor_thermal_energy_j,
        chamber.system_thermal_energy_j
    );
}

#[test]
fn state_report_mentions_all_quantities() {
    let report = reference_chamber().state_report();
    for needle in [
        "volume = 10 m³",
        "surface_area = 33 m²",
        "temperature_kelvins = 285.8468 K",
        "relative_humidity = 70 %",
        "air_density =",
        "dry_air_mass =",
        "vapor_mass =",
        "air_thermal_energy = 3511.440 kJ",
        "vapor_thermal_energy = 45.678 kJ",
        "system_thermal_energy = 3557.118 kJ",
    ] {
        assert!(report.contains(needle), "missing `{needle}` in:\n{report}");
    }
}
