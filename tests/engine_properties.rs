//! Property-based tests for the fuzzy inference engine using proptest

use std::collections::HashMap;

use proptest::prelude::*;

use fuzzy_climate_controller::fuzzy::MembershipFunction;
use fuzzy_climate_controller::thermostat::{ClimateReading, Thermostat};

/// Generate sorted trapezoid corners inside a generous range, keeping the
/// corners alongside the built shape.
fn trapezoid_strategy() -> impl Strategy<Value = ([f64; 4], MembershipFunction)> {
    prop::collection::vec(-100.0f64..100.0, 4).prop_map(|mut corners| {
        corners.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let [a, b, c, d] = [corners[0], corners[1], corners[2], corners[3]];
        let mf = MembershipFunction::trapezoid(a, b, c, d).expect("sorted corners are valid");
        ([a, b, c, d], mf)
    })
}

proptest! {
    #[test]
    fn degree_stays_within_the_unit_interval(
        (_, mf) in trapezoid_strategy(),
        x in -200.0f64..200.0,
    ) {
        let degree = mf.degree(x);
        prop_assert!((0.0..=1.0).contains(&degree), "degree(x={}) = {}", x, degree);
    }

    #[test]
    fn degree_is_one_on_the_flat_top_and_zero_outside_the_support(
        ([a, b, c, d], mf) in trapezoid_strategy(),
        t in 0.0f64..=1.0,
    ) {
        prop_assert_eq!(mf.degree(a - 1.0), 0.0);
        prop_assert_eq!(mf.degree(d + 1.0), 0.0);
        let on_top = (b + (c - b) * t).clamp(b, c);
        prop_assert_eq!(mf.degree(on_top), 1.0);
    }

    #[test]
    fn rising_edge_is_monotonic_non_decreasing(
        ([a, b, _, _], mf) in trapezoid_strategy(),
        t0 in 0.0f64..=1.0,
        t1 in 0.0f64..=1.0,
    ) {
        let (t_low, t_high) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        let x0 = (a + (b - a) * t_low).clamp(a, b);
        let x1 = (a + (b - a) * t_high).clamp(a, b);
        prop_assert!(mf.degree(x0.min(x1)) <= mf.degree(x0.max(x1)));
    }

    #[test]
    fn falling_edge_is_monotonic_non_increasing(
        ([_, _, c, d], mf) in trapezoid_strategy(),
        t0 in 0.0f64..=1.0,
        t1 in 0.0f64..=1.0,
    ) {
        let (t_low, t_high) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        let x0 = (c + (d - c) * t_low).clamp(c, d);
        let x1 = (c + (d - c) * t_high).clamp(c, d);
        prop_assert!(mf.degree(x0.min(x1)) >= mf.degree(x0.max(x1)));
    }

    #[test]
    fn thermostat_outputs_stay_within_the_power_domain(
        temp_inside in 0.0f64..=40.0,
        temp_outside in -10.0f64..=40.0,
        humidity in 0.0f64..=100.0,
    ) {
        let thermostat = Thermostat::new().unwrap();
        let levels = thermostat.run_once(ClimateReading { temp_inside, temp_outside, humidity });
        prop_assert!((0.0..=100.0).contains(&levels.ac_power));
        prop_assert!((0.0..=100.0).contains(&levels.heater_power));
    }

    #[test]
    fn out_of_domain_inputs_equal_their_clamped_counterparts(
        temp_inside in -50.0f64..=90.0,
        temp_outside in -60.0f64..=90.0,
        humidity in -50.0f64..=150.0,
    ) {
        let thermostat = Thermostat::new().unwrap();
        let raw = thermostat.run_once(ClimateReading { temp_inside, temp_outside, humidity });
        let clamped = thermostat.run_once(ClimateReading {
            temp_inside: temp_inside.clamp(0.0, 40.0),
            temp_outside: temp_outside.clamp(-10.0, 40.0),
            humidity: humidity.clamp(0.0, 100.0),
        });
        prop_assert_eq!(raw, clamped);
    }

    #[test]
    fn evaluate_is_referentially_transparent(
        temp_inside in 0.0f64..=40.0,
        temp_outside in -10.0f64..=40.0,
        humidity in 0.0f64..=100.0,
    ) {
        let thermostat = Thermostat::new().unwrap();
        let inputs = HashMap::from([
            ("tempInside".to_string(), temp_inside),
            ("tempOutside".to_string(), temp_outside),
            ("humidity".to_string(), humidity),
        ]);
        let first = thermostat.engine().evaluate(&inputs);
        let second = thermostat.engine().evaluate(&inputs);
        prop_assert_eq!(first, second);
    }
}
