mod common;

use common::position;
use urania::aspects::{
    angular_separation, AspectCalculator, AspectDefinition, AspectKind, ASPECT_TABLE,
};
use urania::bodies::{Body, CelestialBody};

fn body_at(body: Body, lon: f64) -> CelestialBody {
    CelestialBody::from_position(body, &position(lon, 1.0))
}

#[test]
fn test_calculate_aspect_conjunction() {
    let calculator = AspectCalculator::new();

    let aspect = calculator.calculate_aspect(100.0, 102.0, 1.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Conjunction);
    assert_eq!(aspect.angle, 2.0);
    assert_eq!(aspect.orb, 2.0);
}

#[test]
fn test_calculate_aspect_opposition() {
    let calculator = AspectCalculator::new();

    // 178 degrees apart, within the 8 degree orb
    let aspect = calculator.calculate_aspect(100.0, 278.0, 1.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Opposition);
    assert_eq!(aspect.exact_angle, 180.0);
    assert_eq!(aspect.orb, 2.0);
}

#[test]
fn test_orb_is_inclusive_and_absolute() {
    let calculator = AspectCalculator::new();

    let edge = calculator.calculate_aspect(0.0, 128.0, 1.0).unwrap();
    assert_eq!(edge.kind, AspectKind::Trine);
    assert_eq!(edge.orb, 8.0);

    // Separation under the exact angle still reports a positive orb.
    let under = calculator.calculate_aspect(0.0, 85.5, 1.0).unwrap();
    assert_eq!(under.kind, AspectKind::Square);
    assert_eq!(under.orb, 4.5);

    assert!(calculator.calculate_aspect(0.0, 67.0, 1.0).is_none());
    assert!(calculator.calculate_aspect(0.0, 30.0, 1.0).is_none());
}

#[test]
fn test_separation_wraps_around_zero() {
    assert_eq!(angular_separation(357.0, 3.0), 6.0);
    assert_eq!(angular_separation(10.0, 350.0), 20.0);

    let aspect = AspectCalculator::new().calculate_aspect(357.0, 3.0, 1.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Conjunction);
}

#[test]
fn test_declared_order_wins_overlapping_orbs() {
    // Both rows admit a separation of 0; the first declared must win.
    let conjunction = AspectDefinition {
        kind: AspectKind::Conjunction,
        exact_angle: 0.0,
        orb: 8.0,
    };
    let wide_sextile = AspectDefinition {
        kind: AspectKind::Sextile,
        exact_angle: 4.0,
        orb: 10.0,
    };

    let forward = AspectCalculator::with_definitions(vec![conjunction, wide_sextile]);
    assert_eq!(
        forward.calculate_aspect(50.0, 50.0, 1.0).unwrap().kind,
        AspectKind::Conjunction
    );

    let reversed = AspectCalculator::with_definitions(vec![wide_sextile, conjunction]);
    assert_eq!(
        reversed.calculate_aspect(50.0, 50.0, 1.0).unwrap().kind,
        AspectKind::Sextile
    );
}

#[test]
fn test_standard_table_order() {
    let kinds: Vec<AspectKind> = ASPECT_TABLE.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            AspectKind::Conjunction,
            AspectKind::Opposition,
            AspectKind::Trine,
            AspectKind::Square,
            AspectKind::Sextile,
        ]
    );
}

#[test]
fn test_aspect_is_symmetric() {
    let calculator = AspectCalculator::new();
    let longitudes = [0.0, 7.5, 59.0, 91.25, 121.0, 179.0, 186.0, 243.7, 301.0, 358.0];

    for &a in &longitudes {
        for &b in &longitudes {
            assert_eq!(
                calculator.calculate_aspect(a, b, 1.0),
                calculator.calculate_aspect(b, a, 1.0),
                "asymmetric for {} / {}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_compute_natal_aspects_pairs_once() {
    let calculator = AspectCalculator::new();
    let bodies = vec![
        body_at(Body::Sun, 100.0),
        body_at(Body::Moon, 102.0),
        body_at(Body::Mars, 220.0),
    ];

    let aspects = calculator.compute_natal_aspects(&bodies);
    // sun-moon conjunction, sun-mars trine, moon-mars trine
    assert_eq!(aspects.len(), 3);
    assert!(aspects[0].joins(Body::Moon, Body::Sun));
    assert_eq!(aspects[1].aspect.kind, AspectKind::Trine);
    assert!(aspects.iter().all(|a| a.from != a.to));
}

#[test]
fn test_outer_transits_use_half_orb() {
    let calculator = AspectCalculator::new();
    let natal = vec![body_at(Body::Sun, 5.0)];

    // 5° off a conjunction: inside 8°, outside the halved 4°.
    let saturn = calculator.compute_transit_aspects(&[body_at(Body::Saturn, 0.0)], &natal);
    assert_eq!(saturn.len(), 1);
    assert_eq!(saturn[0].aspect.kind, AspectKind::Conjunction);

    for outer in [Body::Uranus, Body::Neptune, Body::Pluto] {
        let hits = calculator.compute_transit_aspects(&[body_at(outer, 0.0)], &natal);
        assert!(hits.is_empty(), "{} should use a 4° orb", outer);
    }

    // The halving applies to the transiting side only.
    let natal_pluto = vec![body_at(Body::Pluto, 5.0)];
    let hits = calculator.compute_transit_aspects(&[body_at(Body::Sun, 0.0)], &natal_pluto);
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_transit_includes_own_natal_position() {
    let calculator = AspectCalculator::new();
    let hits = calculator.compute_transit_aspects(
        &[body_at(Body::Saturn, 120.0)],
        &[body_at(Body::Saturn, 122.0)],
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].transiting, Body::Saturn);
    assert_eq!(hits[0].natal, Body::Saturn);
}
