//! Unit tests for force accumulation and eviction

use ballpit_core::engine::{Body, Force, Lifetime};
use ballpit_core::palette::Color;
use ballpit_core::tests::test_helpers::approx_eq_vec;
use glam::DVec2;

fn body_with_gravity() -> Body {
    // gravity 10 * mass 10 => (0, 100)
    Body::new(DVec2::new(50.0, 50.0), Color::from_rgb(10, 20, 30), 10.0, 10.0)
}

#[test]
fn test_timed_force_survives_while_remaining_is_non_negative() {
    let mut body = body_with_gravity();
    body.add_force(DVec2::new(4.0, -2.0), Lifetime::Remaining(0.5));

    // remaining 0.25
    let net = body.resolve_forces(0.25);
    assert_eq!(net, DVec2::new(4.0, 98.0));
    assert_eq!(body.forces().len(), 2);

    // remaining exactly 0.0: still kept
    let net = body.resolve_forces(0.25);
    assert_eq!(net, DVec2::new(4.0, 98.0));
    assert_eq!(body.forces().len(), 2);
    assert_eq!(body.forces()[1].lifetime, Lifetime::Remaining(0.0));

    // remaining -0.25: counted one last time, then evicted
    let net = body.resolve_forces(0.25);
    assert_eq!(net, DVec2::new(4.0, 98.0));
    assert_eq!(body.forces().len(), 1);

    let net = body.resolve_forces(0.25);
    assert_eq!(net, DVec2::new(0.0, 100.0));
}

#[test]
fn test_force_longer_than_dt_is_evicted_on_first_negative() {
    let mut body = body_with_gravity();
    body.add_force(DVec2::new(1.0, 0.0), Lifetime::Remaining(0.1));

    let mut counted = 0;
    for _ in 0..10 {
        let net = body.resolve_forces(0.03);
        if net.x == 1.0 {
            counted += 1;
        }
    }

    // remaining after each call: 0.07, 0.04, 0.01, -0.02 (evicted on the 4th)
    assert_eq!(counted, 4);
    assert_eq!(body.forces().len(), 1);
}

#[test]
fn test_zero_ttl_force_acts_exactly_once() {
    let mut body = body_with_gravity();
    body.add_force(DVec2::new(7.0, 0.0), Lifetime::Remaining(0.0));

    assert_eq!(body.resolve_forces(0.005).x, 7.0);
    assert_eq!(body.forces().len(), 1);
    assert_eq!(body.resolve_forces(0.005).x, 0.0);
}

#[test]
fn test_permanent_force_is_never_evicted() {
    let mut body = body_with_gravity();
    for _ in 0..10_000 {
        let net = body.resolve_forces(0.5);
        assert_eq!(net, DVec2::new(0.0, 100.0));
    }
    assert_eq!(body.forces(), &[Force::permanent(DVec2::new(0.0, 100.0))]);
}

#[test]
fn test_forces_accumulate() {
    let mut body = body_with_gravity();
    body.add_force(DVec2::new(1.5, 2.0), Lifetime::Permanent);
    body.add_force(DVec2::new(-0.5, 3.0), Lifetime::Remaining(1.0));
    body.add_force(DVec2::new(10.0, 0.0), Lifetime::Remaining(2.0));

    let net = body.resolve_forces(0.01);
    assert!(approx_eq_vec(net, DVec2::new(11.0, 105.0), 1e-12));
    assert_eq!(body.forces().len(), 4);
}

#[test]
fn test_resolve_does_not_move_body() {
    let mut body = body_with_gravity();
    body.add_force(DVec2::new(100.0, 0.0), Lifetime::Remaining(0.1));
    body.resolve_forces(0.05);

    assert_eq!(body.pos(), DVec2::new(50.0, 50.0));
    assert_eq!(body.vel(), DVec2::ZERO);
}
