use glam::DVec2;

/// One velocity-Verlet step. Returns the new `(position, velocity, acceleration)`.
///
/// Acceleration is `force / (mass * dt)`, not `force / mass`.
pub fn verlet_step(
    pos: DVec2,
    vel: DVec2,
    acc: DVec2,
    net_force: DVec2,
    mass: f64,
    dt: f64,
) -> (DVec2, DVec2, DVec2) {
    assert!(
        dt > 0.0 && dt.is_finite(),
        "verlet_step requires a positive finite dt, got {}",
        dt
    );

    let new_pos = pos + vel * dt + 0.5 * acc * dt * dt;
    let new_acc = net_force / (mass * dt);
    let new_vel = vel + 0.5 * (acc + new_acc) * dt;

    (new_pos, new_vel, new_acc)
}
