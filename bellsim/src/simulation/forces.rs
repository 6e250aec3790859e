//! Angular accelerations acting on the bell and clapper
//!
//! Every function here is pure: it reads geometry and a snapshot of angles and
//! velocities and returns an acceleration. The integrator decides which terms
//! apply in which contact mode and when results are committed.

use super::states::BellGeometry;

/// Free-swinging bell: gravity on the bell COM and through the clapper pivot,
/// less the centrifugal pull of the swinging clapper, over the effective inertia
pub fn coupled_bell_accel(geo: &BellGeometry, g: f64, angle: f64, clapper_angle: f64, clapper_velocity: f64) -> f64 {
    let diff = angle - clapper_angle;

    let num = -geo.m1 * g * geo.l1 * angle.sin()
        - geo.m2 * g * geo.p * angle.sin()
        - geo.m2 * geo.p * geo.l2 * clapper_velocity * clapper_velocity * diff.sin();
    let den = geo.bell_inertia()
        + geo.m2 * geo.p * geo.p
        + geo.m2 * geo.p * geo.l2 * diff.cos();

    num / den
}

/// Bell on its own, ignoring any reaction from the clapper
pub fn bell_only_accel(geo: &BellGeometry, g: f64, angle: f64) -> f64 {
    -g * angle.sin() / ((1.0 + geo.k1) * geo.l1)
}

/// Rope pull on the wheel rim converted to angular acceleration of the bell
pub fn drive_accel(geo: &BellGeometry, wheel_force: f64) -> f64 {
    wheel_force * geo.radius / geo.bell_inertia()
}

/// Clapper pendulum hung from a pivot that moves with the bell
///
/// `bell_accel` and `bell_velocity` are the bell values for the same frame,
/// so the pivot's tangential and centripetal accelerations drive the clapper.
pub fn clapper_accel(
    geo: &BellGeometry,
    g: f64,
    clapper_angle: f64,
    bell_angle: f64,
    bell_accel: f64,
    bell_velocity: f64,
) -> f64 {
    let diff = bell_angle - clapper_angle;

    let num = -g * clapper_angle.sin()
        - geo.p * (bell_accel * diff.cos() - bell_velocity * bell_velocity * diff.sin());
    let den = (1.0 + geo.k2) * geo.l2;

    num / den
}

/// Bell and clapper locked together as one rigid body, drive torque included.
/// Friction is left to the caller.
pub fn rigid_accel(geo: &BellGeometry, g: f64, angle: f64, clapper_angle: f64, wheel_force: f64) -> f64 {
    let num = -geo.l1 * geo.m1 * g * angle.sin()
        - geo.m2 * g * (geo.p * angle.sin() + geo.l2 * clapper_angle.sin());

    let arm = geo.p + geo.l2 * (angle - clapper_angle).cos();
    let den = geo.bell_inertia() + geo.m2 * (1.0 + geo.k2) * arm * arm;

    num / den + wheel_force * geo.radius / den
}
