use std::time::Instant;

use crate::simulation::integrator::timestep;
use crate::simulation::params::Parameters;
use crate::simulation::states::BellState;

/// Bell swinging hard enough to strike and hit the stay now and then
fn make_state() -> BellState {
    let mut state = BellState::new(2.5);
    state.wheel_force = 300.0;
    state
}

/// Time the raw integrator for a range of episode lengths
/// Paste output directly into a spreadsheet to graph
pub fn bench_timestep() {
    println!("frames,total_ms,ns_per_frame,stay_hits");

    // 1 s up to about 28 simulated hours at 60 fps
    let frame_counts = [60, 600, 6_000, 60_000, 600_000, 6_000_000];

    for frames in frame_counts {
        let mut state = make_state();
        let mut params = Parameters::default();

        // Warm up
        for _ in 0..60 {
            if timestep(&mut state, &mut params).is_err() {
                println!("{frames},diverged during warm-up");
                return;
            }
        }

        let t0 = Instant::now();
        for _ in 0..frames {
            if timestep(&mut state, &mut params).is_err() {
                println!("{frames},diverged at t = {:.3}", params.time());
                return;
            }
            // alternate the pull so the bell keeps ringing
            if state.ding {
                state.wheel_force = -state.wheel_force;
            }
        }
        let elapsed = t0.elapsed().as_secs_f64();

        let ns_per_frame = elapsed * 1e9 / frames as f64;
        println!("{},{:.3},{:.1},{}", frames, elapsed * 1000.0, ns_per_frame, state.stay_hit);
    }
}
