//! A body patrols a corridor through a light switch's detection volume.
//!
//! Run with `RUST_LOG=debug cargo run --example corridor` to watch the
//! overlap events toggle the light.

use sconce_actors::prelude::*;

fn main() {
    env_logger::init();

    let mut stage = Stage::new();
    let switch = stage
        .spawn_switch(LightSwitchConfig::default(), [0.0, 0.0, 0.0])
        .expect("default config is valid");
    let guard = stage.spawn_body([600.0, 0.0, 0.0]);

    // March from one end of the corridor to the other and back
    let mut waypoints: Vec<f32> = (-4..=4).map(|i| i as f32 * 150.0).collect();
    waypoints.extend((-4..=4).rev().map(|i| i as f32 * 150.0));

    for x in waypoints {
        stage.move_body(guard, [x, 0.0, 0.0]).expect("guard exists");
        stage.step();
        let lit = stage.is_lit(switch).expect("switch exists");
        println!("guard at x={x:>7.1}  light: {}", if lit { "on" } else { "off" });
    }
}
