//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine with enum states.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Enum states via the `state_enum!` macro
//! - Fluent transition builder
//! - No final state (cycles indefinitely)
//!
//! Run with: cargo run --example traffic_light

use waypoint::builder::{BuildError, TransitionBuilder};
use waypoint::core::State;
use waypoint::state_enum;
use waypoint::Fsm;

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt::init();

    println!("=== Traffic Light State Machine ===\n");

    let transitions = vec![
        TransitionBuilder::new("go")
            .from(TrafficLight::Red)
            .to(TrafficLight::Green)
            .build()?,
        TransitionBuilder::new("slow")
            .from(TrafficLight::Green)
            .to(TrafficLight::Yellow)
            .build()?,
        TransitionBuilder::new("stop")
            .from(TrafficLight::Yellow)
            .to(TrafficLight::Red)
            .build()?,
    ];

    let mut light = Fsm::new(TrafficLight::Red).set_transitions(transitions);
    println!("Initial state: {}", light.current().name());

    for _ in 0..6 {
        // Exactly one transition is valid from each colour
        let Some(next) = light.valid_transitions().first().map(|name| name.to_string()) else {
            break;
        };
        light = light.execute(&next);
        println!("  {next:>4} -> {}", light.current().name());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
