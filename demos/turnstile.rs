//! Turnstile
//!
//! This example walks a coin-operated turnstile through a few transitions,
//! then rewinds it through its history.
//!
//! Key concepts:
//! - Transitions valid from several origin states
//! - Lifecycle callbacks around every transition
//! - History navigation without re-running transitions
//! - Rejected transitions leave the machine unchanged
//!
//! Run with: cargo run --example turnstile

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;
use waypoint::{Callbacks, Fsm, Transition};

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    println!("=== Turnstile ===\n");

    let coins = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&coins);

    let fsm = Fsm::with_history("locked")
        .set_transitions(vec![
            Transition::new("coin", ["locked", "unlocked"], "unlocked"),
            Transition::new("push", ["locked", "unlocked"], "locked"),
        ])
        .set_callbacks(
            Callbacks::<&'static str>::new()
                .on_leave_state(|state| println!("  leaving  {state}"))
                .on_enter_state(|state| println!("  entering {state}"))
                .on_after_transition(move |transition| {
                    if transition == "coin" {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }
                }),
        );

    println!("Initial state: {}", fsm.current());
    println!("Valid transitions: {:?}\n", fsm.valid_transitions());

    let fsm = fsm.execute("coin").execute("push").execute("coin");
    println!("\nAfter coin, push, coin: {}", fsm.current());
    println!("History: {:?} (cursor {})", fsm.history(), fsm.cursor());
    println!("Coins collected: {}", coins.load(Ordering::SeqCst));

    let rejected = fsm.execute("kick");
    println!("\nUnknown transition 'kick' leaves us in: {}", rejected.current());

    let rewound = fsm.history_back(2);
    println!("Two steps back: {} (cursor {})", rewound.current(), rewound.cursor());

    let replayed = rewound.history_forward(1);
    println!("One step forward: {}", replayed.current());

    println!("\n{}", waypoint::visualize::to_dot(&fsm));

    println!("=== Example Complete ===");
}
