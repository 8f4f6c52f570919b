//! Minimal interactive loop driving the engine directly, without the pump.
//!
//! Each stdin line is replayed as keystrokes against the demo transformer;
//! the simulated screen shows what the focused application would display.
//!
//! Run with: cargo run --example interactive

use std::io::{self, BufRead};

use vietkey::{create_demo_engine, key_code_for, EventSource, KeyEvent, KeyResult, VietkeyConfig};

fn main() -> anyhow::Result<()> {
    let config = VietkeyConfig::default();
    let (engine, screen) = create_demo_engine(&config);
    engine.start()?;
    engine.notify_app_activated("com.example.editor");

    println!("vietkey interactive - try \"vieet\" or \"aa\"; empty line quits");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }

        for ch in line.chars() {
            let Some((code, mods)) = key_code_for(ch) else {
                continue;
            };
            let event = KeyEvent::key_down(code, mods);
            // Play the application for passed-through keystrokes.
            if engine.on_key_event(&event, EventSource::GlobalHook) == KeyResult::NotHandled {
                screen.echo_char(ch);
            }
        }

        println!("buffer={:?} screen={:?}", engine.composition_text(), screen.visible());
    }

    engine.stop();
    Ok(())
}
