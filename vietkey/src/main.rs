//! Interactive demo binary.
//!
//! Types lines from stdin as if they were keystrokes aimed at a simulated
//! application, running the full pipeline: pump -> engine -> demo
//! transformer -> synthetic replay into a screen buffer. Colon-prefixed
//! commands switch method/language, edit exclusions and move focus.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vietkey::{
    create_demo_engine, ensure_input_monitoring, key_code_for, keycodes, EventPump, InputMethod,
    InterceptionEngine, KeyEvent, KeyEventKind, KeyResult, KeyboardLayout, Language, Modifiers,
    ScreenBuffer, StaticProbe, UsQwertyLayout, VietkeyConfig,
};

#[derive(Parser)]
#[command(name = "vietkey", about = "Vietnamese IME interception engine demo")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "vietkey_core=debug".
    #[arg(long, default_value = "info")]
    log: String,

    /// Simulated foreground application identifier.
    #[arg(long, default_value = "com.example.editor")]
    app: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .init();

    let config = match &cli.config {
        Some(path) => VietkeyConfig::load(path)?,
        None => VietkeyConfig::default(),
    };

    let (engine, screen) = create_demo_engine(&config);
    ensure_input_monitoring(&StaticProbe::granted())?;
    engine.start()?;

    let pump = EventPump::spawn_with(engine.clone(), app_echo(screen.clone()));
    pump.send_focus(cli.app.clone());
    pump.flush();

    println!("vietkey demo - type text, :help for commands");
    print_state(&engine, &screen);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(command) = line.strip_prefix(':') {
            if !run_command(command.trim(), &engine, &screen, &pump) {
                break;
            }
            print_state(&engine, &screen);
            continue;
        }

        for ch in line.chars() {
            match key_code_for(ch) {
                Some((code, mods)) => pump.send_key(KeyEvent::key_down(code, mods)),
                None => println!("(no key mapping for {ch:?}, skipped)"),
            }
        }
        pump.flush();
        print_state(&engine, &screen);
        io::stdout().flush()?;
    }

    pump.shutdown();
    engine.stop();
    Ok(())
}

/// Plays the focused application: echo whatever the engine passed through.
fn app_echo(screen: ScreenBuffer) -> impl FnMut(&KeyEvent, KeyResult) + Send + 'static {
    let layout = UsQwertyLayout::new();
    move |event, result| {
        if result != KeyResult::NotHandled || event.kind != KeyEventKind::KeyDown {
            return;
        }
        match event.key_code {
            keycodes::SPACE => screen.echo_char(' '),
            keycodes::DELETE => screen.echo_backspace(),
            code => {
                if let Ok(Some(ch)) = layout.translate(code, event.modifiers) {
                    screen.echo_char(ch);
                }
            }
        }
    }
}

fn run_command(
    command: &str,
    engine: &Arc<InterceptionEngine>,
    screen: &ScreenBuffer,
    pump: &vietkey::PumpHandle,
) -> bool {
    let mut parts = command.splitn(2, ' ');
    let verb = parts.next().unwrap_or_default();
    let arg = parts.next().unwrap_or_default().trim();

    match verb {
        "quit" | "q" => return false,
        "telex" => engine.set_input_method(InputMethod::Telex),
        "vni" => engine.set_input_method(InputMethod::Vni),
        "en" => engine.set_language(Language::En),
        "vn" => engine.set_language(Language::Vn),
        "on" => engine.set_enabled(true),
        "off" => engine.set_enabled(false),
        "reset" => engine.reset(),
        "clear" => screen.clear(),
        "backspace" => {
            pump.send_key(KeyEvent::key_down(keycodes::DELETE, Modifiers::empty()));
            pump.flush();
        }
        "focus" if !arg.is_empty() => {
            pump.send_focus(arg.to_string());
            pump.flush();
        }
        "exclude" if !arg.is_empty() => {
            engine.exclusions().insert(arg);
        }
        "include" if !arg.is_empty() => {
            engine.exclusions().remove(arg);
        }
        "exclusions" => println!("excluded: {:?}", engine.exclusions().ids()),
        "help" => {
            println!(
                "commands: :telex :vni :en :vn :on :off :reset :clear :backspace\n          \
                 :focus <app-id> :exclude <app-id> :include <app-id> :exclusions :quit"
            );
        }
        other => println!("unknown command {other:?}, try :help"),
    }
    true
}

fn print_state(engine: &Arc<InterceptionEngine>, screen: &ScreenBuffer) {
    let settings = engine.settings();
    println!(
        "[{:?}/{:?}{}] buffer={:?} screen={:?}",
        settings.input_method,
        settings.language,
        if settings.enabled { "" } else { " off" },
        engine.composition_text(),
        screen.visible(),
    );
}
