//! Entry point for the pulsetop TUI. Parses args, starts the sampler and runs the App.

mod app;
mod ui;

use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};
use std::env;

use app::App;
use pulsetop_agent::config::{config_dir, parse_interval_secs, Overrides};
use pulsetop_agent::demo::demo_runner;
use pulsetop_agent::{spawn_sampler, AgentConfig, CommandRunner, ShellRunner};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "[--interval SECS|-i SECS] [--wifi-iface IFACE|-w IFACE] [--demo]";

struct ParsedArgs {
    demo: bool,
    overrides: Overrides,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "pulsetop".into());
    let mut demo = false; // --demo
    let mut overrides = Overrides::default();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Err(format!(
                    "Usage: {prog} {USAGE}\nKeys: r = refresh now, q/Esc = quit"
                ));
            }
            "--demo" => demo = true,
            "--interval" | "-i" => {
                let v = it.next().ok_or("--interval needs a value")?;
                overrides.interval = Some(parse_interval_secs(&v)?);
            }
            "--wifi-iface" | "-w" => {
                overrides.wifi_interface = Some(it.next().ok_or("--wifi-iface needs a value")?);
            }
            _ if arg.starts_with("--interval=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    overrides.interval = Some(parse_interval_secs(v)?);
                }
            }
            _ if arg.starts_with("--wifi-iface=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        overrides.wifi_interface = Some(v.to_string());
                    }
                }
            }
            _ => return Err(format!("Unexpected argument '{arg}'. Usage: {prog} {USAGE}")),
        }
    }
    Ok(ParsedArgs { demo, overrides })
}

// Logs go to a file so they never land on the alternate screen; off unless a filter is set.
fn init_logging() {
    let Ok(filter) =
        EnvFilter::try_from_env("PULSETOP_LOG").or_else(|_| EnvFilter::try_from_default_env())
    else {
        return;
    };
    let dir = config_dir();
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("pulsetop.log"))
    else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };
    init_logging();

    let config = AgentConfig::load().with_overrides(&parsed.overrides);
    let runner: Arc<dyn CommandRunner> = if parsed.demo {
        Arc::new(demo_runner())
    } else {
        Arc::new(ShellRunner::new(config.command_timeout))
    };

    let app = App::new(spawn_sampler(runner, config));
    app.run().await
}
