//! pulsetop_agent: headless collector. Prints snapshots as JSON on stdout.

use std::env;
use std::sync::Arc;

use pulsetop_agent::config::{parse_interval_secs, Overrides};
use pulsetop_agent::demo::demo_runner;
use pulsetop_agent::{collect_snapshot, spawn_sampler, AgentConfig, CommandRunner, ShellRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "[--once] [--interval SECS|-i SECS] [--wifi-iface IFACE|-w IFACE] [--demo]";

struct ParsedArgs {
    once: bool,
    demo: bool,
    overrides: Overrides,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "pulsetop_agent".into());
    let mut once = false;
    let mut demo = false;
    let mut overrides = Overrides::default();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(format!("Usage: {prog} {USAGE}")),
            "--once" => once = true,
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
            _ => return Err(format!("Unexpected argument '{arg}'. Usage: {prog} {USAGE}")),
        }
    }
    Ok(ParsedArgs {
        once,
        demo,
        overrides,
    })
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("PULSETOP_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    let config = AgentConfig::load().with_overrides(&parsed.overrides);
    let runner: Arc<dyn CommandRunner> = if parsed.demo {
        Arc::new(demo_runner())
    } else {
        Arc::new(ShellRunner::new(config.command_timeout))
    };

    if parsed.once {
        let snapshot = collect_snapshot(runner.as_ref(), &config).await;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let sampler = spawn_sampler(runner, config);
    let mut rx = sampler.subscribe();
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let latest = rx.borrow_and_update().clone();
                if let Some(snapshot) = latest {
                    println!("{}", serde_json::to_string(snapshot.as_ref())?);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }
    sampler.shutdown().await;
    Ok(())
}
