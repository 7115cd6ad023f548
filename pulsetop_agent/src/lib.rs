//! pulsetop_agent: shells out to the host's diagnostic utilities, turns their text
//! output into typed readings and keeps a refreshing snapshot for the TUI.

pub mod aggregator;
pub mod collectors;
pub mod config;
pub mod demo;
pub mod extract;
pub mod runner;
pub mod sampler;
pub mod state;
pub mod types;

pub use aggregator::collect_snapshot;
pub use config::AgentConfig;
pub use runner::{CommandRunner, ShellRunner, StaticRunner, UNAVAILABLE};
pub use sampler::{spawn_sampler, Phase, Sampler};
pub use types::Snapshot;
