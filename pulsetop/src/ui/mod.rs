//! UI module root: exposes drawing functions for individual panels.

pub mod battery;
pub mod cpu;
pub mod disks;
pub mod header;
pub mod mem;
pub mod net;
pub mod ports;
pub mod processes;
pub mod util;
