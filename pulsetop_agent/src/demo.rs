//! Canned macOS tool output. Backs `--demo` so the dashboard runs on any host,
//! and doubles as parser fixtures.

use crate::collectors::commands;
use crate::runner::StaticRunner;

pub const MEM_TOTAL_OUTPUT: &str = "17179869184";

pub const VM_STAT_OUTPUT: &str = "\
Mach Virtual Memory Statistics: (page size of 16384 bytes)
Pages free:                              100000.
Pages active:                            380000.
Pages inactive:                          150000.
Pages speculative:                        12144.
Pages throttled:                              0.
Pages wired down:                        190000.
Pages purgeable:                          20311.
\"Translation faults\":                 912837465.
Pages copy-on-write:                   22049011.
";

pub const CPU_OUTPUT: &str = "CPU usage: 12.50% user, 8.25% sys, 79.25% idle";

pub const HARDWARE_PORTS_OUTPUT: &str = "\
Hardware Port: Ethernet
Device: en5
Ethernet Address: 36:a1:00:00:00:01

Hardware Port: Wi-Fi
Device: en0
Ethernet Address: 36:a1:00:00:00:02

VLAN Configurations
===================
";

pub const AIRPORT_NETWORK_OUTPUT: &str = "Current Wi-Fi Network: Home-5G";

pub const AIRPORT_SUMMARY_OUTPUT: &str = "\
Wi-Fi:

      Software Versions:
          CoreWLAN: 16.0 (1657)
      Interfaces:
        en0:
          Card Type: Wi-Fi  (0x14E4, 0x4387)
          Status: Connected
          Current Network Information:
            Home-5G:
              PHY Mode: 802.11ax
              Channel: 149 (5GHz, 80MHz)
              Security: WPA2 Personal
";

pub const BLUETOOTH_OUTPUT: &str = "\
Bluetooth:

      Bluetooth Controller:
          Address: 00:00:00:00:00:00
          State: On
          Chipset: BCM_4387
          Discoverable: Off
      Connected:
          AirPods Pro:
              Address: 11:11:11:11:11:11
              Vendor ID: 0x004C
              Battery Level: 80%
          MX Master 3:
              Address: 22:22:22:22:22:22
              Minor Type: Mouse

      Not Connected:
          Magic Keyboard:
              Address: 33:33:33:33:33:33
";

pub const BATTERY_OUTPUT: &str = "\
Now drawing from 'AC Power'
 -InternalBattery-0 (id=24313955)\t85%; charging; 0:45 remaining present: true
";

pub const LSOF_OUTPUT: &str = "\
COMMAND     PID   USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
ControlCe   510   me    10u  IPv4 0x6f1f6d2c0e1a11b1      0t0  TCP *:5000 (LISTEN)
ControlCe   510   me    11u  IPv6 0x6f1f6d2c0e1a11b2      0t0  TCP *:5000 (LISTEN)
ControlCe   510   me    12u  IPv4 0x6f1f6d2c0e1a11b3      0t0  TCP *:7000 (LISTEN)
cupsd       321   root   5u  IPv6 0x6f1f6d2c0e1a11b4      0t0  TCP [::1]:631 (LISTEN)
postgres    901   me     7u  IPv6 0x6f1f6d2c0e1a11b5      0t0  TCP [::1]:5432 (LISTEN)
postgres    902   me     8u  IPv4 0x6f1f6d2c0e1a11b6      0t0  TCP 127.0.0.1:5432 (LISTEN)
";

pub const PS_OUTPUT: &str = "\
USER               PID  %CPU %MEM      VSZ    RSS   TT  STAT STARTED      TIME COMMAND
_windowserver      812  23.4  1.2 413215232 201344   ??  Ss    9:01AM  41:12.33 /System/Library/PrivateFrameworks/SkyLight.framework/Resources/WindowServer -daemon
me                2231  11.0  3.8 445120512 640032   ??  S     9:02AM  12:40.10 /Applications/Safari.app/Contents/MacOS/Safari
me                9911   9.7  0.0 408102144   1520   ??  Rs    2:14PM   0:00.01 ps aux -r
me                1404   6.2  0.9 411932672 150528   ??  S     9:01AM   3:05.77 /System/Library/CoreServices/Finder.app/Contents/MacOS/Finder
root               488   3.1  0.3 410436608  51200   ??  Ss    9:00AM   1:22.06 /usr/libexec/logd
me                3120   2.5  0.7 418426880 118784   ??  S    10:15AM   0:44.02 /usr/local/bin/node server.js
me                3342   1.1  0.2 409980928  40960 s000  S+   11:30AM   0:02.11 -zsh
me                5510   0.8  0.4 412270592  73728   ??  S     1:00PM   0:05.40 /Applications/Slack.app/Contents/MacOS/Slack
";

pub const HOSTNAME_OUTPUT: &str = "studio.local";

pub const SW_VERS_OUTPUT: &str = "macOS\n14.5";

pub const UPTIME_OUTPUT: &str = "14:02  up 3 days,  4:12, 2 users, load averages: 2.10 1.95 1.80";

pub const DF_OUTPUT: &str = "\
Filesystem        Size    Used   Avail Capacity iused ifree %iused  Mounted on
/dev/disk3s1s1   460Gi   210Gi   230Gi    48%  404k  2.4G    0%   /
";

/// A runner answering every collector command from the fixtures above.
pub fn demo_runner() -> StaticRunner {
    StaticRunner::new()
        .with(commands::MEM_TOTAL, MEM_TOTAL_OUTPUT)
        .with(commands::VM_STAT, VM_STAT_OUTPUT)
        .with(commands::CPU_USAGE, CPU_OUTPUT)
        .with(commands::HARDWARE_PORTS, HARDWARE_PORTS_OUTPUT)
        .with(commands::airport_network("en0"), AIRPORT_NETWORK_OUTPUT)
        .with(commands::AIRPORT_SUMMARY, AIRPORT_SUMMARY_OUTPUT)
        .with(commands::BLUETOOTH, BLUETOOTH_OUTPUT)
        .with(commands::BATTERY, BATTERY_OUTPUT)
        .with(commands::LISTENING_PORTS, LSOF_OUTPUT)
        .with(commands::TOP_PROCESSES, PS_OUTPUT)
        .with(commands::HOSTNAME, HOSTNAME_OUTPUT)
        .with(commands::OS_VERSION, SW_VERS_OUTPUT)
        .with(commands::UPTIME, UPTIME_OUTPUT)
        .with(commands::DISK_ROOT, DF_OUTPUT)
}
