use serde::{Deserialize, Serialize};
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::info;

/// Compute device requested from the generation service.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Device {
    #[default]
    Auto,
    Cpu,
    Cuda,
}

const NVIDIA_MARKERS: [&str; 2] = ["/proc/driver/nvidia/version", "/dev/nvidia0"];

impl Device {
    /// Replaces `Auto` with the device found on this host.
    pub fn resolve(self) -> Device {
        match self {
            Device::Auto => detect_device(),
            other => other,
        }
    }
}

/// `Cuda` when an NVIDIA driver is visible, otherwise `Cpu`.
pub fn detect_device() -> Device {
    let device = if NVIDIA_MARKERS.iter().any(|p| Path::new(p).exists()) {
        Device::Cuda
    } else {
        Device::Cpu
    };
    info!("Compute device detected: {}", device);
    device
}
