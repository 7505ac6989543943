//! Built-in device profiles referenced by execution groups

use serde::Serialize;

use crate::options::BrowserKind;

/// Browser viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A named browser/device combination groups can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    pub device_name: &'static str,
    pub browser: BrowserKind,
    pub viewport: Viewport,
}

pub const DESKTOP_CHROME: DeviceProfile = DeviceProfile {
    device_name: "Desktop Chrome",
    browser: BrowserKind::Chromium,
    viewport: Viewport::new(1280, 720),
};

pub const DESKTOP_EDGE: DeviceProfile = DeviceProfile {
    device_name: "Desktop Edge",
    browser: BrowserKind::Chromium,
    viewport: Viewport::new(1280, 720),
};

pub const DESKTOP_FIREFOX: DeviceProfile = DeviceProfile {
    device_name: "Desktop Firefox",
    browser: BrowserKind::Firefox,
    viewport: Viewport::new(1280, 720),
};

pub const DESKTOP_SAFARI: DeviceProfile = DeviceProfile {
    device_name: "Desktop Safari",
    browser: BrowserKind::Webkit,
    viewport: Viewport::new(1280, 720),
};

/// All known profiles, in a fixed order.
pub fn all() -> &'static [DeviceProfile] {
    &[DESKTOP_CHROME, DESKTOP_EDGE, DESKTOP_FIREFOX, DESKTOP_SAFARI]
}

/// Look up a profile by its device name.
pub fn lookup(device_name: &str) -> Option<&'static DeviceProfile> {
    all().iter().find(|p| p.device_name == device_name)
}

/// Device list the smoke matrix expands over.
///
/// One entry per (browser, device) combination; every registry alias/tenant
/// pair gets one group per entry.
pub fn default_matrix() -> &'static [DeviceProfile] {
    &[DESKTOP_CHROME]
}
