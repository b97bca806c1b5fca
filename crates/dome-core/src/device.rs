//! Desktop vs. mobile tuning.

use crate::constants::{
    BACKGROUND_BENDS_DESKTOP, BACKGROUND_BENDS_MOBILE, MOBILE_INTENSITY_FACTOR,
    MOBILE_MAX_VIEWPORT_WIDTH, MOBILE_MIN_SEGMENTS, MOBILE_SEGMENT_FACTOR,
    MOBILE_SENSITIVITY_FACTOR, MOBILE_SPEED_FACTOR,
};

const MOBILE_AGENT_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceProfile {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceProfile {
    pub fn detect(viewport_width: f64, user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if viewport_width <= MOBILE_MAX_VIEWPORT_WIDTH
            || MOBILE_AGENT_MARKERS.iter().any(|m| ua.contains(m))
        {
            DeviceProfile::Mobile
        } else {
            DeviceProfile::Desktop
        }
    }

    pub fn effective_segments(self, segments: u32) -> u32 {
        match self {
            DeviceProfile::Desktop => segments,
            DeviceProfile::Mobile => {
                ((segments as f32 * MOBILE_SEGMENT_FACTOR).floor() as u32).max(MOBILE_MIN_SEGMENTS)
            }
        }
    }

    pub fn effective_sensitivity(self, sensitivity: f32) -> f32 {
        match self {
            DeviceProfile::Desktop => sensitivity,
            DeviceProfile::Mobile => sensitivity * MOBILE_SENSITIVITY_FACTOR,
        }
    }

    pub fn background_intensity(self, intensity: f32) -> f32 {
        match self {
            DeviceProfile::Desktop => intensity,
            DeviceProfile::Mobile => intensity * MOBILE_INTENSITY_FACTOR,
        }
    }

    pub fn background_speed(self, speed: f32) -> f32 {
        match self {
            DeviceProfile::Desktop => speed,
            DeviceProfile::Mobile => speed * MOBILE_SPEED_FACTOR,
        }
    }

    pub fn background_bends(self) -> usize {
        match self {
            DeviceProfile::Desktop => BACKGROUND_BENDS_DESKTOP,
            DeviceProfile::Mobile => BACKGROUND_BENDS_MOBILE,
        }
    }
}
