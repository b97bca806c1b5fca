// Shared tuning constants for the dome gallery and its companions.

// Layout
pub const DEFAULT_SEGMENTS: u32 = 35;
pub const COLUMN_X_START: i32 = -37; // fixed span, independent of the segment count
pub const COLUMN_X_STEP: i32 = 2;
pub const EVEN_COLUMN_YS: [i32; 5] = [-4, -2, 0, 2, 4];
pub const ODD_COLUMN_YS: [i32; 5] = [-3, -1, 1, 3, 5];
pub const TILE_SIZE: u32 = 2;

// Rotation
pub const DEFAULT_MAX_VERTICAL_ROTATION_DEG: f32 = 5.0;
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 20.0;
pub const DEFAULT_DRAG_DAMPENING: f32 = 1.0;

// Viewport fit
pub const DEFAULT_FIT: f32 = 0.5;
pub const DEFAULT_MIN_RADIUS: f32 = 600.0;
pub const DEFAULT_PAD_FACTOR: f32 = 0.25;
pub const AUTO_FIT_WIDE_ASPECT: f32 = 1.3; // width drives the radius at or above this aspect
pub const RADIUS_HEIGHT_GUARD: f32 = 1.35;
pub const MIN_VIEWER_PAD_PX: f32 = 8.0;

// Gestures (pixels, milliseconds)
pub const MOVE_THRESHOLD_SQ_PX: f32 = 16.0;
pub const TAP_THRESHOLD_TOUCH_PX: f32 = 10.0;
pub const TAP_THRESHOLD_MOUSE_PX: f32 = 6.0;
pub const CLICK_SUPPRESS_AFTER_DRAG_MS: f64 = 120.0;
pub const CLICK_MIN_GAP_AFTER_DRAG_MS: f64 = 80.0;
pub const VELOCITY_WINDOW_MS: f64 = 100.0;
pub const DEFAULT_ENLARGE_TRANSITION_MS: f64 = 300.0;

// Inertia
pub const INERTIA_MAX_RELEASE_VELOCITY: f32 = 1.4;
pub const INERTIA_VELOCITY_SCALE: f32 = 80.0;
pub const INERTIA_FRICTION_BASE: f32 = 0.94;
pub const INERTIA_FRICTION_SPAN: f32 = 0.055;
pub const INERTIA_STOP_BASE: f32 = 0.015;
pub const INERTIA_STOP_SPAN: f32 = 0.01;
pub const INERTIA_FRAMES_BASE: f32 = 90.0;
pub const INERTIA_FRAMES_SPAN: f32 = 270.0;
pub const INERTIA_ANGLE_DIVISOR: f32 = 200.0; // internal velocity units per degree
pub const INERTIA_MIN_START_VELOCITY: f32 = 0.005;
pub const INERTIA_ZERO_VELOCITY: f32 = 0.001;
pub const INERTIA_FALLBACK_SCALE: f32 = 0.02;

// Mobile profile
pub const MOBILE_MAX_VIEWPORT_WIDTH: f64 = 768.0;
pub const MOBILE_SEGMENT_FACTOR: f32 = 0.6;
pub const MOBILE_MIN_SEGMENTS: u32 = 20;
pub const MOBILE_SENSITIVITY_FACTOR: f32 = 1.5;
pub const MOBILE_INTENSITY_FACTOR: f32 = 0.7;
pub const MOBILE_SPEED_FACTOR: f32 = 0.8;

// Intro text
pub const INTRO_START_DELAY_MS: f64 = 100.0;
pub const INTRO_ELEMENT_DURATION_MS: f64 = 800.0;
pub const INTRO_INITIAL_OFFSET_PX: f32 = 30.0;
pub const INTRO_INITIAL_BLUR_PX: f32 = 10.0;
pub const INTRO_GALLERY_DELAY_MS: f64 = 100.0;
pub const INTRO_EASE: [f32; 4] = [0.16, 1.0, 0.3, 1.0]; // cubic-bezier control points

// Music
pub const MUSIC_AUTOPLAY_DELAY_MS: f64 = 500.0;
pub const MUSIC_CONTROLS_HIDE_MS: f64 = 3000.0;
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.5;

// Background
pub const BACKGROUND_TIME_STEP: f32 = 0.01;
pub const BACKGROUND_BENDS_DESKTOP: usize = 3;
pub const BACKGROUND_BENDS_MOBILE: usize = 2;
pub const BACKGROUND_GLOWS: usize = 2;
pub const DEFAULT_BACKGROUND_INTENSITY: f32 = 0.6;

// Default background palette (pink family)
pub const DEFAULT_PALETTE: [[u8; 3]; 6] = [
    [255, 182, 193], // pink
    [255, 192, 203], // light pink
    [221, 160, 221], // plum
    [186, 85, 211],  // medium orchid
    [255, 105, 180], // hot pink
    [255, 20, 147],  // deep pink
];
