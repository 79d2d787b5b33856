pub const WINDOW_WIDTH: i32 = 960;             // Default window width
pub const WINDOW_HEIGHT: i32 = 540;            // Default window height
pub const FPS: u32 = 60;                       // Frames per second

pub const SWIPE_THRESHOLD: f32 = 50.0;         // Minimum horizontal travel for a swipe (pixels)
pub const RESIZE_DEBOUNCE: f32 = 0.25;         // Quiet time before a resize refreshes the layout (seconds)
pub const VISIBILITY_RESTORE_DELAY: f32 = 0.1; // Delay before replaying the entrance after refocus (seconds)
pub const INITIAL_ANIMATION_DELAY: f32 = 0.1;  // Delay before the first slide's entrance (seconds)
pub const ANIMATION_TRIGGER_DELAY: f32 = 0.15; // Delay before replaying the entrance after navigation (seconds)

pub const ANIMATION_DURATION: f32 = 0.5;       // Duration of a slide's entrance animation (seconds)
pub const CAPTION_DURATION: f32 = 3.0;         // How long an announcement stays on screen (seconds)
pub const ERROR_SCREEN_DURATION: u64 = 5;      // How long a fatal load error is shown (seconds)

pub const CONTROL_BAR_HEIGHT: f32 = 64.0;      // Height of the bottom bar holding the controls
pub const PROGRESS_HEIGHT: f32 = 6.0;          // Height of the progress bar at the top
pub const BUTTON_WIDTH: f32 = 150.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const FONT_SIZE: i32 = 20;

pub const NAV_HELP_ID: &str = "nav-help";
pub const DECK_CONFIG_FILE: &str = "presentation.toml";
