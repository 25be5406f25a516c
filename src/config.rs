//! Timing and threshold knobs for the page behavior, in one place.

/// Scroll offset in px past which the navbar switches to its high-contrast mode.
pub const SCROLL_THRESHOLD_PX: f64 = 80.0;

/// Scroll offset in px past which the scroll-to-top button becomes visible.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;

/// Viewport width in px at and below which the hamburger layout applies.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Leading-edge throttle windows.
pub const SCROLL_THROTTLE_MS: u32 = 16; // ~60fps
pub const SCROLL_TOP_THROTTLE_MS: u32 = 100;
pub const RESIZE_THROTTLE_MS: u32 = 250;

// Page-switch stage offsets, measured from the start of a switch.
pub const LINK_PRESS_RESET_MS: u32 = 150;
pub const PAGE_EXIT_MS: u32 = 200;
pub const PAGE_ENTER_DELAY_MS: u32 = 50;
pub const LINK_PULSE_RESET_MS: u32 = 200;
pub const SCROLL_RECONCILE_MS: u32 = 100;

/// Fraction of the scroll offset applied to the active hero.
pub const PARALLAX_FACTOR: f64 = 0.3;

// Card reveal observer.
pub const CARD_VISIBLE_RATIO: f64 = 0.1;
pub const CARD_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const CARD_STAGGER_MS: u32 = 100;

/// Delay before the body fades in after mount.
pub const PAGE_FADE_IN_DELAY_MS: u32 = 100;

/// Simulated sign-in round trip.
pub const LOGIN_DELAY_MS: u32 = 1_500;
