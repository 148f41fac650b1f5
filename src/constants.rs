// Achievement thresholds
pub const VIP_POSTS_THRESHOLD: u64 = 100;
pub const POPULAR_LIKES_THRESHOLD: u64 = 500;
pub const ACTIVE_COMMENTS_THRESHOLD: u64 = 50;
pub const SOCIAL_FRIENDS_THRESHOLD: u64 = 20;
pub const EARLY_ADOPTER_MONTHS: u32 = 6;
pub const LEVEL_BADGE_THRESHOLD: u32 = 10;
pub const POSTS_PER_LEVEL: u64 = 10;

// Badge shelf
pub const MAX_VISIBLE_BADGES: usize = 5;

// Streak indicator
pub const STREAK_HOT_THRESHOLD: u64 = 5;
pub const PULSE_PERIOD_MS: u64 = 1500;

// Demo host
pub const TICK_INTERVAL_MS: u64 = 100;
pub const APP_DIR_NAME: &str = ".profile-badges";
pub const PROFILE_FILE_NAME: &str = "profile.json";
pub const LOG_FILE_NAME: &str = "profile-badges.log";
pub const LOG_FILTER_ENV: &str = "PROFILE_BADGES_LOG";
