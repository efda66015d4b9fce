/// Storage category for phone images
pub const CATEGORY_PHONES: &str = "phones";

/// Storage category for design previews and downloadable design files
pub const CATEGORY_DESIGNS: &str = "designs";

/// Storage category for video files and poster images
pub const CATEGORY_VIDEOS: &str = "videos";

/// Default administrator credential, seeded once when the admin table is empty
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "changeme";
