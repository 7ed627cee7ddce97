/// Environment variable selecting development or production behavior
pub const ENV_MODE: &str = "SPENDZEN_MODE";

/// Environment variable holding the backend host (and optional port)
pub const ENV_BACKEND_URL: &str = "SPENDZEN_BACKEND_URL";

/// Environment variable holding the identity provider publishable key
pub const ENV_IDENTITY_PUBLISHABLE_KEY: &str = "SPENDZEN_IDENTITY_PUBLISHABLE_KEY";

/// Environment variable holding an optional request timeout in milliseconds
pub const ENV_REQUEST_TIMEOUT_MS: &str = "SPENDZEN_REQUEST_TIMEOUT_MS";

/// Mode used when `SPENDZEN_MODE` is unset or blank
pub const DEFAULT_MODE: &str = "development";

/// Backend host used when `SPENDZEN_BACKEND_URL` is unset or blank
pub const DEFAULT_BACKEND_HOST: &str = "192.168.129.234:8080";

/// Number of onboarding steps
pub const ONBOARDING_STEPS: usize = 4;

/// Categories offered during onboarding as impulse-buy temptations
pub const SPENDING_CATEGORIES: [&str; 8] = [
    "Dining Out",
    "Hobbies",
    "Fashion",
    "Gadgets",
    "Coffee",
    "Entertainment",
    "Travel",
    "Subscriptions",
];

/// Goal name shown on the dashboard before any goal exists
pub const PLACEHOLDER_GOAL_NAME: &str = "No goal set";
