//! Domain-level constants.

// =============================================================================
// Demo defaults
// =============================================================================

/// Email inserted by the demo run when none is given
pub const DEFAULT_DEMO_EMAIL: &str = "newuser@example.com";

/// Password inserted by the demo run when none is given
pub const DEFAULT_DEMO_PASSWORD: &str = "securepassword";
