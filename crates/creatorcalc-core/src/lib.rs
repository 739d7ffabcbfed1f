//! Calculation engines and shared types for creator sponsorship pricing.

pub mod app_config;
pub mod config;
pub mod engagement;
pub mod error;
pub mod growth;
pub mod numeric;
pub mod payment;
pub mod platform;
pub mod pricing;
pub mod profiles;
pub mod user;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use engagement::{
    compute_engagement, required_fields, validate_engagement_input, weekly_trend,
    EngagementCounts, EngagementResult, EngagementTier, TrendPoint,
};
pub use error::{ConfigError, EngagementInputError, PaymentError};
pub use growth::{compute_growth, GrowthInput, GrowthInputForm, GrowthResult, TargetPeriod};
pub use numeric::LenientField;
pub use payment::{
    unlock_report, PaymentPlan, PaymentSessionId, PaymentVerifier, SimulatedPaymentVerifier,
};
pub use platform::Platform;
pub use pricing::{
    build_report, compute_price, CreatorProfile, CreatorProfileForm, PricingReport, PricingResult,
};
pub use profiles::{load_profiles, NamedProfile, ProfilesFile};
pub use user::{validate_signup, SignupErrors, SignupForm, UserRecord, UserRole};
