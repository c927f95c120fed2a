//! Household profile structures and JSON loading

mod data;
pub mod loader;

pub use data::{
    Category, HouseholdSituation, HouseholdProfile, Person, IncomeLine, AmountLine,
    ExemptionFlags, DailyBenefit, ReplacementIncomeInputs, MiscResources,
    RealEstateKind, RealEstateAsset, CessionKind, OwnershipTitle, CessionNature,
    CessionRecord, MovableAssets, SupportMode, CohabitantRecord,
};
pub use loader::{load_profile, load_profiles, load_profiles_from_reader};
