pub mod catalog;

pub use catalog::{
    // Dataset model
    BoosterEffect, LinkUpPlay, LinkUpRole, Manager, PlaystyleKey, PlaystyleProficiency,
    // Query model
    Criteria, SortMode,
    // Pipeline
    ManagerCatalog, derive_booster_options, evaluate, rank,
    // Presentation
    LinkUpRoleView, LinkUpView, ManagerCard, PlaystyleView, ProficiencyTier, present,
};
