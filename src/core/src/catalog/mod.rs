pub mod catalog;
pub mod criteria;
pub mod evaluator;
pub mod manager;
pub mod options;
pub mod presentation;
pub mod ranking;

pub use catalog::ManagerCatalog;
pub use criteria::{Criteria, SortMode};
pub use evaluator::evaluate;
pub use manager::{
    BoosterEffect, LinkUpPlay, LinkUpRole, Manager, PlaystyleKey, PlaystyleProficiency,
};
pub use options::derive_booster_options;
pub use presentation::{
    LinkUpRoleView, LinkUpView, ManagerCard, PlaystyleView, ProficiencyTier, present,
};
pub use ranking::rank;
