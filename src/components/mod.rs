//! Page components for the portfolio.

mod achievements;
mod navbar;
mod partners;
mod sections;
mod timeline;

pub use achievements::AchievementModal;
pub use navbar::{Navbar, Sidebar};
pub use partners::PartnerModal;
pub use sections::{
    About, Achievements, Budget, Contact, Education, Footer, Gallery, Hero, Kickboxing,
    Sponsorship,
};
