//! Single-page portfolio layout.

use dioxus::prelude::*;

use crate::components::{
    About, AchievementModal, Achievements, Budget, Contact, Education, Footer, Gallery, Hero,
    Kickboxing, Navbar, PartnerModal, Sidebar, Sponsorship,
};

/// Every section in reading order, with the overlays mounted last so they
/// stack above the content.
#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {}
        Sidebar {}

        main { class: "portfolio",
            Hero {}
            About {}
            Kickboxing {}
            Education {}
            Achievements {}
            Budget {}
            Gallery {}
            Sponsorship {}
            Contact {}
        }

        Footer {}

        AchievementModal {}
        PartnerModal {}
    }
}
