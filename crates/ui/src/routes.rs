use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::StepperView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StepperView)] Stepper {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "Stepper" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
