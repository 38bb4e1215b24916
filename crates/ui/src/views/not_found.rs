use dioxus::prelude::*;
use dioxus_router::Link;

use crate::registry::PageProps;
use crate::views::translator;

pub fn NotFoundView(props: PageProps) -> Element {
    let tr = translator(&props.language);
    let title = tr.t("Page not found");
    let home_label = tr.t("Visit Home");
    let home = props.language.link("/");

    rsx! {
        div { class: "page not-found",
            h1 { "{title}" }
            Link { class: "btn btn-primary", to: home, "{home_label}" }
        }
    }
}
