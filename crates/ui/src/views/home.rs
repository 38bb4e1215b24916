use dioxus::prelude::*;
use quiz_core::model::HomePage;

use crate::registry::PageProps;
use crate::views::bad_page_data;

pub fn HomeView(props: PageProps) -> Element {
    match props.result.page::<HomePage>() {
        Ok(page) => rsx! {
            div { class: "page home",
                p { "Hello, {page.name}" }
            }
        },
        Err(err) => bad_page_data(&err),
    }
}
