use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::model::GamesPage;

use crate::registry::PageProps;
use crate::views::{bad_page_data, translator};
use crate::vm::{GameRowVm, map_game_rows};

pub fn GamesView(props: PageProps) -> Element {
    let page = match props.result.page::<GamesPage>() {
        Ok(page) => page,
        Err(err) => return bad_page_data(&err),
    };
    let i18n = translator(&props.language);
    let rows = map_game_rows(&page.games, &props.language, &i18n);
    let heading = i18n.t("All games");
    let name = i18n.t("Name");
    let status = i18n.t("Status");
    let last_score = i18n.t("Last score");
    let position = i18n.t("Position");
    let last_start = i18n.t("Last start");

    rsx! {
        div { class: "page games",
            h2 { "{heading}" }
            table { class: "table",
                thead {
                    tr {
                        th { "{name}" }
                        th { "{status}" }
                        th { "{last_score}" }
                        th { "{position}" }
                        th { "{last_start}" }
                    }
                }
                tbody {
                    for row in rows {
                        GameRow { key: "{row.href}", row }
                    }
                }
            }
        }
    }
}

#[component]
fn GameRow(row: GameRowVm) -> Element {
    rsx! {
        tr {
            td { Link { to: row.href.clone(), "{row.name}" } }
            td { "{row.status}" }
            td { "{row.last_score}" }
            td { "{row.position}" }
            td { "{row.last_start}" }
        }
    }
}
