use dioxus::prelude::*;
use quiz_core::model::{Credentials, UpdatePayload, WelcomePage};

use crate::registry::PageProps;
use crate::views::{bad_page_data, follow_update, translator};

pub fn WelcomeView(props: PageProps) -> Element {
    let mut name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let page = match props.result.page::<WelcomePage>() {
        Ok(page) => page,
        Err(err) => return bad_page_data(&err),
    };
    let i18n = translator(&props.language);
    let prompt = i18n.t("Welcome! Please enter or create a name and a password");
    let name_label = i18n.t("Name");

    let on_change = props.on_change.clone();
    let on_result = props.on_result;
    let on_navigate = props.on_navigate;
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        sending.set(true);
        let credentials = Credentials {
            name: name(),
            password: password(),
        };
        let on_change = on_change.clone();
        spawn(async move {
            // Failures are logged by the update channel; the form stays usable.
            if let Ok(response) = on_change.send(UpdatePayload::Login(credentials)).await {
                follow_update(response, on_result, on_navigate);
            }
            sending.set(false);
        });
    };

    rsx! {
        div { class: "page welcome",
            p { class: "lead", "{prompt}" }
            if let Some(error) = page.error {
                div { class: "alert alert-danger", role: "alert", "{error}" }
            }
            form { onsubmit: submit,
                label { r#for: "welcome-name", "{name_label}" }
                input {
                    id: "welcome-name",
                    class: "form-control",
                    r#type: "text",
                    autocomplete: "username",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    id: "welcome-password",
                    class: "form-control",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: sending(),
                    "OK"
                }
            }
        }
    }
}
