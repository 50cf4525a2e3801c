use crate::form::FormState;
use dioxus::prelude::*;

/// Input writing every keystroke into `form[name]`
#[component]
pub fn FormField(
    form: Signal<FormState>,
    name: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> Element {
    let mut form = form;
    let current = form.read().get(name).to_string();

    rsx! {
        input {
            r#type: kind,
            r#name: name,
            placeholder: placeholder,
            value: "{current}",
            oninput: move |event| form.write().set(name, event.value()),
        }
    }
}
