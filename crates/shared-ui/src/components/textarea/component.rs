use dioxus::prelude::*;

/// Multi-line text input with an optional label and inline error.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] error: String,
    #[props(default = 4_i64)] rows: i64,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper", "data-invalid": !error.is_empty(),
            if !label.is_empty() {
                label { class: "textarea-label", "{label}" }
            }
            textarea {
                value: value,
                placeholder: placeholder,
                rows: rows,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if !error.is_empty() {
                p { class: "textarea-error", "{error}" }
            }
        }
    }
}
