use dioxus::prelude::*;

/// Themed native select element for forms and filters.
///
/// Wraps a native `<select>` so the dashboard filters and the intake form
/// share one look without a primitive-backed listbox. Children should be
/// `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    /// Inline error shown below the select.
    #[props(default)]
    error: String,
    /// Whether the select is disabled.
    #[props(default = false)]
    disabled: bool,
    /// Option elements to render inside the select.
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper", "data-invalid": !error.is_empty(),
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            if !error.is_empty() {
                p { class: "form-select-error", "{error}" }
            }
        }
    }
}
