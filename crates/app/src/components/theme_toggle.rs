use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMoon, LdSun};
use dioxus_free_icons::Icon;
use shared_ui::theme::ThemeState;
use shared_ui::{Button, ButtonVariant};

/// Light/dark toggle button. Flips the shared theme signal and repaints
/// the document root.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme: ThemeState = use_context();
    let dark = (theme.is_dark)();
    let label = if dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            aria_label: label,
            onclick: move |_| {
                let next = !(theme.is_dark)();
                theme.is_dark.set(next);
                theme.apply();
            },
            if dark {
                Icon::<LdSun> { icon: LdSun, width: 18, height: 18 }
            } else {
                Icon::<LdMoon> { icon: LdMoon, width: 18, height: 18 }
            }
        }
    }
}
