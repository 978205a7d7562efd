use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdLightbulb, LdPhone, LdShield, LdWrench, LdZap};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent};

use crate::components::{ServiceRequestModal, ThemeToggle};

/// Public marketing page: hero, services, about, contact, footer.
#[component]
pub fn Home() -> Element {
    let mut show_request_modal = use_signal(|| false);

    let services = [
        (
            rsx! { Icon::<LdLightbulb> { icon: LdLightbulb, width: 32, height: 32 } },
            "Residential Electrical",
            "Complete home electrical services, from repairs to installations",
        ),
        (
            rsx! { Icon::<LdWrench> { icon: LdWrench, width: 32, height: 32 } },
            "Commercial Services",
            "Professional electrical solutions for businesses",
        ),
        (
            rsx! { Icon::<LdShield> { icon: LdShield, width: 32, height: 32 } },
            "Emergency Services",
            "24/7 emergency electrical support",
        ),
        (
            rsx! { Icon::<LdClock> { icon: LdClock, width: 32, height: 32 } },
            "Maintenance",
            "Regular maintenance and safety inspections",
        ),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            header { class: "home-hero",
                nav { class: "home-nav",
                    div { class: "home-brand",
                        Icon::<LdZap> { icon: LdZap, width: 28, height: 28 }
                        span { "One Way Electric" }
                    }
                    div { class: "home-nav-links",
                        a { href: "#services", "Services" }
                        a { href: "#about", "About" }
                        a { href: "#contact", "Contact" }
                    }
                    div { class: "home-nav-cta",
                        ThemeToggle {}
                        a { class: "home-call-button", href: "tel:(773) 710-9794",
                            Icon::<LdPhone> { icon: LdPhone, width: 16, height: 16 }
                            "(773) 710-9794"
                        }
                    }
                }

                div { class: "home-hero-body",
                    h1 { "Your Trusted Electrical Service Partner" }
                    p {
                        "Professional electrical services for residential and commercial needs. "
                        "Available 24/7 for emergencies."
                    }
                    div { class: "home-hero-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| show_request_modal.set(true),
                            "Schedule Service"
                        }
                        a { href: "#services",
                            Button { variant: ButtonVariant::Outline, "Learn More" }
                        }
                    }
                }
            }

            section { id: "services", class: "home-services",
                h2 { "Our Services" }
                p { class: "home-section-lead",
                    "Comprehensive electrical solutions for all your needs"
                }
                div { class: "home-services-grid",
                    for (icon, title, description) in services {
                        Card {
                            CardContent {
                                div { class: "home-service-card",
                                    {icon}
                                    h3 { "{title}" }
                                    p { "{description}" }
                                }
                            }
                        }
                    }
                }
            }

            section { id: "about", class: "home-about",
                div { class: "home-about-copy",
                    h2 { "About One Way Electric" }
                    p {
                        "With over 20 years of experience, One Way Electric has been providing "
                        "top-notch electrical services to homes and businesses. Our licensed "
                        "electricians are committed to safety, quality, and customer satisfaction."
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_request_modal.set(true),
                        "Schedule a Visit"
                    }
                }
            }

            section { id: "contact", class: "home-contact",
                h2 { "Contact Us" }
                p { class: "home-section-lead", "Available 24/7 for emergency services" }
                div { class: "home-contact-grid",
                    Card {
                        CardContent {
                            div { class: "home-contact-card",
                                Icon::<LdPhone> { icon: LdPhone, width: 28, height: 28 }
                                h3 { "Phone" }
                                p { "(773) 710-9794" }
                            }
                        }
                    }
                    Card {
                        CardContent {
                            div { class: "home-contact-card",
                                Icon::<LdClock> { icon: LdClock, width: 28, height: 28 }
                                h3 { "Hours" }
                                p { "24/7 Emergency Service" }
                                p { "Mon-Fri: 8am - 6pm" }
                            }
                        }
                    }
                    Card {
                        CardContent {
                            div { class: "home-contact-card",
                                Icon::<LdShield> { icon: LdShield, width: 28, height: 28 }
                                h3 { "Licensed & Insured" }
                                p { "Fully licensed electrical contractor" }
                            }
                        }
                    }
                }
            }

            footer { class: "home-footer",
                div { class: "home-brand",
                    Icon::<LdZap> { icon: LdZap, width: 24, height: 24 }
                    span { "One Way Electric" }
                }
                p { "\u{a9} 2026 One Way Electric. All rights reserved." }
            }
        }

        ServiceRequestModal {
            open: show_request_modal(),
            on_close: move |_| show_request_modal.set(false),
        }
    }
}
