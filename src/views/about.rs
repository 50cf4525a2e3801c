use dioxus::prelude::*;

const REPO_URL: &str = "https://github.com/tamir-liebermann/gobank";
const FINANCE_URL: &str = "https://twintracker.me/";
const HEADSHOT: Asset = asset!("/assets/headshot.svg");
const CARD_ICON: &str = "https://img.icons8.com/plasticine/100/000000/bank-card-back-side.png";

pub struct AboutCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Shows the repository and finance links
    pub linked: bool,
    pub contacts: &'static [(&'static str, &'static str)],
}

/// Index 0 is shown by default, index 1 after clicking the headshot
pub static ABOUT_CARDS: [AboutCard; 2] = [
    AboutCard {
        title: "What is ",
        subtitle: "Gobank",
        description: "Gobank is a secured money transfer app that allows you to create account and see your transactions history",
        linked: true,
        contacts: &[],
    },
    AboutCard {
        title: "Tamir Liebermann",
        subtitle: "Fullstack developer",
        description: "Passionate individual that loves creating, learning and designing. I am naturally curious, quietly confident and constantly improving myself each day. If I am not programming, I am either hanging out with my adorable dogs 🐶 or playing video games 🎮!",
        linked: false,
        contacts: &[
            ("fas fa-address-card", "http://nguyntony.com/"),
            ("fab fa-linkedin", "https://www.linkedin.com/in/nguyntony/"),
            ("fab fa-github", "https://github.com/nguyntony"),
        ],
    },
];

#[component]
pub fn About() -> Element {
    let mut content_id = use_signal(|| 0usize);
    let card = &ABOUT_CARDS[content_id()];

    rsx! {
        section { class: "aboutContainer",
            div { class: "profileContainer",
                div { class: "headshot one",
                    img {
                        src: HEADSHOT,
                        alt: "tamir",
                        onclick: move |_| content_id.set(1),
                    }
                }
                div { class: "three", onclick: move |_| content_id.set(0),
                    img { src: CARD_ICON, alt: "credit card" }
                }
            }
            div { class: "aboutContentContainer",
                div { class: "aboutCard",
                    div { class: "aboutContent",
                        div { class: "titleHeading",
                            h1 {
                                "{card.title}"
                                if card.linked {
                                    span {
                                        a {
                                            href: REPO_URL,
                                            target: "_blank",
                                            rel: "noreferrer",
                                            "gobank"
                                        }
                                        "?"
                                    }
                                }
                            }
                            h3 { "{card.subtitle}" }
                        }
                        div { class: "profileDescription",
                            p {
                                "{card.description} "
                                if card.linked {
                                    a {
                                        href: FINANCE_URL,
                                        target: "_blank",
                                        rel: "noreferrer",
                                        "personal finance."
                                    }
                                }
                            }
                            if !card.contacts.is_empty() {
                                nav { id: "profileNav",
                                    ul {
                                        for (icon , url) in card.contacts.iter() {
                                            li { key: "{url}",
                                                a {
                                                    href: "{url}",
                                                    target: "_blank",
                                                    rel: "noreferrer",
                                                    i { class: "{icon}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
