use crate::{card::CardLayout, client::uno::UnoAttributes};
use dioxus::prelude::*;

#[inline_props]
pub fn Layout<'a>(cx: Scope<'a>, children: Element<'a>) -> Element {
    cx.render(rsx! (
        header {
            u_text: "center",
            u_container: "~",
            class: "mx-auto",
            h1 {
               u_text: "3xl",
               u_p: "6",
               "Users"
            }
            nav {
                (CardLayout::ALL.iter().map(|layout| {
                    let route = layout.route();
                    let label = layout.label();
                    rsx!(
                        Link {
                            key: "{label}",
                            to: "{route}",
                            span {
                                u_display: "inline-block",
                                u_p: "x-3",
                                u_bg: "hover:sky-100",
                                u_border: "rounded",
                                "{label}"
                            }
                        }
                    )
                }))
            }
        }
        main {
            u_text: "center",
            children
        }
    ))
}
