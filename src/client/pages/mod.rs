#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::card::CardLayout;

mod directory;
mod layout;

pub fn app(cx: Scope) -> Element {
    cx.render(rsx! {
        Router {
            layout::Layout {
                Route {
                    to: "/",
                    directory::DirectoryPage { layout: CardLayout::Grid }
                }
                Route {
                    to: "/list",
                    directory::DirectoryPage { layout: CardLayout::List }
                }
                Route {
                    to: "/compact",
                    directory::DirectoryPage { layout: CardLayout::Compact }
                }
                Redirect {
                    from: ""
                    to: "/"
                }
            }
        }
    })
}
