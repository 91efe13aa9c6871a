use dioxus::prelude::*;

use crate::client::uno::UnoAttributes;

/// Iconify icon rendered by UnoCSS from its class, e.g. `i-tabler:mail`.
#[inline_props]
pub fn Icon(cx: Scope, name: &'static str) -> Element {
    cx.render(rsx!(
        span {
            class: "{name}",
            u_display: "inline-block",
            u_align: "middle",
        }
    ))
}
