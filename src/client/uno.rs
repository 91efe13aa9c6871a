use dioxus_core::*;
use std::fmt::Arguments;

macro_rules! uno_attribute {
    (
        $(
            $(#[$attr:meta])*
            $name:ident: $lit:literal;
        )*
    ) => {
        $(
            $(#[$attr])*
            fn $name<'a>(&self, cx: NodeFactory<'a>, val: Arguments) -> Attribute<'a> {
                cx.attr($lit, val, None, false)
            }
        )*
    };
}

/// UnoCSS attributify attributes usable directly in `rsx!`.
pub trait UnoAttributes {
    uno_attribute! {
        u_font: "u-font";
        u_text: "u-text";
        u_bg: "u-bg";
        u_border: "u-border";
        u_container: "u-container";
        u_p: "u-p";
        u_m: "u-m";
        u_w: "u-w";
        u_h: "u-h";
        u_flex: "u-flex";
        u_justify: "u-justify";
        u_align: "u-align";
        u_display: "u-display";
        u_shadow: "u-shadow";
        u_transition: "u-transition";
        u_cursor: "u-cursor";
    }
}

impl<T: DioxusElement> UnoAttributes for T {}
