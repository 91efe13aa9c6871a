use dioxus::prelude::*;

use crate::{
    avatar::avatar_url,
    card::{self, CardLayout, FOLLOWING_MARKER},
    client::{components::Icon, uno::UnoAttributes},
    config::AVATAR_URL,
    data::{User, UserId},
};

#[inline_props]
pub fn UserCard<'a>(
    cx: Scope<'a>,
    user: &'a User,
    layout: CardLayout,
    on_follow: EventHandler<'a, UserId>,
    on_delete: EventHandler<'a, UserId>,
) -> Element {
    let id = user.id;
    let card_class = layout.card_class();
    let size = layout.avatar_size();
    let show_icons = layout.shows_icons();
    let avatar = avatar_url(AVATAR_URL, &user.name).map(|src| {
        rsx!(img {
            src: "{src}",
            alt: "Avatar for {user.name}",
            width: "{size}",
            height: "{size}",
            u_border: "rounded-full",
        })
    });
    let marker = if user.is_following {
        Some(rsx!(span {
            u_p: "l-1",
            u_text: "amber-500",
            "{FOLLOWING_MARKER}"
        }))
    } else {
        None
    };
    let follow_label = card::follow_label(user.is_following);
    let follow_icon_name = if user.is_following {
        "i-tabler:user-minus"
    } else {
        "i-tabler:user-plus"
    };
    let follow_icon = show_icons.then(|| rsx!(Icon { name: follow_icon_name }));
    let delete_icon = show_icons.then(|| rsx!(Icon { name: "i-tabler:trash" }));

    cx.render(rsx!(
        div {
            class: "{card_class}",
            div {
                u_text: "center",
                avatar
                p {
                    u_m: "t-2",
                    u_text: "lg",
                    "{user.name}"
                    marker
                }
            }
            div {
                u_flex: "1",
                ContactRow {
                    icon: "i-tabler:mail",
                    show_icon: show_icons,
                    href: card::mailto_href(&user.email),
                    text: &user.email,
                }
                ContactRow {
                    icon: "i-tabler:phone",
                    show_icon: show_icons,
                    href: card::tel_href(&user.phone),
                    text: &user.phone,
                }
                ContactRow {
                    icon: "i-tabler:world",
                    show_icon: show_icons,
                    href: card::website_href(&user.website).to_string(),
                    text: &user.website,
                }
            }
            div {
                u_flex: "~ row",
                u_justify: "between",
                u_m: "t-auto",
                button {
                    u_p: "x-3 y-1",
                    u_border: "rounded",
                    u_bg: "sky-600 hover:sky-700",
                    u_text: "white",
                    u_cursor: "pointer",
                    onclick: move |_| on_follow.call(id),
                    follow_icon
                    "{follow_label}"
                }
                button {
                    u_p: "x-3 y-1",
                    u_border: "rounded",
                    u_bg: "red-600 hover:red-700",
                    u_text: "white",
                    u_cursor: "pointer",
                    onclick: move |_| on_delete.call(id),
                    delete_icon
                    "Delete"
                }
            }
        }
    ))
}

#[inline_props]
fn ContactRow<'a>(
    cx: Scope<'a>,
    icon: &'static str,
    show_icon: bool,
    href: String,
    text: &'a str,
) -> Element {
    let icon_node = if *show_icon {
        Some(rsx!(Icon { name: *icon }))
    } else {
        None
    };
    cx.render(rsx!(
        div {
            u_p: "y-1",
            u_border: "b",
            u_text: "center",
            icon_node
            a {
                u_m: "l-2",
                href: "{href}",
                "{text}"
            }
        }
    ))
}
