use dioxus::prelude::*;

use crate::{
    card::{self, CardLayout},
    client::{components::UserCard, uno::UnoAttributes},
    data::{UserId, ViewState},
};

#[inline_props]
pub fn DirectoryView<'a>(
    cx: Scope<'a>,
    state: &'a ViewState,
    layout: CardLayout,
    on_follow: EventHandler<'a, UserId>,
    on_delete: EventHandler<'a, UserId>,
) -> Element {
    let layout = *layout;
    cx.render(match state {
        ViewState::Idle => rsx!(div {}),
        ViewState::Loading => rsx!(
            p {
                u_text: "gray-500",
                "Loading users..."
            }
        ),
        ViewState::Failed(reason) => rsx!(
            p {
                u_text: "red-600",
                "Could not load users: {reason}"
            }
        ),
        ViewState::Loaded(directory) if directory.is_empty() => rsx!(
            p {
                u_text: "gray-500",
                "No users to show."
            }
        ),
        ViewState::Loaded(directory) => {
            let summary = card::summary(directory.len(), directory.following_count());
            let container_class = layout.container_class();
            rsx!(
                p {
                    u_text: "sm gray-500",
                    "{summary}"
                }
                div {
                    class: "{container_class}",
                    directory.users().iter().map(move |user| rsx!(
                        UserCard {
                            key: "{user.id}",
                            user: user,
                            layout: layout,
                            on_follow: move |id: UserId| on_follow.call(id),
                            on_delete: move |id: UserId| on_delete.call(id),
                        }
                    ))
                }
            )
        }
    })
}

#[cfg(test)]
mod tests {
    use dioxus_core::VirtualDom;

    use super::*;
    use crate::data::{Directory, User};

    #[derive(Props, PartialEq)]
    struct HarnessProps {
        state: ViewState,
        layout: CardLayout,
    }

    fn Harness(cx: Scope<HarnessProps>) -> Element {
        cx.render(rsx!(DirectoryView {
            state: &cx.props.state,
            layout: cx.props.layout,
            on_follow: move |_| {},
            on_delete: move |_| {},
        }))
    }

    fn render(state: ViewState, layout: CardLayout) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { state, layout });
        let _ = dom.rebuild();
        dioxus::ssr::render_vdom(&dom)
    }

    fn loaded(following: bool) -> ViewState {
        ViewState::Loaded(Directory::from_users(vec![User {
            id: 1,
            name: "A B".to_string(),
            email: "a@b.com".to_string(),
            phone: "1".to_string(),
            website: "http://a.com".to_string(),
            is_following: following,
        }]))
    }

    #[test]
    fn states_render_distinct_placeholders() {
        let loading = render(ViewState::Loading, CardLayout::Grid);
        let empty = render(ViewState::Loaded(Directory::default()), CardLayout::Grid);
        let failed = render(ViewState::Failed("boom".to_string()), CardLayout::Grid);
        let idle = render(ViewState::Idle, CardLayout::Grid);

        assert!(loading.contains("Loading users..."));
        assert!(empty.contains("No users to show."));
        assert!(!empty.contains("Loading users..."));
        assert!(failed.contains("Could not load users: boom"));
        assert!(!idle.contains("Loading users..."));
    }

    #[test]
    fn loaded_card_shows_contacts_and_controls() {
        let html = render(loaded(false), CardLayout::Grid);
        assert!(html.contains("1 user, 0 following"));
        assert!(html.contains("seed=AB"));
        assert!(html.contains("mailto:a@b.com"));
        assert!(html.contains("tel:1"));
        assert!(html.contains("href=\"http://a.com\""));
        assert!(html.contains("Follow"));
        assert!(html.contains("Delete"));
        assert!(!html.contains(card::FOLLOWING_MARKER));
        assert!(html.contains("i-tabler:mail"));
    }

    #[test]
    fn followed_user_gets_marker_and_unfollow_label() {
        let html = render(loaded(true), CardLayout::Grid);
        assert!(html.contains(card::FOLLOWING_MARKER));
        assert!(html.contains("Unfollow"));
        assert!(html.contains("1 user, 1 following"));
    }

    #[test]
    fn compact_layout_drops_icons() {
        let html = render(loaded(false), CardLayout::Compact);
        assert!(html.contains("mailto:a@b.com"));
        assert!(!html.contains("i-tabler:mail"));
    }
}
