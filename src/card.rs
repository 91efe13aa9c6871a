pub const FOLLOWING_MARKER: &str = "\u{2605}";

/// Presentation variant of the directory. All variants share the same card
/// contract and only differ in arrangement and icon usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardLayout {
    #[default]
    Grid,
    List,
    Compact,
}

impl CardLayout {
    pub const ALL: [CardLayout; 3] = [CardLayout::Grid, CardLayout::List, CardLayout::Compact];

    pub fn route(self) -> &'static str {
        match self {
            CardLayout::Grid => "/",
            CardLayout::List => "/list",
            CardLayout::Compact => "/compact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardLayout::Grid => "Grid",
            CardLayout::List => "List",
            CardLayout::Compact => "Compact",
        }
    }

    pub fn container_class(self) -> &'static str {
        match self {
            CardLayout::Grid => "flex flex-wrap justify-center gap-3 m-5",
            CardLayout::List => "flex flex-col items-center gap-3 m-5",
            CardLayout::Compact => "grid grid-cols-[repeat(auto-fill,minmax(16rem,1fr))] gap-2 m-3",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            CardLayout::Grid => "user-card flex flex-col w-100 h-100 m-5 p-4 border rounded shadow-sm",
            CardLayout::List => "user-card flex flex-row items-center w-full max-w-3xl p-4 border rounded shadow-sm",
            CardLayout::Compact => "user-card flex flex-col p-2 border rounded text-sm",
        }
    }

    pub fn avatar_size(self) -> u32 {
        match self {
            CardLayout::Grid | CardLayout::List => 100,
            CardLayout::Compact => 48,
        }
    }

    pub fn shows_icons(self) -> bool {
        !matches!(self, CardLayout::Compact)
    }
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

pub fn tel_href(phone: &str) -> String {
    format!("tel:{phone}")
}

/// Used verbatim; a value without a scheme becomes a relative link.
pub fn website_href(website: &str) -> &str {
    website
}

pub fn follow_label(is_following: bool) -> &'static str {
    if is_following {
        "Unfollow"
    } else {
        "Follow"
    }
}

pub fn summary(total: usize, following: usize) -> String {
    let noun = if total == 1 { "user" } else { "users" };
    format!("{total} {noun}, {following} following")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_hrefs() {
        assert_eq!(mailto_href("Sincere@april.biz"), "mailto:Sincere@april.biz");
        assert_eq!(tel_href("1-770-736-8031 x56442"), "tel:1-770-736-8031 x56442");
        assert_eq!(website_href("hildegard.org"), "hildegard.org");
        assert_eq!(website_href("http://a.com"), "http://a.com");
    }

    #[test]
    fn follow_label_reflects_state() {
        assert_eq!(follow_label(false), "Follow");
        assert_eq!(follow_label(true), "Unfollow");
    }

    #[test]
    fn layouts_have_distinct_routes() {
        let routes: Vec<_> = CardLayout::ALL.iter().map(|layout| layout.route()).collect();
        assert_eq!(routes, vec!["/", "/list", "/compact"]);
        assert!(!CardLayout::Compact.shows_icons());
        assert!(CardLayout::Grid.shows_icons());
    }

    #[test]
    fn summary_pluralizes() {
        assert_eq!(summary(1, 0), "1 user, 0 following");
        assert_eq!(summary(10, 2), "10 users, 2 following");
    }
}
