//! Menu dispatch by view identifier.
//!
//! Menu entries carry a plain identifier (`users`, `cart`, ...). Parsing is a
//! flat lookup; an unrecognized identifier parses to `None` and the console
//! ignores it. Any view may follow any other.

use std::fmt;

use crate::BusinessConfig;

/// Identifier of the menu entry that ends the session.
pub const LOGOUT_ID: &str = "logout";

/// A view reachable from a console's menu.
pub trait ViewId: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn id(self) -> &'static str;

    fn parse(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|view| view.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Users,
    Cars,
    Bookings,
}

impl ViewId for AdminView {
    const ALL: &'static [Self] = &[Self::Users, Self::Cars, Self::Bookings];

    fn id(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Cars => "cars",
            Self::Bookings => "bookings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserView {
    Cars,
    Bookings,
    Cart,
}

impl ViewId for UserView {
    const ALL: &'static [Self] = &[Self::Cars, Self::Bookings, Self::Cart];

    fn id(self) -> &'static str {
        match self {
            Self::Cars => "cars",
            Self::Bookings => "bookings",
            Self::Cart => "cart",
        }
    }
}

/// Where a menu entry leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget<V> {
    View(V),
    /// Leave the console through the backend's `/logout` page.
    Logout,
}

impl<V: ViewId> MenuTarget<V> {
    pub fn parse(id: &str) -> Option<Self> {
        if id == LOGOUT_ID {
            return Some(Self::Logout);
        }
        V::parse(id).map(Self::View)
    }
}

/// Navigation URL of the logout entry.
pub fn logout_url(config: &BusinessConfig) -> String {
    config.logout_url()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_views() {
        assert_eq!(AdminView::parse("users"), Some(AdminView::Users));
        assert_eq!(AdminView::parse("bookings"), Some(AdminView::Bookings));
        assert_eq!(UserView::parse("cart"), Some(UserView::Cart));
        assert_eq!(UserView::parse("cars"), Some(UserView::Cars));
    }

    #[test]
    fn test_unknown_ids_are_none() {
        assert_eq!(AdminView::parse("cart"), None);
        assert_eq!(UserView::parse("users"), None);
        assert_eq!(UserView::parse(""), None);
        assert_eq!(AdminView::parse("Users"), None);
    }

    #[test]
    fn test_menu_target_logout() {
        assert_eq!(
            MenuTarget::<UserView>::parse("logout"),
            Some(MenuTarget::Logout)
        );
        assert_eq!(
            MenuTarget::<AdminView>::parse("cars"),
            Some(MenuTarget::View(AdminView::Cars))
        );
        assert_eq!(MenuTarget::<AdminView>::parse("nope"), None);

        let config = BusinessConfig::new("http://rentals.local");
        assert_eq!(logout_url(&config), "http://rentals.local/logout");
    }
}
