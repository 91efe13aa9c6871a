use std::collections::HashSet;

use log::warn;

use super::{User, UserId};

/// Ordered, id-unique collection of users owned by one directory view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    users: Vec<User>,
}

impl Directory {
    /// Builds a directory in payload order. Later entries repeating an id
    /// already seen are dropped.
    pub fn from_users(users: Vec<User>) -> Self {
        let mut seen = HashSet::with_capacity(users.len());
        let users = users
            .into_iter()
            .filter(|user| {
                let fresh = seen.insert(user.id);
                if !fresh {
                    warn!("Dropping duplicate user with ID: {}", user.id);
                }
                fresh
            })
            .collect();
        Directory { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn following_count(&self) -> usize {
        self.users.iter().filter(|user| user.is_following).count()
    }

    /// Flips the follow flag of `id`. Returns false when no such user exists.
    pub fn toggle_follow(&mut self, id: UserId) -> bool {
        match self.users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.is_following = !user.is_following;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let index = self.users.iter().position(|user| user.id == id)?;
        Some(self.users.remove(index))
    }
}

/// Lifecycle of a directory view: `Idle -> Loading -> Loaded | Failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Loaded(Directory),
    Failed(String),
}

impl ViewState {
    pub fn directory(&self) -> Option<&Directory> {
        match self {
            ViewState::Loaded(directory) => Some(directory),
            _ => None,
        }
    }

    pub fn with_follow_toggled(&self, id: UserId) -> ViewState {
        let mut next = self.clone();
        if let ViewState::Loaded(directory) = &mut next {
            directory.toggle_follow(id);
        }
        next
    }

    pub fn without_user(&self, id: UserId) -> ViewState {
        let mut next = self.clone();
        if let ViewState::Loaded(directory) = &mut next {
            directory.remove(id);
        }
        next
    }
}
