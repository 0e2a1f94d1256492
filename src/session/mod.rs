//! Signed-in state for one run of the portal front-end.
//!
//! A `Session` is created at boot and handed to the components that need
//! it; nothing reads it through a global.

pub mod route_guard;

pub use route_guard::{RouteDecision, RouteGuard};

use crate::schemas::{Category, SearchResult};
use anyhow::{Result, bail};
use chrono::{DateTime, Local};
use clap::ValueEnum;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Admin,
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

impl FavoriteChange {
    pub fn message(&self) -> &'static str {
        match self {
            FavoriteChange::Added => "Added to favorites",
            FavoriteChange::Removed => "Removed from favorites",
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    signed_in_at: Option<DateTime<Local>>,
    favorites: BTreeMap<String, Category>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        let mut session = Self::anonymous();
        session.sign_in(user);
        session
    }

    pub fn sign_in(&mut self, user: User) {
        tracing::info!(email = %user.email, role = ?user.role, "session started");
        self.user = Some(user);
        self.signed_in_at = Some(Local::now());
    }

    /// Ends the session and drops everything tied to the user.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(email = %user.email, "session ended");
        }
        self.signed_in_at = None;
        self.favorites.clear();
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Local>> {
        self.signed_in_at
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains_key(id)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn favorite_ids(&self) -> impl Iterator<Item = &str> {
        self.favorites.keys().map(String::as_str)
    }

    pub fn toggle_favorite(&mut self, result: &SearchResult) -> Result<FavoriteChange> {
        if self.user.is_none() {
            bail!("Please sign in to save items to your favorites");
        }
        if !result.category.is_favoritable() {
            bail!("{} entries cannot be saved to favorites", result.category);
        }

        let change = if self.favorites.remove(&result.id).is_some() {
            FavoriteChange::Removed
        } else {
            self.favorites.insert(result.id.clone(), result.category);
            FavoriteChange::Added
        };
        tracing::debug!(id = %result.id, ?change, "favorite toggled");
        Ok(change)
    }

    /// One-line summary for the location bar
    pub fn status_line(&self) -> String {
        match (&self.user, self.signed_in_at) {
            (Some(user), Some(at)) => format!(
                "{} ({:?}) since {}",
                user.email,
                user.role,
                at.format("%H:%M")
            ),
            (Some(user), None) => user.email.clone(),
            _ => "Not signed in".to_string(),
        }
    }
}
