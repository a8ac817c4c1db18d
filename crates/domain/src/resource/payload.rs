//! Typed JSON payloads, one per resource.
//!
//! `id` is optional everywhere: it is omitted when creating and present on
//! everything the server sends back. Unknown fields (such as a user's
//! address) are ignored on decode.

use serde::{Deserialize, Serialize};

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Server-assigned id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Author
    pub user_id: u64,
    /// Title
    pub title: String,
    /// Body text
    pub body: String,
}

impl Post {
    /// Creates a post payload without an id.
    pub fn new(user_id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Sets the id (builder pattern).
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Server-assigned id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Post the comment belongs to
    pub post_id: u64,
    /// Author name
    pub name: String,
    /// Author email
    pub email: String,
    /// Body text
    pub body: String,
}

impl Comment {
    /// Creates a comment payload without an id.
    pub fn new(
        post_id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            post_id,
            name: name.into(),
            email: email.into(),
            body: body.into(),
        }
    }
}

/// A photo album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Server-assigned id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owner
    pub user_id: u64,
    /// Title
    pub title: String,
}

impl Album {
    /// Creates an album payload without an id.
    pub fn new(user_id: u64, title: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id,
            title: title.into(),
        }
    }

    /// Sets the id (builder pattern).
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// A photo inside an album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Server-assigned id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Album the photo belongs to
    pub album_id: u64,
    /// Title
    pub title: String,
    /// Full-size image URL
    pub url: String,
    /// Thumbnail URL
    pub thumbnail_url: String,
}

impl Photo {
    /// Creates a photo payload without an id.
    pub fn new(
        album_id: u64,
        title: impl Into<String>,
        url: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            album_id,
            title: title.into(),
            url: url.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }

    /// Sets the id (builder pattern).
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// A todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owner
    pub user_id: u64,
    /// Title
    pub title: String,
    /// Completion flag
    pub completed: bool,
}

impl Todo {
    /// Creates a todo payload without an id.
    pub fn new(user_id: u64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: None,
            user_id,
            title: title.into(),
            completed,
        }
    }

    /// Sets the id (builder pattern).
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Website
    pub website: String,
}

impl User {
    /// Creates a user payload without an id or full name.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: None,
            username: username.into(),
            email: email.into(),
            phone: phone.into(),
            website: website.into(),
        }
    }

    /// Sets the id (builder pattern).
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}
