//! Resource catalogue of the target API.
//!
//! Six collections, each reachable at `/{name}` and `/{name}/{id}`, some
//! filterable by the id of their owner.

mod payload;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use payload::{Album, Comment, Photo, Post, Todo, User};

use crate::error::DomainResult;
use crate::request::ApiRequest;

/// A resource collection exposed by the target API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// `/posts`, owned by users
    Posts,
    /// `/comments`, owned by posts
    Comments,
    /// `/albums`, owned by users
    Albums,
    /// `/photos`, owned by albums
    Photos,
    /// `/todos`, owned by users
    Todos,
    /// `/users`
    Users,
}

impl Resource {
    /// Returns the collection name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Comments => "comments",
            Self::Albums => "albums",
            Self::Photos => "photos",
            Self::Todos => "todos",
            Self::Users => "users",
        }
    }

    /// Returns the collection path, e.g. `/posts`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Posts => "/posts",
            Self::Comments => "/comments",
            Self::Albums => "/albums",
            Self::Photos => "/photos",
            Self::Todos => "/todos",
            Self::Users => "/users",
        }
    }

    /// Returns the path of one item, e.g. `/posts/1`.
    #[must_use]
    pub fn item_path(self, id: u64) -> String {
        format!("{}/{id}", self.path())
    }

    /// Returns the query key that filters this collection by its owner.
    #[must_use]
    pub const fn owner_key(self) -> Option<&'static str> {
        match self {
            Self::Posts | Self::Albums | Self::Todos => Some("userId"),
            Self::Comments => Some("postId"),
            Self::Photos => Some("albumId"),
            Self::Users => None,
        }
    }

    /// `GET /{name}`
    #[must_use]
    pub fn list(self) -> ApiRequest {
        ApiRequest::get(self.path())
    }

    /// `GET /{name}?{owner_key}={owner_id}`, or `None` for unowned collections.
    #[must_use]
    pub fn list_owned_by(self, owner_id: u64) -> Option<ApiRequest> {
        self.owner_key()
            .map(|key| ApiRequest::get(self.path()).query(key, owner_id))
    }

    /// `GET /{name}/{id}`
    #[must_use]
    pub fn fetch(self, id: u64) -> ApiRequest {
        ApiRequest::get(self.item_path(id))
    }

    /// `POST /{name}` with a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded.
    pub fn create<T: Serialize>(self, payload: &T) -> DomainResult<ApiRequest> {
        ApiRequest::post(self.path()).json(payload)
    }

    /// `PUT /{name}/{id}` with a full replacement payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded.
    pub fn replace<T: Serialize>(self, id: u64, payload: &T) -> DomainResult<ApiRequest> {
        ApiRequest::put(self.item_path(id)).json(payload)
    }

    /// `DELETE /{name}/{id}`
    #[must_use]
    pub fn remove(self, id: u64) -> ApiRequest {
        ApiRequest::delete(self.item_path(id))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paths() {
        assert_eq!(Resource::Posts.path(), "/posts");
        assert_eq!(Resource::Users.item_path(99_999), "/users/99999");
        for resource in [
            Resource::Posts,
            Resource::Comments,
            Resource::Albums,
            Resource::Photos,
            Resource::Todos,
            Resource::Users,
        ] {
            assert_eq!(resource.path(), format!("/{}", resource.name()));
        }
    }

    #[test]
    fn test_owner_filters() {
        let request = Resource::Photos.list_owned_by(1).unwrap();
        let param = request.query_params().iter().next().unwrap();
        assert_eq!((param.key.as_str(), param.value.as_str()), ("albumId", "1"));

        assert_eq!(Resource::Comments.owner_key(), Some("postId"));
        assert!(Resource::Users.list_owned_by(1).is_none());
    }

    #[test]
    fn test_verbs() {
        assert_eq!(Resource::Todos.remove(1).method(), HttpMethod::Delete);
        assert_eq!(Resource::Todos.remove(1).path(), "/todos/1");

        let album = Album::new(1, "Test Album Title");
        let create = Resource::Albums.create(&album).unwrap();
        assert_eq!(create.method(), HttpMethod::Post);
        assert_eq!(
            create.body(),
            Some(&serde_json::json!({"userId": 1, "title": "Test Album Title"}))
        );

        let replace = Resource::Albums.replace(1, &album.with_id(1)).unwrap();
        assert_eq!(replace.method(), HttpMethod::Put);
        assert_eq!(replace.body().unwrap()["id"], 1);
    }
}
