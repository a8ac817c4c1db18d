//! Static literals the contract suites send and expect.

/// Default user id.
pub const DEFAULT_USER_ID: u64 = 1;
/// Default post id.
pub const DEFAULT_POST_ID: u64 = 1;
/// Post whose comments are listed.
pub const DEFAULT_COMMENT_POST_ID: u64 = 1;
/// Default album id.
pub const DEFAULT_ALBUM_ID: u64 = 1;
/// Album whose photos are listed.
pub const DEFAULT_PHOTO_ALBUM_ID: u64 = 1;
/// Default photo id.
pub const DEFAULT_PHOTO_ID: u64 = 1;
/// Default todo id.
pub const DEFAULT_TODO_ID: u64 = 1;
/// User whose todos are listed.
pub const DEFAULT_TODO_USER_ID: u64 = 1;

/// An id no resource has.
pub const INVALID_ID: u64 = 99_999;

/// Upper bound for listing all posts, in milliseconds.
pub const POSTS_LIST_MAX_MS: u64 = 2000;

/// A username the sandbox data set always contains.
pub const KNOWN_USERNAME: &str = "Bret";

// Posts

/// Title of the post the create case sends.
pub const POST_TITLE: &str = "Test Post Title";
/// Body of the post the create case sends.
pub const POST_BODY: &str = "This is a test post body created by automation";
/// Title the replace case sends.
pub const UPDATED_POST_TITLE: &str = "Updated Post Title";
/// Body the replace case sends.
pub const UPDATED_POST_BODY: &str = "This is the updated post body";

// Comments

/// Author name of a new comment.
pub const COMMENT_NAME: &str = "Test Comment Author";
/// Author email of a new comment.
pub const COMMENT_EMAIL: &str = "test@example.com";
/// Body of a new comment.
pub const COMMENT_BODY: &str = "This is a test comment created by automation";

// Albums

/// Title of a new album.
pub const ALBUM_TITLE: &str = "Test Album Title";
/// Album title the replace case sends.
pub const UPDATED_ALBUM_TITLE: &str = "Updated Album Title";

// Photos

/// Title of a new photo.
pub const PHOTO_TITLE: &str = "Test Photo Title";
/// Image URL of a new photo.
pub const PHOTO_URL: &str = "https://via.placeholder.com/600/92c952";
/// Thumbnail URL of a new photo.
pub const PHOTO_THUMBNAIL_URL: &str = "https://via.placeholder.com/150/92c952";
/// Photo title the replace case sends.
pub const UPDATED_PHOTO_TITLE: &str = "Updated Photo Title";
/// Image URL the replace case sends.
pub const UPDATED_PHOTO_URL: &str = "https://via.placeholder.com/600/771796";
/// Thumbnail URL the replace case sends.
pub const UPDATED_PHOTO_THUMBNAIL_URL: &str = "https://via.placeholder.com/150/771796";

// Todos

/// Title of a new todo.
pub const TODO_TITLE: &str = "Test Todo Title";
/// Completion flag of a new todo.
pub const TODO_COMPLETED: bool = false;
/// Todo title the replace case sends.
pub const UPDATED_TODO_TITLE: &str = "Updated Todo Title";
/// Completion flag the replace case sends.
pub const UPDATED_TODO_COMPLETED: bool = true;

// Users

/// Username of a new user.
pub const USER_NAME: &str = "testuser";
/// Email of a new user.
pub const USER_EMAIL: &str = "testuser@example.com";
/// Phone number of a new user.
pub const USER_PHONE: &str = "1234567890";
/// Website of a new user.
pub const USER_WEBSITE: &str = "https://example.com";
/// Username the replace case sends.
pub const UPDATED_USER_NAME: &str = "updateduser";
/// Email the replace case sends.
pub const UPDATED_USER_EMAIL: &str = "updateduser@example.com";
/// Phone number the replace case sends.
pub const UPDATED_USER_PHONE: &str = "0987654321";
/// Website the replace case sends.
pub const UPDATED_USER_WEBSITE: &str = "https://updated.example.com";
