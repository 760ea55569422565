//! TechNotes Core
//!
//! Storage-agnostic types, ports, and error handling for the TechNotes
//! user account service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `PublicUser`, `Note`, and their ids
//! - **Storage Ports**: `UserStore` and `NoteStore`, implemented by `technotes-storage`
//! - **Error Handling**: Unified `NotesError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use technotes_core::types::{NewUser, PublicUser, User, UserId};
//!
//! let user = User::from_new(
//!     UserId::generate(),
//!     NewUser {
//!         username: "alice".to_string(),
//!         password: "$2b$10$hash".to_string(),
//!         roles: vec!["Employee".to_string()],
//!     },
//! );
//! assert!(user.active);
//!
//! let public = PublicUser::from(user);
//! assert_eq!(public.username, "alice");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{NotesError, Result};
pub use storage::{NoteStore, UserStore};

pub use types::{CreateNote, NewUser, Note, NoteId, PublicUser, User, UserId};
