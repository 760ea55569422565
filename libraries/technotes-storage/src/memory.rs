use async_trait::async_trait;
use std::sync::Arc;
use technotes_core::{error::Result, types::*, NoteStore, NotesError, UserStore};
use tokio::sync::RwLock;

/// In-memory store for tests and throwaway servers.
///
/// Records keep insertion order, which is also the order `find_all` returns.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<Vec<User>>>,
    notes: Arc<RwLock<Vec<Note>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<PublicUser>> {
        let users = self.users.read().await;
        Ok(users.iter().cloned().map(PublicUser::from).collect())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_other_with_username(
        &self,
        username: &str,
        exclude: &UserId,
    ) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.username == username && &u.id != exclude)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<Option<User>> {
        let user = User::from_new(UserId::generate(), user);
        self.users.write().await.push(user.clone());
        Ok(Some(user))
    }

    async fn save(&self, user: &User) -> Result<User> {
        let mut users = self.users.write().await;
        let stored = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| NotesError::not_found("User", user.id.as_str()))?;
        *stored = user.clone();
        Ok(stored.clone())
    }

    async fn delete_one(&self, id: &UserId) -> Result<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| &u.id != id);
        Ok(users.len() < before)
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn find_one_by_user(&self, user_id: &UserId) -> Result<Option<Note>> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| &n.user == user_id).cloned())
    }

    async fn create_note(&self, note: CreateNote) -> Result<Note> {
        let now = chrono::Utc::now().to_rfc3339();
        let note = Note {
            id: NoteId::generate(),
            user: note.user,
            title: note.title,
            text: note.text,
            completed: false,
            created_at: now.clone(),
            updated_at: now,
        };
        self.notes.write().await.push(note.clone());
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "hash".to_string(),
            roles: vec!["Employee".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let store = MemoryStore::new();

        let created = store.create(new_user("alice")).await.unwrap().unwrap();
        assert!(created.active);

        let by_name = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);

        let by_id = store.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");

        assert!(store.find_by_username("Alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_other_with_username() {
        let store = MemoryStore::new();
        let first = store.create(new_user("dup")).await.unwrap().unwrap();
        let second = store.create(new_user("dup")).await.unwrap().unwrap();

        let other = store
            .find_other_with_username("dup", &first.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(other.id, second.id);

        store.delete_one(&second.id).await.unwrap();
        assert!(store
            .find_other_with_username("dup", &first.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_save_unknown_user_fails() {
        let store = MemoryStore::new();
        let ghost = User::from_new(UserId::new("ghost"), new_user("ghost"));

        assert!(store.save(&ghost).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let store = MemoryStore::new();
        let user = store.create(new_user("bob")).await.unwrap().unwrap();

        assert!(store.delete_one(&user.id).await.unwrap());
        assert!(!store.delete_one(&user.id).await.unwrap());
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_note_by_owner() {
        let store = MemoryStore::new();
        let user = store.create(new_user("carol")).await.unwrap().unwrap();

        assert!(store.find_one_by_user(&user.id).await.unwrap().is_none());

        store
            .create_note(CreateNote {
                user: user.id.clone(),
                title: "Fix printer".to_string(),
                text: "Tray 2 jams".to_string(),
            })
            .await
            .unwrap();

        let note = store.find_one_by_user(&user.id).await.unwrap().unwrap();
        assert_eq!(note.title, "Fix printer");
        assert!(!note.completed);
    }
}
