//! 테스트용 인메모리 리포지토리

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::AuthProvider;
use crate::domain::entities::contents::content::Content;
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::contents::{ContentFilter, ContentRepository};
use crate::repositories::users::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn with_users(users: Vec<User>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.users.lock().unwrap();
            for user in users {
                map.insert(user.id.clone(), user);
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = email.trim().to_lowercase();
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_oauth(&self, provider: AuthProvider, oauth_id: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.oauth_provider == Some(provider) && user.oauth_id.as_deref() == Some(oauth_id))
            .cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string())),
        }
    }
}

#[derive(Default)]
pub struct InMemoryContentRepository {
    contents: Mutex<Vec<Content>>,
}

impl InMemoryContentRepository {
    pub fn with_contents(contents: Vec<Content>) -> Self {
        Self {
            contents: Mutex::new(contents),
        }
    }

    pub fn get(&self, id: &str) -> Option<Content> {
        self.contents
            .lock()
            .unwrap()
            .iter()
            .find(|content| content.id == id)
            .cloned()
    }

    pub fn all(&self) -> Vec<Content> {
        self.contents.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Content>> {
        Ok(self.get(id))
    }

    async fn find(&self, filter: &ContentFilter, offset: u64, limit: u64) -> AppResult<Vec<Content>> {
        let mut matched: Vec<Content> = self
            .contents
            .lock()
            .unwrap()
            .iter()
            .filter(|content| filter.matches(content))
            .cloned()
            .collect();

        if filter.is_search() {
            matched.sort_by(|a, b| {
                b.view_count
                    .cmp(&a.view_count)
                    .then(b.created_at.cmp(&a.created_at))
            });
        } else {
            matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }

        Ok(matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: &ContentFilter) -> AppResult<u64> {
        Ok(self
            .contents
            .lock()
            .unwrap()
            .iter()
            .filter(|content| filter.matches(content))
            .count() as u64)
    }

    async fn create(&self, content: Content) -> AppResult<Content> {
        self.contents.lock().unwrap().push(content.clone());
        Ok(content)
    }

    async fn update(&self, content: Content) -> AppResult<Content> {
        let mut contents = self.contents.lock().unwrap();
        match contents.iter_mut().find(|existing| existing.id == content.id) {
            Some(existing) => {
                *existing = content.clone();
                Ok(content)
            }
            None => Err(AppError::NotFound("콘텐츠를 찾을 수 없습니다".to_string())),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut contents = self.contents.lock().unwrap();
        let before = contents.len();
        contents.retain(|content| content.id != id);
        Ok(contents.len() < before)
    }

    async fn increment_view_count(&self, id: &str) -> AppResult<bool> {
        let mut contents = self.contents.lock().unwrap();
        match contents.iter_mut().find(|content| content.id == id) {
            Some(content) => {
                content.increment_view_count();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
