#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use short_link_service::application::services::{LinkService, LinkSettings};
use short_link_service::domain::entities::{NewShortLink, ShortLink};
use short_link_service::domain::errors::RepositoryError;
use short_link_service::domain::repositories::LinkRepository;
use short_link_service::routes::app_router;
use short_link_service::state::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_BASE_URL: &str = "http://sho.rt";

/// `LinkRepository` backed by a map, so handler tests run without PostgreSQL.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<HashMap<String, ShortLink>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Inserts a link directly, bypassing the service.
    pub fn seed(&self, code: &str, url: &str, expires_at: Option<DateTime<Utc>>) {
        let mut links = self.links.lock().unwrap();
        let id = links.len() as i64 + 1;
        links.insert(
            code.to_string(),
            ShortLink::new(
                id,
                url.to_string(),
                code.to_string(),
                0,
                Utc::now(),
                expires_at,
            ),
        );
    }

    pub fn get(&self, code: &str) -> Option<ShortLink> {
        self.links.lock().unwrap().get(code).cloned()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn clicks(&self, code: &str) -> i64 {
        self.get(code).map(|l| l.click_count).unwrap_or_default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, RepositoryError> {
        let mut links = self.links.lock().unwrap();
        if links.contains_key(&new_link.short_code) {
            return Err(RepositoryError::Duplicate(new_link.short_code));
        }

        let link = ShortLink::new(
            links.len() as i64 + 1,
            new_link.original_url,
            new_link.short_code.clone(),
            0,
            Utc::now(),
            new_link.expires_at,
        );
        links.insert(new_link.short_code, link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, RepositoryError> {
        Ok(self.links.lock().unwrap().get(code).cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), RepositoryError> {
        let mut links = self.links.lock().unwrap();
        match links.get_mut(code) {
            Some(link) => {
                link.click_count += 1;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(code.to_string())),
        }
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, RepositoryError> {
        Ok(self.links.lock().unwrap().contains_key(code))
    }
}

pub fn create_test_state(repo: Arc<InMemoryLinkRepository>) -> AppState {
    let repository: Arc<dyn LinkRepository> = repo;
    let link_service = LinkService::new(repository, LinkSettings::new(TEST_BASE_URL, 6));

    AppState::new(Arc::new(link_service))
}

/// Full application, including path normalization, behind a test server.
pub fn create_test_server(repo: Arc<InMemoryLinkRepository>) -> TestServer {
    let app = app_router(create_test_state(repo));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Polls until the click counter for `code` reaches `expected` or a second passes.
pub async fn wait_for_clicks(repo: &InMemoryLinkRepository, code: &str, expected: i64) -> i64 {
    for _ in 0..100 {
        let clicks = repo.clicks(code);
        if clicks >= expected {
            return clicks;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    repo.clicks(code)
}
