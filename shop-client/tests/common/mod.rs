//! In-memory store backend for controller tests
//!
//! Serves a fixed catalogue with the backend's paging, filtering and sort
//! rules. Individual list responses can be failed or held back until the
//! test releases them.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use shop_client::{ClientError, ClientResult, StoreApi};
use shared::{Comment, GenreChoice, ListQuery, Page, Product, Rating};
use tokio::sync::oneshot;

pub const GENRES: [(&str, &str); 2] = [("FA", "Fantasy"), ("HO", "Horror")];

/// What to do with the next list request
enum Step {
    Fail(ClientError),
    Hold(oneshot::Receiver<()>),
    HoldThenFail(oneshot::Receiver<()>, ClientError),
}

pub struct FakeStore {
    /// (genre code, product)
    catalogue: Vec<(String, Product)>,
    /// How many catalogue entries the backend currently serves
    visible: AtomicUsize,
    comments: Vec<Comment>,
    page_size: usize,
    calls: Mutex<Vec<ListQuery>>,
    script: Mutex<VecDeque<Step>>,
    genre_calls: AtomicUsize,
    genre_failures: AtomicUsize,
    cart: Mutex<Vec<String>>,
    cart_failure: Mutex<Option<ClientError>>,
    comments_failure: Mutex<Option<ClientError>>,
}

pub fn product(id: i64, title: &str, price: i64, genre: &str, author: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: Decimal::from(price),
        discount_price: None,
        genre: genre.to_string(),
        label: "Fiction".to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        description: String::new(),
        image: format!("http://127.0.0.1:8000/media/{id}.jpg"),
        publisher_info: None,
        author_bio: None,
        author_name: Some(author.to_string()),
        avg_rating: None,
        release_date: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
    }
}

impl FakeStore {
    /// `total` books, alternating between the two genres, titles "Book 01"...
    /// with descending prices, served `page_size` per page
    pub fn new(total: usize, page_size: usize) -> Self {
        let catalogue = (1..=total)
            .map(|i| {
                let (code, label) = GENRES[(i - 1) % GENRES.len()];
                let author = if i % 2 == 0 { "Shirley Jackson" } else { "Ursula Le Guin" };
                let product = product(
                    i as i64,
                    &format!("Book {i:02}"),
                    (100 - i) as i64,
                    label,
                    author,
                );
                (code.to_string(), product)
            })
            .collect();

        Self {
            catalogue,
            visible: AtomicUsize::new(usize::MAX),
            comments: Vec::new(),
            page_size,
            calls: Mutex::new(Vec::new()),
            script: Mutex::new(VecDeque::new()),
            genre_calls: AtomicUsize::new(0),
            genre_failures: AtomicUsize::new(0),
            cart: Mutex::new(Vec::new()),
            cart_failure: Mutex::new(None),
            comments_failure: Mutex::new(None),
        }
    }

    pub fn with_comment(mut self, item: &str, content: &str) -> Self {
        self.comments.push(Comment {
            user: 1,
            username: Some("reader".to_string()),
            item: item.to_string(),
            timestamp: Utc.with_ymd_and_hms(2020, 4, 2, 10, 0, 0).unwrap(),
            content: content.to_string(),
            book_title: Some(item.to_string()),
        });
        self
    }

    /// Serve only the first `n` books from now on
    pub fn shrink_to(&self, n: usize) {
        self.visible.store(n, Ordering::SeqCst);
    }

    /// Fail the next list request
    pub fn fail_next(&self, error: ClientError) {
        self.script.lock().push_back(Step::Fail(error));
    }

    /// Hold the next list request until the returned sender fires
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().push_back(Step::Hold(rx));
        tx
    }

    /// Hold the next list request, then fail it once released
    pub fn hold_then_fail_next(&self, error: ClientError) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().push_back(Step::HoldThenFail(rx, error));
        tx
    }

    /// Fail the next `n` genre choice requests
    pub fn fail_genres(&self, n: usize) {
        self.genre_failures.store(n, Ordering::SeqCst);
    }

    pub fn fail_cart(&self, error: ClientError) {
        *self.cart_failure.lock() = Some(error);
    }

    pub fn fail_comments(&self, error: ClientError) {
        *self.comments_failure.lock() = Some(error);
    }

    pub fn calls(&self) -> Vec<ListQuery> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> ListQuery {
        self.calls.lock().last().cloned().expect("no list request issued")
    }

    pub fn genre_calls(&self) -> usize {
        self.genre_calls.load(Ordering::SeqCst)
    }

    pub fn cart(&self) -> Vec<String> {
        self.cart.lock().clone()
    }

    /// Yield until `n` list requests have been received
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls.lock().len() < n {
            tokio::task::yield_now().await;
        }
    }

    fn serve(&self, query: &ListQuery) -> Page<Product> {
        let mut matching: Vec<Product> = self
            .catalogue
            .iter()
            .take(self.visible.load(Ordering::SeqCst))
            .filter(|(code, _)| query.filter.as_deref().is_none_or(|f| f == code))
            .map(|(_, p)| p.clone())
            .collect();

        match query.sort.as_deref() {
            Some("title") => matching.sort_by(|a, b| a.title.cmp(&b.title)),
            Some("price") => matching.sort_by(|a, b| a.price.cmp(&b.price)),
            _ => {}
        }

        let count = matching.len() as u64;
        let start = (query.page as usize - 1) * self.page_size;
        let results = matching.into_iter().skip(start).take(self.page_size).collect();
        Page::new(count, results)
    }
}

#[async_trait]
impl StoreApi for FakeStore {
    async fn list_products(&self, query: &ListQuery) -> ClientResult<Page<Product>> {
        self.calls.lock().push(query.clone());
        let step = self.script.lock().pop_front();
        match step {
            Some(Step::Fail(error)) => return Err(error),
            Some(Step::Hold(release)) => {
                let _ = release.await;
            }
            Some(Step::HoldThenFail(release, error)) => {
                let _ = release.await;
                return Err(error);
            }
            None => {}
        }
        Ok(self.serve(query))
    }

    async fn genre_choices(&self) -> ClientResult<Vec<GenreChoice>> {
        self.genre_calls.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .genre_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(ClientError::Status {
                status: 503,
                message: "unavailable".into(),
            });
        }
        Ok(GENRES
            .iter()
            .map(|(code, label)| GenreChoice::new(*code, *label))
            .collect())
    }

    async fn add_to_cart(&self, slug: &str) -> ClientResult<()> {
        if let Some(error) = self.cart_failure.lock().take() {
            return Err(error);
        }
        self.cart.lock().push(slug.to_string());
        Ok(())
    }

    async fn product(&self, id: i64) -> ClientResult<Product> {
        self.catalogue
            .iter()
            .map(|(_, p)| p)
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound("Not found.".into()))
    }

    async fn comments(&self, book_title: &str) -> ClientResult<Page<Comment>> {
        if let Some(error) = self.comments_failure.lock().take() {
            return Err(error);
        }
        let comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|c| c.item == book_title)
            .cloned()
            .collect();
        Ok(Page::new(comments.len() as u64, comments))
    }

    async fn ratings(&self, book_title: &str) -> ClientResult<Page<Rating>> {
        let ratings = vec![Rating {
            user: 2,
            username: None,
            item: book_title.to_string(),
            timestamp: Utc.with_ymd_and_hms(2020, 4, 3, 9, 0, 0).unwrap(),
            rating: 8,
            book_title: Some(book_title.to_string()),
        }];
        Ok(Page::new(1, ratings))
    }

    async fn author_products(&self, author_name: &str) -> ClientResult<Vec<Product>> {
        Ok(self
            .catalogue
            .iter()
            .map(|(_, p)| p)
            .filter(|p| p.author_name.as_deref() == Some(author_name))
            .cloned()
            .collect())
    }
}
