//! Entity repositories over the JSON store
//!
//! Each repository owns one collection key. Every write materializes the
//! whole collection, mutates it in memory, and rewrites the blob; there is
//! no delta update and no isolation between concurrent writers.

use crate::domain::{Application, Job, JobSort, User};
use crate::error::Result;
use crate::infrastructure::JsonStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record stored in a named collection, keyed by its id
pub trait Record: Serialize + DeserializeOwned + Clone {
    const KEY: &'static str;

    fn id(&self) -> &str;
}

impl Record for User {
    const KEY: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Job {
    const KEY: &'static str = "jobs";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Application {
    const KEY: &'static str = "applications";

    fn id(&self) -> &str {
        &self.id
    }
}

fn load_all<T: Record>(store: &JsonStore) -> Result<Vec<T>> {
    Ok(store.load_json(T::KEY)?.unwrap_or_default())
}

fn upsert<T: Record>(store: &JsonStore, item: T) -> Result<()> {
    let mut items = load_all::<T>(store)?;

    match items.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }

    store.save_json(T::KEY, &items)
}

fn delete_by_id<T: Record>(store: &JsonStore, id: &str) -> Result<()> {
    let mut items = load_all::<T>(store)?;
    items.retain(|item| item.id() != id);
    store.save_json(T::KEY, &items)
}

fn find_by_id<T: Record>(store: &JsonStore, id: &str) -> Result<Option<T>> {
    Ok(load_all::<T>(store)?.into_iter().find(|item| item.id() == id))
}

/// CRUD access to the users collection
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: JsonStore,
}

impl UserRepository {
    pub fn new(store: JsonStore) -> Self {
        UserRepository { store }
    }

    pub fn load_all(&self) -> Result<Vec<User>> {
        load_all(&self.store)
    }

    pub fn upsert(&self, user: User) -> Result<()> {
        upsert(&self.store, user)
    }

    pub fn delete_by_id(&self, id: &str) -> Result<()> {
        delete_by_id::<User>(&self.store, id)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        find_by_id(&self.store, id)
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|user| user.email == email))
    }
}

/// CRUD access to the jobs collection
#[derive(Debug, Clone)]
pub struct JobRepository {
    store: JsonStore,
}

impl JobRepository {
    pub fn new(store: JsonStore) -> Self {
        JobRepository { store }
    }

    pub fn load_all(&self) -> Result<Vec<Job>> {
        load_all(&self.store)
    }

    pub fn upsert(&self, job: Job) -> Result<()> {
        upsert(&self.store, job)
    }

    pub fn delete_by_id(&self, id: &str) -> Result<()> {
        delete_by_id::<Job>(&self.store, id)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Job>> {
        find_by_id(&self.store, id)
    }

    pub fn by_employer(&self, employer_id: &str) -> Result<Vec<Job>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|job| job.employer_id == employer_id)
            .collect())
    }

    pub fn featured(&self) -> Result<Vec<Job>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|job| job.featured)
            .collect())
    }

    /// The n most recently posted jobs, newest first
    pub fn latest(&self, n: usize) -> Result<Vec<Job>> {
        let mut jobs = self.load_all()?;
        crate::domain::query::sort_jobs(&mut jobs, JobSort::Newest);
        jobs.truncate(n);
        Ok(jobs)
    }
}

/// CRUD access to the applications collection
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    store: JsonStore,
}

impl ApplicationRepository {
    pub fn new(store: JsonStore) -> Self {
        ApplicationRepository { store }
    }

    pub fn load_all(&self) -> Result<Vec<Application>> {
        load_all(&self.store)
    }

    pub fn upsert(&self, application: Application) -> Result<()> {
        upsert(&self.store, application)
    }

    pub fn delete_by_id(&self, id: &str) -> Result<()> {
        delete_by_id::<Application>(&self.store, id)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Application>> {
        find_by_id(&self.store, id)
    }

    pub fn by_job(&self, job_id: &str) -> Result<Vec<Application>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|app| app.job_id == job_id)
            .collect())
    }

    pub fn by_candidate(&self, candidate_id: &str) -> Result<Vec<Application>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|app| app.candidate_id == candidate_id)
            .collect())
    }

    /// Query-time guard for duplicate applications. Nothing at the storage
    /// layer prevents two applications for the same (job, candidate) pair.
    pub fn has_applied(&self, job_id: &str, candidate_id: &str) -> Result<bool> {
        Ok(self
            .load_all()?
            .iter()
            .any(|app| app.job_id == job_id && app.candidate_id == candidate_id))
    }
}
