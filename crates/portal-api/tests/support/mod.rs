//! In-memory store implementations for router-level tests.
//!
//! One shared `MemDb` backs every store so joins and cascades behave like
//! the real schema: enrollment inserts are check-and-insert under a single
//! lock (the stand-in for the unique pair constraint), user deletes cascade
//! into enrollments and clear course ownership.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;

use portal_api::{ApiConfig, AppState};
use portal_models::{
    Collection, Course, DomainError, DomainResult, EnrolledCourse, Enrollment, Resume, User,
};
use portal_services::{CollectionStore, CourseStore, EnrollmentStore, ResumeStore, UserStore};
use portal_uploads::{ResumeFileStore, StorageBackend};

#[derive(Default)]
pub struct MemDb {
    next_id: i64,
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub collections: Vec<Collection>,
    pub enrollments: Vec<Enrollment>,
    pub resumes: Vec<Resume>,
}

impl MemDb {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn owner_fields(&self, user_id: Option<i64>) -> (Option<String>, Option<String>) {
        let owner = user_id.and_then(|id| self.users.iter().find(|u| u.id == id));
        (
            owner.map(|u| u.name.clone()),
            owner.map(|u| u.email.clone()),
        )
    }
}

pub type SharedDb = Arc<Mutex<MemDb>>;

pub struct MemUserStore(pub SharedDb);

#[async_trait]
impl UserStore for MemUserStore {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let db = self.0.lock().unwrap();
        let mut users = db.users.clone();
        users.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let db = self.0.lock().unwrap();
        Ok(db.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let db = self.0.lock().unwrap();
        Ok(db.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, name: &str, email: &str, age: Option<i32>) -> DomainResult<User> {
        let mut db = self.0.lock().unwrap();
        if db.users.iter().any(|u| u.email == email) {
            return Err(DomainError::conflict("User with this email already exists"));
        }
        let user = User {
            id: db.next_id(),
            name: name.to_string(),
            email: email.to_string(),
            age,
            created_at: Utc::now(),
        };
        db.users.push(user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: Option<i32>,
    ) -> DomainResult<User> {
        let mut db = self.0.lock().unwrap();
        if db.users.iter().any(|u| u.email == email && u.id != id) {
            return Err(DomainError::conflict("User with this email already exists"));
        }
        let user = db
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::not_found("User not found"))?;
        user.name = name.to_string();
        user.email = email.to_string();
        user.age = age;
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut db = self.0.lock().unwrap();
        db.users.retain(|u| u.id != id);
        // FK behavior: enrollments cascade, course ownership clears.
        db.enrollments.retain(|e| e.user_id != id);
        for course in &mut db.courses {
            if course.user_id == Some(id) {
                course.user_id = None;
                course.user_name = None;
                course.user_email = None;
            }
        }
        Ok(())
    }
}

pub struct MemCourseStore(pub SharedDb);

#[async_trait]
impl CourseStore for MemCourseStore {
    async fn find_all(&self) -> DomainResult<Vec<Course>> {
        let db = self.0.lock().unwrap();
        let mut courses = db.courses.clone();
        courses.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(courses)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Course>> {
        let db = self.0.lock().unwrap();
        Ok(db.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_owner(&self, user_id: i64) -> DomainResult<Vec<Course>> {
        let db = self.0.lock().unwrap();
        Ok(db
            .courses
            .iter()
            .filter(|c| c.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn insert(
        &self,
        name: &str,
        description: &str,
        user_id: Option<i64>,
    ) -> DomainResult<Course> {
        let mut db = self.0.lock().unwrap();
        let (user_name, user_email) = db.owner_fields(user_id);
        let course = Course {
            id: db.next_id(),
            name: name.to_string(),
            description: description.to_string(),
            user_id,
            created_at: Utc::now(),
            user_name,
            user_email,
        };
        db.courses.push(course.clone());
        Ok(course)
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        user_id: Option<i64>,
    ) -> DomainResult<Course> {
        let mut db = self.0.lock().unwrap();
        let (user_name, user_email) = db.owner_fields(user_id);
        let course = db
            .courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("Course not found"))?;
        course.name = name.to_string();
        course.description = description.to_string();
        course.user_id = user_id;
        course.user_name = user_name;
        course.user_email = user_email;
        Ok(course.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut db = self.0.lock().unwrap();
        db.courses.retain(|c| c.id != id);
        db.enrollments.retain(|e| e.course_id != id);
        Ok(())
    }
}

pub struct MemCollectionStore(pub SharedDb);

#[async_trait]
impl CollectionStore for MemCollectionStore {
    async fn find_all(&self) -> DomainResult<Vec<Collection>> {
        let db = self.0.lock().unwrap();
        let mut collections = db.collections.clone();
        collections.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(collections)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Collection>> {
        let db = self.0.lock().unwrap();
        Ok(db.collections.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_owner(&self, user_id: i64) -> DomainResult<Vec<Collection>> {
        let db = self.0.lock().unwrap();
        Ok(db
            .collections
            .iter()
            .filter(|c| c.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn insert(
        &self,
        name: &str,
        description: &str,
        user_id: Option<i64>,
    ) -> DomainResult<Collection> {
        let mut db = self.0.lock().unwrap();
        let (user_name, user_email) = db.owner_fields(user_id);
        let collection = Collection {
            id: db.next_id(),
            name: name.to_string(),
            description: description.to_string(),
            user_id,
            created_at: Utc::now(),
            user_name,
            user_email,
        };
        db.collections.push(collection.clone());
        Ok(collection)
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        user_id: Option<i64>,
    ) -> DomainResult<Collection> {
        let mut db = self.0.lock().unwrap();
        let (user_name, user_email) = db.owner_fields(user_id);
        let collection = db
            .collections
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("Job collection not found"))?;
        collection.name = name.to_string();
        collection.description = description.to_string();
        collection.user_id = user_id;
        collection.user_name = user_name;
        collection.user_email = user_email;
        Ok(collection.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut db = self.0.lock().unwrap();
        db.collections.retain(|c| c.id != id);
        Ok(())
    }
}

pub struct MemEnrollmentStore(pub SharedDb);

#[async_trait]
impl EnrollmentStore for MemEnrollmentStore {
    async fn find(&self, user_id: i64, course_id: i64) -> DomainResult<Option<Enrollment>> {
        let db = self.0.lock().unwrap();
        Ok(db
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id && e.course_id == course_id)
            .cloned())
    }

    async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<EnrolledCourse>> {
        let db = self.0.lock().unwrap();
        let mut rows: Vec<EnrolledCourse> = db
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id)
            .filter_map(|e| {
                let course = db.courses.iter().find(|c| c.id == e.course_id)?;
                let owner = course
                    .user_id
                    .and_then(|id| db.users.iter().find(|u| u.id == id));
                Some(EnrolledCourse {
                    id: course.id,
                    name: course.name.clone(),
                    description: course.description.clone(),
                    user_id: course.user_id,
                    created_at: course.created_at,
                    enrolled_at: e.enrolled_at,
                    instructor_id: owner.map(|u| u.id),
                    instructor_name: owner.map(|u| u.name.clone()),
                    instructor_email: owner.map(|u| u.email.clone()),
                })
            })
            .collect();
        rows.sort_by(|a, b| b.enrolled_at.cmp(&a.enrolled_at));
        Ok(rows)
    }

    async fn insert(&self, user_id: i64, course_id: i64) -> DomainResult<Enrollment> {
        // Check-and-insert under one lock, like the unique pair constraint.
        let mut db = self.0.lock().unwrap();
        if db
            .enrollments
            .iter()
            .any(|e| e.user_id == user_id && e.course_id == course_id)
        {
            return Err(DomainError::conflict(
                "User is already enrolled in this course",
            ));
        }
        let enrollment = Enrollment {
            user_id,
            course_id,
            enrolled_at: Utc::now(),
        };
        db.enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    async fn delete(&self, user_id: i64, course_id: i64) -> DomainResult<bool> {
        let mut db = self.0.lock().unwrap();
        let before = db.enrollments.len();
        db.enrollments
            .retain(|e| !(e.user_id == user_id && e.course_id == course_id));
        Ok(db.enrollments.len() < before)
    }
}

pub struct MemResumeStore(pub SharedDb);

#[async_trait]
impl ResumeStore for MemResumeStore {
    async fn insert(
        &self,
        hr_id: i64,
        filename: &str,
        file_path: &str,
        status: &str,
    ) -> DomainResult<Resume> {
        let mut db = self.0.lock().unwrap();
        let resume = Resume {
            id: db.next_id(),
            hr_id,
            filename: filename.to_string(),
            file_path: file_path.to_string(),
            status: status.to_string(),
            uploaded_at: Utc::now(),
        };
        db.resumes.push(resume.clone());
        Ok(resume)
    }

    async fn list_for_hr(&self, hr_id: i64) -> DomainResult<Vec<Resume>> {
        let db = self.0.lock().unwrap();
        let mut rows: Vec<Resume> = db
            .resumes
            .iter()
            .filter(|r| r.hr_id == hr_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }
}

pub const TEST_SECRET: &str = "test-secret";

/// Build an `AppState` backed by the shared in-memory database.
pub fn test_state() -> (AppState, SharedDb) {
    let db: SharedDb = Arc::new(Mutex::new(MemDb::default()));
    let config = ApiConfig {
        jwt_secret: TEST_SECRET.to_string(),
        ..Default::default()
    };
    // Lazy pool: never actually connected; only the health probe touches it.
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost:1/unused")
        .unwrap();

    let state = AppState::assemble(
        config,
        pool,
        Arc::new(MemUserStore(db.clone())),
        Arc::new(MemCourseStore(db.clone())),
        Arc::new(MemCollectionStore(db.clone())),
        Arc::new(MemEnrollmentStore(db.clone())),
        Arc::new(MemResumeStore(db.clone())),
        Arc::new(ResumeFileStore::new(StorageBackend::Memory)),
    );
    (state, db)
}
