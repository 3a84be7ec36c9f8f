//! Application state.

use std::sync::Arc;

use sqlx::PgPool;

use portal_db::{
    PgCollectionStore, PgCourseStore, PgEnrollmentStore, PgResumeStore, PgUserStore,
};
use portal_services::{
    CollectionService, CollectionStore, CourseService, CourseStore, EnrollmentCoordinator,
    EnrollmentStore, IdentifierResolver, ResumeStore, UserService, UserStore,
};
use portal_uploads::{ResumeFileStore, StorageBackend};

use crate::config::ApiConfig;
use crate::hub::NotificationHub;

/// Shared application state. One instance is built at startup and cloned
/// per request.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub pool: PgPool,
    pub users: Arc<UserService>,
    pub courses: Arc<CourseService>,
    pub collections: Arc<CollectionService>,
    pub enrollments: Arc<EnrollmentCoordinator>,
    pub resumes: Arc<dyn ResumeStore>,
    pub files: Arc<ResumeFileStore>,
    pub hub: NotificationHub,
}

impl AppState {
    /// Wire services over a connected pool.
    pub fn new(config: ApiConfig, pool: PgPool) -> Self {
        let files = ResumeFileStore::new(StorageBackend::from_env(&config.upload_dir));
        Self::assemble(
            config,
            pool.clone(),
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgCourseStore::new(pool.clone())),
            Arc::new(PgCollectionStore::new(pool.clone())),
            Arc::new(PgEnrollmentStore::new(pool.clone())),
            Arc::new(PgResumeStore::new(pool)),
            Arc::new(files),
        )
    }

    /// Wire services over explicit store implementations. Integration
    /// tests use this to run the router against in-memory stores.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        config: ApiConfig,
        pool: PgPool,
        user_store: Arc<dyn UserStore>,
        course_store: Arc<dyn CourseStore>,
        collection_store: Arc<dyn CollectionStore>,
        enrollment_store: Arc<dyn EnrollmentStore>,
        resumes: Arc<dyn ResumeStore>,
        files: Arc<ResumeFileStore>,
    ) -> Self {
        let resolver = IdentifierResolver::new(user_store.clone());

        Self {
            users: Arc::new(UserService::new(user_store)),
            courses: Arc::new(CourseService::new(course_store.clone(), resolver.clone())),
            collections: Arc::new(CollectionService::new(collection_store, resolver.clone())),
            enrollments: Arc::new(EnrollmentCoordinator::new(
                course_store,
                enrollment_store,
                resolver,
            )),
            resumes,
            files,
            hub: NotificationHub::new(),
            pool,
            config,
        }
    }
}
