use std::{cell::RefCell, rc::Rc};

use log::{debug, error};

use crate::{
    CacheStats, DEFAULT_GROUP_LIMIT, DisabledFeature, ExerciseCatalogRepository, ExerciseRecord,
    ExerciseService, Metadata, PAGE_SIZE, PagedResult, QueryFilter, ReadError, ReferenceCache,
    catalog::{disabled, fallback_body_parts},
    transform_exercise, transform_exercises,
};

pub struct Service<R> {
    repository: R,
    cache: RefCell<ReferenceCache>,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            cache: RefCell::new(ReferenceCache::default()),
        }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            if err.is_no_connection() {
                debug!("failed to {} {}: {err}", $action, $entity);
            } else {
                error!("failed to {} {}: {err}", $action, $entity);
            }
        }
        result
    }};
}

macro_rules! reference {
    ($self: ident, $field: ident, $read: ident, $entity: literal, $fallback: expr) => {{
        let cached = $self.cache.borrow().$field.clone();
        if let Some(cached) = cached {
            return cached;
        }
        match log_on_error!($self.repository.$read(), "get", $entity) {
            Ok(values) => {
                let values: Rc<[String]> = values.into();
                $self.cache.borrow_mut().$field = Some(values.clone());
                values
            }
            Err(_) => $fallback,
        }
    }};
}

impl<R: ExerciseCatalogRepository> Service<R> {
    async fn read_page(&self, filter: &QueryFilter) -> Result<PagedResult, ReadError> {
        let limit = filter.limit();
        let mut page = self
            .repository
            .read_exercises(&filter.page(filter.offset, limit))
            .await?;
        page.exercises.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        debug!("fetched {} exercises", page.exercises.len());
        Ok(PagedResult {
            exercises: transform_exercises(&page.exercises),
            total_exercises: page.total_exercises.unwrap_or(0),
            metadata: page.metadata,
        })
    }

    /// Requests full pages until the service returns a short one.
    ///
    /// Only the total reported with the first page is used.
    async fn read_all_pages(&self, filter: &QueryFilter) -> Result<PagedResult, ReadError> {
        let mut exercises = Vec::new();
        let mut total_exercises = 0;
        let mut pages_fetched = 0;

        loop {
            let page = self
                .repository
                .read_exercises(&filter.page(pages_fetched * PAGE_SIZE, PAGE_SIZE))
                .await?;
            if pages_fetched == 0 {
                total_exercises = page.total_exercises.unwrap_or(0);
            }
            pages_fetched += 1;

            let page_len = page.exercises.len();
            exercises.extend(page.exercises.iter().map(transform_exercise));
            debug!("fetched page {pages_fetched} with {page_len} exercises");

            if page_len != PAGE_SIZE as usize {
                break;
            }
        }

        let total_fetched = exercises.len();
        Ok(PagedResult {
            exercises,
            total_exercises,
            metadata: Metadata {
                total_exercises: Some(total_exercises),
                pages_fetched: Some(pages_fetched),
                total_fetched: Some(total_fetched),
                ..Metadata::default()
            },
        })
    }
}

impl<R: ExerciseCatalogRepository> ExerciseService for Service<R> {
    async fn get_body_parts(&self) -> Rc<[String]> {
        reference!(self, body_parts, read_body_parts, "body parts", fallback_body_parts())
    }

    async fn get_equipment(&self) -> Rc<[String]> {
        reference!(self, equipment, read_equipments, "equipment", Rc::from([]))
    }

    async fn get_target_muscles(&self) -> Rc<[String]> {
        reference!(self, target_muscles, read_muscles, "target muscles", Rc::from([]))
    }

    async fn get_filtered_exercises(&self, filter: &QueryFilter) -> PagedResult {
        let result = if filter.fetch_all {
            log_on_error!(self.read_all_pages(filter), "get", "all filtered exercises")
        } else {
            log_on_error!(self.read_page(filter), "get", "filtered exercises")
        };
        match result {
            Ok(result) => {
                self.cache.borrow_mut().insert_exercises(&result.exercises);
                result
            }
            Err(_) => PagedResult::default(),
        }
    }

    async fn get_exercises_by_body_part(
        &self,
        body_part: &str,
        limit: Option<u32>,
        fetch_all: bool,
    ) -> PagedResult {
        self.get_filtered_exercises(&QueryFilter::body_part(
            body_part,
            limit.unwrap_or(DEFAULT_GROUP_LIMIT),
            fetch_all,
        ))
        .await
    }

    async fn get_exercises_for_muscle_group(
        &self,
        muscle_group: &str,
        limit: Option<u32>,
    ) -> PagedResult {
        self.get_filtered_exercises(&QueryFilter::muscle_group(
            muscle_group,
            limit.unwrap_or(DEFAULT_GROUP_LIMIT),
        ))
        .await
    }

    fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    fn get_cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }

    fn get_cached_exercise(&self, id: &str) -> Option<ExerciseRecord> {
        self.cache.borrow().exercises.get(id).cloned()
    }

    async fn get_exercises_by_equipment(
        &self,
        _equipment: &str,
        _limit: Option<u32>,
    ) -> Vec<ExerciseRecord> {
        disabled(DisabledFeature::ExercisesByEquipment)
    }

    async fn get_exercises_by_target(
        &self,
        _target: &str,
        _limit: Option<u32>,
    ) -> Vec<ExerciseRecord> {
        disabled(DisabledFeature::ExercisesByTarget)
    }

    async fn search_exercises(&self, _query: &str, _limit: Option<u32>) -> Vec<ExerciseRecord> {
        disabled(DisabledFeature::SearchExercises)
    }

    async fn get_exercise_by_id(&self, _id: &str) -> Option<ExerciseRecord> {
        disabled(DisabledFeature::ExerciseById)
    }

    async fn get_all_exercises(&self, _limit: Option<u32>) -> Vec<ExerciseRecord> {
        disabled(DisabledFeature::AllExercises)
    }

    async fn get_random_exercises(&self, _count: u32) -> Vec<ExerciseRecord> {
        disabled(DisabledFeature::RandomExercises)
    }

    async fn get_exercise_image(&self, _id: &str) -> Option<String> {
        disabled(DisabledFeature::ExerciseImage)
    }

    async fn get_exercises_for_training_mode(
        &self,
        _mode: &str,
        _limit: Option<u32>,
    ) -> Vec<ExerciseRecord> {
        disabled(DisabledFeature::ExercisesForTrainingMode)
    }
}
