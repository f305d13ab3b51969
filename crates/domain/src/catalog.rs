use std::rc::Rc;

use log::debug;

use crate::{
    CacheStats, ExercisePage, ExerciseRecord, FilterQuery, PagedResult, QueryFilter, ReadError,
};

/// Body regions offered when the service cannot be reached.
pub const FALLBACK_BODY_PARTS: [&str; 10] = [
    "back",
    "cardio",
    "chest",
    "lower arms",
    "lower legs",
    "neck",
    "shoulders",
    "upper arms",
    "upper legs",
    "waist",
];

pub const PAGE_SIZE: u32 = 100;
pub const DEFAULT_GROUP_LIMIT: u32 = 20;

#[allow(async_fn_in_trait)]
pub trait ExerciseCatalogRepository {
    async fn read_body_parts(&self) -> Result<Vec<String>, ReadError>;
    async fn read_equipments(&self) -> Result<Vec<String>, ReadError>;
    async fn read_muscles(&self) -> Result<Vec<String>, ReadError>;
    async fn read_exercises(&self, query: &FilterQuery) -> Result<ExercisePage, ReadError>;
}

/// Exercise queries as seen by the UI.
///
/// None of the operations fail. Errors are logged and replaced by the documented default, so an
/// empty result may also mean that the service was unavailable.
#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_body_parts(&self) -> Rc<[String]>;
    async fn get_equipment(&self) -> Rc<[String]>;
    async fn get_target_muscles(&self) -> Rc<[String]>;

    async fn get_filtered_exercises(&self, filter: &QueryFilter) -> PagedResult;
    /// `limit` defaults to [`DEFAULT_GROUP_LIMIT`].
    async fn get_exercises_by_body_part(
        &self,
        body_part: &str,
        limit: Option<u32>,
        fetch_all: bool,
    ) -> PagedResult;
    /// `limit` defaults to [`DEFAULT_GROUP_LIMIT`].
    async fn get_exercises_for_muscle_group(
        &self,
        muscle_group: &str,
        limit: Option<u32>,
    ) -> PagedResult;

    fn clear_cache(&self);
    fn get_cache_stats(&self) -> CacheStats;
    fn get_cached_exercise(&self, id: &str) -> Option<ExerciseRecord>;

    async fn get_exercises_by_equipment(
        &self,
        equipment: &str,
        limit: Option<u32>,
    ) -> Vec<ExerciseRecord>;
    async fn get_exercises_by_target(&self, target: &str, limit: Option<u32>)
    -> Vec<ExerciseRecord>;
    async fn search_exercises(&self, query: &str, limit: Option<u32>) -> Vec<ExerciseRecord>;
    async fn get_exercise_by_id(&self, id: &str) -> Option<ExerciseRecord>;
    async fn get_all_exercises(&self, limit: Option<u32>) -> Vec<ExerciseRecord>;
    async fn get_random_exercises(&self, count: u32) -> Vec<ExerciseRecord>;
    async fn get_exercise_image(&self, id: &str) -> Option<String>;
    async fn get_exercises_for_training_mode(
        &self,
        mode: &str,
        limit: Option<u32>,
    ) -> Vec<ExerciseRecord>;
}

/// Operations whose endpoints are switched off.
///
/// The operations keep their signatures but never issue a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DisabledFeature {
    #[display("exercises by equipment")]
    ExercisesByEquipment,
    #[display("exercises by target")]
    ExercisesByTarget,
    #[display("exercise search")]
    SearchExercises,
    #[display("exercise by id")]
    ExerciseById,
    #[display("all exercises")]
    AllExercises,
    #[display("random exercises")]
    RandomExercises,
    #[display("exercise image")]
    ExerciseImage,
    #[display("exercises for training mode")]
    ExercisesForTrainingMode,
}

impl DisabledFeature {
    pub const ALL: [DisabledFeature; 8] = [
        DisabledFeature::ExercisesByEquipment,
        DisabledFeature::ExercisesByTarget,
        DisabledFeature::SearchExercises,
        DisabledFeature::ExerciseById,
        DisabledFeature::AllExercises,
        DisabledFeature::RandomExercises,
        DisabledFeature::ExerciseImage,
        DisabledFeature::ExercisesForTrainingMode,
    ];
}

pub(crate) fn disabled<T: Default>(feature: DisabledFeature) -> T {
    debug!("{feature} disabled");
    T::default()
}

#[must_use]
pub fn fallback_body_parts() -> Rc<[String]> {
    FALLBACK_BODY_PARTS
        .iter()
        .map(ToString::to_string)
        .collect()
}
