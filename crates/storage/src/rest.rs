use fitdeck_domain as domain;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Deserializer};

pub const BODY_PARTS_PATH: &str = "/api/v1/bodyparts";
pub const EQUIPMENTS_PATH: &str = "/api/v1/equipments";
pub const MUSCLES_PATH: &str = "/api/v1/muscles";
pub const FILTER_PATH: &str = "/api/v1/exercises/filter";

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Copy, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

/// Client of the local exercise data service.
#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
    pub base_url: String,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(config: &crate::Config) -> Self {
        Self {
            sender: GlooNetSendRequest,
            base_url: config.base_url.clone(),
        }
    }
}

impl Default for REST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new(&crate::Config::default())
    }
}

impl<S: SendRequest> REST<S> {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    async fn read_names(&self, path: &str) -> Result<Vec<String>, domain::ReadError> {
        let request = Request::get(&self.url(path)).build().map_err(other)?;
        Ok(fetch::<_, NameList>(&self.sender, request).await?.into())
    }
}

impl<S: SendRequest> domain::ExerciseCatalogRepository for REST<S> {
    async fn read_body_parts(&self) -> Result<Vec<String>, domain::ReadError> {
        self.read_names(BODY_PARTS_PATH).await
    }

    async fn read_equipments(&self) -> Result<Vec<String>, domain::ReadError> {
        self.read_names(EQUIPMENTS_PATH).await
    }

    async fn read_muscles(&self) -> Result<Vec<String>, domain::ReadError> {
        self.read_names(MUSCLES_PATH).await
    }

    async fn read_exercises(
        &self,
        query: &domain::FilterQuery,
    ) -> Result<domain::ExercisePage, domain::ReadError> {
        let pairs = query.pairs();
        let request = Request::get(&self.url(FILTER_PATH))
            .query(pairs.iter().map(|(key, value)| (*key, value.as_str())))
            .build()
            .map_err(other)?;
        Ok(fetch::<_, ExerciseList>(&self.sender, request).await?.into())
    }
}

pub(crate) async fn fetch<S, T>(sender: &S, request: Request) -> Result<T, domain::ReadError>
where
    S: SendRequest,
    T: 'static + for<'de> Deserialize<'de>,
{
    let Ok(response) = sender.send_request(request).await else {
        return Err(domain::StorageError::NoConnection.into());
    };

    if !response.ok() {
        return Err(domain::StorageError::Status {
            status: response.status(),
            text: response.status_text(),
        }
        .into());
    }

    response
        .json::<T>()
        .await
        .map_err(|err| domain::StorageError::Deserialization(err.to_string()).into())
}

fn other(err: gloo_net::Error) -> domain::ReadError {
    domain::StorageError::Other(Box::new(err)).into()
}

/// Response of the reference endpoints.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NameList {
    Wrapped { data: Vec<NameEntry> },
    Bare(Vec<NameEntry>),
}

/// Entries without a usable name are skipped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NameEntry {
    Object {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
    },
    Name(String),
    Other(serde::de::IgnoredAny),
}

impl From<NameList> for Vec<String> {
    fn from(value: NameList) -> Self {
        let (NameList::Wrapped { data: entries } | NameList::Bare(entries)) = value;
        entries
            .into_iter()
            .filter_map(|entry| match entry {
                NameEntry::Object { name } => name,
                NameEntry::Name(name) => Some(name),
                NameEntry::Other(_) => None,
            })
            .collect()
    }
}

/// Response of the filter endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ExerciseList {
    Page(Page),
    Bare(Vec<Lenient<Exercise>>),
}

/// Records that are not objects are skipped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub data: Vec<Lenient<Exercise>>,
    #[serde(default, deserialize_with = "lenient")]
    pub metadata: Option<Metadata>,
    #[serde(default, deserialize_with = "count")]
    pub total_exercises: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    #[serde(deserialize_with = "count")]
    pub total_exercises: Option<u32>,
    #[serde(deserialize_with = "count")]
    pub total_pages: Option<u32>,
    #[serde(deserialize_with = "count")]
    pub current_page: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub previous_page: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub next_page: Option<String>,
}

impl From<ExerciseList> for domain::ExercisePage {
    fn from(value: ExerciseList) -> Self {
        match value {
            ExerciseList::Page(page) => {
                let metadata = page.metadata.unwrap_or_default();
                domain::ExercisePage {
                    exercises: records(page.data),
                    total_exercises: metadata.total_exercises.or(page.total_exercises),
                    metadata: metadata.into(),
                }
            }
            ExerciseList::Bare(exercises) => domain::ExercisePage {
                exercises: records(exercises),
                total_exercises: None,
                metadata: domain::Metadata::default(),
            },
        }
    }
}

fn records(exercises: Vec<Lenient<Exercise>>) -> Vec<domain::RawExercise> {
    exercises
        .into_iter()
        .filter_map(Lenient::into_option)
        .map(Into::into)
        .collect()
}

impl From<Metadata> for domain::Metadata {
    fn from(value: Metadata) -> Self {
        domain::Metadata {
            total_exercises: value.total_exercises,
            total_pages: value.total_pages,
            current_page: value.current_page,
            previous_page: value.previous_page,
            next_page: value.next_page,
            ..domain::Metadata::default()
        }
    }
}

/// An exercise as sent by the service or found in static data.
///
/// A field of unexpected type counts as missing. Lists keep only their string items.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Exercise {
    #[serde(deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(alias = "exercise_id", deserialize_with = "text")]
    pub exercise_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(alias = "body_part", deserialize_with = "lenient")]
    pub body_part: Option<String>,
    #[serde(alias = "body_parts", deserialize_with = "strings")]
    pub body_parts: Option<Vec<String>>,
    #[serde(alias = "muscle_group", deserialize_with = "lenient")]
    pub muscle_group: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub equipment: Option<String>,
    #[serde(deserialize_with = "strings")]
    pub equipments: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub target: Option<String>,
    #[serde(alias = "target_muscles", deserialize_with = "strings")]
    pub target_muscles: Option<Vec<String>>,
    #[serde(alias = "secondary_muscles", deserialize_with = "strings")]
    pub secondary_muscles: Option<Vec<String>>,
    #[serde(alias = "image_url", deserialize_with = "lenient")]
    pub image_url: Option<String>,
    #[serde(alias = "gif_url", deserialize_with = "lenient")]
    pub gif_url: Option<String>,
    #[serde(deserialize_with = "strings")]
    pub instructions: Option<Vec<String>>,
    #[serde(alias = "has_weights", deserialize_with = "lenient")]
    pub has_weights: Option<bool>,
    #[serde(deserialize_with = "count")]
    pub reps: Option<u32>,
    #[serde(deserialize_with = "count")]
    pub sets: Option<u32>,
    #[serde(deserialize_with = "count")]
    pub duration: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(alias = "common_mistakes", deserialize_with = "strings")]
    pub common_mistakes: Option<Vec<String>>,
    #[serde(deserialize_with = "strings")]
    pub activated: Option<Vec<String>>,
}

impl From<Exercise> for domain::RawExercise {
    fn from(value: Exercise) -> Self {
        domain::RawExercise {
            id: value.id,
            exercise_id: value.exercise_id,
            name: value.name,
            body_part: value.body_part,
            body_parts: value.body_parts,
            muscle_group: value.muscle_group,
            equipment: value.equipment,
            equipments: value.equipments,
            target: value.target,
            target_muscles: value.target_muscles,
            secondary_muscles: value.secondary_muscles,
            image_url: value.image_url,
            gif_url: value.gif_url,
            instructions: value.instructions,
            has_weights: value.has_weights,
            reps: value.reps,
            sets: value.sets,
            duration: value.duration,
            description: value.description,
            common_mistakes: value.common_mistakes,
            activated: value.activated,
        }
    }
}

/// A value of type `T`, or anything else.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Value(T),
    Other(serde::de::IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Lenient<T>>::deserialize(deserializer)?.and_then(Lenient::into_option))
}

fn strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<String>>, D::Error> {
    Ok(
        lenient::<D, Vec<Lenient<String>>>(deserializer)?
            .map(|values| values.into_iter().filter_map(Lenient::into_option).collect()),
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(u64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(
        Option::<Scalar>::deserialize(deserializer)?.and_then(|value| match value {
            Scalar::Number(number) => Some(number.to_string()),
            Scalar::Text(text) => Some(text),
            Scalar::Other(_) => None,
        }),
    )
}

/// Accepts counts sent as numbers or numeric strings. Anything else counts as missing.
fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(
        Option::<Scalar>::deserialize(deserializer)?.and_then(|value| match value {
            Scalar::Number(number) => u32::try_from(number).ok(),
            Scalar::Text(text) => text.trim().parse().ok(),
            Scalar::Other(_) => None,
        }),
    )
}
