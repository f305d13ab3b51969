//! Canonical exercise records and the normalizer that produces them.
//!
//! Exercise data reaches the application in several shapes: the filter endpoint of the exercise
//! data service, older exports with `exerciseId`/`muscleGroup` fields and hand-written static
//! records. [`transform_exercise`] maps any of them into an [`ExerciseRecord`] in which every
//! field is set.

pub const DEFAULT_NAME: &str = "Unnamed Exercise";
pub const DEFAULT_BODY_PART: &str = "other";
pub const DEFAULT_EQUIPMENT: &str = "body weight";
pub const DEFAULT_TARGET: &str = "general";
pub const DEFAULT_REPS: u32 = 12;
pub const DEFAULT_SETS: u32 = 3;
pub const DEFAULT_DURATION: u32 = 30;

const DESCRIPTION_PREFIX: &str = "Exercise targeting ";
const DESCRIPTION_FALLBACK_TARGET: &str = "multiple muscle groups";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub id: String,
    pub name: String,
    pub body_part: String,
    pub body_parts: Vec<String>,
    pub equipment: String,
    pub equipments: Vec<String>,
    pub target: String,
    pub target_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub image_url: Option<String>,
    pub instructions: Vec<String>,
    pub has_weights: bool,
    pub reps: u32,
    pub sets: u32,
    /// Duration in seconds.
    pub duration: u32,
    pub description: String,
    pub common_mistakes: Vec<String>,
    pub activated: Vec<String>,
}

/// An exercise record of unknown shape.
///
/// Empty strings and empty sequences are treated the same as missing fields.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawExercise {
    pub id: Option<String>,
    pub exercise_id: Option<String>,
    pub name: Option<String>,
    pub body_part: Option<String>,
    pub body_parts: Option<Vec<String>>,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub equipments: Option<Vec<String>>,
    pub target: Option<String>,
    pub target_muscles: Option<Vec<String>>,
    pub secondary_muscles: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub gif_url: Option<String>,
    pub instructions: Option<Vec<String>>,
    pub has_weights: Option<bool>,
    pub reps: Option<u32>,
    pub sets: Option<u32>,
    pub duration: Option<u32>,
    pub description: Option<String>,
    pub common_mistakes: Option<Vec<String>>,
    pub activated: Option<Vec<String>>,
}

impl RawExercise {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

impl From<RawExercise> for ExerciseRecord {
    fn from(value: RawExercise) -> Self {
        transform_exercise(&value)
    }
}

#[must_use]
pub fn transform_exercise(raw: &RawExercise) -> ExerciseRecord {
    let name = text(raw.name.as_deref()).unwrap_or(DEFAULT_NAME);

    let id = text(raw.id.as_deref())
        .or(text(raw.exercise_id.as_deref()))
        .map_or_else(|| id_from_name(name), str::to_string);

    let body_part = text(raw.body_part.as_deref())
        .or(first(raw.body_parts.as_deref()))
        .or(text(raw.muscle_group.as_deref()))
        .unwrap_or(DEFAULT_BODY_PART);

    let equipment = text(raw.equipment.as_deref())
        .or(first(raw.equipments.as_deref()))
        .unwrap_or(DEFAULT_EQUIPMENT);

    let target = text(raw.target.as_deref())
        .or(first(raw.target_muscles.as_deref()))
        .or(first(raw.activated.as_deref()))
        .unwrap_or(DEFAULT_TARGET);

    ExerciseRecord {
        id,
        name: name.to_string(),
        body_part: body_part.to_string(),
        body_parts: list(raw.body_parts.as_deref())
            .unwrap_or_else(|| vec![body_part.to_string()]),
        equipment: equipment.to_string(),
        equipments: list(raw.equipments.as_deref())
            .unwrap_or_else(|| vec![equipment.to_string()]),
        target: target.to_string(),
        target_muscles: list(raw.target_muscles.as_deref())
            .unwrap_or_else(|| vec![target.to_string()]),
        secondary_muscles: list(raw.secondary_muscles.as_deref()).unwrap_or_default(),
        image_url: text(raw.image_url.as_deref())
            .or(text(raw.gif_url.as_deref()))
            .map(str::to_string),
        instructions: list(raw.instructions.as_deref()).unwrap_or_default(),
        has_weights: raw
            .has_weights
            .unwrap_or(equipment != DEFAULT_EQUIPMENT),
        reps: raw.reps.unwrap_or(DEFAULT_REPS),
        sets: raw.sets.unwrap_or(DEFAULT_SETS),
        duration: raw.duration.unwrap_or(DEFAULT_DURATION),
        description: text(raw.description.as_deref())
            .map_or_else(|| synthesize_description(raw), str::to_string),
        common_mistakes: list(raw.common_mistakes.as_deref()).unwrap_or_default(),
        activated: list(raw.activated.as_deref()).unwrap_or_default(),
    }
}

#[must_use]
pub fn transform_exercises(raw: &[RawExercise]) -> Vec<ExerciseRecord> {
    raw.iter().map(transform_exercise).collect()
}

fn synthesize_description(raw: &RawExercise) -> String {
    let targets = list(raw.target_muscles.as_deref())
        .map(|muscles| muscles.join(", "))
        .or(text(raw.target.as_deref()).map(str::to_string))
        .or(text(raw.muscle_group.as_deref()).map(str::to_string))
        .unwrap_or_else(|| DESCRIPTION_FALLBACK_TARGET.to_string());
    format!("{DESCRIPTION_PREFIX}{targets}")
}

/// Replaces every run of whitespace by a single underscore.
fn id_from_name(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                id.push('_');
            }
            in_whitespace = true;
        } else {
            id.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    id
}

fn text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn first(values: Option<&[String]>) -> Option<&str> {
    values
        .and_then(<[String]>::first)
        .map(String::as_str)
        .filter(|s| !s.is_empty())
}

fn list(values: Option<&[String]>) -> Option<Vec<String>> {
    values.filter(|values| !values.is_empty()).map(<[String]>::to_vec)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn strings(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_transform_exercise_name_only() {
        assert_eq!(
            transform_exercise(&RawExercise::named("Barbell Squat")),
            ExerciseRecord {
                id: "barbell_squat".to_string(),
                name: "Barbell Squat".to_string(),
                body_part: "other".to_string(),
                body_parts: vec!["other".to_string()],
                equipment: "body weight".to_string(),
                equipments: vec!["body weight".to_string()],
                target: "general".to_string(),
                target_muscles: vec!["general".to_string()],
                secondary_muscles: vec![],
                image_url: None,
                instructions: vec![],
                has_weights: false,
                reps: 12,
                sets: 3,
                duration: 30,
                description: "Exercise targeting multiple muscle groups".to_string(),
                common_mistakes: vec![],
                activated: vec![],
            }
        );
    }

    #[test]
    fn test_transform_exercise_service_record() {
        let raw = RawExercise {
            exercise_id: Some("0025".to_string()),
            name: Some("barbell bench press".to_string()),
            body_parts: strings(&["chest"]),
            equipments: strings(&["barbell"]),
            target_muscles: strings(&["pectorals"]),
            secondary_muscles: strings(&["triceps", "shoulders"]),
            gif_url: Some("https://example.org/0025.gif".to_string()),
            instructions: strings(&["Lie flat.", "Press."]),
            ..RawExercise::default()
        };

        assert_eq!(
            transform_exercise(&raw),
            ExerciseRecord {
                id: "0025".to_string(),
                name: "barbell bench press".to_string(),
                body_part: "chest".to_string(),
                body_parts: vec!["chest".to_string()],
                equipment: "barbell".to_string(),
                equipments: vec!["barbell".to_string()],
                target: "pectorals".to_string(),
                target_muscles: vec!["pectorals".to_string()],
                secondary_muscles: vec!["triceps".to_string(), "shoulders".to_string()],
                image_url: Some("https://example.org/0025.gif".to_string()),
                instructions: vec!["Lie flat.".to_string(), "Press.".to_string()],
                has_weights: true,
                reps: 12,
                sets: 3,
                duration: 30,
                description: "Exercise targeting pectorals".to_string(),
                common_mistakes: vec![],
                activated: vec![],
            }
        );
    }

    #[rstest]
    #[case::explicit_id(
        RawExercise { id: Some("a".into()), exercise_id: Some("b".into()), ..RawExercise::named("C d") },
        "a"
    )]
    #[case::exercise_id(
        RawExercise { id: Some(String::new()), exercise_id: Some("b".into()), ..RawExercise::named("C d") },
        "b"
    )]
    #[case::name(RawExercise::named("Dumbbell  Lateral\tRaise"), "dumbbell_lateral_raise")]
    #[case::no_name(RawExercise::default(), "unnamed_exercise")]
    fn test_transform_exercise_id(#[case] raw: RawExercise, #[case] expected: &str) {
        assert_eq!(transform_exercise(&raw).id, expected);
    }

    #[rstest]
    #[case::explicit(
        RawExercise { body_part: Some("back".into()), body_parts: strings(&["waist"]), muscle_group: Some("legs".into()), ..RawExercise::default() },
        "back"
    )]
    #[case::body_parts(
        RawExercise { body_parts: strings(&["waist", "back"]), muscle_group: Some("legs".into()), ..RawExercise::default() },
        "waist"
    )]
    #[case::muscle_group(
        RawExercise { body_parts: strings(&[]), muscle_group: Some("legs".into()), ..RawExercise::default() },
        "legs"
    )]
    #[case::default(RawExercise::default(), "other")]
    fn test_transform_exercise_body_part(#[case] raw: RawExercise, #[case] expected: &str) {
        assert_eq!(transform_exercise(&raw).body_part, expected);
    }

    #[rstest]
    #[case::explicit(
        RawExercise { target: Some("abs".into()), target_muscles: strings(&["lats"]), activated: strings(&["glutes"]), ..RawExercise::default() },
        "abs"
    )]
    #[case::target_muscles(
        RawExercise { target_muscles: strings(&["lats"]), activated: strings(&["glutes"]), ..RawExercise::default() },
        "lats"
    )]
    #[case::activated(
        RawExercise { activated: strings(&["glutes", "quads"]), ..RawExercise::default() },
        "glutes"
    )]
    #[case::default(RawExercise::default(), "general")]
    fn test_transform_exercise_target(#[case] raw: RawExercise, #[case] expected: &str) {
        assert_eq!(transform_exercise(&raw).target, expected);
    }

    #[rstest]
    #[case::explicit_flag(
        RawExercise { has_weights: Some(true), ..RawExercise::default() },
        "body weight",
        true
    )]
    #[case::explicit_flag_overrides_equipment(
        RawExercise { has_weights: Some(false), equipment: Some("kettlebell".into()), ..RawExercise::default() },
        "kettlebell",
        false
    )]
    #[case::equipment(
        RawExercise { equipment: Some("dumbbell".into()), ..RawExercise::default() },
        "dumbbell",
        true
    )]
    #[case::equipments(
        RawExercise { equipments: strings(&["body weight", "band"]), ..RawExercise::default() },
        "body weight",
        false
    )]
    #[case::default(RawExercise::default(), "body weight", false)]
    fn test_transform_exercise_equipment(
        #[case] raw: RawExercise,
        #[case] equipment: &str,
        #[case] has_weights: bool,
    ) {
        let record = transform_exercise(&raw);
        assert_eq!(record.equipment, equipment);
        assert_eq!(record.has_weights, has_weights);
    }

    #[rstest]
    #[case::explicit(
        RawExercise { description: Some("Hold it.".into()), target_muscles: strings(&["abs"]), ..RawExercise::default() },
        "Hold it."
    )]
    #[case::target_muscles(
        RawExercise { target_muscles: strings(&["glutes", "hamstrings"]), target: Some("glutes".into()), ..RawExercise::default() },
        "Exercise targeting glutes, hamstrings"
    )]
    #[case::target(
        RawExercise { target: Some("biceps".into()), muscle_group: Some("arms".into()), ..RawExercise::default() },
        "Exercise targeting biceps"
    )]
    #[case::muscle_group(
        RawExercise { muscle_group: Some("arms".into()), ..RawExercise::default() },
        "Exercise targeting arms"
    )]
    #[case::activated_is_ignored(
        RawExercise { activated: strings(&["calves"]), ..RawExercise::default() },
        "Exercise targeting multiple muscle groups"
    )]
    fn test_transform_exercise_description(#[case] raw: RawExercise, #[case] expected: &str) {
        assert_eq!(transform_exercise(&raw).description, expected);
    }

    #[test]
    fn test_transform_exercise_explicit_numbers() {
        let record = transform_exercise(&RawExercise {
            reps: Some(8),
            sets: Some(5),
            duration: Some(45),
            ..RawExercise::named("Plank")
        });
        assert_eq!((record.reps, record.sets, record.duration), (8, 5, 45));
    }

    #[test]
    fn test_transform_exercise_is_deterministic() {
        let raw = RawExercise {
            body_parts: strings(&["", "back"]),
            equipment: Some(String::new()),
            activated: strings(&["lats"]),
            ..RawExercise::named(" Pull Up ")
        };
        let record = transform_exercise(&raw);

        assert_eq!(transform_exercise(&raw), record);
        assert_eq!(record.id, "_pull_up_");
        assert_eq!(record.body_part, "other");
        assert_eq!(record.body_parts, vec![String::new(), "back".to_string()]);
        assert_eq!(record.equipment, "body weight");
        assert_eq!(record.target, "lats");
    }

    #[test]
    fn test_transform_exercises() {
        let raw = vec![
            RawExercise::named("A"),
            RawExercise::default(),
            RawExercise::named("A"),
            RawExercise::named("B"),
        ];

        let records = transform_exercises(&raw);

        assert_eq!(records.len(), raw.len());
        assert_eq!(
            records.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            vec!["A", DEFAULT_NAME, "A", "B"]
        );
        assert!(transform_exercises(&[]).is_empty());
    }
}
