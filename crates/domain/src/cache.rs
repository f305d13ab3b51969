use std::{collections::BTreeMap, rc::Rc};

use crate::ExerciseRecord;

/// Lookup tables of the exercise query client.
///
/// The reference lists are set at most once until [`ReferenceCache::clear`] is called.
/// The exercise map is unbounded and holds every distinct record seen since the last clear.
#[derive(Debug, Default)]
pub struct ReferenceCache {
    pub body_parts: Option<Rc<[String]>>,
    pub equipment: Option<Rc<[String]>>,
    pub target_muscles: Option<Rc<[String]>>,
    pub exercises: BTreeMap<String, ExerciseRecord>,
}

impl ReferenceCache {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn insert_exercises<'a>(
        &mut self,
        exercises: impl IntoIterator<Item = &'a ExerciseRecord>,
    ) {
        for exercise in exercises {
            self.exercises.insert(exercise.id.clone(), exercise.clone());
        }
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            body_parts: self.body_parts.is_some(),
            equipment: self.equipment.is_some(),
            target_muscles: self.target_muscles.is_some(),
            exercises: self.exercises.len(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub body_parts: bool,
    pub equipment: bool,
    pub target_muscles: bool,
    pub exercises: usize,
}
