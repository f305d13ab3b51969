//! The coach chosen by the user.
//!
//! The selection is stored as a single blob. On first run the available trainers come from a
//! static document, see [`TrainerRepository::read_trainer_selection`].

#[allow(async_fn_in_trait)]
pub trait TrainerService {
    async fn get_trainer_selection(&self) -> Result<TrainerSelection, String>;
    async fn set_trainer_selection(&self, selection: TrainerSelection) -> Result<(), String>;
    async fn select_trainer(&self, id: &str) -> Result<TrainerSelection, String>;
}

#[allow(async_fn_in_trait)]
pub trait TrainerRepository {
    /// Falls back to the static trainers document if nothing has been stored yet. The fallback is
    /// not written back.
    async fn read_trainer_selection(&self) -> Result<TrainerSelection, String>;
    /// Overwrites the stored selection.
    async fn write_trainer_selection(&self, selection: TrainerSelection) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainerSelection {
    #[serde(default)]
    pub available_trainers: Vec<Trainer>,
    #[serde(default)]
    pub selected_trainer: Option<Trainer>,
}

impl TrainerSelection {
    pub fn select(&mut self, id: &str) -> Result<&Trainer, TrainerError> {
        let trainer = self
            .available_trainers
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TrainerError::UnknownTrainer(id.to_string()))?;
        Ok(self.selected_trainer.insert(trainer.clone()))
    }

    pub fn deselect(&mut self) {
        self.selected_trainer = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Trainer> {
        self.selected_trainer.as_ref()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TrainerError {
    #[error("unknown trainer: {0}")]
    UnknownTrainer(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn trainer(id: &str, name: &str) -> Trainer {
        Trainer {
            id: id.to_string(),
            name: name.to_string(),
            specialty: None,
            description: None,
            image: None,
        }
    }

    fn selection() -> TrainerSelection {
        TrainerSelection {
            available_trainers: vec![trainer("1", "Alex"), trainer("2", "Sam")],
            selected_trainer: None,
        }
    }

    #[rstest]
    #[case("1", Ok(trainer("1", "Alex")))]
    #[case("2", Ok(trainer("2", "Sam")))]
    #[case("3", Err(TrainerError::UnknownTrainer("3".to_string())))]
    fn test_trainer_selection_select(
        #[case] id: &str,
        #[case] expected: Result<Trainer, TrainerError>,
    ) {
        let mut selection = selection();
        assert_eq!(selection.select(id).cloned(), expected);
        assert_eq!(selection.selected().cloned(), expected.ok());
    }

    #[test]
    fn test_trainer_selection_select_unknown_keeps_selection() {
        let mut selection = selection();
        selection.select("2").unwrap();

        assert!(selection.select("9").is_err());
        assert_eq!(selection.selected(), Some(&trainer("2", "Sam")));

        selection.deselect();
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_trainer_selection_json() {
        let mut selection = selection();
        selection.select("1").unwrap();

        assert_eq!(
            serde_json::to_value(&selection).unwrap(),
            serde_json::json!({
                "availableTrainers": [
                    { "id": "1", "name": "Alex" },
                    { "id": "2", "name": "Sam" }
                ],
                "selectedTrainer": { "id": "1", "name": "Alex" }
            })
        );
    }

    #[test]
    fn test_trainer_selection_from_json() {
        let selection: TrainerSelection = serde_json::from_str(
            r#"{
                "availableTrainers": [
                    { "id": "1", "name": "Alex", "specialty": "strength", "image": "img/alex.png" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            selection,
            TrainerSelection {
                available_trainers: vec![Trainer {
                    specialty: Some("strength".to_string()),
                    image: Some("img/alex.png".to_string()),
                    ..trainer("1", "Alex")
                }],
                selected_trainer: None,
            }
        );
    }
}
