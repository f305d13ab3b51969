use std::collections::VecDeque;

use ::log::{debug, error};

use crate::{TrainerRepository, TrainerSelection, TrainerService, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: TrainerRepository> TrainerService for Service<R> {
    async fn get_trainer_selection(&self) -> Result<TrainerSelection, String> {
        self.repository.read_trainer_selection().await.inspect_err(|err| {
            error!("failed to get trainer selection: {err}");
        })
    }

    async fn set_trainer_selection(&self, selection: TrainerSelection) -> Result<(), String> {
        self.repository
            .write_trainer_selection(selection)
            .await
            .inspect_err(|err| error!("failed to set trainer selection: {err}"))
    }

    async fn select_trainer(&self, id: &str) -> Result<TrainerSelection, String> {
        let mut selection = self.get_trainer_selection().await?;
        selection.select(id).map_err(|err| err.to_string())?;
        debug!("selected trainer {id}");
        self.set_trainer_selection(selection.clone()).await?;
        Ok(selection)
    }
}
