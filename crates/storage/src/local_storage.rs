use std::collections::VecDeque;

use ::log::debug;
use fitdeck_web_app::{TrainerRepository, TrainerSelection, log};
use gloo_net::http::Request;
use gloo_storage::Storage as GlooStorage;

use crate::rest::{GlooNetSendRequest, SendRequest, fetch};

const KEY_TRAINER_SELECTION: &str = "trainer selection";
const KEY_LOG: &str = "log";

pub struct UI<S: SendRequest> {
    pub sender: S,
    pub trainers_document: String,
}

impl UI<GlooNetSendRequest> {
    #[must_use]
    pub fn new(config: &crate::Config) -> Self {
        Self {
            sender: GlooNetSendRequest,
            trainers_document: config.trainers_document.clone(),
        }
    }
}

impl<S: SendRequest> UI<S> {
    async fn read_trainers_document(&self) -> Result<TrainerSelection, String> {
        debug!("no stored trainer selection, reading {}", self.trainers_document);
        let request = Request::get(&self.trainers_document)
            .build()
            .map_err(|err| err.to_string())?;
        fetch(&self.sender, request)
            .await
            .map_err(|err| format!("failed to read {}: {err}", self.trainers_document))
    }
}

impl<S: SendRequest> TrainerRepository for UI<S> {
    async fn read_trainer_selection(&self) -> Result<TrainerSelection, String> {
        match gloo_storage::LocalStorage::get(KEY_TRAINER_SELECTION) {
            Ok(selection) => Ok(selection),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => {
                self.read_trainers_document().await
            }
            Err(err) => Err(err.to_string()),
        }
    }

    async fn write_trainer_selection(&self, selection: TrainerSelection) -> Result<(), String> {
        gloo_storage::LocalStorage::set(KEY_TRAINER_SELECTION, selection)
            .map_err(|err| err.to_string())
    }
}

pub struct Log;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
