use std::collections::VecDeque;

use crate::animals::{AnimalsApi, NewAnimal};

use super::effect::Effect;
use super::msg::Msg;
use super::state::PageState;
use super::update::update;
use super::view::PageView;

/// One page session: owns the state and runs effects against `api`.
///
/// Effects run one at a time on the calling task, so a dispatch returns
/// only once every follow-up (such as the reload after a create) is done.
/// Callers that want to interleave requests use [`PageSession::apply`] and
/// [`PageSession::perform`] directly.
pub struct PageSession<A> {
    api: A,
    state: PageState,
}

impl<A: AnimalsApi> PageSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: PageState::new(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn view(&self) -> PageView {
        self.state.view()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// First render: loads the list once.
    pub async fn mount(&mut self) {
        self.dispatch(Msg::Mounted).await;
    }

    pub async fn refresh(&mut self) {
        self.dispatch(Msg::RefreshClicked).await;
    }

    /// Type `name` into the form and submit it.
    pub async fn submit(&mut self, name: impl Into<String>) {
        self.dispatch(Msg::NewNameChanged(name.into())).await;
        self.dispatch(Msg::Submitted).await;
    }

    /// Apply `msg` and run its effects, and theirs, to completion.
    pub async fn dispatch(&mut self, msg: Msg) {
        let mut pending = VecDeque::from([msg]);
        while let Some(msg) = pending.pop_front() {
            for effect in self.apply(msg) {
                pending.push_back(self.perform(effect).await);
            }
        }
    }

    /// Apply one message without running its effects.
    pub fn apply(&mut self, msg: Msg) -> Vec<Effect> {
        let (next, effects) = update(std::mem::take(&mut self.state), msg);
        self.state = next;
        effects
    }

    /// Run one effect and return the message describing its outcome.
    pub async fn perform(&self, effect: Effect) -> Msg {
        match effect {
            Effect::FetchAnimals { load } => {
                tracing::debug!(load, "Loading animals");
                let result = self.api.list().await;
                match &result {
                    Ok(animals) => tracing::debug!(load, count = animals.len(), "Animals loaded"),
                    Err(e) => tracing::warn!(load, error = %e, "Failed to load animals"),
                }
                Msg::LoadFinished { load, result }
            }
            Effect::CreateAnimal { name } => {
                tracing::debug!(name = %name, "Creating animal");
                let result = self.api.create(NewAnimal { name }).await;
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "Failed to create animal");
                }
                Msg::CreateFinished(result)
            }
        }
    }
}
