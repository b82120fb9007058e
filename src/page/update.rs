use super::effect::Effect;
use super::msg::Msg;
use super::state::{Operation, PageState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            if state.mounted {
                return (state, Vec::new());
            }
            state.mounted = true;
            vec![Effect::FetchAnimals {
                load: state.begin_load(),
            }]
        }
        Msg::RefreshClicked => vec![Effect::FetchAnimals {
            load: state.begin_load(),
        }],
        Msg::FilterChanged(filter) => {
            state.filter = filter;
            Vec::new()
        }
        Msg::NewNameChanged(name) => {
            // Input is disabled while a create is in flight.
            if !state.submitting {
                state.new_name = name;
            }
            Vec::new()
        }
        Msg::Submitted => {
            if state.submitting {
                return (state, Vec::new());
            }
            let name = state.new_name.trim();
            if name.is_empty() {
                return (state, Vec::new());
            }
            let name = name.to_string();
            state.submitting = true;
            state.error = None;
            vec![Effect::CreateAnimal { name }]
        }
        Msg::LoadFinished { load, result } => {
            match result {
                Ok(animals) => {
                    state.animals = animals;
                    state.loaded_once = true;
                }
                Err(e) => state.fail(Operation::Load, e.to_string()),
            }
            state.loading = false;
            if state.reload_after_create == Some(load) {
                state.reload_after_create = None;
                state.submitting = false;
            }
            Vec::new()
        }
        Msg::CreateFinished(Ok(())) => {
            state.new_name.clear();
            let load = state.begin_load();
            state.reload_after_create = Some(load);
            vec![Effect::FetchAnimals { load }]
        }
        Msg::CreateFinished(Err(e)) => {
            state.fail(Operation::Create, e.to_string());
            state.submitting = false;
            Vec::new()
        }
    };

    (state, effects)
}
