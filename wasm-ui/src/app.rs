//! Main application component.

use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

use menagerie_rs::{AnimalForm, AnimalId, Roster};

use crate::api;
use crate::components::{AnimalsPanel, ErrorNotice, NewAnimalForm, SpeciesPanel};

/// How long an error notice stays on screen.
const NOTICE_MILLIS: u32 = 3_000;

/// Main application state.
#[derive(Clone, PartialEq, Default)]
pub struct AppState {
    /// Latest snapshot fetched from the backend.
    pub roster: Roster,
    /// True once the first refresh has finished, successfully or not.
    pub loaded: bool,
    /// Raw values of the add-animal form fields.
    pub form: AnimalForm,
    /// Transient error text shown in the notice area.
    pub notice: Option<String>,
    /// Bumped whenever a notice is shown so the auto-clear timer restarts.
    pub notice_seq: u32,
}

/// State transitions driven by UI events and finished requests.
pub enum Msg {
    /// A refresh finished; replace the snapshot.
    RosterLoaded(Roster),
    /// A request failed or the form was rejected; show the text.
    Failed(String),
    /// The user edited the name field.
    NameInput(String),
    /// The user edited the species field.
    SpeciesInput(String),
    /// The user edited the age field.
    AgeInput(String),
    /// A create succeeded; reset the form for the next entry.
    FormAccepted,
    /// The notice timer fired.
    NoticeExpired,
}

impl Reducible for AppState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Msg) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Msg::RosterLoaded(roster) => {
                next.roster = roster;
                next.loaded = true;
            }
            Msg::Failed(text) => {
                next.loaded = true;
                next.notice = Some(text);
                next.notice_seq = next.notice_seq.wrapping_add(1);
            }
            Msg::NameInput(value) => next.form.name = value,
            Msg::SpeciesInput(value) => next.form.species = value,
            Msg::AgeInput(value) => next.form.age = value,
            Msg::FormAccepted => next.form.clear(),
            Msg::NoticeExpired => next.notice = None,
        }
        next.into()
    }
}

/// Issue the two read calls together and install the joint result.
///
/// Both requests are in flight before either is awaited, and the tables
/// re-render once when both have answered. On failure the previous
/// snapshot stays on screen and the notice shows what went wrong.
async fn refresh(state: UseReducerHandle<AppState>) {
    let (animals, species) = futures::join!(api::fetch_animals(), api::fetch_species_counts());
    match (animals, species) {
        (Ok(animals), Ok(species)) => {
            log::debug!("refreshed: {} animals, {} species", animals.len(), species.len());
            state.dispatch(Msg::RosterLoaded(Roster::new(animals, species)));
        }
        (Err(e), _) | (_, Err(e)) => {
            log::error!("refresh failed: {e}");
            state.dispatch(Msg::Failed(e.to_string()));
        }
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);

    // Initial load on mount.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(refresh(state));
        });
    }

    // Notice auto-clear timer: each shown notice arms a fresh timeout,
    // and the effect cleanup cancels the previous one.
    {
        let state = state.clone();
        let has_notice = state.notice.is_some();

        use_effect_with((state.notice_seq, has_notice), move |_| {
            let timeout_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

            if has_notice {
                let state = state.clone();
                let handle = Timeout::new(NOTICE_MILLIS, move || {
                    state.dispatch(Msg::NoticeExpired);
                });
                *timeout_handle.borrow_mut() = Some(handle);
            }

            let cleanup_handle = timeout_handle.clone();
            move || {
                if let Some(handle) = cleanup_handle.borrow_mut().take() {
                    handle.cancel();
                }
            }
        });
    }

    let on_refresh = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            spawn_local(refresh(state.clone()));
        })
    };

    let on_delete = {
        let state = state.clone();
        Callback::from(move |id: AnimalId| {
            let state = state.clone();
            spawn_local(async move {
                match api::delete_animal(id).await {
                    Ok(()) => {
                        log::info!("deleted animal {id}");
                        refresh(state).await;
                    }
                    Err(e) => {
                        log::error!("delete of animal {id} failed: {e}");
                        state.dispatch(Msg::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    // Validation runs before any request: a rejected form shows a notice
    // and keeps its input, with nothing sent over the wire.
    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let state = state.clone();
            match state.form.validate() {
                Err(e) => state.dispatch(Msg::Failed(e.to_string())),
                Ok(payload) => {
                    spawn_local(async move {
                        match api::create_animal(&payload).await {
                            Ok(created) => {
                                log::info!("added animal {} (id {})", created.name, created.id);
                                state.dispatch(Msg::FormAccepted);
                                refresh(state).await;
                            }
                            Err(e) => {
                                log::error!("create failed: {e}");
                                state.dispatch(Msg::Failed(e.to_string()));
                            }
                        }
                    });
                }
            }
        })
    };

    let on_name_change = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(Msg::NameInput(value)))
    };

    let on_species_change = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(Msg::SpeciesInput(value)))
    };

    let on_age_change = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(Msg::AgeInput(value)))
    };

    html! {
        <div class="app">
            <header class="header">
                <div class="header-left">
                    <h1>{ "menagerie-rs" }</h1>
                    <p class="subtitle">{ "Animal Roster" }</p>
                </div>
                <div class="header-right">
                    <button class="refresh-button" onclick={on_refresh}>
                        { "Refresh" }
                    </button>
                </div>
            </header>

            <ErrorNotice text={state.notice.clone()} />

            <main class="main">
                <div class="panels">
                    <AnimalsPanel
                        animals={state.roster.animals().to_vec()}
                        loaded={state.loaded}
                        on_delete={on_delete}
                    />

                    <SpeciesPanel
                        species={state.roster.species().to_vec()}
                        loaded={state.loaded}
                    />

                    <NewAnimalForm
                        form={state.form.clone()}
                        on_name_change={on_name_change}
                        on_species_change={on_species_change}
                        on_age_change={on_age_change}
                        on_submit={on_submit}
                    />
                </div>
            </main>

            <footer class="footer">
                <div class="footer-row">
                    <span>{ format!("Backend: {}", api::API_BASE_URL) }</span>
                </div>
                <div class="footer-row">
                    <span class="footer-left">
                        <a href="https://github.com/softwarewrighter/menagerie-rs" target="_blank">{ "GitHub" }</a>
                        { " | MIT License | " }
                        { "\u{00A9} 2026 Michael A Wright" }
                    </span>
                    <span class="footer-build">
                        { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </div>
            </footer>
        </div>
    }
}
