//! UI components for the animal roster.

use yew::prelude::*;

use menagerie_rs::{Animal, AnimalForm, AnimalId, SpeciesCount};

/// Animals table with a delete button per row.
#[derive(Properties, PartialEq)]
pub struct AnimalsPanelProps {
    pub animals: Vec<Animal>,
    pub loaded: bool,
    pub on_delete: Callback<AnimalId>,
}

#[function_component(AnimalsPanel)]
pub fn animals_panel(props: &AnimalsPanelProps) -> Html {
    html! {
        <div class="panel animals-panel">
            <div class="panel-header">
                <h2>{ "Animals" }</h2>
                if props.loaded {
                    <span class="stats">{ format!("{} on file", props.animals.len()) }</span>
                }
            </div>
            <div class="panel-content">
                if !props.loaded {
                    <p class="hint">{ "Loading..." }</p>
                } else if props.animals.is_empty() {
                    <p class="hint">{ "No animals on file." }</p>
                } else {
                    <table class="roster-table">
                        <thead>
                            <tr>
                                <th>{ "Name" }</th>
                                <th>{ "Species" }</th>
                                <th class="text-right">{ "Age" }</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for props.animals.iter().map(|animal| {
                                let on_click = {
                                    let on_delete = props.on_delete.clone();
                                    let id = animal.id;
                                    Callback::from(move |_: MouseEvent| {
                                        on_delete.emit(id);
                                    })
                                };
                                html! {
                                    <tr key={animal.id}>
                                        <td>{ &animal.name }</td>
                                        <td>{ &animal.species }</td>
                                        <td class="text-right">{ animal.age }</td>
                                        <td class="text-right">
                                            <button class="delete-button" onclick={on_click}>
                                                { "Delete" }
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}

/// Per-species tally table, busiest species first.
#[derive(Properties, PartialEq)]
pub struct SpeciesPanelProps {
    pub species: Vec<SpeciesCount>,
    pub loaded: bool,
}

#[function_component(SpeciesPanel)]
pub fn species_panel(props: &SpeciesPanelProps) -> Html {
    html! {
        <div class="panel species-panel">
            <div class="panel-header">
                <h2>{ "Species" }</h2>
                if props.loaded {
                    <span class="stats">{ format!("{} distinct", props.species.len()) }</span>
                }
            </div>
            <div class="panel-content">
                if !props.loaded {
                    <p class="hint">{ "Loading..." }</p>
                } else if props.species.is_empty() {
                    <p class="hint">{ "No species on file." }</p>
                } else {
                    <table class="roster-table">
                        <thead>
                            <tr>
                                <th>{ "Species" }</th>
                                <th class="text-right">{ "Count" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for props.species.iter().map(|tally| {
                                html! {
                                    <tr key={tally.species.clone()}>
                                        <td>{ &tally.species }</td>
                                        <td class="text-right">{ tally.count }</td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}

/// Entry form for a new animal.
///
/// The fields are controlled: every keystroke flows up through the
/// change callbacks and the current values come back down as props.
#[derive(Properties, PartialEq)]
pub struct NewAnimalFormProps {
    pub form: AnimalForm,
    pub on_name_change: Callback<String>,
    pub on_species_change: Callback<String>,
    pub on_age_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(NewAnimalForm)]
pub fn new_animal_form(props: &NewAnimalFormProps) -> Html {
    let on_name_input = {
        let on_change = props.on_name_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    let on_species_input = {
        let on_change = props.on_species_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    let on_age_input = {
        let on_change = props.on_age_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    let on_form_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="panel form-panel">
            <div class="panel-header">
                <h2>{ "Add Animal" }</h2>
            </div>
            <div class="panel-content">
                <form class="new-animal-form" onsubmit={on_form_submit}>
                    <label>
                        { "Name" }
                        <input
                            type="text"
                            value={props.form.name.clone()}
                            oninput={on_name_input}
                            placeholder="Rex"
                        />
                    </label>
                    <label>
                        { "Species" }
                        <input
                            type="text"
                            value={props.form.species.clone()}
                            oninput={on_species_input}
                            placeholder="Dog"
                        />
                    </label>
                    <label>
                        { "Age" }
                        <input
                            type="number"
                            min="0"
                            value={props.form.age.clone()}
                            oninput={on_age_input}
                            placeholder="3"
                        />
                    </label>
                    <button type="submit" class="add-button">
                        { "Add" }
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Transient error banner.
///
/// The wrapper div is always rendered so the layout does not jump when
/// a notice appears or expires.
#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub text: Option<String>,
}

#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <div class="error-notice" role="alert">
            if let Some(text) = &props.text {
                <span class="error">{ text }</span>
            }
        </div>
    }
}
