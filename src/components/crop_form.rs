use crate::models::crop::{CropRecommendation, SoilField, SoilInputs};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CropFormProps {
    pub on_submit: Callback<SoilInputs>,
    #[prop_or(false)]
    pub loading: bool,
}

/// Seven-field soil and weather form. Values stay as typed until submit.
#[function_component(CropForm)]
pub fn crop_form(props: &CropFormProps) -> Html {
    let inputs = use_state(SoilInputs::default);

    let onsubmit = {
        let inputs = inputs.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*inputs).clone());
        })
    };

    html! {
        <form class="crop-form" {onsubmit}>
            <div class="crop-fields">
                {
                    SoilField::ALL.into_iter().map(|field| {
                        let oninput = {
                            let inputs = inputs.clone();
                            Callback::from(move |e: InputEvent| {
                                let target: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*inputs).clone();
                                next.set(field, target.value());
                                inputs.set(next);
                            })
                        };
                        html! {
                            <label class="crop-field">
                                <span>{field.label()}</span>
                                <input
                                    type="number"
                                    step="any"
                                    name={field.key()}
                                    value={(*inputs).get(field).to_string()}
                                    {oninput}
                                />
                            </label>
                        }
                    }).collect::<Html>()
                }
            </div>
            <button type="submit" class="primary-button" disabled={props.loading}>
                { if props.loading { "Loading..." } else { "Recommend Crop" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct CropResultProps {
    pub recommendation: Rc<CropRecommendation>,
}

/// Top crop followed by the alternatives in the order the backend ranked them.
#[function_component(CropResult)]
pub fn crop_result(props: &CropResultProps) -> Html {
    let rec = &props.recommendation;

    html! {
        <div class="crop-result">
            <h3>{"Recommended crop"}</h3>
            <p class="crop-top">{&rec.recommended_crop}</p>
            if !rec.alternatives.is_empty() {
                <ol class="crop-alternatives">
                    {
                        rec.alternatives.iter().map(|alt| html! {
                            <li>
                                <span class="crop-name">{&alt.crop}</span>
                                <span class="crop-confidence">{format!("{:.1}%", alt.confidence)}</span>
                            </li>
                        }).collect::<Html>()
                    }
                </ol>
            }
        </div>
    }
}
