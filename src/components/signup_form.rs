use crate::markup::SelectOption;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Current contents of the signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub email: String,
    pub activity: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct SignupFormProps {
    pub options: Vec<SelectOption>,
    pub fields: SignupFields,
    pub on_change: Callback<SignupFields>,
    pub on_submit: Callback<SignupFields>,
}

#[function_component(SignupFormComp)]
pub fn signup_form_comp(props: &SignupFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let fields = props.fields.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(fields.clone());
        })
    };

    let on_email_input = {
        let on_change = props.on_change.clone();
        let fields = props.fields.clone();
        Callback::from(move |event: InputEvent| {
            let input = event.target_unchecked_into::<HtmlInputElement>();
            on_change.emit(SignupFields {
                email: input.value(),
                ..fields.clone()
            });
        })
    };

    let on_activity_change = {
        let on_change = props.on_change.clone();
        let fields = props.fields.clone();
        Callback::from(move |event: Event| {
            let select = event.target_unchecked_into::<HtmlSelectElement>();
            on_change.emit(SignupFields {
                activity: select.value(),
                ..fields.clone()
            });
        })
    };

    html! {
        <form id="signup-form" {onsubmit}>
            <div class="form-group">
                <label for="email">{"Student Email:"}</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@example.com"
                    value={props.fields.email.clone()}
                    oninput={on_email_input}
                />
            </div>
            <div class="form-group">
                <label for="activity">{"Select Activity:"}</label>
                <select id="activity" required=true onchange={on_activity_change}>
                    {for props.options.iter().map(|option| {
                        html! {
                            <option
                                value={option.value.clone()}
                                selected={option.value == props.fields.activity}
                            >
                                {option.label.clone()}
                            </option>
                        }
                    })}
                </select>
            </div>
            <button type="submit">{"Sign Up"}</button>
        </form>
    }
}
