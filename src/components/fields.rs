use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldFrameProps {
    pub name: &'static str,
    pub label: &'static str,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub hint: Option<String>,
    pub children: Children,
}

/// Label, control and the inline error shared by every form field.
#[function_component(FieldFrame)]
pub fn field_frame(props: &FieldFrameProps) -> Html {
    html! {
        <div class="form-field">
            <label for={props.name}>{props.label}</label>
            { for props.children.iter() }
            <div class="field-footer">
                if let Some(error) = &props.error {
                    <p class="field-error">{error}</p>
                }
                if let Some(hint) = &props.hint {
                    <p class="field-hint">{hint}</p>
                }
            </div>
        </div>
    }
}

fn input_classes(has_icon: bool, error: &Option<String>) -> Classes {
    classes!(
        "input-field",
        has_icon.then_some("with-icon"),
        error.is_some().then_some("has-error")
    )
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub name: &'static str,
    pub label: &'static str,
    #[prop_or("text")]
    pub input_type: &'static str,
    pub icon: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_input: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <FieldFrame name={props.name} label={props.label} error={props.error.clone()}>
            <div class="input-wrapper">
                <span class="input-icon">{props.icon}</span>
                <input
                    type={props.input_type}
                    id={props.name}
                    name={props.name}
                    value={props.value.clone()}
                    placeholder={props.placeholder}
                    class={input_classes(true, &props.error)}
                    {oninput}
                />
            </div>
        </FieldFrame>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub name: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub prompt: &'static str,
    pub options: Vec<&'static str>,
    pub value: String,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_input: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_input.emit(select.value());
        })
    };

    html! {
        <FieldFrame name={props.name} label={props.label} error={props.error.clone()}>
            <div class="input-wrapper">
                <span class="input-icon">{props.icon}</span>
                <select
                    id={props.name}
                    name={props.name}
                    class={input_classes(true, &props.error)}
                    {onchange}
                >
                    <option value="" selected={props.value.is_empty()}>{props.prompt}</option>
                    { for props.options.iter().map(|option| html! {
                        <option value={*option} selected={props.value == *option}>{*option}</option>
                    }) }
                </select>
            </div>
        </FieldFrame>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub hint: Option<String>,
    pub on_input: Callback<String>,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(area.value());
        })
    };

    html! {
        <FieldFrame
            name={props.name}
            label={props.label}
            error={props.error.clone()}
            hint={props.hint.clone()}
        >
            <textarea
                id={props.name}
                name={props.name}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                placeholder={props.placeholder}
                class={classes!(input_classes(false, &props.error), "no-resize")}
                {oninput}
            />
        </FieldFrame>
    }
}
