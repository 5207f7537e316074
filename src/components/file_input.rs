use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FileInputProps {
    pub on_file_selected: Callback<web_sys::File>,
    /// Lets the owner reset the picker after an upload.
    pub input_ref: NodeRef,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(FileInput)]
pub fn file_input(props: &FileInputProps) -> Html {
    let on_change = {
        let on_file_selected = props.on_file_selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file_selected.emit(file);
            }
        })
    };

    html! {
        <div class="file-input">
            <label for="video-upload" class="file-label">
                { "Select MP4 Video" }
            </label>
            <input
                id="video-upload"
                ref={props.input_ref.clone()}
                type="file"
                accept="video/mp4"
                onchange={on_change}
                disabled={props.disabled}
            />
        </div>
    }
}
