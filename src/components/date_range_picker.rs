use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    pub start: AttrValue,
    pub end: AttrValue,
    pub on_start_change: Callback<String>,
    pub on_end_change: Callback<String>,
}

fn value_callback(callback: &Callback<String>) -> Callback<Event> {
    let callback = callback.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        callback.emit(input.value());
    })
}

#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    html! {
        <div class="date-range">
            <div class="form-group">
                <label for="range-start">{ "From:" }</label>
                <input
                    id="range-start"
                    class="datetime-input"
                    type="datetime-local"
                    value={props.start.clone()}
                    onchange={value_callback(&props.on_start_change)}
                />
            </div>
            <div class="form-group">
                <label for="range-end">{ "To:" }</label>
                <input
                    id="range-end"
                    class="datetime-input"
                    type="datetime-local"
                    value={props.end.clone()}
                    onchange={value_callback(&props.on_end_change)}
                />
            </div>
        </div>
    }
}
