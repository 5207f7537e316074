use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityLogProps {
    pub entries: Vec<String>,
}

#[function_component(ActivityLog)]
pub fn activity_log(props: &ActivityLogProps) -> Html {
    html! {
        <div class="logs-container">
            {
                for props.entries.iter().map(|entry| {
                    html! { <div class="log-entry">{ entry }</div> }
                })
            }
        </div>
    }
}
