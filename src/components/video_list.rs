use yew::prelude::*;

use crate::model::VideoRecord;

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Vec<VideoRecord>,
    #[prop_or(false)]
    pub loading: bool,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    if props.videos.is_empty() {
        let text = if props.loading { "Loading videos..." } else { "No videos to show" };
        return html! { <p class="video-list-empty">{ text }</p> };
    }

    html! {
        <div class="video-list">
            {
                for props.videos.iter().map(|video| html! {
                    <div class="video-item">
                        <h3>{ &video.name }</h3>
                        <video class="video-player" controls=true preload="metadata" src={video.url.clone()} width="600"></video>
                    </div>
                })
            }
        </div>
    }
}
