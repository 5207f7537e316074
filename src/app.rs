use crate::api;
use crate::components::{
    activity_log::ActivityLog,
    date_range_picker::DateRangePicker,
    file_input::FileInput,
    video_list::VideoList,
};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::VideoRecord;
use crate::state::{Effect, WidgetState};
use gloo::console::{error, log};
use gloo::dialogs::alert;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub api: ApiConfig,
}

pub struct App {
    state: WidgetState<File>,
    file_input: NodeRef,
    logs: Vec<String>,
}

pub enum Msg {
    FileSelected(File),
    Upload,
    UploadFinished(Result<String, ApiError>),
    FetchVideos,
    VideosFetched(Result<Vec<VideoRecord>, ApiError>),
    SetStartDate(String),
    SetEndDate(String),
    ApplyFilter,
    ClearFilter,
    AddLog(String),
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        log!(format!("Video service at {}", ctx.props().api.base_url()));
        ctx.link().send_message(Msg::FetchVideos);

        Self {
            state: WidgetState::new(),
            file_input: NodeRef::default(),
            logs: vec!["Video archive ready".to_string()],
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(file) => {
                self.add_log(ctx, format!("File selected: {}", file.name()));
                self.state.select_file(file);
                true
            },
            Msg::Upload => {
                let file = match self.state.begin_upload() {
                    Ok(file) => file,
                    Err(err) => {
                        self.report(ctx, err.to_string());
                        return true;
                    }
                };
                self.add_log(ctx, format!("Uploading {}...", file.name()));

                let config = ctx.props().api.clone();
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::upload_video(&config, &file).await;
                    link.send_message(Msg::UploadFinished(result));
                });
                true
            },
            Msg::UploadFinished(result) => {
                if let Err(err) = &result {
                    error!(format!("Error uploading video: {:?}", err));
                }
                let effects = self.state.finish_upload(result);
                self.run_effects(ctx, effects);
                true
            },
            Msg::FetchVideos => {
                self.state.begin_fetch();

                let config = ctx.props().api.clone();
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::fetch_videos(&config).await;
                    link.send_message(Msg::VideosFetched(result));
                });
                true
            },
            Msg::VideosFetched(result) => {
                match &result {
                    Ok(videos) => self.add_log(ctx, format!("Loaded {} videos", videos.len())),
                    Err(err) => error!(format!("Error fetching videos: {:?}", err)),
                }
                let effects = self.state.finish_fetch(result);
                self.run_effects(ctx, effects);
                true
            },
            Msg::SetStartDate(value) => {
                self.state.set_start_input(value);
                true
            },
            Msg::SetEndDate(value) => {
                self.state.set_end_input(value);
                true
            },
            Msg::ApplyFilter => {
                match self.state.apply_filter() {
                    Ok(shown) => {
                        let total = self.state.catalog().all().len();
                        self.add_log(ctx, format!("Filter applied: {} of {} videos shown", shown, total));
                    },
                    Err(err) => self.report(ctx, err.to_string()),
                }
                true
            },
            Msg::ClearFilter => {
                self.state.clear_filter();
                self.add_log(ctx, "Filter cleared".to_string());
                true
            },
            Msg::AddLog(entry) => {
                self.logs.push(entry);
                true
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let uploading = self.state.is_uploading();
        let filtered = self.state.catalog().range().is_some();
        let videos = self.state.catalog().visible();
        let count = format!("{} of {} videos", videos.len(), self.state.catalog().all().len());

        html! {
            <div class="video-container">
                <header>
                    <h1 class="title">{ "Video Upload and Streaming" }</h1>
                </header>

                <main>
                    <div class="panel upload-section">
                        <h2>{ "Upload Video" }</h2>
                        <FileInput
                            on_file_selected={ctx.link().callback(Msg::FileSelected)}
                            input_ref={self.file_input.clone()}
                            disabled={uploading}
                        />
                        <button
                            class="btn upload-btn"
                            onclick={ctx.link().callback(|_| Msg::Upload)}
                            disabled={uploading}
                        >
                            { if uploading { "Uploading..." } else { "Upload" } }
                        </button>
                    </div>

                    <div class="panel filter-section">
                        <h2>{ "Filter Videos" }</h2>
                        <DateRangePicker
                            start={AttrValue::from(self.state.start_input().to_string())}
                            end={AttrValue::from(self.state.end_input().to_string())}
                            on_start_change={ctx.link().callback(Msg::SetStartDate)}
                            on_end_change={ctx.link().callback(Msg::SetEndDate)}
                        />
                        <div class="button-container">
                            <button class="btn filter-btn" onclick={ctx.link().callback(|_| Msg::ApplyFilter)}>
                                { "Filter" }
                            </button>
                            <button
                                class="btn clear-btn"
                                onclick={ctx.link().callback(|_| Msg::ClearFilter)}
                                disabled={!filtered}
                            >
                                { "Show All" }
                            </button>
                        </div>
                    </div>

                    <div class="panel">
                        <h2>{ "Available Videos" }</h2>
                        <div class="button-container">
                            <button
                                class="btn refresh-btn"
                                onclick={ctx.link().callback(|_| Msg::FetchVideos)}
                                disabled={self.state.is_fetching()}
                            >
                                { "Refresh" }
                            </button>
                            <span class="video-count">
                                { count }
                            </span>
                        </div>
                        <VideoList videos={videos} loading={self.state.is_fetching()} />
                    </div>

                    <div class="panel">
                        <h2>{ "Activity" }</h2>
                        <ActivityLog entries={self.logs.clone()} />
                    </div>
                </main>
            </div>
        }
    }
}

impl App {
    fn add_log(&self, ctx: &Context<Self>, message: String) {
        let timestamp = js_sys::Date::new_0().to_locale_time_string("en-US");
        let log_entry = format!("[{}] {}", timestamp, message);
        ctx.link().send_message(Msg::AddLog(log_entry));
    }

    /// Every user-facing message goes to both the dialog and the activity log.
    fn report(&self, ctx: &Context<Self>, message: String) {
        alert(&message);
        self.add_log(ctx, message);
    }

    fn run_effects(&self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Notify(message) => self.report(ctx, message),
                Effect::ClearFileInput => {
                    if let Some(input) = self.file_input.cast::<HtmlInputElement>() {
                        input.set_value("");
                    }
                },
                Effect::FetchVideos => ctx.link().send_message(Msg::FetchVideos),
            }
        }
    }
}
