use gloo::console::log;
use gloo::net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::{ErrorBody, UploadResponse, VideoListResponse, VideoRecord};

/// Multipart field the service reads the upload from.
const UPLOAD_FIELD: &str = "video";

/// Upload a video file, returning the service's confirmation message.
pub async fn upload_video(config: &ApiConfig, file: &File) -> Result<String, ApiError> {
    let form = upload_form(file)?;

    log!(format!("Uploading {} ({} bytes)", file.name(), file.size()));

    // The browser fills in the multipart boundary; no Content-Type here.
    let response = Request::post(&config.upload_url())
        .body(form)?
        .send()
        .await?;
    let response = check_status(response).await?;

    // Any 2xx means the file was stored, whatever the body says.
    let body = response.json::<UploadResponse>().await.unwrap_or_default();
    Ok(body.confirmation())
}

/// Multipart body carrying `file` under [`UPLOAD_FIELD`].
fn upload_form(file: &File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Transport(format!("{:?}", e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| ApiError::Transport(format!("{:?}", e)))?;
    Ok(form)
}

/// Fetch every video the service knows about.
pub async fn fetch_videos(config: &ApiConfig) -> Result<Vec<VideoRecord>, ApiError> {
    let response = Request::get(&config.videos_url()).send().await?;
    let response = check_status(response).await?;

    let body: VideoListResponse = response.json().await?;
    Ok(body.videos)
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    // The body is only a hint; a missing or non-JSON body still reports the status.
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    Err(ApiError::Server { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_goes_in_the_video_field() {
        assert_eq!(UPLOAD_FIELD, "video");
    }
}
