//! API client for the embedchat backend
//!
//! Every failure is logged and shown in a blocking alert by the caller via
//! [`report_error`]; nothing is retried.

use embedchat_core::endpoints::UPLOAD_FIELD;
use embedchat_core::files::check_upload;
use embedchat_core::insights::parse_key_topics;
use embedchat_core::types::{ApiError, SearchRequest, SignInRequest, SignUpRequest};
use embedchat_core::{
    ChatEnvelope, DataDistribution, Endpoints, Error, FileLibrary, Result, StoredFile,
    TopicSettings, User,
};
use gloo_net::http::{Request, Response};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

fn network_error(e: gloo_net::Error) -> Error {
    Error::Network(e.to_string())
}

fn js_error(value: JsValue) -> Error {
    Error::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// Turn a non-2xx response into an [`Error::Status`], keeping the
/// backend's `{"error": ...}` message when there is one.
async fn check_status(resp: Response) -> Result<Response> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp.json::<ApiError>().await.ok().map(|e| e.error);
    Err(Error::status(status, message))
}

/// GET and decode a JSON body
pub async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T> {
    let resp = Request::get(url).send().await.map_err(network_error)?;
    let resp = check_status(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

/// POST a JSON body and return the raw response
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<Response> {
    let req = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize request: {}", e)))?;

    let resp = req.send().await.map_err(network_error)?;
    check_status(resp).await
}

/// Sign in with email and password. `Ok(None)` when the backend answers
/// with an empty profile.
pub async fn sign_in(endpoints: &Endpoints, email: &str, password: &str) -> Result<Option<User>> {
    let body = SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let resp = post_json(&endpoints.sign_in(), &body).await?;
    let text = resp.text().await.map_err(|e| Error::Decode(e.to_string()))?;
    User::from_profile_body(&text)
}

/// Create an account
pub async fn sign_up(
    endpoints: &Endpoints,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Option<User>> {
    let body = SignUpRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    let resp = post_json(&endpoints.sign_up(), &body).await?;
    let text = resp.text().await.map_err(|e| Error::Decode(e.to_string()))?;
    User::from_profile_body(&text)
}

/// List the user's uploaded files
pub async fn list_files(endpoints: &Endpoints, user_id: &str) -> Result<Vec<StoredFile>> {
    get_json(&endpoints.list_files(user_id)).await
}

/// Upload one file as multipart field `file`
pub async fn upload_file(endpoints: &Endpoints, user_id: &str, file: &File) -> Result<()> {
    let name = file.name();
    check_upload(&name)?;

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &name)
        .map_err(js_error)?;

    let resp = Request::post(&endpoints.upload(user_id))
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    check_status(resp).await?;

    tracing::info!("Uploaded {}", name);
    Ok(())
}

/// Send a chat query
pub async fn search(endpoints: &Endpoints, request: &SearchRequest) -> Result<ChatEnvelope> {
    let resp = post_json(&endpoints.search(), request).await?;
    resp.json::<ChatEnvelope>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

/// Fetch the user's key topics
pub async fn key_topics(
    endpoints: &Endpoints,
    user_id: &str,
    settings: TopicSettings,
) -> Result<Vec<String>> {
    let value: serde_json::Value = get_json(&endpoints.key_topics(user_id, settings)).await?;
    parse_key_topics(value)
}

/// Fetch per-type file counts
pub async fn data_distribution(endpoints: &Endpoints, user_id: &str) -> Result<DataDistribution> {
    get_json(&endpoints.data_distribution(user_id)).await
}

/// Load the sidebar's file list
pub fn load_files(endpoints: Endpoints, user_id: String, library: RwSignal<FileLibrary>) {
    spawn_local(async move {
        match list_files(&endpoints, &user_id).await {
            Ok(files) => library.update(|l| l.replace(files)),
            Err(e) => report_error("Failed to load files", &e),
        }
    });
}

/// Log a failure and show it in a blocking alert
pub fn report_error(context: &str, error: &Error) {
    tracing::error!("{}: {}", context, error);
    let message = format!("{}: {}", context, error.user_message());
    if window().alert_with_message(&message).is_err() {
        tracing::warn!("Could not show alert dialog");
    }
}
