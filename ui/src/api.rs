//! API client for communicating with the ApotheCare server

use crate::types::*;
use gloo_net::http::Request;

/// GET request returning JSON
pub async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        let status = resp.status();
        if let Ok(err) = resp.json::<ApiError>().await {
            return Err(err.error);
        }
        return Err(format!("Request failed with status {}", status));
    }

    resp.json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST request with a JSON body
pub async fn post_json<T, R>(url: &str, body: &T) -> Result<R, String>
where
    T: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let resp = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        let status = resp.status();
        if let Ok(err) = resp.json::<ApiError>().await {
            return Err(err.error);
        }
        return Err(format!("Request failed with status {}", status));
    }

    resp.json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Send a message to the pharmacist assistant
pub async fn send_chat_message(base_url: &str, message: &str) -> Result<ChatbotReply, String> {
    let url = format!("{}/api/chatbot", base_url);
    let body = ChatbotRequest {
        message: message.to_string(),
    };
    post_json::<_, ChatbotReply>(&url, &body).await
}

/// Check the API health endpoint
pub async fn fetch_health(base_url: &str) -> Result<HealthResponse, String> {
    let url = format!("{}/api/health", base_url);
    fetch_json(&url).await
}

/// Upload a product image to the external product backend.
///
/// One file, one request. The backend answers with the public URL of the
/// stored image.
pub async fn upload_product_image(
    base_url: &str,
    product_id: &str,
    file: web_sys::File,
) -> Result<String, String> {
    let url = format!("{}/api/products/{}/image", base_url, product_id);

    let form = web_sys::FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| "Failed to attach file".to_string())?;

    let resp = Request::post(&url)
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        let status = resp.status();
        if let Ok(err) = resp.json::<ApiError>().await {
            return Err(err.error);
        }
        return Err(format!("Upload failed with status {}", status));
    }

    let upload: UploadResponse = resp
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(upload.image_url)
}
