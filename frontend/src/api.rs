use gloo_net::http::{Request, RequestBuilder, Response};
use iqtest_shared::{
    backend::BackendError, Article, ArticleForm, Author, Category, LeaderboardEntry, TagInfo,
};
use js_sys::Date;
use serde::{de::DeserializeOwned, Deserialize};

// API base URL - 编译时从环境变量读取，默认本地开发地址
pub const API_BASE: &str = match option_env!("IQTEST_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

#[derive(Debug, Deserialize)]
struct SlugAvailability {
    available: bool,
}

fn no_cache(request: RequestBuilder) -> RequestBuilder {
    request
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::from_status(response.status(), body));
    }
    response
        .json()
        .await
        .map_err(|e| BackendError::Decode(format!("{e:?}")))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, BackendError> {
    let response = no_cache(Request::get(url))
        .send()
        .await
        .map_err(|e| BackendError::Network(format!("{e:?}")))?;
    read_json(response).await
}

pub async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, BackendError> {
    let url = format!("{}/leaderboard?_ts={}", API_BASE, Date::now() as u64);
    get_json(&url).await
}

pub async fn fetch_article(id: &str) -> Result<Article, BackendError> {
    let url = format!("{}/articles/{}", API_BASE, urlencoding::encode(id));
    get_json(&url).await
}

pub async fn create_article(form: &ArticleForm) -> Result<Article, BackendError> {
    let url = format!("{}/articles", API_BASE);
    let response = Request::post(&url)
        .json(form)
        .map_err(|e| BackendError::Decode(format!("{e:?}")))?
        .send()
        .await
        .map_err(|e| BackendError::Network(format!("{e:?}")))?;
    read_json(response).await
}

pub async fn update_article(id: &str, form: &ArticleForm) -> Result<Article, BackendError> {
    let url = format!("{}/articles/{}", API_BASE, urlencoding::encode(id));
    let response = Request::put(&url)
        .json(form)
        .map_err(|e| BackendError::Decode(format!("{e:?}")))?
        .send()
        .await
        .map_err(|e| BackendError::Network(format!("{e:?}")))?;
    read_json(response).await
}

pub async fn is_slug_available(slug: &str, exclude_id: Option<&str>) -> Result<bool, BackendError> {
    let mut url = format!("{}/articles/slug-available?slug={}", API_BASE, urlencoding::encode(slug));
    if let Some(id) = exclude_id {
        url.push_str("&exclude=");
        url.push_str(&urlencoding::encode(id));
    }
    let body: SlugAvailability = get_json(&url).await?;
    Ok(body.available)
}

pub async fn fetch_categories() -> Result<Vec<Category>, BackendError> {
    get_json(&format!("{}/categories", API_BASE)).await
}

pub async fn fetch_authors() -> Result<Vec<Author>, BackendError> {
    get_json(&format!("{}/authors", API_BASE)).await
}

pub async fn fetch_tags() -> Result<Vec<TagInfo>, BackendError> {
    get_json(&format!("{}/tags", API_BASE)).await
}
