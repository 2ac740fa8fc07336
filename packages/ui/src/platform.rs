//! Platform glue.
//!
//! | Concern | Web (wasm32 + `web`) | Native |
//! |---------|----------------------|--------|
//! | Token storage | `window.localStorage` via [`store::LocalStorage`] | files under `<data_dir>/petspa/` via [`store::FileStore`] |
//! | Config | defaults, API URL fixed at build time | `<config_dir>/petspa/petspa.toml`, then `PETSPA_API_URL` |
//! | Timers | `gloo-timers` | `tokio::time` |
//! | Redirect to login | full page load | left to the router guard |
//! | File download | Blob + object URL + synthetic click | written to the download directory |

use std::time::Duration;

use store::{AppConfig, TokenStore};

/// Environment variable overriding the API base URL on native builds.
pub const API_URL_ENV: &str = "PETSPA_API_URL";

/// Create the platform-appropriate token store.
pub fn make_token_store() -> TokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        TokenStore::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        #[cfg(target_arch = "wasm32")]
        {
            TokenStore::new(store::MemoryStore::new())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let base = dirs::data_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join("petspa");
            TokenStore::new(store::FileStore::new(base))
        }
    }
}

/// Load the application config for this platform.
pub fn load_config() -> AppConfig {
    #[cfg(target_arch = "wasm32")]
    {
        AppConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("petspa");
        load_config_from(&dir, std::env::var(API_URL_ENV).ok())
    }
}

/// Read `petspa.toml` from `dir` and apply an optional URL override.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config_from(dir: &std::path::Path, url_override: Option<String>) -> AppConfig {
    let path = dir.join(AppConfig::filename());
    let config = match std::fs::read_to_string(&path) {
        Ok(text) => AppConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    };
    match url_override.filter(|url| !url.trim().is_empty()) {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Wall-clock time as `HH:MM:SS`.
#[cfg(target_arch = "wasm32")]
pub fn clock_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clock_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Today's date in the local timezone.
pub fn today() -> chrono::NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        chrono::NaiveDate::from_ymd_opt(
            date.get_full_year() as i32,
            date.get_month() + 1,
            date.get_date(),
        )
        .unwrap_or(chrono::NaiveDate::MIN)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now().date_naive()
    }
}

/// Send the browser to the login page with a full reload, unless it is
/// already there.
pub fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let on_login = location
                .pathname()
                .map(|p| p == api::access::LOGIN_VIEW)
                .unwrap_or(false);
            if !on_login {
                let _ = location.set_href(api::access::LOGIN_VIEW);
            }
        }
    }
}

/// How long a download's object URL stays valid after the click.
#[cfg(target_arch = "wasm32")]
const DOWNLOAD_URL_TTL_MS: u32 = 30_000;

/// Hand `bytes` to the user as a file called `file_name`.
pub fn save_download(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| format!("{e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_string())?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "not an anchor".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        gloo_timers::callback::Timeout::new(DOWNLOAD_URL_TTL_MS, move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        })
        .forget();
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        let path = dir.join(file_name);
        std::fs::write(&path, bytes).map_err(|e| e.to_string())?;
        tracing::info!("Saved {}", path.display());
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("petspa_ui_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = temp_dir("missing");
        assert_eq!(load_config_from(&dir, None), AppConfig::default());
    }

    #[test]
    fn env_override_beats_file() {
        let dir = temp_dir("override");
        std::fs::write(
            dir.join("petspa.toml"),
            "[api]\nbase_url = \"http://file/api\"\n[health]\ninterval_secs = 0\n",
        )
        .unwrap();

        let from_file = load_config_from(&dir, None);
        assert_eq!(from_file.api.base_url, "http://file/api");
        assert!(from_file.health.interval().is_none());

        let overridden = load_config_from(&dir, Some("http://env/api".into()));
        assert_eq!(overridden.api.base_url, "http://env/api");
        assert!(overridden.health.interval().is_none());
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = temp_dir("invalid");
        std::fs::write(dir.join("petspa.toml"), "[api\n").unwrap();
        assert_eq!(load_config_from(&dir, None), AppConfig::default());
    }
}
