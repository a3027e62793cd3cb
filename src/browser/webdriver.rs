use crate::browser::Browser;
use crate::config::{BrowserConfig, BrowserKind};
use crate::error::{Error, Result};
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{Map, Value, json};
use std::time::Duration;
use url::Url;

/// Common local WebDriver endpoints tried when the configured one is unreachable
const FALLBACK_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// A live WebDriver session
pub struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    /// Open a session against the configured WebDriver, falling back to common local ports
    pub async fn connect(config: &BrowserConfig, headless: bool) -> Result<Self> {
        let capabilities = capabilities(config.kind, headless);

        let primary_error = match try_connect(&config.webdriver_url, &capabilities).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", config.webdriver_url);
                return Ok(Self { client });
            }
            Err(e) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    config.webdriver_url,
                    e
                );
                e
            }
        };

        for url in FALLBACK_URLS.iter() {
            if *url == config.webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = try_connect(url, &capabilities).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(Self { client });
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(primary_error)
    }
}

async fn try_connect(url: &str, capabilities: &Map<String, Value>) -> Result<Client> {
    let mut builder = ClientBuilder::native();
    builder.capabilities(capabilities.clone());
    Ok(builder.connect(url).await?)
}

/// Session capabilities: notifications and push disabled, optional headless mode
fn capabilities(kind: BrowserKind, headless: bool) -> Map<String, Value> {
    let mut capabilities = Map::new();
    match kind {
        BrowserKind::Firefox => {
            let args: Vec<&str> = if headless { vec!["-headless"] } else { vec![] };
            capabilities.insert("browserName".to_string(), json!("firefox"));
            capabilities.insert(
                "moz:firefoxOptions".to_string(),
                json!({
                    "args": args,
                    "prefs": {
                        "dom.webnotifications.enabled": false,
                        "dom.push.enabled": false
                    }
                }),
            );
        }
        BrowserKind::Chrome => {
            let args: Vec<&str> = if headless {
                vec!["--headless=new", "--disable-notifications"]
            } else {
                vec!["--disable-notifications"]
            };
            capabilities.insert("browserName".to_string(), json!("chrome"));
            capabilities.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
        }
    }
    capabilities
}

impl Browser for WebDriverSession {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.client.goto(url).await?;
        Ok(())
    }

    async fn current_url(&mut self) -> Result<Url> {
        Ok(self.client.current_url().await?)
    }

    async fn source(&mut self) -> Result<String> {
        Ok(self.client.source().await?)
    }

    async fn document_height(&mut self) -> Result<u64> {
        let value = self
            .client
            .execute("return document.body.scrollHeight;", vec![])
            .await?;
        value
            .as_u64()
            .or_else(|| value.as_f64().map(|h| h.max(0.0) as u64))
            .ok_or_else(|| Error::ScriptResult(format!("document height was {value}")))
    }

    async fn scroll_by(&mut self, pixels: i64) -> Result<()> {
        self.client
            .execute("window.scrollBy(0, arguments[0]);", vec![json!(pixels)])
            .await?;
        Ok(())
    }

    async fn click_if_present(&mut self, css: &str) -> Result<bool> {
        match self.client.find(Locator::Css(css)).await {
            Ok(element) => {
                element.click().await?;
                Ok(true)
            }
            Err(e) if e.is_no_such_element() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn wait_for(&mut self, css: &str, timeout: Duration) -> Result<bool> {
        match self
            .client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(css))
            .await
        {
            Ok(_) => Ok(true),
            Err(CmdError::WaitTimeout) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}
