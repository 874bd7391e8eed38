use crate::{Config, WeatherError, WeatherRequest, WeatherSnapshot, provider::feed::FeedProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};
use tokio::task::JoinHandle;
use tracing::error;

pub mod feed;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherSnapshot, WeatherError>;
}

/// Construct the feed provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<FeedProvider> {
    let endpoint = config.endpoint_url()?;
    Ok(FeedProvider::new(endpoint, config.query_param.clone(), config.assembler()))
}

/// Start fetching weather for `location` and return immediately.
///
/// Exactly one of `on_success` / `on_failure` runs once the request settles.
/// Concurrent calls are independent; nothing orders their completions.
pub fn fetch_weather<S, F>(
    provider: Arc<dyn WeatherProvider>,
    location: impl Into<String>,
    on_success: S,
    on_failure: F,
) -> JoinHandle<()>
where
    S: FnOnce(WeatherSnapshot) + Send + 'static,
    F: FnOnce(WeatherError) + Send + 'static,
{
    let request = WeatherRequest::new(location);

    tokio::spawn(async move {
        match provider.get_weather(&request).await {
            Ok(snapshot) => on_success(snapshot),
            Err(err) => {
                error!(location = %request.location, "getting weather failed: {err}");
                on_failure(err);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeMap, ConditionRecord, ForecastInfo};
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Debug)]
    struct StubProvider {
        fail: bool,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn get_weather(
            &self,
            request: &WeatherRequest,
        ) -> Result<WeatherSnapshot, WeatherError> {
            self.seen.lock().unwrap().push(request.location.clone());
            if self.fail {
                return Err(WeatherError::MissingSection("current_conditions".into()));
            }
            let mut info = AttributeMap::new();
            info.insert("city", request.location.clone());
            Ok(WeatherSnapshot::new(
                ForecastInfo::new(info),
                ConditionRecord::default(),
                Vec::new(),
            ))
        }
    }

    fn stub(fail: bool) -> Arc<StubProvider> {
        Arc::new(StubProvider { fail, seen: Mutex::new(Vec::new()) })
    }

    #[tokio::test]
    async fn success_invokes_only_on_success() {
        let provider = stub(false);
        let successes = Arc::new(AtomicUsize::new(0));
        let failures = Arc::new(AtomicUsize::new(0));

        let (s, f) = (successes.clone(), failures.clone());
        fetch_weather(
            provider.clone(),
            "Oakland",
            move |snapshot| {
                assert_eq!(snapshot.forecast_info().city(), Some("Oakland"));
                s.fetch_add(1, Ordering::SeqCst);
            },
            move |_| {
                f.fetch_add(1, Ordering::SeqCst);
            },
        )
        .await
        .unwrap();

        assert_eq!(successes.load(Ordering::SeqCst), 1);
        assert_eq!(failures.load(Ordering::SeqCst), 0);
        assert_eq!(*provider.seen.lock().unwrap(), ["Oakland".to_string()]);
    }

    #[tokio::test]
    async fn failure_invokes_only_on_failure() {
        let successes = Arc::new(AtomicUsize::new(0));
        let failure = Arc::new(Mutex::new(None));

        let (s, f) = (successes.clone(), failure.clone());
        fetch_weather(
            stub(true),
            "Houston",
            move |_| {
                s.fetch_add(1, Ordering::SeqCst);
            },
            move |err| {
                *f.lock().unwrap() = Some(err);
            },
        )
        .await
        .unwrap();

        assert_eq!(successes.load(Ordering::SeqCst), 0);
        assert!(matches!(
            failure.lock().unwrap().take(),
            Some(WeatherError::MissingSection(_))
        ));
    }

    #[test]
    fn provider_from_default_config_targets_default_endpoint() {
        let provider = provider_from_config(&Config::default()).unwrap();
        let url = provider.request_url("New York");

        assert_eq!(url.host_str(), Some("www.google.com"));
        assert_eq!(url.path(), "/ig/api");
    }

    #[test]
    fn provider_from_config_rejects_bad_endpoint() {
        let cfg = Config { endpoint: "not a url".into(), ..Config::default() };
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("Invalid feed endpoint"));
    }
}
