//! The prompt → resolve → search → display sequence.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::debug;

use crate::config::AppConfig;
use crate::console::{display_stop_points, prompt_for_postcode};
use crate::domain::Postcode;
use crate::error::AppError;
use crate::http::Fetcher;
use crate::postcodes::PostcodeClient;
use crate::tfl::StopPointClient;

/// Wires the two API clients to the console.
#[derive(Debug, Clone)]
pub struct App<F> {
    postcodes: PostcodeClient<F>,
    stops: StopPointClient<F>,
    stop_count: usize,
}

impl<F: Fetcher + Clone> App<F> {
    /// Create the app; both clients share `fetcher`.
    pub fn new(config: AppConfig, fetcher: F) -> Self {
        Self {
            postcodes: PostcodeClient::new(config.postcodes, fetcher.clone()),
            stops: StopPointClient::new(config.stops, fetcher),
            stop_count: config.stop_count,
        }
    }

    /// Run once: prompt for a postcode and print the nearest stops.
    ///
    /// Requests are made one after another. Stop names are written only
    /// after both lookups succeed, so a failure leaves no partial output
    /// beyond the prompt.
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let line = prompt_for_postcode(input, output).await?;
        let postcode = Postcode::sanitize(&line).ok_or(AppError::EmptyPostcode)?;

        let location = self.postcodes.resolve_location(&postcode).await?;
        let stops = self
            .stops
            .find_nearest_stops(location, self.stop_count)
            .await?;
        debug!(%postcode, %location, found = stops.len(), "nearest stops");

        display_stop_points(output, &stops).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::PROMPT;
    use crate::error::LookupError;
    use crate::http::FetchError;
    use crate::http::mock::StaticFetcher;
    use crate::postcodes::PostcodeClientConfig;
    use crate::tfl::StopPointClientConfig;

    const LOCATION_BODY: &str = r#"{"result":{"latitude":51.5,"longitude":-0.14}}"#;

    fn config() -> AppConfig {
        AppConfig {
            postcodes: PostcodeClientConfig::new(),
            stops: StopPointClientConfig::new("id", "key"),
            stop_count: 5,
        }
    }

    fn stops_body(n: usize) -> String {
        let stops: Vec<String> = (0..n)
            .map(|i| format!(r#"{{"naptanId":"49000{i:04}","commonName":"Stop {i}"}}"#))
            .collect();
        format!(r#"{{"stopPoints":[{}]}}"#, stops.join(","))
    }

    async fn run(app: &App<StaticFetcher>, input: &str) -> (Result<(), AppError>, String) {
        let mut output = Vec::new();
        let result = app.run(input.as_bytes(), &mut output).await;
        (result, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn prints_first_five_stops() {
        let fetcher = StaticFetcher::new()
            .with_body("/postcodes/SW1A1AA", LOCATION_BODY)
            .with_body("/StopPoint", stops_body(8));
        let app = App::new(config(), fetcher.clone());

        let (result, output) = run(&app, "SW1A 1AA\n").await;

        result.unwrap();
        assert_eq!(
            output,
            format!("{PROMPT}Stop 0\nStop 1\nStop 2\nStop 3\nStop 4\n")
        );

        let requests = fetcher.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].path(), "/postcodes/SW1A1AA");
        assert_eq!(requests[1].path(), "/StopPoint");
        assert!(requests[1].as_str().contains("lat=51.5&lon=-0.14"));
    }

    #[tokio::test]
    async fn honours_configured_count() {
        let fetcher = StaticFetcher::new()
            .with_body("/postcodes/SW1A1AA", LOCATION_BODY)
            .with_body("/StopPoint", stops_body(8));
        let app = App::new(
            AppConfig {
                stop_count: 2,
                ..config()
            },
            fetcher,
        );

        let (result, output) = run(&app, "SW1A1AA\n").await;

        result.unwrap();
        assert_eq!(output, format!("{PROMPT}Stop 0\nStop 1\n"));
    }

    #[tokio::test]
    async fn unknown_postcode_prints_no_stops() {
        let fetcher = StaticFetcher::new().with_body("/StopPoint", stops_body(8));
        let app = App::new(config(), fetcher.clone());

        let (result, output) = run(&app, "ZZ99 9ZZ\n").await;

        assert!(matches!(
            result,
            Err(AppError::Lookup(LookupError::Location(
                FetchError::HttpStatus { status: 404 }
            )))
        ));
        assert!(result.unwrap_err().is_unknown_postcode());
        assert_eq!(output, PROMPT);
        // The stop search never ran
        assert_eq!(fetcher.requests().len(), 1);
    }

    #[tokio::test]
    async fn failed_stop_search_prints_nothing() {
        let fetcher = StaticFetcher::new()
            .with_body("/postcodes/SW1A1AA", LOCATION_BODY)
            .with_status("/StopPoint", 500);
        let app = App::new(config(), fetcher);

        let (result, output) = run(&app, "SW1A1AA\n").await;

        assert!(matches!(
            result,
            Err(AppError::Lookup(LookupError::Stops(_)))
        ));
        assert_eq!(output, PROMPT);
    }

    #[tokio::test]
    async fn blank_input_makes_no_requests() {
        let fetcher = StaticFetcher::new();
        let app = App::new(config(), fetcher.clone());

        let (result, _) = run(&app, "  \n").await;
        assert!(matches!(result, Err(AppError::EmptyPostcode)));

        let (result, _) = run(&app, "").await;
        assert!(matches!(result, Err(AppError::EmptyPostcode)));

        assert!(fetcher.requests().is_empty());
    }
}
