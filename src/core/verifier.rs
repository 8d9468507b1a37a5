use crate::domain::model::{FailureKind, LinkRecord, VerificationOutcome};
use futures::stream::{self, StreamExt};
use reqwest::Client;

/// Issues exactly one GET for the record's target and classifies the
/// outcome. User-Agent and timeout ride on the shared client. No retry:
/// one failed attempt is final for this run.
pub async fn verify_one(client: &Client, record: &LinkRecord) -> VerificationOutcome {
    tracing::debug!("{} @ {}", record.target, record.source.display());

    let outcome = match client.get(&record.target).send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_client_error() || status.is_server_error() {
                VerificationOutcome::Failure {
                    kind: FailureKind::HttpStatus,
                    detail: status.as_u16().to_string(),
                }
            } else {
                VerificationOutcome::Success
            }
        }
        // Builder errors cover both strings that are not URLs at all and
        // well-formed URLs with a non-http(s) scheme (mailto:, relative
        // paths). No transport exchange was ever attempted for either, so
        // both land in the catch-all bucket, not the transport one.
        Err(e) if e.is_builder() => VerificationOutcome::Failure {
            kind: FailureKind::Unexpected,
            detail: format!("reqwest::Error | {}", error_chain(&e)),
        },
        Err(e) if e.is_timeout() || e.is_connect() || e.is_redirect() || e.is_request() => {
            VerificationOutcome::Failure {
                kind: FailureKind::Transport,
                detail: error_chain(&e),
            }
        }
        Err(e) => VerificationOutcome::Failure {
            kind: FailureKind::Unexpected,
            detail: format!("reqwest::Error | {}", error_chain(&e)),
        },
    };

    if let VerificationOutcome::Failure { kind, detail } = &outcome {
        tracing::warn!("{:?}: {} @ {}", kind, detail, record.target);
    }

    outcome
}

/// Verifies all records with at most `limit` requests in flight. Results
/// are tagged with their input index and re-sorted afterwards, so the
/// returned order always equals the input order.
pub async fn verify_all(
    client: &Client,
    links: Vec<LinkRecord>,
    limit: usize,
) -> Vec<(LinkRecord, VerificationOutcome)> {
    let limit = limit.max(1);

    let mut results: Vec<(usize, LinkRecord, VerificationOutcome)> =
        stream::iter(links.into_iter().enumerate())
            .map(|(index, record)| {
                let client = client.clone();
                async move {
                    let outcome = verify_one(&client, &record).await;
                    (index, record, outcome)
                }
            })
            .buffer_unordered(limit)
            .collect()
            .await;

    results.sort_by_key(|(index, _, _)| *index);
    results
        .into_iter()
        .map(|(_, record, outcome)| (record, outcome))
        .collect()
}

/// reqwest's Display is terse ("error sending request"); the source chain
/// carries the actual reason (DNS, refused connection, TLS).
fn error_chain(e: &reqwest::Error) -> String {
    let mut message = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn test_client() -> Client {
        Client::builder()
            .timeout(Duration::from_secs(5))
            .user_agent("docx-linkcheck-test")
            .build()
            .unwrap()
    }

    fn record(target: &str) -> LinkRecord {
        LinkRecord {
            source: PathBuf::from("report.docx"),
            target: target.to_string(),
        }
    }

    #[tokio::test]
    async fn test_verify_ok_status_is_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/good");
            then.status(200);
        });

        let outcome = verify_one(&test_client(), &record(&server.url("/good"))).await;

        mock.assert();
        assert_eq!(outcome, VerificationOutcome::Success);
    }

    #[tokio::test]
    async fn test_verify_404_is_http_status_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gone");
            then.status(404);
        });

        let outcome = verify_one(&test_client(), &record(&server.url("/gone"))).await;

        assert_eq!(
            outcome,
            VerificationOutcome::Failure {
                kind: FailureKind::HttpStatus,
                detail: "404".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_verify_500_is_http_status_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/boom");
            then.status(500);
        });

        let outcome = verify_one(&test_client(), &record(&server.url("/boom"))).await;

        assert!(matches!(
            outcome,
            VerificationOutcome::Failure {
                kind: FailureKind::HttpStatus,
                ref detail,
            } if detail == "500"
        ));
    }

    #[tokio::test]
    async fn test_verify_sends_configured_user_agent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ua")
                .header("user-agent", "docx-linkcheck-test");
            then.status(200);
        });

        verify_one(&test_client(), &record(&server.url("/ua"))).await;

        mock.assert();
    }

    #[tokio::test]
    async fn test_verify_connection_refused_is_transport_failure() {
        // port 1 is reserved and not listening
        let outcome = verify_one(&test_client(), &record("http://127.0.0.1:1/")).await;

        assert!(matches!(
            outcome,
            VerificationOutcome::Failure {
                kind: FailureKind::Transport,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_verify_malformed_url_is_unexpected_failure() {
        let outcome = verify_one(&test_client(), &record("not-a-url")).await;

        assert!(matches!(
            outcome,
            VerificationOutcome::Failure {
                kind: FailureKind::Unexpected,
                ref detail,
            } if detail.starts_with("reqwest::Error |")
        ));
    }

    #[tokio::test]
    async fn test_verify_unsupported_scheme_is_unexpected_not_transport() {
        // mailto: parses as a URL but is rejected before any transport
        // exchange, so it must not be classified as a transport failure
        let outcome = verify_one(&test_client(), &record("mailto:someone@example.com")).await;

        assert!(matches!(
            outcome,
            VerificationOutcome::Failure {
                kind: FailureKind::Unexpected,
                ref detail,
            } if detail.starts_with("reqwest::Error |")
        ));
    }

    #[tokio::test]
    async fn test_verify_all_preserves_input_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/a");
            then.status(200);
        });
        server.mock(|when, then| {
            when.method(GET).path("/b");
            then.status(404);
        });
        server.mock(|when, then| {
            when.method(GET).path("/c");
            then.status(200);
        });

        let links = vec![
            record(&server.url("/a")),
            record(&server.url("/b")),
            record(&server.url("/c")),
        ];

        let results = verify_all(&test_client(), links.clone(), 3).await;

        assert_eq!(results.len(), 3);
        for (i, (rec, _)) in results.iter().enumerate() {
            assert_eq!(rec.target, links[i].target);
        }
        assert!(results[0].1.is_success());
        assert!(!results[1].1.is_success());
        assert!(results[2].1.is_success());
    }

    #[tokio::test]
    async fn test_verify_all_with_zero_limit_still_runs() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/a");
            then.status(200);
        });

        let results = verify_all(&test_client(), vec![record(&server.url("/a"))], 0).await;
        assert_eq!(results.len(), 1);
    }
}
