use super::*;

#[test]
fn csrf_token_found_among_other_cookies() {
    assert_eq!(
        csrf_token_from_cookies("sessionid=abc; csrftoken=tok123; theme=dark"),
        Some("tok123".to_owned())
    );
}

#[test]
fn csrf_token_first_cookie() {
    assert_eq!(csrf_token_from_cookies("csrftoken=only"), Some("only".to_owned()));
}

#[test]
fn csrf_token_missing_or_empty() {
    assert_eq!(csrf_token_from_cookies(""), None);
    assert_eq!(csrf_token_from_cookies("sessionid=abc"), None);
    assert_eq!(csrf_token_from_cookies("csrftoken="), None);
}

#[test]
fn csrf_token_ignores_lookalike_names() {
    assert_eq!(csrf_token_from_cookies("xcsrftoken=bad; csrftokenx=bad"), None);
}

#[test]
fn body_snippet_truncates_by_chars() {
    let long = "é".repeat(500);
    assert_eq!(body_snippet(&long).chars().count(), 200);
    assert_eq!(body_snippet("short"), "short");
}

#[test]
fn fetch_projects_outside_browser_is_network_error() {
    let result = block_on(fetch_projects(&SiteConfig::default()));
    assert!(matches!(result, Err(LoadError::Network(_))));
}

/// Poll a future that never suspends to completion.
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
