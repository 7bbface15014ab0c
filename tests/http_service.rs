//! Drives the HTTP calculation client against a canned local server.

use calcpad::service::CALCULATE_PATH;
use calcpad::{Calculator, Command, EvaluationService, HttpEvaluationService, Outcome, ServiceError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Client that talks to the loopback server directly, ignoring any proxy
/// settings in the environment.
fn local_service(base_url: &str) -> HttpEvaluationService {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpEvaluationService::with_client(base_url, client).unwrap()
}

/// Serve exactly one request with the given status line and body.
/// Resolves to the raw request text once the response is written.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    (base_url, handle)
}

/// Read headers and a `Content-Length` body.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&data);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&data).into_owned()
}

#[tokio::test]
async fn test_success_response() {
    let (base_url, server) = serve_once("200 OK", r#"{"result":4.0000000001}"#).await;
    let service = local_service(&base_url);

    let outcome = service.calculate("2+2").await.unwrap();
    assert_eq!(outcome, Outcome::Success(4.0000000001));

    let request = server.await.unwrap();
    assert!(request.starts_with(&format!("POST /{CALCULATE_PATH} HTTP/1.1\r\n")));
    let lower = request.to_ascii_lowercase();
    assert!(lower.contains("content-type: application/json"));
    assert!(lower.contains("accept: application/json"));
    assert!(request.ends_with(r#"{"expression":"2+2"}"#));
}

#[tokio::test]
async fn test_failure_response_with_message() {
    let (base_url, server) = serve_once("400 Bad Request", r#"{"error":"Division by zero"}"#).await;
    let service = local_service(&base_url);

    let outcome = service.calculate("5/0").await.unwrap();
    assert_eq!(outcome, Outcome::Failure("Division by zero".to_string()));
    server.await.unwrap();
}

#[tokio::test]
async fn test_failure_response_without_message() {
    let (base_url, server) = serve_once("500 Internal Server Error", "{}").await;
    let service = local_service(&base_url);

    let outcome = service.calculate("1+1").await.unwrap();
    assert_eq!(outcome, Outcome::Failure("Error".to_string()));
    server.await.unwrap();
}

#[tokio::test]
async fn test_unreadable_body_is_service_error() {
    let (base_url, server) = serve_once("200 OK", "<html>oops</html>").await;
    let service = local_service(&base_url);

    let err = service.calculate("1+1").await.unwrap_err();
    assert!(matches!(err, ServiceError::MalformedBody(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_calculator_round_trip() {
    let (base_url, server) = serve_once("200 OK", r#"{"result":0.30000000000000004}"#).await;
    let mut calc = Calculator::new(local_service(&base_url));

    for key in "0.1+0.2".chars() {
        calc.dispatch(Command::Append(key)).await;
    }
    let result = calc.dispatch(Command::Evaluate).await.unwrap();

    assert!(result.is_success());
    assert_eq!(calc.display(), "0.3");
    server.await.unwrap();
}

#[tokio::test]
async fn test_calculator_shows_service_error() {
    let (base_url, server) = serve_once("400 Bad Request", r#"{"error":"Division by zero"}"#).await;
    let mut calc = Calculator::new(local_service(&base_url));

    for key in "5/0".chars() {
        calc.append(key);
    }
    calc.evaluate().await;

    assert_eq!(calc.display(), "Division by zero");
    server.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_service_shows_error() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = local_service(&format!("http://{addr}"));
    let mut calc = Calculator::new(service);
    calc.append('7');
    let result = calc.evaluate().await.unwrap();

    assert!(!result.is_success());
    assert_eq!(calc.display(), "Error");
}
