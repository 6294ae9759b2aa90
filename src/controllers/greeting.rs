use crate::models::greeting_dto::Greeting;
use crate::routes::router::AppState;
use axum::extract::State;
use axum::Json;
use utoipa;

#[utoipa::path(
    get,
    path = "/hello",
    responses(
        (status = 200, description = "Greeting message", body = Greeting)
    ),
    tag = "greeting"
)]
pub async fn hello(State(state): State<AppState>) -> Json<Greeting> {
    Json(Greeting {
        message: format!("Hello, {}!", state.config.greeting.name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::Config;

    #[tokio::test]
    async fn test_hello_contains_name() {
        let state = State(AppState {
            config: Config::default(),
        });

        let greeting_response = hello(state).await.0;
        assert!(greeting_response.message.contains("Rahul"));
    }

    #[tokio::test]
    async fn test_hello_uses_configured_name() {
        let mut config = Config::default();
        config.greeting.name = "Priya".to_string();
        let state = State(AppState { config });

        let greeting_response = hello(state).await.0;
        assert_eq!(greeting_response.message, "Hello, Priya!");
    }
}
