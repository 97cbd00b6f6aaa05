// demos/basic_completion.rs

use prompt_limiter::llm::{GptClient, LlmClient};
use prompt_limiter::logging::{DEFAULT_LOGGING_CONFIG_PATH, setup_logging};

fn main() -> prompt_limiter::Result<()> {
    setup_logging(DEFAULT_LOGGING_CONFIG_PATH)?;

    let client = GptClient::default();
    let response = client.complete("Hello world")?;
    println!("{}", response.text);
    Ok(())
}
