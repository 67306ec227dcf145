//! Simple test for GeminiBrain text chat.
//!
//! Run with: cargo run -p gemini-brain --example test_chat
//! Or with a custom message: cargo run -p gemini-brain --example test_chat -- "Your message here"
//!
//! Make sure to set environment variables in .env:
//!   GOOGLE_API_KEY - Gemini API key
//!   GEMINI_MODEL   - optional, defaults to gemini-2.5-flash
//!   CHAT_LANGUAGE  - optional reply language code, e.g. "es"

use gemini_brain::{Brain, ChatRequest, GeminiBrain};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let message_text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Hey! How has your week been?".to_string()
    };

    println!("Initializing GeminiBrain...");
    let brain = GeminiBrain::from_env();

    println!("Brain initialized: {}", brain.name());
    println!("Configured: {}", brain.is_configured());
    println!("API URL: {}", brain.config().api_url);
    println!("Model: {}", brain.config().model);
    println!("Persona hash: {}", brain.persona_hash());
    println!();

    match brain.list_models().await {
        Ok(models) => println!("Models supporting generateContent: {}", models.len()),
        Err(e) => println!("Could not list models: {}", e),
    }

    let mut request = ChatRequest::new(&message_text);
    if let Ok(language) = env::var("CHAT_LANGUAGE") {
        request = request.with_language(language);
    }

    println!("Sending: \"{}\"", request.message);
    println!("Waiting for response...\n");

    let result = brain.send_message(request).await;

    println!("=== Response ===");
    println!("{}", result.text);
    println!("================");
    println!("Model used: {}", result.model_used);
    println!("Language: {}", result.language);

    Ok(())
}
