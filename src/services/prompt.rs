//! Prompt assembly service
//!
//! Converts the surrounding application's character/persona objects and
//! chat transcript into the message list the completion layer consumes.

use crate::models::character::{Character, Persona};
use crate::models::chat::ChatMessage;

/// Number of most recent user/assistant exchange pairs kept in context
pub const HISTORY_WINDOW: usize = 5;

/// Fallback prompt when no character is selected
const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";

/// Build a system prompt from character data and an optional user persona
pub fn create_system_prompt(character: Option<&Character>, persona: Option<&Persona>) -> String {
    let character = match character {
        Some(c) => c,
        None => return DEFAULT_SYSTEM_PROMPT.to_string(),
    };

    let mut prompt = format!("You are {}. ", character.name);

    if !character.personality.is_empty() {
        prompt.push_str(&format!("Your personality is: {} ", character.personality));
    }

    if !character.backstory.is_empty() {
        prompt.push_str(&format!("Your backstory is: {} ", character.backstory));
    }

    if !character.memories.is_empty() {
        prompt.push_str("\n\nYou have the following memories (important things to remember):\n");
        for memory in &character.memories {
            prompt.push_str(&format!("- {}\n", memory));
        }
    }

    if let Some(persona) = persona {
        prompt.push_str("\n\nInformation about the user you're talking to:\n");
        prompt.push_str(&format!("Name: {}\n", persona.name));
        if let Some(age) = &persona.age {
            prompt.push_str(&format!("Age: {}\n", age));
        }
        if let Some(background) = &persona.background {
            prompt.push_str(&format!("Background: {}\n", background));
        }
        if let Some(backstory) = &persona.backstory {
            prompt.push_str(&format!("Backstory: {}\n", backstory));
        }
        if let Some(info) = &persona.additional_info {
            prompt.push_str(&format!("Additional Information: {}\n", info));
        }
    }

    prompt.push_str(
        "\n\nPlease respond to the user's messages in character, maintaining your unique \
         personality and backstory. Be engaging, creative, and consistent with who you are.",
    );

    prompt
}

/// Assemble the message list for a completion call
///
/// System message first, then the last [`HISTORY_WINDOW`] exchange pairs in
/// chronological order, then the new user message.
pub fn build_messages(
    system_prompt: &str,
    history: &[(String, String)],
    user_input: &str,
) -> Vec<ChatMessage> {
    let window_start = history.len().saturating_sub(HISTORY_WINDOW);

    let mut messages = Vec::with_capacity(2 + 2 * (history.len() - window_start));
    messages.push(ChatMessage::system(system_prompt));

    for (user_msg, assistant_msg) in &history[window_start..] {
        messages.push(ChatMessage::user(user_msg.clone()));
        messages.push(ChatMessage::assistant(assistant_msg.clone()));
    }

    messages.push(ChatMessage::user(user_input));
    messages
}
