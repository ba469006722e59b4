// SPDX-License-Identifier: MPL-2.0
//! Hard-coded sample data shown on the screen.

use super::ChatMessage;

const COLLEAGUE: &str = "Colleague";

static FEATURED: ChatMessage = ChatMessage::new("sglee487", "I am sg0");

static CONVERSATION: [ChatMessage; 13] = [
    ChatMessage::new(COLLEAGUE, "Test...Test...Test..."),
    ChatMessage::new(
        COLLEAGUE,
        concat!(
            "List of Android versions:\n",
            "Android KitKat (API 19)\n",
            "Android Lollipop (API 21)\n",
            "Android Marshmallow (API 23)\n",
            "Android Nougat (API 24)\n",
            "Android Oreo (API 26)\n",
            "Android Pie (API 28)\n",
            "Android 10 (API 29)\n",
            "Android 11 (API 30)\n",
            "Android 12 (API 31)\n",
        ),
    ),
    ChatMessage::new(
        COLLEAGUE,
        concat!(
            "I think Kotlin is my favorite programming language.\n",
            "It's so much fun!",
        ),
    ),
    ChatMessage::new(COLLEAGUE, "Searching for alternatives to XML layouts..."),
    ChatMessage::new(
        COLLEAGUE,
        concat!(
            "Hey, take a look at Jetpack Compose, it's great!\n",
            "It's the Android's modern toolkit for building native UI.",
            "It simplifies and accelerates UI development on Android.",
            "Less code, powerful tools, and intuitive Kotlin APIs :)",
        ),
    ),
    ChatMessage::new(COLLEAGUE, "It's available from API 21+ :)"),
    ChatMessage::new(
        COLLEAGUE,
        "Writing Kotlin for UI seems so natural, Compose where have you been all my life?",
    ),
    ChatMessage::new(COLLEAGUE, "Android Studio next version's name is Arctic Fox"),
    ChatMessage::new(
        COLLEAGUE,
        "Android Studio Arctic Fox tooling for Compose is top notch ^_^",
    ),
    ChatMessage::new(
        COLLEAGUE,
        "I didn't know you can now run the emulator directly from Android Studio",
    ),
    ChatMessage::new(
        COLLEAGUE,
        "Compose Previews are great to check quickly how a composable layout looks like",
    ),
    ChatMessage::new(
        COLLEAGUE,
        "Previews are also interactive after enabling the experimental setting",
    ),
    ChatMessage::new(COLLEAGUE, "Have you tried writing build.gradle with KTS?"),
];

/// Message shown on its own card above the conversation.
#[must_use]
pub fn featured_message() -> &'static ChatMessage {
    &FEATURED
}

/// The fixed sample conversation, in display order.
#[must_use]
pub fn conversation_sample() -> &'static [ChatMessage] {
    &CONVERSATION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_has_thirteen_colleague_messages() {
        let messages = conversation_sample();
        assert_eq!(messages.len(), 13);
        assert!(messages.iter().all(|m| m.author() == "Colleague"));
    }

    #[test]
    fn conversation_is_the_same_list_every_time() {
        assert!(std::ptr::eq(conversation_sample(), conversation_sample()));
        assert_eq!(conversation_sample()[0].body(), "Test...Test...Test...");
        assert_eq!(
            conversation_sample()[12].body(),
            "Have you tried writing build.gradle with KTS?"
        );
    }

    #[test]
    fn android_versions_message_is_multiline() {
        let versions = &conversation_sample()[1];
        assert_eq!(versions.line_count(), 10);
        assert_eq!(versions.first_line(), "List of Android versions:");
    }

    #[test]
    fn featured_message_is_sglee() {
        let featured = featured_message();
        assert_eq!(featured.author(), "sglee487");
        assert_eq!(featured.body(), "I am sg0");
    }
}
