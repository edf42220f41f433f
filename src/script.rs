//! The words the greeter says.
//!
//! Adapters render these however they speak (console line, TTS engine).

pub const WELCOME: &str = "Hello, welcome! Please wait a moment while I take a look.";

pub const ASK_VISITOR_NAME: &str = "May I ask who is calling?";

pub const ASK_OCCUPIER_NAME: &str = "And who would you like to see?";

pub const REQUEST_OCCUPIER: &str = "Would someone please come to the front door? You have a visitor.";

pub const TAKE_MESSAGE: &str = "Nobody seems to be answering. Please leave a short message.";

pub const TAKE_PHOTO: &str = "Thank you. I will take your photo to go with the message. Smile!";

pub const THANK_VISITOR: &str = "Thank you, your message has been passed on. Goodbye!";

pub const ASK_DELIVERER_TO_WAIT: &str = "Thanks for the delivery! Please wait while I fetch someone.";

pub const REQUEST_SOMEONE: &str = "Would someone please come to the front door? There is a delivery.";

pub const LEAVE_PARCEL: &str = "Sorry, nobody is available. Please leave the parcel by the door. Thank you!";

/// Tell the visitor whom we are fetching.
pub fn asking_for_occupier(visitor_name: &str, occupier_name: &str) -> String {
    format!(
        "Thank you {}. I will let {} know you are here.",
        visitor_name.trim(),
        occupier_name.trim()
    )
}
