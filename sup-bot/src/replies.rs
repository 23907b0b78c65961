//! Texts the bot sends. HTML replies escape every user- or database-provided value.

use teloxide::utils::html;

/// Reply to any text that is not a plain non-negative number.
pub const NOT_A_NUMBER: &str = "Please send just a number. For example: 8";

/// Reply when no location is owned by the sender.
pub const LOCATION_NOT_FOUND: &str = "❌ Could not find your rental point. Make sure your Telegram ID is registered in the database.";

/// Reply when the update failed for any other reason.
pub const UNEXPECTED_ERROR: &str =
    "An unexpected error occurred. The administrator has been notified.";

/// Location name used when the record has none.
pub const UNTITLED: &str = "Untitled";

/// Name used in the greeting when Telegram provides neither a first name nor a username.
const ANONYMOUS: &str = "there";

/// `/start` greeting (HTML): mention, the sender's Telegram ID, and how to use the bot.
pub fn greeting(user_id: i64, display_name: Option<&str>) -> String {
    let mention = format!(
        "<a href=\"tg://user?id={}\">{}</a>",
        user_id,
        html::escape(display_name.unwrap_or(ANONYMOUS))
    );
    format!(
        "👋 Hi, {mention}!\n\n\
         I update the number of free SUP boards at your rental point.\n\n\
         Your Telegram ID: <code>{user_id}</code>\n\n\
         Send a number to set your availability (for example, <code>5</code>) and I will update \
         the number of available SUPs for your rental point."
    )
}

/// Confirmation after a successful update (HTML).
pub fn availability_updated(location_name: &str, units: u32) -> String {
    format!(
        "✅ Done!\n\nNew number of free SUPs for «{}»: <b>{}</b>",
        html::escape(location_name),
        units
    )
}
