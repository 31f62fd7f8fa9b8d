//! User-facing texts and the answer keyboard

use indoc::{formatdoc, indoc};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::html;

use crate::storage::{FileRecord, FileSlot};

pub const ANSWER_PROMPT: &str = "Please choose one of the buttons below:";
pub const RESTART_HINT: &str = "Send /start to restart the bot.";
pub const FILE_UNAVAILABLE: &str = "⚠️ Sorry, the file is not available yet. Please contact the administrator.";
pub const ADMIN_DENIED: &str = "❌ You do not have admin rights!";
pub const SAVE_FAILED: &str = "❌ Failed to save the file ID!";
pub const FILE_EXPECTED: &str = "⏳ Waiting for a ZIP file. Please send the ZIP file or cancel with /admin.";

pub const ADMIN_PANEL: &str = indoc! {"
    👨‍💼 <b>Admin Panel</b>

    Available commands:

    /set_yes_slot - upload the file for shops with a POS system
    /set_no_slot - upload the file for shops without a POS system
    /list_file_ids - show the current file IDs

    Any pending upload has been cancelled."};

pub const DOCUMENT_WITHOUT_SLOT: &str = indoc! {"
    📤 File received!

    To save it, first send one of these commands and upload the file again:
    /set_yes_slot - for shops with a POS system
    /set_no_slot - for shops without a POS system"};

/// Greeting with the yes/no question
pub fn welcome(first_name: Option<&str>) -> String {
    let name = first_name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or("there");
    formatdoc! {"
        Hello, {name}!

        To download our software, please answer:

        ❓ <b>Do you have a POS system?</b>",
        name = html::escape(name),
    }
}

/// Inline keyboard with exactly two mutually exclusive answers
pub fn answer_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("✅ Yes", FileSlot::PosYes.to_string()),
        InlineKeyboardButton::callback("❌ No", FileSlot::PosNo.to_string()),
    ]])
}

fn audience(slot: FileSlot) -> &'static str {
    match slot {
        FileSlot::PosYes => "shops with a POS system",
        FileSlot::PosNo => "shops without a POS system",
    }
}

/// Replaces the question once the user picked an answer
pub fn answer_received(slot: FileSlot) -> String {
    format!(
        "✅ Thank you! Your answer has been received.\n\nSending the software for {}...",
        audience(slot)
    )
}

pub fn document_caption(slot: FileSlot) -> String {
    format!("📦 Software for {}", audience(slot))
}

pub fn request_file(slot: FileSlot) -> String {
    format!("📤 Please send the ZIP file for {}:", audience(slot))
}

pub fn file_saved(slot: FileSlot, file_name: Option<&str>, file_id: &str) -> String {
    let answer = match slot {
        FileSlot::PosYes => "Yes",
        FileSlot::PosNo => "No",
    };
    formatdoc! {"
        ✅ <b>Saved successfully!</b>

        📁 File: {file_name}
        🆔 File ID: <code>{file_id}</code>

        Users answering \"{answer}\" will now receive this file.",
        file_name = html::escape(file_name.unwrap_or("unknown")),
        file_id = html::escape(file_id),
    }
}

/// Plain-text report of the stored file ids
pub fn file_ids_report(record: &FileRecord) -> String {
    let mut text = String::from("📋 Current file IDs:\n\n");
    for slot in FileSlot::ALL {
        let value = record.get(&slot).map(String::as_str).unwrap_or("not set");
        text.push_str(&format!("{}: {}\n", slot.label(), value));
    }
    text.push_str("\nUse /set_yes_slot or /set_no_slot to upload a new file.");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_escapes_name() {
        let text = welcome(Some("<Ann>"));
        assert!(text.starts_with("Hello, &lt;Ann&gt;!"));
        assert!(text.contains("<b>Do you have a POS system?</b>"));
    }

    #[test]
    fn test_welcome_without_name() {
        assert!(welcome(None).starts_with("Hello, there!"));
        assert!(welcome(Some("  ")).starts_with("Hello, there!"));
    }

    #[test]
    fn test_keyboard_has_two_choices_in_one_row() {
        let keyboard = answer_keyboard();
        assert_eq!(keyboard.inline_keyboard.len(), 1);
        assert_eq!(keyboard.inline_keyboard[0].len(), 2);
    }

    #[test]
    fn test_report_lists_both_slots() {
        let mut record = FileRecord::new();
        record.insert(FileSlot::PosYes, "ABC123".to_string());

        let report = file_ids_report(&record);
        assert!(report.contains("POS YES: ABC123"));
        assert!(report.contains("POS NO: not set"));
    }
}
