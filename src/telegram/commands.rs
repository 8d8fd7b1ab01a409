use teloxide::{prelude::*, types::ParseMode, utils::command::BotCommands};

use crate::{Res, telegram::keyboards};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Spotigram commands:")]
pub enum Command {
    #[command(description = "show the welcome menu.")]
    Start,
    #[command(description = "show help and instructions.")]
    Help,
}

pub const WELCOME_TEXT: &str = "\
🎵 *Welcome to Spotigram!* 🎵

Hey there! I'm your personal music assistant! 🤖✨

*What can I do?*
• 📱 Download songs from Spotify links
• 📀 Process entire albums and playlists
• 🎛️ Choose audio quality before download
• 🎧 Find music from multiple sources

*How to use:*
1️⃣ Send me any Spotify link (song/album/playlist)
2️⃣ Choose your preferred audio quality
3️⃣ Get your music instantly! 🚀

Ready to discover some music? Try the demo below! 👇";

pub const HELP_TEXT: &str = "\
🆘 *Help & Instructions* 🆘

*Supported Links:*
• 🎵 Spotify Songs: `open.spotify.com/track/...`
• 📀 Spotify Albums: `open.spotify.com/album/...`
• 📋 Spotify Playlists: `open.spotify.com/playlist/...`

*How it works:*
1️⃣ Send me a Spotify link
2️⃣ I'll extract the metadata
3️⃣ Choose your preferred quality
4️⃣ I'll find and download the audio
5️⃣ Enjoy your music! 🎊

*Quality Options:*
• 🔥 High Quality (320kbps)
• ⚡ Medium Quality (192kbps)
• 📱 Low Quality (128kbps)

*Tips:*
• Use /start to return to main menu
• Try demo songs to test the bot
• Be patient for large playlists! ⏳

Need more help? Just ask! 😊";

pub async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> Res<()> {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, WELCOME_TEXT)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboards::start_menu())
                .await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, HELP_TEXT)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboards::help_menu())
                .await?;
        }
    }

    Ok(())
}
