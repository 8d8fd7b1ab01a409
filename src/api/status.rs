use axum::response::Html;

pub async fn status() -> Html<&'static str> {
    Html(
        r#"<html>
    <head>
        <title>Spotigram Bot</title>
        <style>
            body { font-family: Arial, sans-serif; margin: 40px; background: #1DB954; color: white; }
            .container { max-width: 600px; margin: 0 auto; text-align: center; }
            .status { background: rgba(255,255,255,0.1); padding: 20px; border-radius: 10px; }
        </style>
    </head>
    <body>
        <div class="container">
            <h1>🎵 Spotigram Bot</h1>
            <div class="status">
                <h2>✅ Bot is running</h2>
                <p>The Telegram bot is active and ready to fetch music.</p>
            </div>
        </div>
    </body>
</html>"#,
    )
}
