use std::path::PathBuf;

use clap::Parser;
use console::style;
use study_notes::{
    gemini::GeminiClient,
    prompt::{NotesPrompt, Subject},
    tracing::init_tracing_subscriber,
    wordcloud::WordCloud,
    yt::{captions::CaptionScraper, VideoLink},
    NotesSessionBuilder,
};
use transcript_store::SqliteDataStore;

#[derive(Parser)]
#[command(
    name = "study-notes",
    about = "YouTube transcript to detailed study notes converter"
)]
struct Cli {
    /// YouTube video link
    url: String,

    /// Subject the notes should be tailored for
    #[arg(long, value_enum)]
    subject: Option<Subject>,

    /// Custom instruction used instead of a subject template
    #[arg(long)]
    custom_prompt: Option<String>,

    /// Also produce a brief summary of the generated notes
    #[arg(long)]
    summarize: bool,

    /// Render a word cloud PNG of the notes to this path
    #[arg(long)]
    wordcloud: Option<PathBuf>,

    /// TTF font used for word cloud rendering
    #[arg(
        long,
        default_value = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"
    )]
    font_path: PathBuf,

    /// Where to write the notes as plain text
    #[arg(long, default_value = "detailed_notes.txt")]
    txt: PathBuf,

    /// Where to write the notes as a PDF
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Transcript cache database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:transcripts.db?mode=rwc")]
    database_url: String,

    /// Gemini API key
    #[arg(long, env = "GOOGLE_API_KEY")]
    api_key: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let prompt = match (cli.custom_prompt, cli.subject) {
        (Some(text), _) => NotesPrompt::Custom(text),
        (None, Some(subject)) => NotesPrompt::Subject(subject),
        (None, None) => {
            anyhow::bail!("Select a subject with --subject or provide --custom-prompt")
        }
    };

    let link = VideoLink::new(cli.url);
    println!(
        "{} {}",
        style("Video thumbnail:").dim(),
        link.thumbnail_url()
    );

    let store = SqliteDataStore::init(&cli.database_url).await?;
    let gemini = GeminiClient::new(&cli.api_key);

    let mut session = NotesSessionBuilder::new()
        .store(store)
        .transcript_source(CaptionScraper::default())
        .generator(gemini.clone())
        .summarizer(gemini)
        .build();

    match session.generate_notes(&link, &prompt).await {
        Ok(notes) => {
            println!("{}", style("Transcript extracted successfully!").green());
            println!("\n## Detailed Notes:\n\n{notes}");
        }
        Err(e) => {
            eprintln!("{} {e:#}", style("Failed to extract transcript:").red());
            std::process::exit(1);
        }
    }

    if cli.summarize {
        let summary = session.summarize().await?;
        println!("\n## Summary:\n\n{summary}");
    }

    if let Some(wordcloud_path) = cli.wordcloud {
        let font_data = std::fs::read(&cli.font_path)?;
        let renderer = WordCloud::new(font_data)?;

        let image = session.wordcloud(&renderer)?;
        image.save(&wordcloud_path)?;
        println!(
            "\n{} {}",
            style("Word cloud written to").green(),
            wordcloud_path.display()
        );
    }

    std::fs::write(&cli.txt, session.export_text()?)?;
    println!(
        "\n{} {}",
        style("Notes written to").green(),
        cli.txt.display()
    );

    if let Some(pdf_path) = cli.pdf {
        std::fs::write(&pdf_path, session.export_pdf()?)?;
        println!(
            "{} {}",
            style("PDF written to").green(),
            pdf_path.display()
        );
    }

    Ok(())
}
