use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base url of a running server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,

    /// JSON array of reviews, the bundled samples when omitted
    #[arg(long)]
    file: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let samples = seed::read_samples(args.file.as_deref())?;
    let (_, rejected) = seed::seed_reviews(&args.server, samples).await?;

    if rejected > 0 {
        anyhow::bail!("{rejected} reviews were rejected");
    }

    Ok(())
}
