//! # Seeding
//!
//! Fills a running server with sample reviews through its public API, so every
//! record goes through the same validation, analysis and indexing as a real one.
//!
//! ## Flow
//! 1. Read the sample file, a JSON array of reviews.
//!
//! 2. For each entry without a pseudonym, ask `GET /pseudonym` for one.
//!
//! 3. `POST /reviews` and read back the stored hashtags and sentiment.
//!
//! 4. Count what was created and what was rejected. Rejections do not stop the run.
use std::fs;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

pub mod models;

use models::{Created, Identity, PSEUDONYM_PATH, REVIEWS_PATH, SampleReview};

pub const DEFAULT_SAMPLES: &str = include_str!("../data/reviews.json");

pub fn parse_samples(json: &str) -> Result<Vec<SampleReview>> {
    serde_json::from_str(json).context("Sample file is not a JSON array of reviews")
}

pub fn read_samples(path: Option<&str>) -> Result<Vec<SampleReview>> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
            parse_samples(&json)
        }
        None => parse_samples(DEFAULT_SAMPLES),
    }
}

pub fn endpoint(server: &str, path: &str) -> String {
    format!("{}{path}", server.trim_end_matches('/'))
}

pub async fn seed_reviews(server: &str, samples: Vec<SampleReview>) -> Result<(usize, usize)> {
    let client = Client::new();

    println!("Loaded Samples: {}\n", samples.len());

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )?
        .progress_chars("=> "),
    );

    let mut created = 0;
    let mut rejected = 0;

    for sample in samples {
        pb.set_message(sample.title.clone());

        match post_review(&client, server, sample).await {
            Ok(review) => {
                pb.println(format!(
                    "Created {}: {:?} {} {:.2}",
                    review.id, review.hashtags, review.sentiment, review.sentiment_score
                ));

                created += 1;
            }
            Err(e) => {
                pb.println(format!("Rejected: {e:#}"));
                rejected += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    println!("\nCreated: {created}");
    println!("Rejected: {rejected}");

    Ok((created, rejected))
}

async fn post_review(client: &Client, server: &str, mut sample: SampleReview) -> Result<Created> {
    if sample.pseudonym.is_none() {
        let identity: Identity = client
            .get(endpoint(server, PSEUDONYM_PATH))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        sample.pseudonym = Some(identity.pseudonym);
    }

    let response = client
        .post(endpoint(server, REVIEWS_PATH))
        .json(&sample)
        .send()
        .await
        .context("Server unreachable")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("{}: {status} {body}", sample.title);
    }

    Ok(response.json().await?)
}
