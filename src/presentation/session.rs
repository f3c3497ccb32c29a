//! Terminal game session.
//!
//! One round per input line. Before each move the computer commits to its
//! hand; after the move the hand is revealed and the commitment checked.

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::config::{GameConfig, OutputFormat};
use crate::core::rng::RandomSource;
use crate::error::{Error, Result};
use crate::game::{Choice, Round, RoundResolver, SealedRound};
use crate::presentation::messages;
use crate::presentation::reveal::reveal_after;

/// What a session did before it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Rounds played to completion.
    pub rounds: u32,
    /// Lines rejected as unknown choices.
    pub rejected: u32,
}

/// One line of JSON output.
#[derive(Debug, Serialize)]
struct RoundRecord {
    #[serde(flatten)]
    round: Round,
    commitment: String,
    nonce: String,
}

/// A parsed input line.
enum Move {
    Play(Choice),
    Quit,
}

fn parse_move(input: &str) -> Result<Move> {
    if matches!(input.to_ascii_lowercase().as_str(), "quit" | "exit" | "q") {
        return Ok(Move::Quit);
    }
    Ok(Move::Play(input.parse()?))
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, line: &str) -> Result<()> {
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}

/// Run rounds until `quit`, `exit` or end of input.
///
/// Unknown input logs a warning and re-prompts without ending the session.
/// Write failures (e.g. a closed pipe) end the session with an error.
pub async fn run_session<I, W, R>(
    input: I,
    out: &mut W,
    resolver: &mut RoundResolver<R>,
    config: &GameConfig,
) -> Result<SessionSummary>
where
    I: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    R: RandomSource,
{
    let text = config.output == OutputFormat::Text;
    let mut summary = SessionSummary::default();
    let mut lines = input.lines();
    let mut sealed: Option<SealedRound> = None;

    if text {
        write_line(out, messages::TITLE).await?;
        write_line(out, &messages::options_line()).await?;
    }

    loop {
        if sealed.is_none() {
            let next = resolver.commit_computer_choice();
            if text {
                write_line(out, &messages::commitment_line(&next.commitment())).await?;
                write_line(out, messages::PROMPT).await?;
            }
            sealed = Some(next);
        }
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let user = match parse_move(input) {
            Ok(Move::Quit) => break,
            Ok(Move::Play(choice)) => choice,
            Err(Error::ParseChoice(e)) => {
                warn!("{}", e);
                summary.rejected += 1;
                if text {
                    write_line(out, &messages::options_line()).await?;
                    write_line(out, messages::PROMPT).await?;
                }
                continue;
            }
            Err(e) => return Err(e),
        };

        let Some(round_seal) = sealed.take() else {
            continue;
        };
        let commitment = round_seal.commitment();
        let (round, opening) = round_seal.reveal(user);
        commitment.verify(&opening)?;
        summary.rounds += 1;
        debug!(rounds = summary.rounds, outcome = ?round.outcome, "round played");

        match config.output {
            OutputFormat::Json => {
                let record = RoundRecord {
                    round,
                    commitment: commitment.to_hex(),
                    nonce: opening.nonce_hex(),
                };
                write_line(out, &serde_json::to_string(&record)?).await?;
            }
            OutputFormat::Text => {
                for line in messages::choices_lines(&round) {
                    write_line(out, &line).await?;
                }
                write_line(out, &messages::opening_line(&opening)).await?;
                let message = reveal_after(round, config.reveal_delay, |r| {
                    messages::result_message(r.outcome)
                })
                .await;
                write_line(out, message).await?;
            }
        }
    }

    out.flush().await?;
    Ok(summary)
}
