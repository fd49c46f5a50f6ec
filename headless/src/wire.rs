//! Snapshot to wire conversion and the frame recorder

use anyhow::{Context, Result};
use game_core::{RenderSnapshot, RoundStatus, Side};
use proto::{Banner, S2C};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn side_index(side: Side) -> u8 {
    match side {
        Side::Player => 0,
        Side::Opponent => 1,
    }
}

pub fn frame_message(tick: u32, snap: &RenderSnapshot) -> S2C {
    let banner = match snap.round {
        RoundStatus::Countdown(n) => Banner::Countdown(n),
        RoundStatus::Go => Banner::Go,
        RoundStatus::Hidden => Banner::Hidden,
    };

    S2C::Frame {
        tick,
        ball_x: snap.ball.x,
        ball_y: snap.ball.y,
        ball_radius: snap.ball.radius,
        paddle_left_y: snap.player.y,
        paddle_right_y: snap.opponent.y,
        paddle_width: snap.player.width,
        paddle_height: snap.player.height,
        score_left: snap.player_score,
        score_right: snap.opponent_score,
        banner,
        message: snap
            .message
            .as_ref()
            .map(|m| (m.text.clone(), (m.remaining * 1000.0).round() as u32)),
        show_restart: snap.show_restart,
    }
}

/// Writes `S2C` messages as u32 little-endian length + postcard payload
pub struct Recorder<W: Write> {
    out: W,
    written: usize,
}

impl Recorder<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create record file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Recorder<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn write(&mut self, msg: &S2C) -> Result<()> {
        let bytes = msg.to_bytes().context("Failed to encode frame")?;
        let len = u32::try_from(bytes.len()).context("Frame too large")?;
        self.out.write_all(&len.to_le_bytes())?;
        self.out.write_all(&bytes)?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush().context("Failed to flush record file")?;
        Ok(self.out)
    }
}

/// Split a recording back into messages
pub fn read_all(mut bytes: &[u8]) -> Result<Vec<S2C>> {
    let mut msgs = Vec::new();
    while !bytes.is_empty() {
        anyhow::ensure!(bytes.len() >= 4, "Truncated length prefix");
        let (len, rest) = bytes.split_at(4);
        let len = u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize;
        anyhow::ensure!(rest.len() >= len, "Truncated frame");
        let (payload, rest) = rest.split_at(len);
        msgs.push(S2C::from_bytes(payload).context("Failed to decode frame")?);
        bytes = rest;
    }
    Ok(msgs)
}

/// What a recording contains
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub score: (u8, u8),
    pub winners: Vec<u8>,
    pub advisories: Vec<String>,
}

pub fn summarize(msgs: &[S2C]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for msg in msgs {
        match msg {
            S2C::Frame {
                score_left,
                score_right,
                ..
            } => {
                summary.frames += 1;
                summary.score = (*score_left, *score_right);
            }
            S2C::MatchOver { winner } => summary.winners.push(*winner),
            S2C::Advisory { text } => summary.advisories.push(text.clone()),
        }
    }
    summary
}
