//! Optional JSONL frame log.
//!
//! One JSON object per frame, newline-terminated. A failed write disables the
//! log for the rest of the run; rendering never stops because of it.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::raycast::RayHit;
use crate::types::HitKind;

/// Per-frame hit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HitSummary {
    pub walls: u32,
    pub boundaries: u32,
    pub out_of_bounds: u32,
}

impl HitSummary {
    pub fn from_hits(hits: &[RayHit]) -> Self {
        let mut s = Self::default();
        for hit in hits {
            match hit.kind {
                HitKind::Wall => {
                    s.walls += 1;
                    if hit.is_boundary {
                        s.boundaries += 1;
                    }
                }
                HitKind::OutOfBounds => s.out_of_bounds += 1,
            }
        }
        s
    }
}

/// One line of the frame log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub dt_ms: f32,
    /// `null` when the frame took no measurable time.
    pub fps: Option<f32>,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    #[serde(flatten)]
    pub hits: HitSummary,
}

pub struct FrameLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl FrameLog<BufWriter<File>> {
    /// Open `path` for appending.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open frame log {}", path))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> FrameLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_active(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, rec: &FrameRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, rec).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(out) = self.out.as_mut() {
            out.flush()?;
        }
        Ok(())
    }

    /// Flush and hand back the writer, if it is still healthy.
    pub fn into_inner(mut self) -> Option<W> {
        let mut out = self.out.take()?;
        out.flush().ok()?;
        Some(out)
    }
}
