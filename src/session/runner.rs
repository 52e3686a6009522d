use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use log::{debug, info, trace};

use super::options::SessionOptions;
use crate::capture::{Frame, FrameSource, HandDetector};
use crate::draw::RenderSurface;
use crate::input::{FrameOutcome, InteractionState};
use crate::layout::Layout;
use crate::ui::{UiStyle, render_frame};

/// Totals reported when a session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Frames processed
    pub frames: u64,
    /// Keys typed (including Space and Delete)
    pub commits: u64,
    /// Final buffer contents
    pub text: String,
}

/// One typing session: a layout, its interaction state and render style.
pub struct Session<'a> {
    layout: &'a Layout,
    style: UiStyle,
    options: SessionOptions,
    state: InteractionState,
}

impl<'a> Session<'a> {
    pub fn new(layout: &'a Layout, style: UiStyle, options: SessionOptions) -> Self {
        let state = InteractionState::new(options.stabilize_frames);
        Self {
            layout,
            style,
            options,
            state,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Detects, advances and renders a single frame.
    pub fn step<D, S>(
        &mut self,
        frame: &Frame,
        detector: &mut D,
        surface: &mut S,
    ) -> Result<FrameOutcome>
    where
        D: HandDetector + ?Sized,
        S: RenderSurface + ?Sized,
    {
        let hands = detector.detect(frame);
        // Only the first hand drives the keyboard
        let hand = hands.first();

        let outcome = self.state.process_frame(self.layout, hand);
        trace!(
            "Frame {}: hand={} active={:?} gesture={:?}",
            frame.index, outcome.hand_present, outcome.active_key, outcome.gesture
        );

        surface
            .begin_frame(frame.index, frame.width, frame.height)
            .with_context(|| format!("Failed to start frame {}", frame.index))?;
        render_frame(surface, self.layout, &self.state, hand, &self.style)
            .with_context(|| format!("Failed to render frame {}", frame.index))?;

        Ok(outcome)
    }

    /// Runs until end of stream, the frame limit or `stop`.
    pub fn run<F, D, S>(
        &mut self,
        source: &mut F,
        detector: &mut D,
        surface: &mut S,
        stop: &AtomicBool,
    ) -> Result<SessionSummary>
    where
        F: FrameSource + ?Sized,
        D: HandDetector + ?Sized,
        S: RenderSurface + ?Sized,
    {
        let mut processed = 0u64;

        loop {
            if stop.load(Ordering::Relaxed) {
                info!("Stop requested, ending session");
                break;
            }
            if self.options.limit_reached(processed) {
                debug!("Frame limit of {} reached", processed);
                break;
            }

            let Some(frame) = source.next_frame().context("Failed to read frame")? else {
                debug!("Frame source exhausted after {} frames", processed);
                break;
            };

            self.step(&frame, detector, surface)?;
            processed += 1;
        }

        let summary = self.summary();
        info!(
            "Session ended: {} frames, {} keys typed",
            summary.frames, summary.commits
        );
        Ok(summary)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            frames: self.state.frames(),
            commits: self.state.commits(),
            text: self.state.text().to_string(),
        }
    }
}

/// Registers SIGINT and SIGTERM to raise the returned flag.
pub fn install_stop_handler() -> Result<Arc<AtomicBool>> {
    let stop = Arc::new(AtomicBool::new(false));
    for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&stop))
            .with_context(|| format!("Failed to register handler for signal {signal}"))?;
    }
    Ok(stop)
}
